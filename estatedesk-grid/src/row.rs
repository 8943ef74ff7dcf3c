use crate::column::ColumnKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Unique identifier of a row, as handed out by the backend.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(String);

impl RowId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for RowId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for RowId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RowId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A displayable cell. `N` is the UI fragment type of the rendering layer.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue<N> {
    Text(String),
    Number(f64),
    Node(N),
}

impl<N> CellValue<N> {
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Plain-text rendering; `None` for UI fragments.
    #[must_use]
    pub fn display_text(&self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text.clone()),
            Self::Number(n) => Some(format_number(*n)),
            Self::Node(_) => None,
        }
    }
}

impl<N> From<&str> for CellValue<N> {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl<N> From<String> for CellValue<N> {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<N> From<f64> for CellValue<N> {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl<N> From<i64> for CellValue<N> {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// One body row keyed by column.
#[derive(Debug, Clone, PartialEq)]
pub struct RowRecord<N> {
    pub id: RowId,
    pub cells: BTreeMap<ColumnKey, CellValue<N>>,
}

impl<N> RowRecord<N> {
    #[must_use]
    pub fn new(id: impl Into<RowId>) -> Self {
        Self {
            id: id.into(),
            cells: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<ColumnKey>, value: impl Into<CellValue<N>>) -> Self {
        self.cells.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_node(mut self, key: impl Into<ColumnKey>, node: N) -> Self {
        self.cells.insert(key.into(), CellValue::Node(node));
        self
    }

    #[must_use]
    pub fn cell(&self, key: &ColumnKey) -> Option<&CellValue<N>> {
        self.cells.get(key)
    }
}

/// Ids of `rows` in display order.
#[must_use]
pub fn row_ids<N>(rows: &[RowRecord<N>]) -> Vec<RowId> {
    rows.iter().map(|row| row.id.clone()).collect()
}
