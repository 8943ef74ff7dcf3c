use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnKey(String);

impl ColumnKey {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ColumnKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ColumnKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A displayed field, optionally grouping child columns under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub key: ColumnKey,
    pub label: String,
    #[serde(default)]
    pub sortable: bool,
    #[serde(default)]
    pub width: Option<String>,
    #[serde(default)]
    pub col_span: Option<u32>,
    #[serde(default)]
    pub row_span: Option<u32>,
    #[serde(default)]
    pub subcolumns: Vec<ColumnSpec>,
}

impl ColumnSpec {
    #[must_use]
    pub fn new(key: impl Into<ColumnKey>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: false,
            width: None,
            col_span: None,
            row_span: None,
            subcolumns: Vec::new(),
        }
    }

    #[must_use]
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    #[must_use]
    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    #[must_use]
    pub const fn col_span(mut self, span: u32) -> Self {
        self.col_span = Some(span);
        self
    }

    #[must_use]
    pub const fn row_span(mut self, span: u32) -> Self {
        self.row_span = Some(span);
        self
    }

    #[must_use]
    pub fn with_subcolumns(mut self, subcolumns: Vec<Self>) -> Self {
        self.subcolumns = subcolumns;
        self
    }

    #[must_use]
    pub fn is_group(&self) -> bool {
        !self.subcolumns.is_empty()
    }
}

/// One `<th>` in the top header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell<'a> {
    pub column: &'a ColumnSpec,
    pub col_span: u32,
    pub row_span: u32,
}

/// Two-level header derived from a column list.
///
/// Groups span their children unless an explicit `col_span` is set. When any
/// group is present, plain columns span both header rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLayout<'a> {
    pub top: Vec<HeaderCell<'a>>,
    pub sub: Vec<&'a ColumnSpec>,
}

impl<'a> HeaderLayout<'a> {
    #[must_use]
    pub fn from_columns(columns: &'a [ColumnSpec]) -> Self {
        let grouped = columns.iter().any(ColumnSpec::is_group);
        let top = columns
            .iter()
            .map(|column| {
                let default_col = u32::try_from(column.subcolumns.len().max(1)).unwrap_or(1);
                let default_row = if grouped && !column.is_group() { 2 } else { 1 };
                HeaderCell {
                    column,
                    col_span: column.col_span.unwrap_or(default_col),
                    row_span: column.row_span.unwrap_or(default_row),
                }
            })
            .collect();
        let sub = columns
            .iter()
            .flat_map(|column| column.subcolumns.iter())
            .collect();
        Self { top, sub }
    }

    #[must_use]
    pub fn has_subheader(&self) -> bool {
        !self.sub.is_empty()
    }
}

/// Columns in body cell order: groups contribute their children.
#[must_use]
pub fn leaf_columns(columns: &[ColumnSpec]) -> Vec<&ColumnSpec> {
    columns
        .iter()
        .flat_map(|column| {
            if column.is_group() {
                column.subcolumns.iter().collect::<Vec<_>>()
            } else {
                vec![column]
            }
        })
        .collect()
}

/// Width of the body in cells, not counting a selection column.
#[must_use]
pub fn column_count(columns: &[ColumnSpec]) -> usize {
    leaf_columns(columns).len()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Sort order kept by the owning page; the grid only displays it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub key: ColumnKey,
    pub direction: SortDirection,
}

impl SortState {
    #[must_use]
    pub const fn new(key: ColumnKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Next sort after a header click on `key`.
    ///
    /// Same key cycles ascending, descending, unsorted. A different key starts
    /// ascending.
    #[must_use]
    pub fn toggle(current: Option<&Self>, key: &ColumnKey) -> Option<Self> {
        match current {
            Some(sort) if &sort.key == key => match sort.direction {
                SortDirection::Ascending => {
                    Some(Self::new(key.clone(), SortDirection::Descending))
                }
                SortDirection::Descending => None,
            },
            _ => Some(Self::new(key.clone(), SortDirection::Ascending)),
        }
    }

    /// `key` for ascending, `-key` for descending.
    #[must_use]
    pub fn query_value(&self) -> String {
        match self.direction {
            SortDirection::Ascending => self.key.to_string(),
            SortDirection::Descending => format!("-{}", self.key),
        }
    }

    #[must_use]
    pub fn direction_for(sort: Option<&Self>, key: &ColumnKey) -> Option<SortDirection> {
        sort.filter(|s| &s.key == key).map(|s| s.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grouped_columns() -> Vec<ColumnSpec> {
        vec![
            ColumnSpec::new("name", "Name").sortable(),
            ColumnSpec::new("rent", "Rent").with_subcolumns(vec![
                ColumnSpec::new("rent_due", "Due").sortable(),
                ColumnSpec::new("rent_paid", "Paid").sortable(),
            ]),
            ColumnSpec::new("unit", "Unit"),
        ]
    }

    #[test]
    fn flat_header_has_single_row() {
        let columns = vec![ColumnSpec::new("a", "A"), ColumnSpec::new("b", "B")];
        let layout = HeaderLayout::from_columns(&columns);
        assert!(!layout.has_subheader());
        assert!(layout.top.iter().all(|c| c.col_span == 1 && c.row_span == 1));
    }

    #[test]
    fn grouped_header_spans_children_and_rows() {
        let columns = grouped_columns();
        let layout = HeaderLayout::from_columns(&columns);
        assert!(layout.has_subheader());
        let spans: Vec<(u32, u32)> = layout.top.iter().map(|c| (c.col_span, c.row_span)).collect();
        assert_eq!(spans, vec![(1, 2), (2, 1), (1, 2)]);
        let sub_keys: Vec<&str> = layout.sub.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(sub_keys, vec!["rent_due", "rent_paid"]);
    }

    #[test]
    fn explicit_spans_override_defaults() {
        let columns = vec![
            ColumnSpec::new("notes", "Notes").col_span(3).row_span(1),
            ColumnSpec::new("grp", "Group").with_subcolumns(vec![ColumnSpec::new("x", "X")]),
        ];
        let layout = HeaderLayout::from_columns(&columns);
        assert_eq!(layout.top[0].col_span, 3);
        assert_eq!(layout.top[0].row_span, 1);
    }

    #[test]
    fn leaf_columns_follow_body_order() {
        let columns = grouped_columns();
        let keys: Vec<&str> = leaf_columns(&columns)
            .into_iter()
            .map(|c| c.key.as_str())
            .collect();
        assert_eq!(keys, vec!["name", "rent_due", "rent_paid", "unit"]);
        assert_eq!(column_count(&columns), 4);
    }

    #[test]
    fn duplicate_keys_are_tolerated() {
        let columns = vec![ColumnSpec::new("a", "A"), ColumnSpec::new("a", "Again")];
        assert_eq!(column_count(&columns), 2);
    }

    #[test]
    fn sort_toggle_cycles_for_same_key() {
        let key = ColumnKey::from("name");
        let first = SortState::toggle(None, &key);
        assert_eq!(
            first.as_ref().map(|s| s.direction),
            Some(SortDirection::Ascending)
        );
        let second = SortState::toggle(first.as_ref(), &key);
        assert_eq!(
            second.as_ref().map(|s| s.direction),
            Some(SortDirection::Descending)
        );
        assert_eq!(SortState::toggle(second.as_ref(), &key), None);
    }

    #[test]
    fn sort_toggle_switches_key_ascending() {
        let current = SortState::new("name".into(), SortDirection::Descending);
        let next = SortState::toggle(Some(&current), &ColumnKey::from("unit"));
        assert_eq!(
            next,
            Some(SortState::new("unit".into(), SortDirection::Ascending))
        );
    }

    #[test]
    fn sort_query_value_prefixes_descending() {
        let asc = SortState::new("rent".into(), SortDirection::Ascending);
        let desc = SortState::new("rent".into(), SortDirection::Descending);
        assert_eq!(asc.query_value(), "rent");
        assert_eq!(desc.query_value(), "-rent");
        assert_eq!(
            SortState::direction_for(Some(&desc), &ColumnKey::from("rent")),
            Some(SortDirection::Descending)
        );
        assert_eq!(
            SortState::direction_for(Some(&desc), &ColumnKey::from("name")),
            None
        );
    }
}
