//! List-page query state and request sequencing.
//!
//! A list page re-fetches whenever its search text, filters, sort or page
//! change. [`QueryController`] owns that query and stamps each fetch with a
//! [`RequestTicket`]; responses carrying an older ticket are dropped so a slow
//! request can never overwrite a newer one.

use crate::column::SortState;
use crate::pagination::total_pages;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::num::NonZeroU32;

pub const DEFAULT_PAGE_LIMIT: u32 = 10;
pub const SEARCH_DEBOUNCE_MS: i32 = 400;

static WHITESPACE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"\s+").ok());

/// Trim and collapse runs of whitespace to a single space.
#[must_use]
pub fn normalize_search(raw: &str) -> String {
    WHITESPACE.as_ref().map_or_else(
        || raw.split_whitespace().collect::<Vec<_>>().join(" "),
        |re| re.replace_all(raw.trim(), " ").into_owned(),
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub search: String,
    pub page: u32,
    pub limit: NonZeroU32,
    pub filters: BTreeMap<String, String>,
    pub sort: Option<SortState>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: 1,
            limit: NonZeroU32::new(DEFAULT_PAGE_LIMIT).unwrap_or(NonZeroU32::MIN),
            filters: BTreeMap::new(),
            sort: None,
        }
    }
}

impl ListQuery {
    #[must_use]
    pub fn with_limit(limit: NonZeroU32) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    /// `page=..&limit=..` followed by search, sort and filters, percent-encoded.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("limit".to_string(), self.limit.to_string()),
        ];
        if !self.search.is_empty() {
            pairs.push(("search".to_string(), self.search.clone()));
        }
        if let Some(sort) = &self.sort {
            pairs.push(("sort".to_string(), sort.query_value()));
        }
        for (key, value) in &self.filters {
            pairs.push((key.clone(), value.clone()));
        }
        pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    #[must_use]
    pub const fn sequence(self) -> u64 {
        self.0
    }
}

/// Query state of a list page plus the ticket of its newest request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryController {
    query: ListQuery,
    latest: u64,
}

impl QueryController {
    #[must_use]
    pub fn new(query: ListQuery) -> Self {
        Self { query, latest: 0 }
    }

    #[must_use]
    pub const fn query(&self) -> &ListQuery {
        &self.query
    }

    /// Issue a ticket for the current query, superseding earlier ones.
    pub fn begin(&mut self) -> RequestTicket {
        self.latest += 1;
        log::debug!(
            "list request #{} for {}",
            self.latest,
            self.query.to_query_string()
        );
        RequestTicket(self.latest)
    }

    #[must_use]
    pub const fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }

    /// `Some(ticket)` when the search changed; the page resets to 1.
    pub fn set_search(&mut self, raw: &str) -> Option<RequestTicket> {
        let search = normalize_search(raw);
        if search == self.query.search {
            return None;
        }
        self.query.search = search;
        self.query.page = 1;
        Some(self.begin())
    }

    /// Set or, with `None`, remove a filter. Resets the page to 1.
    pub fn set_filter(&mut self, key: &str, value: Option<&str>) -> Option<RequestTicket> {
        let changed = match value.filter(|v| !v.is_empty()) {
            Some(value) => {
                self.query.filters.insert(key.to_string(), value.to_string())
                    != Some(value.to_string())
            }
            None => self.query.filters.remove(key).is_some(),
        };
        if !changed {
            return None;
        }
        self.query.page = 1;
        Some(self.begin())
    }

    pub fn set_sort(&mut self, sort: Option<SortState>) -> Option<RequestTicket> {
        if sort == self.query.sort {
            return None;
        }
        self.query.sort = sort;
        self.query.page = 1;
        Some(self.begin())
    }

    pub fn set_page(&mut self, page: u32) -> Option<RequestTicket> {
        let page = page.max(1);
        if page == self.query.page {
            return None;
        }
        self.query.page = page;
        Some(self.begin())
    }

    /// Pull the page back inside `[1, last]` after a response reports `total`.
    ///
    /// Returns the corrected query when the current page no longer exists, e.g.
    /// after deleting the last rows of the final page.
    pub fn reconcile_total(&mut self, total: u64) -> Option<ListQuery> {
        let last = total_pages(total, self.query.limit).max(1);
        if self.query.page <= last {
            return None;
        }
        log::warn!(
            "page {} is past the last page {last}; clamping",
            self.query.page
        );
        self.query.page = last;
        Some(self.query.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::{ColumnKey, SortDirection};

    #[test]
    fn normalize_search_collapses_whitespace() {
        assert_eq!(normalize_search("  Ada \t  Park \n"), "Ada Park");
        assert_eq!(normalize_search("   "), "");
    }

    #[test]
    fn query_string_encodes_all_parts() {
        let mut query = ListQuery::default();
        query.search = "ada park".into();
        query.page = 3;
        query.sort = Some(SortState::new(
            ColumnKey::from("name"),
            SortDirection::Descending,
        ));
        query.filters.insert("status".into(), "active".into());
        assert_eq!(
            query.to_query_string(),
            "page=3&limit=10&search=ada%20park&sort=-name&status=active"
        );
    }

    #[test]
    fn search_change_resets_page_and_issues_ticket() {
        let mut ctl = QueryController::default();
        assert!(ctl.set_page(4).is_some());
        let ticket = ctl.set_search(" block  B ").expect("search changed");
        assert_eq!(ctl.query().page, 1);
        assert_eq!(ctl.query().search, "block B");
        assert!(ctl.is_current(ticket));
        assert!(ctl.set_search("block B").is_none());
    }

    #[test]
    fn stale_tickets_are_rejected() {
        let mut ctl = QueryController::default();
        let first = ctl.begin();
        let second = ctl.set_page(2).expect("page changed");
        assert!(!ctl.is_current(first));
        assert!(ctl.is_current(second));
        assert!(second > first);
    }

    #[test]
    fn filter_changes_reset_page() {
        let mut ctl = QueryController::default();
        ctl.set_page(5);
        assert!(ctl.set_filter("status", Some("active")).is_some());
        assert_eq!(ctl.query().page, 1);
        assert!(ctl.set_filter("status", Some("active")).is_none());
        ctl.set_page(2);
        assert!(ctl.set_filter("status", None).is_some());
        assert_eq!(ctl.query().page, 1);
        assert!(ctl.set_filter("status", Some("")).is_none());
    }

    #[test]
    fn sort_change_resets_page() {
        let mut ctl = QueryController::default();
        ctl.set_page(3);
        let sort = SortState::new(ColumnKey::from("unit"), SortDirection::Ascending);
        assert!(ctl.set_sort(Some(sort.clone())).is_some());
        assert_eq!(ctl.query().page, 1);
        assert!(ctl.set_sort(Some(sort)).is_none());
    }

    #[test]
    fn reconcile_clamps_to_last_page() {
        let mut ctl = QueryController::default();
        ctl.set_page(5);
        let corrected = ctl.reconcile_total(31).expect("page 5 is past 4");
        assert_eq!(corrected.page, 4);
        assert!(ctl.reconcile_total(31).is_none());
        ctl.set_page(3);
        assert_eq!(ctl.reconcile_total(0).map(|q| q.page), Some(1));
    }
}
