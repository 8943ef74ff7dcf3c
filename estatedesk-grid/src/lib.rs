//! estatedesk grid core
//!
//! Platform-agnostic logic behind the dashboard's list pages: the pagination
//! range calculator, column and row model, row selection, list queries and the
//! session capability. No UI or browser dependencies.

pub mod api;
pub mod column;
pub mod error;
pub mod format;
pub mod pagination;
pub mod query;
pub mod row;
pub mod selection;
pub mod session;

pub use api::{ApiError, Paged, decode_page};
pub use column::{
    ColumnKey, ColumnSpec, HeaderCell, HeaderLayout, SortDirection, SortState, column_count,
    leaf_columns,
};
pub use error::GridError;
pub use format::{format_amount, format_date};
pub use pagination::{
    DEFAULT_SIBLING_COUNT, PageItem, PageRange, PaginationState, pagination_range, total_pages,
};
pub use query::{
    DEFAULT_PAGE_LIMIT, ListQuery, QueryController, RequestTicket, SEARCH_DEBOUNCE_MS,
    normalize_search,
};
pub use row::{CellValue, RowId, RowRecord, row_ids};
pub use selection::{HeaderCheck, SelectionMode, SelectionSet};
pub use session::{
    ListenerRegistry, MemorySession, Permissions, SessionContext, SessionListener,
    SessionSnapshot, SessionUser, Subscription, Theme,
};
