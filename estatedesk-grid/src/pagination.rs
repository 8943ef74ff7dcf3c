//! Page-number range computation for paginated tables.
//!
//! The calculator always shows the first and last page, the current page and
//! `sibling_count` neighbours on either side, folding the gaps into ellipsis
//! markers once there are more pages than fit.

use crate::error::GridError;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::num::NonZeroU32;

pub const DEFAULT_SIBLING_COUNT: u32 = 1;

/// First page, last page, current page and two ellipsis slots.
const FIXED_SLOTS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

impl PageItem {
    #[must_use]
    pub const fn page(self) -> Option<u32> {
        match self {
            Self::Page(n) => Some(n),
            Self::Ellipsis => None,
        }
    }

    #[must_use]
    pub const fn is_ellipsis(self) -> bool {
        matches!(self, Self::Ellipsis)
    }
}

/// Sibling count 2 still fits inline.
pub type PageRange = SmallVec<[PageItem; 9]>;

/// `ceil(total_count / page_size)`, saturated to `u32`.
#[must_use]
pub fn total_pages(total_count: u64, page_size: NonZeroU32) -> u32 {
    let pages = total_count.div_ceil(u64::from(page_size.get()));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

fn dense(from: u32, to: u32) -> impl Iterator<Item = PageItem> {
    (from..=to).map(PageItem::Page)
}

/// Compute the page controls to render.
///
/// `current_page` is not validated; out-of-range values still produce a
/// well-formed sequence.
#[must_use]
pub fn pagination_range(
    total_count: u64,
    page_size: NonZeroU32,
    current_page: u32,
    sibling_count: u32,
) -> PageRange {
    let total_page_count = total_pages(total_count, page_size);
    let total_page_numbers = sibling_count.saturating_add(FIXED_SLOTS);

    if total_page_numbers >= total_page_count {
        return dense(1, total_page_count).collect();
    }

    let left_sibling = current_page.saturating_sub(sibling_count).max(1);
    let right_sibling = current_page
        .saturating_add(sibling_count)
        .min(total_page_count);

    let show_left_dots = left_sibling > 2;
    let show_right_dots = right_sibling < total_page_count.saturating_sub(2);

    // Edge runs stop short of the opposite ellipsis so pages never repeat.
    let edge_count = sibling_count.saturating_mul(2).saturating_add(3);
    let last_before_dots = total_page_count - 2;

    match (show_left_dots, show_right_dots) {
        (false, true) => dense(1, edge_count.min(last_before_dots))
            .chain([PageItem::Ellipsis, PageItem::Page(total_page_count)])
            .collect(),
        (true, false) => {
            let start = (total_page_count.saturating_sub(edge_count) + 1).max(3);
            [PageItem::Page(1), PageItem::Ellipsis]
                .into_iter()
                .chain(dense(start, total_page_count))
                .collect()
        }
        (true, true) => [PageItem::Page(1), PageItem::Ellipsis]
            .into_iter()
            .chain(dense(left_sibling, right_sibling))
            .chain([PageItem::Ellipsis, PageItem::Page(total_page_count)])
            .collect(),
        // A wide window touching both edges leaves nothing to elide.
        (false, false) => dense(1, total_page_count).collect(),
    }
}

/// Paging triple plus sibling count, as handed down by a list page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    pub total_count: u64,
    pub page_size: NonZeroU32,
    pub current_page: u32,
    pub sibling_count: u32,
}

impl PaginationState {
    /// # Errors
    ///
    /// Returns [`GridError::ZeroPageSize`] when `page_size` is zero.
    pub fn new(
        total_count: u64,
        page_size: u32,
        current_page: u32,
        sibling_count: u32,
    ) -> Result<Self, GridError> {
        let page_size = NonZeroU32::new(page_size).ok_or(GridError::ZeroPageSize)?;
        Ok(Self {
            total_count,
            page_size,
            current_page,
            sibling_count,
        })
    }

    #[must_use]
    pub fn total_pages(&self) -> u32 {
        total_pages(self.total_count, self.page_size)
    }

    #[must_use]
    pub fn range(&self) -> PageRange {
        pagination_range(
            self.total_count,
            self.page_size,
            self.current_page,
            self.sibling_count,
        )
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// The current page forced into `[1, max(total_pages, 1)]`.
    #[must_use]
    pub fn clamped_page(&self) -> u32 {
        self.current_page.clamp(1, self.total_pages().max(1))
    }

    /// 1-based numbers of the first and last item on the current page.
    ///
    /// `None` when the page holds no items.
    #[must_use]
    pub fn item_window(&self) -> Option<(u64, u64)> {
        let size = u64::from(self.page_size.get());
        let page = u64::from(self.current_page.max(1));
        let first = (page - 1).saturating_mul(size).saturating_add(1);
        if first > self.total_count {
            return None;
        }
        let last = page.saturating_mul(size).min(self.total_count);
        Some((first, last))
    }
}
