//! Page window computation.
//!
//! Given the current page, the page size, the collection size and the
//! maximum number of page links, decides which page numbers are shown and
//! which first/previous/next/last shortcuts are needed.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Default number of page links shown at once.
pub const DEFAULT_MAX_PAGES: i64 = 5;

/// Upper bound on the number of page links in one window. Larger
/// `max_window_size` values are clamped to it.
pub const MAX_WINDOW_LIMIT: i64 = 50;

/// Inputs of a window computation.
///
/// Values are signed so that degenerate input (zero or negative) can be
/// passed straight through; it yields an empty window rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationState {
    /// 1-based page the user is on. Not validated against `total_pages`.
    pub current_page: i64,
    pub items_per_page: i64,
    pub total_items: i64,
    /// Maximum number of page links in the window, capped at
    /// [`MAX_WINDOW_LIMIT`].
    pub max_window_size: i64,
}

impl PaginationState {
    pub fn new(current_page: i64, items_per_page: i64, total_items: i64) -> Self {
        Self {
            current_page,
            items_per_page,
            total_items,
            max_window_size: DEFAULT_MAX_PAGES,
        }
    }

    pub fn with_max_window_size(mut self, max_window_size: i64) -> Self {
        self.max_window_size = max_window_size;
        self
    }

    /// Number of pages needed for `total_items`, or 0 when the page size is
    /// not positive.
    pub fn total_pages(&self) -> i64 {
        if self.items_per_page <= 0 || self.total_items <= 0 {
            return 0;
        }
        let full = self.total_items / self.items_per_page;
        if self.total_items % self.items_per_page == 0 {
            full
        } else {
            full + 1
        }
    }

    /// Computes the window for this state. See [`compute_window`].
    pub fn window(&self) -> PageWindow {
        compute_window(self)
    }
}

/// Result of a window computation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PageWindow {
    /// Ascending, contiguous page numbers to show as links.
    pub pages: Vec<i64>,
    pub show_first: bool,
    pub show_prev: bool,
    pub show_next: bool,
    pub show_last: bool,
    pub total_pages: i64,
}

impl PageWindow {
    fn empty(total_pages: i64) -> Self {
        Self {
            total_pages,
            ..Self::default()
        }
    }

    /// True when no pagination control should be rendered.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn first_page(&self) -> Option<i64> {
        self.pages.first().copied()
    }

    pub fn last_page(&self) -> Option<i64> {
        self.pages.last().copied()
    }

    pub fn contains(&self, page: i64) -> bool {
        matches!(
            (self.first_page(), self.last_page()),
            (Some(lo), Some(hi)) if lo <= page && page <= hi
        )
    }
}

/// Computes the bounded window of page links for `state`.
///
/// The window is centered on the current page when possible. Near the last
/// page it shifts left so that it stays `max_window_size` wide instead of
/// shrinking. An out-of-range `current_page` is used as-is. The window
/// never holds more than [`MAX_WINDOW_LIMIT`] pages.
pub fn compute_window(state: &PaginationState) -> PageWindow {
    if state.items_per_page <= 0 || state.total_items <= 0 || state.max_window_size <= 0 {
        return PageWindow::empty(0);
    }

    let total_pages = state.total_pages();
    if total_pages <= 1 {
        return PageWindow::empty(total_pages);
    }

    let max_pages = state.max_window_size.min(MAX_WINDOW_LIMIT);
    let half = max_pages / 2;
    let start = state.current_page.saturating_sub(half).max(1);
    let end = start.saturating_add(max_pages - 1).min(total_pages);
    let start_page = if end == total_pages {
        total_pages.saturating_sub(max_pages - 1).max(1)
    } else {
        start
    };

    PageWindow {
        pages: (start_page..=end).collect(),
        show_first: start_page != 1,
        show_prev: state.current_page > 1,
        show_next: state.current_page < total_pages,
        show_last: end != total_pages,
        total_pages,
    }
}
