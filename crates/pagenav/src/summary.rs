//! "X - Y of N results" caption shown under the pagination control.

use std::fmt;

use serde::Serialize;
use utoipa::ToSchema;

/// Caption describing which items of the collection are on screen,
/// e.g. `13 - 24 of 40 results`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct RangeSummary {
    pub first: i64,
    pub last: i64,
    pub total: i64,
}

impl RangeSummary {
    /// Returns `None` when the current page holds no items.
    pub fn new(
        current_page: i64,
        per_page: i64,
        total_in_page: i64,
        total_items: i64,
    ) -> Option<Self> {
        if total_in_page <= 0 {
            return None;
        }
        let first = current_page
            .saturating_mul(per_page)
            .saturating_sub(per_page.saturating_sub(1));
        let last = first.saturating_add(total_in_page - 1);
        Some(Self {
            first,
            last,
            total: total_items,
        })
    }
}

impl fmt::Display for RangeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} of {} results", self.first, self.last, self.total)
    }
}
