//! Pagination metadata carried in HTTP response headers.
//!
//! Paginated backend endpoints return the page slice in the body and the
//! position within the collection in the `page`, `per-page`, `total` and
//! `total-pages` headers.

use axum::http::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{errors::AppError, window::PaginationState};

pub static PAGE_HEADER: HeaderName = HeaderName::from_static("page");
pub static PER_PAGE_HEADER: HeaderName = HeaderName::from_static("per-page");
pub static TOTAL_HEADER: HeaderName = HeaderName::from_static("total");
pub static TOTAL_PAGES_HEADER: HeaderName = HeaderName::from_static("total-pages");

/// Page and page size the caller asked for. Used when the response does
/// not echo them back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

/// Position of a response within its collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct PageInfo {
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl PageInfo {
    /// Reads pagination headers, falling back to the request and then to
    /// the number of items actually received.
    pub fn from_headers(
        headers: &HeaderMap,
        request: PageRequest,
        item_count: usize,
    ) -> Result<Self, AppError> {
        let item_count = i64::try_from(item_count).unwrap_or(i64::MAX);

        let page = read_header(headers, &PAGE_HEADER)?
            .or(request.page)
            .unwrap_or(1);
        let per_page = read_header(headers, &PER_PAGE_HEADER)?
            .or(request.per_page)
            .unwrap_or(item_count);
        let total = read_header(headers, &TOTAL_HEADER)?.unwrap_or(item_count);
        let total_pages = match read_header(headers, &TOTAL_PAGES_HEADER)? {
            Some(total_pages) => total_pages,
            None => PaginationState::new(page, per_page, total).total_pages(),
        };

        Ok(Self {
            page,
            per_page,
            total,
            total_pages,
        })
    }

    /// Writes the four pagination headers, replacing existing values.
    pub fn write_headers(&self, headers: &mut HeaderMap) {
        headers.insert(PAGE_HEADER.clone(), HeaderValue::from(self.page));
        headers.insert(PER_PAGE_HEADER.clone(), HeaderValue::from(self.per_page));
        headers.insert(TOTAL_HEADER.clone(), HeaderValue::from(self.total));
        headers.insert(TOTAL_PAGES_HEADER.clone(), HeaderValue::from(self.total_pages));
    }

    pub fn state(&self, max_window_size: i64) -> PaginationState {
        PaginationState::new(self.page, self.per_page, self.total)
            .with_max_window_size(max_window_size)
    }
}

fn read_header(headers: &HeaderMap, name: &'static HeaderName) -> Result<Option<i64>, AppError> {
    let Some(value) = headers.get(name) else {
        return Ok(None);
    };

    let invalid = || AppError::InvalidHeader {
        name: name.as_str(),
        value: String::from_utf8_lossy(value.as_bytes()).into_owned(),
    };

    let number = value
        .to_str()
        .map_err(|_| invalid())?
        .trim()
        .parse::<i64>()
        .map_err(|_| invalid())?;
    if number < 0 {
        return Err(invalid());
    }
    Ok(Some(number))
}
