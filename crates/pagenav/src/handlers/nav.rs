//! Pagination control endpoints.
//!
//! A server-side renderer passes the location of the list view it is
//! rendering plus the collection size, and gets back the page window, the
//! link of every control and, when the requested page is past the end, the
//! location to redirect to.

use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::Query,
    http::HeaderMap,
    response::Html,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    config::NavConfig,
    errors::AppError,
    headers::{PageInfo, PageRequest},
    location::Location,
    nav::PaginationNav,
    page_param::{read_page, resolve_out_of_range},
    summary::RangeSummary,
    window::{MAX_WINDOW_LIMIT, PageWindow, PaginationState},
};

/// Pagination control query parameters.
#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NavQuery {
    /// Current location of the list view, e.g. `/projects?page=2&sort=name`
    pub href: String,
    /// Number of items in the collection. Read from the `total` request
    /// header when omitted.
    pub total: Option<i64>,
    /// Items per page
    pub per_page: Option<i64>,
    /// Maximum number of page links
    pub max_pages: Option<i64>,
    /// Name of the page query parameter
    pub param: Option<String>,
    /// Number of items on the current page, enables the range summary
    pub total_in_page: Option<i64>,
}

/// Computed pagination control.
#[derive(Debug, Serialize, ToSchema)]
pub struct NavResponse {
    pub current_page: i64,
    pub page_info: PageInfo,
    pub window: PageWindow,
    /// Absent when the collection fits on a single page.
    pub nav: Option<PaginationNav>,
    pub summary: Option<RangeSummary>,
    pub summary_text: Option<String>,
    /// Location to replace the current one with when the page is past the end.
    pub redirect: Option<String>,
}

#[utoipa::path(
    get,
    path = "/nav",
    tag = "pagination",
    params(NavQuery),
    responses(
        (status = 200, description = "Pagination control for the location", body = NavResponse),
        (status = 400, description = "Invalid location, parameter or header")
    )
)]
/// Compute the pagination control of a list view.
pub async fn get_nav(
    Extension(config): Extension<Arc<NavConfig>>,
    headers: HeaderMap,
    Query(query): Query<NavQuery>,
) -> Result<(HeaderMap, Json<NavResponse>), AppError> {
    let response = resolve_nav(&config, &headers, query)?;

    let mut response_headers = HeaderMap::new();
    response.page_info.write_headers(&mut response_headers);

    Ok((response_headers, Json(response)))
}

#[utoipa::path(
    get,
    path = "/nav.html",
    tag = "pagination",
    params(NavQuery),
    responses(
        (
            status = 200,
            description = "Pagination markup, empty when there is a single page",
            content_type = "text/html"
        ),
        (status = 400, description = "Invalid location, parameter or header")
    )
)]
/// Render the pagination control of a list view as HTML.
pub async fn get_nav_html(
    Extension(config): Extension<Arc<NavConfig>>,
    headers: HeaderMap,
    Query(query): Query<NavQuery>,
) -> Result<Html<String>, AppError> {
    let response = resolve_nav(&config, &headers, query)?;

    let Some(nav) = response.nav else {
        return Ok(Html(String::new()));
    };
    let mut html = String::from(r#"<div class="d-flex align-items-center flex-column">"#);
    html.push_str(&nav.render_html());
    if let Some(text) = response.summary_text {
        html.push_str(&format!(r#"<div class="pagination-label">{text}</div>"#));
    }
    html.push_str("</div>");

    Ok(Html(html))
}

/// Shared computation behind the JSON and HTML endpoints.
pub fn resolve_nav(
    config: &NavConfig,
    headers: &HeaderMap,
    query: NavQuery,
) -> Result<NavResponse, AppError> {
    let location = Location::parse(&query.href)?;

    let param = query.param.unwrap_or_else(|| config.page_param.clone());
    if param.is_empty() {
        return Err(AppError::InvalidInput("param must not be empty".into()));
    }

    let max_pages = query.max_pages.unwrap_or(config.max_pages);
    if max_pages > MAX_WINDOW_LIMIT {
        return Err(AppError::InvalidInput(format!(
            "max_pages must be at most {MAX_WINDOW_LIMIT}"
        )));
    }
    for (name, value) in [
        ("total", query.total),
        ("per_page", query.per_page),
        ("total_in_page", query.total_in_page),
    ] {
        if value.is_some_and(|v| v < 0) {
            return Err(AppError::InvalidInput(format!("{name} must not be negative")));
        }
    }

    let current_page = read_page(&location, &param);
    let upstream = PageInfo::from_headers(
        headers,
        PageRequest {
            page: Some(current_page),
            per_page: Some(config.per_page),
        },
        0,
    )?;
    let per_page = query.per_page.unwrap_or(upstream.per_page);
    let total = query.total.unwrap_or(upstream.total);

    let state =
        PaginationState::new(current_page, per_page, total).with_max_window_size(max_pages);
    let window = state.window();
    let total_pages = state.total_pages();

    tracing::debug!(
        href = %query.href,
        current_page,
        per_page,
        total,
        total_pages,
        "Computed pagination window"
    );

    let nav = PaginationNav::from_window(current_page, &window, &location, &param)
        .map(|nav| nav.with_aria_label(config.aria_label.clone()));
    let summary = query
        .total_in_page
        .and_then(|in_page| RangeSummary::new(current_page, per_page, in_page, total));
    let redirect = resolve_out_of_range(&location, &param, current_page, total_pages)
        .map(|target| target.to_href());
    if let Some(target) = &redirect {
        tracing::info!(href = %query.href, %target, "Requested page is past the last page");
    }

    Ok(NavResponse {
        current_page,
        page_info: PageInfo {
            page: current_page,
            per_page,
            total,
            total_pages,
        },
        window,
        nav,
        summary,
        summary_text: summary.map(|s| s.to_string()),
        redirect,
    })
}
