use axum::Json;
use utoipa::OpenApi;

use crate::{
    headers::PageInfo,
    nav::{NavItem, NavItemKind, PaginationNav},
    summary::RangeSummary,
    window::{PageWindow, PaginationState},
};

use super::{health, nav};

#[derive(OpenApi)]
#[openapi(
    info(title = "pagenav", description = "Pagination controls for dashboard list views"),
    paths(health::health_check, nav::get_nav, nav::get_nav_html),
    components(schemas(
        health::Health,
        nav::NavResponse,
        PageInfo,
        PageWindow,
        PaginationState,
        PaginationNav,
        NavItem,
        NavItemKind,
        RangeSummary,
    )),
    tags(
        (name = "health", description = "Liveness"),
        (name = "pagination", description = "Page windows and page links")
    )
)]
pub struct ApiDoc;

/// Serve the OpenAPI document.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
