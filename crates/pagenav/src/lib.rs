pub mod config;
pub mod errors;
pub mod handlers;
pub mod headers;
pub mod location;
pub mod nav;
pub mod page_param;
pub mod summary;
pub mod window;

use std::sync::Arc;

use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    routing::get,
};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
};

use crate::{
    config::NavConfig,
    handlers::{get_nav, get_nav_html, health_check, openapi_json},
};

pub use crate::{
    location::Location,
    nav::{NavItem, NavItemKind, PaginationNav},
    window::{MAX_WINDOW_LIMIT, PageWindow, PaginationState, compute_window},
};

pub fn create_router(config: NavConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers(Any)
        .allow_origin(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/nav", get(get_nav))
        .route("/nav.html", get(get_nav_html))
        .route("/openapi.json", get(openapi_json))
        .layer(Extension(Arc::new(config)))
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
}

pub async fn run_server(config: NavConfig) -> anyhow::Result<()> {
    let port = config.port;
    let app = create_router(config);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    tracing::info!("Server running on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}
