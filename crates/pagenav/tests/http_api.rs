//! Router-level tests for the pagination endpoints.
//!
//! Requests are driven through the full axum router with `oneshot`, so no
//! listener is bound.

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use pagenav::{config::NavConfig, create_router};
use serde_json::Value;
use tower::ServiceExt;

fn app() -> Router {
    create_router(NavConfig::default())
}

fn nav_uri(path: &str, href: &str, extra: &[(&str, &str)]) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("href", href);
    for (k, v) in extra {
        query.append_pair(k, v);
    }
    format!("{path}?{}", query.finish())
}

async fn send(request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let response = app().oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    (status, headers, body.to_vec())
}

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let (status, _, body) = send(Request::get(uri).body(Body::empty()).unwrap()).await;
    (status, serde_json::from_slice(&body).expect("Body is not JSON"))
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get_json("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_nav_middle_page() {
    let uri = nav_uri(
        "/nav",
        "/projects?page=5&sort=name#list",
        &[("total", "100"), ("per_page", "10")],
    );
    let (status, body) = get_json(&uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["current_page"], 5);
    assert_eq!(body["window"]["pages"], serde_json::json!([3, 4, 5, 6, 7]));
    assert_eq!(body["window"]["show_first"], true);
    assert_eq!(body["window"]["show_last"], true);

    let items = body["nav"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 9);
    assert_eq!(items[0]["kind"], "first");
    assert_eq!(items[0]["href"], "/projects?page=1&sort=name#list");
    assert_eq!(items[4]["active"], true);
    assert_eq!(items[8]["kind"], "last");
    assert_eq!(items[8]["href"], "/projects?page=10&sort=name#list");
    assert!(body["redirect"].is_null());
}

#[tokio::test]
async fn test_nav_response_shape() {
    let uri = nav_uri(
        "/nav",
        "/projects?page=2",
        &[("total", "40"), ("total_in_page", "12")],
    );
    let (status, body) = get_json(&uri).await;
    assert_eq!(status, StatusCode::OK);

    let mut keys: Vec<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        [
            "current_page",
            "nav",
            "page_info",
            "redirect",
            "summary",
            "summary_text",
            "window",
        ]
    );
    assert_eq!(
        body["page_info"],
        serde_json::json!({ "page": 2, "per_page": 12, "total": 40, "total_pages": 4 })
    );
    assert_eq!(body["summary_text"], "13 - 24 of 40 results");

    let page_item = &body["nav"]["items"][1];
    assert_eq!(page_item["kind"], "page");
    assert_eq!(page_item["page"], 1);
    assert!(page_item.get("target").is_none());
}

#[tokio::test]
async fn test_nav_max_pages_over_limit_is_rejected() {
    let uri = nav_uri("/nav", "/projects", &[("total", "1000"), ("max_pages", "51")]);
    let (status, body) = get_json(&uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid input: max_pages must be at most 50");
}

#[tokio::test]
async fn test_nav_single_page_has_no_controls() {
    let uri = nav_uri("/nav", "/projects", &[("total", "12")]);
    let (status, body) = get_json(&uri).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["nav"].is_null());
    assert_eq!(body["window"]["pages"], serde_json::json!([]));
}

#[tokio::test]
async fn test_nav_sets_pagination_headers() {
    let uri = nav_uri("/nav", "/projects?page=2", &[("total", "30"), ("per_page", "10")]);
    let (status, headers, _) = send(Request::get(uri).body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers.get("page").unwrap(), "2");
    assert_eq!(headers.get("per-page").unwrap(), "10");
    assert_eq!(headers.get("total").unwrap(), "30");
    assert_eq!(headers.get("total-pages").unwrap(), "3");
    assert_eq!(headers.get(header::X_CONTENT_TYPE_OPTIONS).unwrap(), "nosniff");
}

#[tokio::test]
async fn test_nav_reads_upstream_headers() {
    let uri = nav_uri("/nav", "/data-connectors?page=2", &[]);
    let request = Request::get(uri)
        .header("total", "45")
        .header("per-page", "20")
        .body(Body::empty())
        .unwrap();
    let (status, _, body) = send(request).await;
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page_info"]["total_pages"], 3);
    assert_eq!(body["window"]["pages"], serde_json::json!([1, 2, 3]));
}

#[tokio::test]
async fn test_nav_redirect_past_end() {
    let uri = nav_uri("/nav", "/projects?page=12&sort=name", &[("total", "25")]);
    let (_, body) = get_json(&uri).await;
    assert_eq!(body["redirect"], "/projects?page=3&sort=name");
}

#[tokio::test]
async fn test_nav_rejects_bad_location() {
    let uri = nav_uri("/nav", "projects?page=2", &[("total", "25")]);
    let (status, body) = get_json(&uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid location"));
}

#[tokio::test]
async fn test_nav_rejects_bad_header() {
    let request = Request::get(nav_uri("/nav", "/projects", &[]))
        .header("total", "many")
        .body(Body::empty())
        .unwrap();
    let (status, _, _) = send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_nav_html() {
    let uri = nav_uri(
        "/nav.html",
        "/projects?page=2",
        &[("total", "30"), ("per_page", "10"), ("total_in_page", "10")],
    );
    let (status, headers, body) = send(Request::get(uri).body(Body::empty()).unwrap()).await;
    let html = String::from_utf8(body).unwrap();
    assert_eq!(status, StatusCode::OK);
    assert!(
        headers
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("text/html")
    );
    assert!(html.contains(r#"<nav aria-label="page navigation">"#));
    assert!(html.contains(r#"aria-label="previous page""#));
    assert!(html.contains(r#"<div class="pagination-label">11 - 20 of 30 results</div>"#));
}

#[tokio::test]
async fn test_nav_html_empty_for_single_page() {
    let uri = nav_uri("/nav.html", "/projects", &[("total", "3")]);
    let (status, _, body) = send(Request::get(uri).body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_openapi_lists_paths() {
    let (status, body) = get_json("/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/nav"].is_object());
    assert!(body["paths"]["/nav.html"].is_object());
    assert!(body["paths"]["/health"].is_object());
}
