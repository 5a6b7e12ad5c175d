use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use super::*;

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn api_routes_serve_healthz() {
    let response = api_routes::<()>()
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn api_routes_unknown_path_is_not_found() {
    let response = api_routes::<()>()
        .oneshot(Request::builder().uri("/api/papers").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// SSR app
// =============================================================================

async fn render(uri: &str) -> (StatusCode, String) {
    // Same value for every test, so concurrent writes are harmless.
    unsafe { std::env::set_var("LEPTOS_OUTPUT_NAME", "scifeed") };
    let response = app()
        .unwrap()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test(flavor = "multi_thread")]
async fn home_renders_loading_state_on_server() {
    let (status, body) = render("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Loading..."), "body: {body}");
}

#[tokio::test(flavor = "multi_thread")]
async fn bookmarks_renders_placeholder() {
    let (status, body) = render("/bookmarks").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Saved Papers"), "body: {body}");
}

#[tokio::test(flavor = "multi_thread")]
async fn paper_page_echoes_id() {
    let (status, body) = render("/paper/2401.01234").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Paper ID: 2401.01234"), "body: {body}");
}

#[tokio::test(flavor = "multi_thread")]
async fn unknown_path_renders_not_found_page() {
    let (status, body) = render("/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page not found."), "body: {body}");
}

#[tokio::test(flavor = "multi_thread")]
async fn app_keeps_healthz() {
    let (status, _) = render("/healthz").await;
    assert_eq!(status, StatusCode::OK);
}
