use airmouse_api::build_router;
use airmouse_input::{MockBackend, MockRecords, MouseDispatcher};
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

fn test_router() -> (Router, MockRecords) {
    let backend = MockBackend::with_screen(1920, 1080);
    let records = backend.records();
    let dispatcher = MouseDispatcher::new(Box::new(backend)).unwrap();
    (build_router(dispatcher), records)
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_reports_screen_and_version() {
    let (app, _) = test_router();

    // Idempotent across repeated calls.
    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["screen"], serde_json::json!([1920, 1080]));
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }
}

#[tokio::test]
async fn test_move_scales_normalized_coordinates() {
    let (app, records) = test_router();

    let response = app
        .oneshot(post_json("/api/mouse/move", r#"{"x": 0.25, "y": 0.75}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["pos"], serde_json::json!([480.0, 810.0]));
    assert_eq!(records.moves.lock().unwrap().as_slice(), &[(480.0, 810.0)]);
}

#[tokio::test]
async fn test_move_defaults_to_screen_center() {
    let (app, records) = test_router();

    let response = app
        .oneshot(post_json("/api/mouse/move", "{}"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["pos"], serde_json::json!([960.0, 540.0]));
    assert_eq!(records.moves.lock().unwrap().as_slice(), &[(960.0, 540.0)]);
}

#[tokio::test]
async fn test_move_defaults_missing_fields_independently() {
    let (app, _) = test_router();

    let response = app
        .oneshot(post_json("/api/mouse/move", r#"{"x": 1.0}"#))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["pos"], serde_json::json!([1920.0, 540.0]));
}

#[tokio::test]
async fn test_click_defaults_to_left() {
    let (app, records) = test_router();

    let response = app
        .oneshot(post_json("/api/mouse/click", "{}"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["button"], "left");
    assert_eq!(records.clicks.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_click_right_button() {
    let (app, _) = test_router();

    let response = app
        .oneshot(post_json("/api/mouse/click", r#"{"button": "right"}"#))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["button"], "right");
}

#[tokio::test]
async fn test_unknown_button_reports_success_without_action() {
    let (app, records) = test_router();

    let response = app
        .oneshot(post_json("/api/mouse/click", r#"{"button": "middle"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["button"], "middle");
    assert!(records.clicks.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_json_returns_400_with_error() {
    let (app, _) = test_router();

    for uri in ["/api/mouse/move", "/api/mouse/click"] {
        let response = app
            .clone()
            .oneshot(post_json(uri, "not json"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert!(!body["error"].as_str().unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_injection_failure_returns_400_with_error() {
    let dispatcher = MouseDispatcher::new(Box::new(MockBackend::failing())).unwrap();
    let app = build_router(dispatcher);

    let response = app
        .oneshot(post_json("/api/mouse/move", r#"{"x": 0.5, "y": 0.5}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("mock injection failure"));
}
