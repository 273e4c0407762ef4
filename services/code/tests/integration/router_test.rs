use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use vcode_code::router::build_router;

use crate::helpers::offline_state;

#[tokio::test]
async fn should_report_live() {
    let response = build_router(offline_state())
        .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn should_report_not_ready_without_redis() {
    let response = build_router(offline_state())
        .oneshot(Request::get("/readyz").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
