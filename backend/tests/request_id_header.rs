use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use reservemate_backend::middleware::request_id::REQUEST_ID_HEADER;
use tower::ServiceExt;
use uuid::Uuid;

mod support;

use support::{sample_hotels, TestApp};

#[tokio::test]
async fn request_id_is_minted_for_every_response() {
    let app = TestApp::with_hotels(sample_hotels());

    let response = app
        .router
        .clone()
        .oneshot(Request::builder().uri("/api/hotels").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let id = response.headers().get(REQUEST_ID_HEADER).unwrap().to_str().unwrap();
    assert!(Uuid::parse_str(id).is_ok());
}

#[tokio::test]
async fn client_request_id_is_echoed_on_error_responses() {
    let app = TestApp::with_hotels(sample_hotels());

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/hotels/missing")
                .header("x-correlation-id", "corr-req-456")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.headers().get(REQUEST_ID_HEADER).unwrap(), "corr-req-456");
}
