use axum::http::StatusCode;
use reservemate_backend::models::hotel::HotelPrice;

mod support;

use support::{body_json, json_request, sample_hotels, TestApp};

#[tokio::test]
async fn list_hotels_is_public_and_keeps_store_order() {
    let app = TestApp::with_hotels(sample_hotels());

    let response = app.send(json_request("GET", "/api/hotels", None, None)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Harbor View", "Old Mill", "Pine Lodge"]);
    assert_eq!(body[0]["price"], 150);
    assert_eq!(body[1]["price"], "on request");
}

#[tokio::test]
async fn empty_collection_lists_as_empty_array() {
    let app = TestApp::with_hotels(Vec::new());

    let response = app.send(json_request("GET", "/api/hotels", None, None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn get_hotel_by_id() {
    let app = TestApp::with_hotels(sample_hotels());

    let response = app.send(json_request("GET", "/api/hotels/h3", None, None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"], "h3");
    assert_eq!(body["image"], "/img/h3.png");
}

#[tokio::test]
async fn missing_hotel_returns_not_found_error_body() {
    let app = TestApp::with_hotels(sample_hotels());

    let response = app.send(json_request("GET", "/api/hotels/zzz", None, None)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn sparse_documents_are_served_with_defaults() {
    let hotel = reservemate_backend::models::hotel::Hotel::from_document(
        "sparse",
        serde_json::json!({ "name": "Bare", "description": null }),
    )
    .unwrap();
    assert_eq!(hotel.price, HotelPrice::default());
    let app = TestApp::with_hotels(vec![hotel]);

    let body = body_json(app.send(json_request("GET", "/api/hotels/sparse", None, None)).await).await;
    assert_eq!(body["description"], "");
    assert_eq!(body["image"], "");
}
