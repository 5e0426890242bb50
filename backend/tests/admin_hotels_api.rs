use axum::http::StatusCode;
use reservemate_backend::models::user::UserRole;
use serde_json::json;

mod support;

use support::{body_json, json_request, sample_hotels, TestApp};

async fn admin_app() -> (TestApp, String) {
    let app = TestApp::with_hotels(sample_hotels());
    let admin = app.seed_user("admin@example.com", UserRole::Admin).await;
    let token = app.token_for(&admin);
    (app, token)
}

#[tokio::test]
async fn admin_routes_require_a_token() {
    let app = TestApp::with_hotels(sample_hotels());

    let response = app
        .send(json_request("GET", "/api/admin/hotels", None, None))
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["code"], "UNAUTHORIZED");
    assert_eq!(body["error"], "Authentication required");
}

#[tokio::test]
async fn members_are_forbidden_from_admin_routes() {
    let app = TestApp::with_hotels(sample_hotels());
    let member = app.seed_user("guest@example.com", UserRole::Member).await;
    let token = app.token_for(&member);

    let response = app
        .send(json_request("DELETE", "/api/admin/hotels/h1", Some(&token), None))
        .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_json(response).await;
    assert_eq!(body["code"], "FORBIDDEN");
    assert_eq!(body["error"], "Admin access required");

    let listing = body_json(app.send(json_request("GET", "/api/hotels", None, None)).await).await;
    assert_eq!(listing.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn admin_lists_full_collection() {
    let (app, token) = admin_app().await;

    let response = app
        .send(json_request("GET", "/api/admin/hotels", Some(&token), None))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn patch_merges_only_given_fields() {
    let (app, token) = admin_app().await;

    let response = app
        .send(json_request(
            "PATCH",
            "/api/admin/hotels/h2",
            Some(&token),
            Some(json!({ "name": "New Mill", "price": 210 })),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["name"], "New Mill");
    assert_eq!(body["price"], 210);
    assert_eq!(body["description"], "Old Mill description");

    let other = body_json(app.send(json_request("GET", "/api/hotels/h1", None, None)).await).await;
    assert_eq!(other["name"], "Harbor View");
}

#[tokio::test]
async fn empty_patch_is_rejected() {
    let (app, token) = admin_app().await;

    let response = app
        .send(json_request(
            "PATCH",
            "/api/admin/hotels/h1",
            Some(&token),
            Some(json!({})),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn blank_name_fails_validation() {
    let (app, token) = admin_app().await;

    let response = app
        .send(json_request(
            "PATCH",
            "/api/admin/hotels/h1",
            Some(&token),
            Some(json!({ "name": "" })),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn patch_of_missing_hotel_is_not_found() {
    let (app, token) = admin_app().await;

    let response = app
        .send(json_request(
            "PATCH",
            "/api/admin/hotels/ghost",
            Some(&token),
            Some(json!({ "name": "Ghost" })),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_removes_exactly_one_hotel() {
    let (app, token) = admin_app().await;

    let response = app
        .send(json_request("DELETE", "/api/admin/hotels/h2", Some(&token), None))
        .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let body = body_json(app.send(json_request("GET", "/api/hotels", None, None)).await).await;
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["h1", "h3"]);

    let again = app
        .send(json_request("DELETE", "/api/admin/hotels/h2", Some(&token), None))
        .await;
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
}
