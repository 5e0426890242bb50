#![allow(dead_code)]
use axum::{body::Body, http::Request, response::Response, Router};
use http_body_util::BodyExt;
use reservemate_backend::{
    app::build_router,
    config::Config,
    models::{
        hotel::{Hotel, HotelPrice},
        user::{User, UserRole},
    },
    repositories::{InMemoryHotelStore, InMemoryUserStore, UserStore},
    state::AppState,
    utils::{jwt::create_access_token, password::hash_password},
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub const TEST_PASSWORD: &str = "Str0ng!pass";

pub fn test_config() -> Config {
    Config {
        database_url: None,
        jwt_secret: "integration-test-secret".into(),
        jwt_expiration_hours: 1,
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        cors_allow_origins: Vec::new(),
        admin_email: None,
        admin_password: None,
        hotels_seed_file: None,
    }
}

pub fn hotel(id: &str, name: &str, price: HotelPrice) -> Hotel {
    Hotel {
        id: id.into(),
        name: name.into(),
        description: format!("{} description", name),
        image: format!("/img/{}.png", id),
        price,
    }
}

pub fn sample_hotels() -> Vec<Hotel> {
    vec![
        hotel("h1", "Harbor View", HotelPrice::Amount(150u32.into())),
        hotel("h2", "Old Mill", HotelPrice::Label("on request".into())),
        hotel("h3", "Pine Lodge", HotelPrice::Amount(95u32.into())),
    ]
}

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    pub fn with_hotels(hotels: Vec<Hotel>) -> Self {
        let state = AppState::new(
            Arc::new(InMemoryHotelStore::with_hotels(hotels)),
            Arc::new(InMemoryUserStore::new()),
            test_config(),
        );
        Self {
            router: build_router(state.clone()),
            state,
        }
    }

    pub async fn seed_user(&self, email: &str, role: UserRole) -> User {
        let user = User::new(
            email,
            "Test User",
            hash_password(TEST_PASSWORD).expect("hash password"),
            role,
        );
        self.state.users.create(&user).await.expect("create user")
    }

    pub fn token_for(&self, user: &User) -> String {
        create_access_token(
            user.id.clone(),
            user.email.clone(),
            user.role.as_str().to_string(),
            &self.state.config.jwt_secret,
            1,
        )
        .expect("create token")
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router response")
    }
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}
