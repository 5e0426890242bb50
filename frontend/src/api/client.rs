use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::rc::Rc;

use crate::{
    api::types::*,
    config,
    state::session::{default_session_store, SessionStore},
    utils::navigation::{encode_segment, redirect_to_login},
};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    session: Rc<dyn SessionStore>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            session: default_session_store(),
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            ..Self::new()
        }
    }

    pub fn with_session(mut self, session: Rc<dyn SessionStore>) -> Self {
        self.session = session;
        self
    }

    pub fn session(&self) -> Rc<dyn SessionStore> {
        Rc::clone(&self.session)
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    async fn url(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    fn authorized(&self, request: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        let token = self
            .session
            .token()
            .filter(|token| !token.is_empty())
            .ok_or_else(ApiError::unauthorized)?;
        Ok(request.bearer_auth(token))
    }

    fn handle_unauthorized_status(&self, status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            log::warn!("API rejected the session token; clearing it");
            self.session.clear();
            redirect_to_login();
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        self.handle_unauthorized_status(status);
        Err(response
            .json::<ApiError>()
            .await
            .unwrap_or_else(|_| ApiError::http_status(status.as_u16())))
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        self.send(request)
            .await?
            .json()
            .await
            .map_err(|e| ApiError::decode(format!("Failed to parse response: {}", e)))
    }

    /// Signs in and stores the returned token in the session store.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = self.url("/auth/login").await;
        let response: LoginResponse = self
            .send_json(self.client.post(url).json(request))
            .await?;
        self.session.set_token(&response.token);
        Ok(response)
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<LoginResponse, ApiError> {
        let url = self.url("/auth/register").await;
        let response: LoginResponse = self
            .send_json(self.client.post(url).json(request))
            .await?;
        self.session.set_token(&response.token);
        Ok(response)
    }

    pub async fn get_me(&self) -> Result<UserResponse, ApiError> {
        let url = self.url("/auth/me").await;
        let request = self.authorized(self.client.get(url))?;
        self.send_json(request).await
    }

    /// Tokens are stateless on the server, so signing out only forgets ours.
    pub fn logout(&self) {
        self.session.clear();
    }

    pub async fn list_hotels(&self) -> Result<Vec<Hotel>, ApiError> {
        let url = self.url("/hotels").await;
        self.send_json(self.client.get(url)).await
    }

    pub async fn get_hotel(&self, id: &str) -> Result<Hotel, ApiError> {
        let url = self.url(&format!("/hotels/{}", encode_segment(id))).await;
        self.send_json(self.client.get(url)).await
    }

    pub async fn admin_list_hotels(&self) -> Result<Vec<Hotel>, ApiError> {
        let url = self.url("/admin/hotels").await;
        let request = self.authorized(self.client.get(url))?;
        self.send_json(request).await
    }

    pub async fn admin_update_hotel(&self, id: &str, patch: &HotelPatch) -> Result<Hotel, ApiError> {
        let url = self.url(&format!("/admin/hotels/{}", encode_segment(id))).await;
        let request = self.authorized(self.client.patch(url).json(patch))?;
        self.send_json(request).await
    }

    pub async fn admin_delete_hotel(&self, id: &str) -> Result<(), ApiError> {
        let url = self.url(&format!("/admin/hotels/{}", encode_segment(id))).await;
        let request = self.authorized(self.client.delete(url))?;
        self.send(request).await.map(|_| ())
    }
}
