use crate::api::{ApiClient, ApiError, LoginRequest, LoginResponse, RegisterRequest};
use leptos::use_context;
use std::rc::Rc;

/// Authentication calls. Successful login and registration leave the issued
/// token in the client's session store.
#[derive(Clone)]
pub struct LoginRepository {
    client: Rc<ApiClient>,
}

impl LoginRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub fn from_context() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        Self::new_with_client(Rc::new(api))
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.client.login(request).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<LoginResponse, ApiError> {
        self.client.register(request).await
    }

    pub fn logout(&self) {
        self.client.logout();
    }
}
