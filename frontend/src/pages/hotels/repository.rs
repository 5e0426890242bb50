use crate::{
    api::{ApiClient, ApiError, Hotel},
    state::session::SessionStore,
};
use leptos::use_context;
use std::rc::Rc;

/// Read access to the public hotel catalogue.
#[allow(async_fn_in_trait)]
pub trait HotelCatalog {
    async fn list_hotels(&self) -> Result<Vec<Hotel>, ApiError>;

    async fn get_hotel(&self, id: &str) -> Result<Hotel, ApiError>;
}

#[derive(Clone)]
pub struct HotelsRepository {
    client: Rc<ApiClient>,
}

impl Default for HotelsRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl HotelsRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub fn from_context() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        Self::new_with_client(Rc::new(api))
    }

    pub fn session(&self) -> Rc<dyn SessionStore> {
        self.client.session()
    }
}

impl HotelCatalog for HotelsRepository {
    async fn list_hotels(&self) -> Result<Vec<Hotel>, ApiError> {
        self.client.list_hotels().await
    }

    async fn get_hotel(&self, id: &str) -> Result<Hotel, ApiError> {
        self.client.get_hotel(id).await
    }
}
