use crate::api::{ApiClient, ApiError, Hotel, HotelPatch};
use leptos::use_context;
use std::rc::Rc;

/// Collection access for the admin table. The table only ever talks to the
/// store through this trait.
#[allow(async_fn_in_trait)]
pub trait HotelAdminRepository {
    async fn list_all(&self) -> Result<Vec<Hotel>, ApiError>;

    async fn update_fields(&self, id: &str, patch: &HotelPatch) -> Result<Hotel, ApiError>;

    async fn delete_by_id(&self, id: &str) -> Result<(), ApiError>;
}

#[derive(Clone)]
pub struct ApiHotelAdminRepository {
    client: Rc<ApiClient>,
}

impl ApiHotelAdminRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub fn from_context() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        Self::new_with_client(Rc::new(api))
    }
}

impl HotelAdminRepository for ApiHotelAdminRepository {
    async fn list_all(&self) -> Result<Vec<Hotel>, ApiError> {
        self.client.admin_list_hotels().await
    }

    async fn update_fields(&self, id: &str, patch: &HotelPatch) -> Result<Hotel, ApiError> {
        self.client.admin_update_hotel(id, patch).await
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), ApiError> {
        self.client.admin_delete_hotel(id).await
    }
}
