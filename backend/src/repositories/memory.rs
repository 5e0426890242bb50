//! In-process stores used when no database is configured, and by tests.

use crate::error::AppError;
use crate::models::hotel::{Hotel, HotelPatch};
use crate::models::user::{normalize_email, User};
use crate::repositories::{hotel::HotelStore, user::UserStore};
use tokio::sync::RwLock;

/// Keeps insertion order so listings come back in store order.
#[derive(Debug, Default)]
pub struct InMemoryHotelStore {
    hotels: RwLock<Vec<Hotel>>,
}

impl InMemoryHotelStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hotels(hotels: Vec<Hotel>) -> Self {
        Self {
            hotels: RwLock::new(hotels),
        }
    }
}

#[async_trait::async_trait]
impl HotelStore for InMemoryHotelStore {
    async fn list_all(&self) -> Result<Vec<Hotel>, AppError> {
        Ok(self.hotels.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Hotel>, AppError> {
        Ok(self
            .hotels
            .read()
            .await
            .iter()
            .find(|hotel| hotel.id == id)
            .cloned())
    }

    async fn update_fields(&self, id: &str, patch: &HotelPatch) -> Result<Hotel, AppError> {
        let mut hotels = self.hotels.write().await;
        let hotel = hotels
            .iter_mut()
            .find(|hotel| hotel.id == id)
            .ok_or_else(|| AppError::NotFound("Hotel not found".into()))?;
        hotel.apply_patch(patch);
        Ok(hotel.clone())
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), AppError> {
        let mut hotels = self.hotels.write().await;
        let before = hotels.len();
        hotels.retain(|hotel| hotel.id != id);
        if hotels.len() == before {
            return Err(AppError::NotFound("Hotel not found".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let email = normalize_email(email);
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|user| user.id == id)
            .cloned())
    }

    async fn create(&self, user: &User) -> Result<User, AppError> {
        let mut users = self.users.write().await;
        if users.iter().any(|existing| existing.email == user.email) {
            return Err(AppError::Conflict("Email is already registered".into()));
        }
        users.push(user.clone());
        Ok(user.clone())
    }
}
