//! Hotel store.
//!
//! Hotels live in a document collection: every row is an id plus a JSONB
//! document, and partial updates merge fields into the existing document.

use crate::error::AppError;
use crate::models::hotel::{Hotel, HotelPatch};
use sqlx::{types::Json, PgPool};
use serde_json::Value;

pub const HOTELS_COLLECTION: &str = "hotels";
const SELECT_COLUMNS: &str = "id, document";

/// Document-store capabilities the API needs for the hotels collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait HotelStore: Send + Sync {
    /// Full snapshot of the collection in store order.
    async fn list_all(&self) -> Result<Vec<Hotel>, AppError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Hotel>, AppError>;

    /// Merges `patch` into one document and returns the stored result.
    /// Fails with `NotFound` when the document does not exist.
    async fn update_fields(&self, id: &str, patch: &HotelPatch) -> Result<Hotel, AppError>;

    /// Fails with `NotFound` when the document does not exist.
    async fn delete_by_id(&self, id: &str) -> Result<(), AppError>;
}

#[derive(Debug, Clone)]
pub struct PgHotelStore {
    pool: PgPool,
}

impl PgHotelStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn base_select_query() -> String {
        format!("SELECT {} FROM {}", SELECT_COLUMNS, HOTELS_COLLECTION)
    }
}

fn hotel_from_row((id, document): (String, Json<Value>)) -> Result<Hotel, AppError> {
    Hotel::from_document(id, document.0).map_err(|e| AppError::InternalServerError(e.into()))
}

#[async_trait::async_trait]
impl HotelStore for PgHotelStore {
    async fn list_all(&self) -> Result<Vec<Hotel>, AppError> {
        let query = format!("{} ORDER BY created_at ASC, id ASC", Self::base_select_query());
        let rows = sqlx::query_as::<_, (String, Json<Value>)>(&query)
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(hotel_from_row).collect()
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Hotel>, AppError> {
        let query = format!("{} WHERE id = $1", Self::base_select_query());
        let row = sqlx::query_as::<_, (String, Json<Value>)>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(hotel_from_row).transpose()
    }

    async fn update_fields(&self, id: &str, patch: &HotelPatch) -> Result<Hotel, AppError> {
        let query = format!(
            "UPDATE {} SET document = document || $2, updated_at = NOW() \
             WHERE id = $1 RETURNING {}",
            HOTELS_COLLECTION, SELECT_COLUMNS
        );
        let row = sqlx::query_as::<_, (String, Json<Value>)>(&query)
            .bind(id)
            .bind(Json(patch.to_document()))
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Hotel not found".into()))?;
        hotel_from_row(row)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), AppError> {
        let query = format!("DELETE FROM {} WHERE id = $1", HOTELS_COLLECTION);
        let result = sqlx::query(&query).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Hotel not found".into()));
        }
        Ok(())
    }
}
