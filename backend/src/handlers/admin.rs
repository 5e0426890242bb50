use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        hotel::{Hotel, HotelPatch},
        user::User,
    },
    state::AppState,
};

pub async fn list_hotels(
    State(state): State<AppState>,
    Extension(_admin): Extension<User>,
) -> Result<Json<Vec<Hotel>>, AppError> {
    Ok(Json(state.hotels.list_all().await?))
}

/// Partial update of one hotel document; returns the stored record.
pub async fn update_hotel(
    State(state): State<AppState>,
    Extension(admin): Extension<User>,
    Path(id): Path<String>,
    Json(patch): Json<HotelPatch>,
) -> Result<Json<Hotel>, AppError> {
    patch.validate()?;
    if patch.is_empty() {
        return Err(AppError::BadRequest("No fields to update".into()));
    }

    let hotel = state.hotels.update_fields(&id, &patch).await?;
    tracing::info!(hotel_id = %id, admin_id = %admin.id, "Hotel updated");
    Ok(Json(hotel))
}

pub async fn delete_hotel(
    State(state): State<AppState>,
    Extension(admin): Extension<User>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.hotels.delete_by_id(&id).await?;
    tracing::info!(hotel_id = %id, admin_id = %admin.id, "Hotel deleted");
    Ok(StatusCode::NO_CONTENT)
}
