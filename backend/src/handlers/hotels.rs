use axum::{
    extract::{Path, State},
    Json,
};

use crate::{error::AppError, models::hotel::Hotel, state::AppState};

/// Listing endpoint: the full collection in store order.
pub async fn list_hotels(State(state): State<AppState>) -> Result<Json<Vec<Hotel>>, AppError> {
    let hotels = state.hotels.list_all().await?;
    tracing::debug!(count = hotels.len(), "Listed hotels");
    Ok(Json(hotels))
}

pub async fn get_hotel(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Hotel>, AppError> {
    state
        .hotels
        .find_by_id(&id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Hotel not found".into()))
}
