//! Startup data: the bootstrap admin account and an optional hotel seed file.

use anyhow::Context;
use std::path::Path;

use crate::{
    error::AppError,
    models::{
        hotel::Hotel,
        user::{User, UserRole},
    },
    repositories::{InMemoryHotelStore, UserStore},
    utils::password::hash_password,
};

/// Creates the admin account if it does not exist yet.
pub async fn bootstrap_admin(
    users: &dyn UserStore,
    email: &str,
    password: &str,
) -> anyhow::Result<()> {
    if users.find_by_email(email).await?.is_some() {
        tracing::debug!("Admin account already present");
        return Ok(());
    }

    let admin = User::new(email, "Administrator", hash_password(password)?, UserRole::Admin);
    match users.create(&admin).await {
        Ok(user) => {
            tracing::info!(user_id = %user.id, "Bootstrapped admin account");
            Ok(())
        }
        Err(AppError::Conflict(_)) => Ok(()),
        Err(err) => Err(err.into()),
    }
}

/// Reads a JSON array of `{ "id": ..., ...fields }` documents.
pub fn load_hotel_seed(path: &Path) -> anyhow::Result<Vec<Hotel>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read hotel seed file {}", path.display()))?;
    parse_hotel_seed(&raw)
}

fn parse_hotel_seed(raw: &str) -> anyhow::Result<Vec<Hotel>> {
    let documents: Vec<serde_json::Value> =
        serde_json::from_str(raw).context("Hotel seed must be a JSON array")?;

    documents
        .into_iter()
        .enumerate()
        .map(|(index, mut document)| {
            let id = document
                .as_object_mut()
                .and_then(|fields| fields.remove("id"))
                .and_then(|id| match id {
                    serde_json::Value::String(s) => Some(s),
                    serde_json::Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .with_context(|| format!("Hotel seed entry {} has no id", index))?;
            Ok(Hotel::from_document(id, document)?)
        })
        .collect()
}

/// In-memory hotel store preloaded from the seed file, if one is configured.
pub fn seeded_memory_store(path: Option<&Path>) -> anyhow::Result<InMemoryHotelStore> {
    match path {
        Some(path) => {
            let hotels = load_hotel_seed(path)?;
            tracing::info!(count = hotels.len(), "Loaded hotel seed");
            Ok(InMemoryHotelStore::with_hotels(hotels))
        }
        None => Ok(InMemoryHotelStore::new()),
    }
}
