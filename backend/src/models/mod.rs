//! Data models shared across stores and API handlers.

pub mod hotel;
pub mod user;
