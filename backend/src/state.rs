use crate::{
    config::Config,
    repositories::{HotelStore, InMemoryHotelStore, InMemoryUserStore, UserStore},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub hotels: Arc<dyn HotelStore>,
    pub users: Arc<dyn UserStore>,
    pub config: Config,
}

impl AppState {
    pub fn new(hotels: Arc<dyn HotelStore>, users: Arc<dyn UserStore>, config: Config) -> Self {
        Self {
            hotels,
            users,
            config,
        }
    }

    /// State backed by empty in-process stores.
    pub fn in_memory(config: Config) -> Self {
        Self::new(
            Arc::new(InMemoryHotelStore::new()),
            Arc::new(InMemoryUserStore::new()),
            config,
        )
    }
}
