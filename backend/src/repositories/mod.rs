pub mod hotel;
pub mod memory;
pub mod user;

pub use hotel::{HotelStore, PgHotelStore};
pub use memory::{InMemoryHotelStore, InMemoryUserStore};
pub use user::{PgUserStore, UserStore};
