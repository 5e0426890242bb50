pub mod admin_hotels;
pub mod home;
pub mod hotels;
pub mod login;
pub mod register;

pub use admin_hotels::AdminHotelsPage;
pub use home::HomePage;
pub use hotels::{HotelDetailPage, HotelReviewsPage, HotelsPage};
pub use login::LoginPage;
pub use register::RegisterPage;
