pub mod components;
pub mod detail;
pub mod repository;
pub mod reviews;
pub mod utils;
pub mod view_model;

mod panel;

pub use detail::HotelDetailPage;
pub use panel::HotelsPage;
pub use reviews::HotelReviewsPage;
