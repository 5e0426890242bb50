use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{
    api::ApiClient,
    pages::{
        AdminHotelsPage, HomePage, HotelDetailPage, HotelReviewsPage, HotelsPage, LoginPage,
        RegisterPage,
    },
    state::auth::AuthProvider,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/register",
    "/hotels",
    "/hotels/:id",
    "/hotels/:id/reviews",
    "/admin/hotels",
];

/// Pages that render through `RequireAuth` or `RequireAdmin`.
pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/hotels",
    "/hotels/:id",
    "/hotels/:id/reviews",
    "/admin/hotels",
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/login", "/register"];

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    provide_meta_context();
    view! {
        <AuthProvider>
            <Router>
                <main class="min-h-screen bg-surface">
                    <Routes>
                        <Route path="/" view=HomePage/>
                        <Route path="/login" view=LoginPage/>
                        <Route path="/register" view=RegisterPage/>
                        <Route path="/hotels" view=HotelsPage/>
                        <Route path="/hotels/:id" view=HotelDetailPage/>
                        <Route path="/hotels/:id/reviews" view=HotelReviewsPage/>
                        <Route path="/admin/hotels" view=AdminHotelsPage/>
                    </Routes>
                </main>
            </Router>
        </AuthProvider>
    }
}
