use super::detail::{use_hotel_detail, DetailState};
use crate::components::{
    empty_state::EmptyState,
    guard::RequireAuth,
    layout::{ErrorMessage, Layout, LoadingSpinner},
};
use crate::utils::navigation::hotel_detail_path;
use leptos::*;

#[component]
pub fn HotelReviewsPage() -> impl IntoView {
    view! {
        <Layout>
            <RequireAuth>
                <HotelReviewsPanel state=use_hotel_detail() />
            </RequireAuth>
        </Layout>
    }
}

/// Hotel header followed by its reviews. No reviews are stored yet, so the
/// list is always the empty state.
#[component]
pub fn HotelReviewsPanel(state: RwSignal<DetailState>) -> impl IntoView {
    move || match state.get() {
        DetailState::Loading => view! { <LoadingSpinner /> }.into_view(),
        DetailState::Failed(message) => view! { <ErrorMessage message=message /> }.into_view(),
        DetailState::Loaded(hotel) => view! {
            <section class="max-w-3xl mx-auto space-y-6">
                <header class="space-y-1">
                    <h1 class="text-3xl font-semibold">{format!("Reviews for {}", hotel.name)}</h1>
                    <a href=hotel_detail_path(&hotel.id) class="text-brand">"Back to details"</a>
                </header>
                <EmptyState
                    title="No reviews yet"
                    description="Guests have not reviewed this hotel."
                />
            </section>
        }
        .into_view(),
    }
}
