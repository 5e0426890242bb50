use super::repository::{HotelCatalog, HotelsRepository};
use crate::{
    api::Hotel,
    components::{
        guard::RequireAuth,
        layout::{ErrorMessage, Layout, LoadingSpinner},
    },
    utils::navigation::hotel_reviews_path,
};
use leptos::*;
use leptos_router::use_params_map;

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Loaded(Hotel),
    Failed(String),
}

pub async fn fetch_detail<C: HotelCatalog>(catalog: &C, id: &str, state: RwSignal<DetailState>) {
    let next = match catalog.get_hotel(id).await {
        Ok(hotel) => DetailState::Loaded(hotel),
        Err(err) => {
            log::error!("failed to fetch hotel {}: {}", id, err);
            DetailState::Failed(err.error)
        }
    };
    let _ = state.try_set(next);
}

/// Loads the hotel named by the `:id` route parameter.
pub fn use_hotel_detail() -> RwSignal<DetailState> {
    let params = use_params_map();
    let state = create_rw_signal(DetailState::Loading);
    let repository = HotelsRepository::from_context();

    create_effect(move |_| {
        let id = params.with(|p| p.get("id").cloned().unwrap_or_default());
        state.set(DetailState::Loading);
        let repository = repository.clone();
        spawn_local(async move { fetch_detail(&repository, &id, state).await });
    });

    state
}

#[component]
pub fn HotelDetailPage() -> impl IntoView {
    view! {
        <Layout>
            <RequireAuth>
                <HotelDetailPanel state=use_hotel_detail() />
            </RequireAuth>
        </Layout>
    }
}

#[component]
pub fn HotelDetailPanel(state: RwSignal<DetailState>) -> impl IntoView {
    move || match state.get() {
        DetailState::Loading => view! { <LoadingSpinner /> }.into_view(),
        DetailState::Failed(message) => view! { <ErrorMessage message=message /> }.into_view(),
        DetailState::Loaded(hotel) => view! {
            <article class="max-w-3xl mx-auto space-y-4">
                <img src=hotel.image.clone() alt=hotel.name.clone() class="w-full max-h-96 object-cover rounded-lg" />
                <h1 class="text-3xl font-semibold">{hotel.name.clone()}</h1>
                <p class="text-lg text-fg-muted">{format!("From {}", hotel.price)}</p>
                <p class="whitespace-pre-line">{hotel.description_text().to_string()}</p>
                <div class="flex gap-4">
                    <a href="/hotels" class="primary-btn">"Back to hotels"</a>
                    <a href=hotel_reviews_path(&hotel.id) class="primary-btn">"Reviews"</a>
                </div>
            </article>
        }
        .into_view(),
    }
}
