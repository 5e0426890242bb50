use super::{
    components::card::HotelCard,
    view_model::{use_hotels_view_model, HotelsViewModel, ListingState},
};
use crate::{
    api::Hotel,
    components::{
        guard::RequireAuth,
        layout::{Layout, LoadingSpinner},
    },
};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn HotelsPage() -> impl IntoView {
    view! {
        <Title text="Hotels | Reserve Mate" />
        <Layout>
            <RequireAuth>
                <HotelsPanel />
            </RequireAuth>
        </Layout>
    }
}

#[component]
pub fn HotelsPanel() -> impl IntoView {
    let vm = use_hotels_view_model();
    view! { <HotelsListing vm=vm /> }
}

/// Renders whichever of loading / error / list the state is in.
#[component]
pub fn HotelsListing(vm: HotelsViewModel) -> impl IntoView {
    let state = vm.state;
    let loading = create_memo(move |_| state.with(|s| s.loading));
    let error = create_memo(move |_| state.with(|s| s.error.clone()));
    let hotels = create_memo(move |_| state.with(|s| s.hotels.clone()));
    let ready = create_memo(move |_| state.with(|s| s.ready));
    let on_toggle = Callback::new(move |id: String| vm.toggle(&id));

    move || {
        if loading.get() {
            return view! {
                <div class="flex justify-center items-center min-h-[60vh]">
                    <LoadingSpinner />
                </div>
            }
            .into_view();
        }
        if let Some(message) = error.get() {
            return view! { <div class="text-status-error-text">{format!("Error: {}", message)}</div> }
                .into_view();
        }
        view! {
            <div class=move || if ready.get() { "fade-in visible" } else { "fade-in" }>
                <h1 class="text-center pt-5 text-3xl font-semibold">"Hotels"</h1>
                <ul class="list-none p-12">
                    <div class="flex flex-wrap gap-3 justify-around">
                        <For
                            each=move || hotels.get()
                            key=|hotel: &Hotel| hotel.id.clone()
                            children=move |hotel: Hotel| {
                                let id = hotel.id.clone();
                                let expanded = Signal::derive(move || {
                                    state.with(|s: &ListingState| s.is_expanded(&id))
                                });
                                view! { <HotelCard hotel=hotel expanded=expanded on_toggle=on_toggle /> }
                            }
                        />
                    </div>
                </ul>
            </div>
        }
        .into_view()
    }
}
