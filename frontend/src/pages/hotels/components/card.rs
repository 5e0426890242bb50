use crate::{
    api::Hotel,
    pages::hotels::utils::{
        expansion_label, needs_read_more, truncate_text, DESCRIPTION_WORD_LIMIT,
    },
    utils::navigation::{hotel_detail_path, hotel_reviews_path},
};
use leptos::*;

#[component]
pub fn HotelCard(
    hotel: Hotel,
    #[prop(into)] expanded: Signal<bool>,
    on_toggle: Callback<String>,
) -> impl IntoView {
    let description = hotel.description.clone();
    let show_toggle = needs_read_more(description.as_deref());
    let truncated = truncate_text(description.as_deref(), DESCRIPTION_WORD_LIMIT);
    let full = hotel.description_text().to_string();
    let shown_text = move || {
        if expanded.get() {
            full.clone()
        } else {
            truncated.clone()
        }
    };
    let id = hotel.id.clone();

    view! {
        <li class="mb-4">
            <div class="card fade-in w-72 border border-border rounded-lg overflow-hidden">
                <img src=hotel.image.clone() alt=hotel.name.clone() class="card-img-top object-cover h-48 w-full" />
                <div class="card-body p-4 space-y-2">
                    <h5 class="card-title text-lg font-semibold">{hotel.name.clone()}</h5>
                    <p class="text-sm text-fg-muted">{format!("From {}", hotel.price)}</p>
                    <div class=move || if expanded.get() { "relative" } else { "relative max-h-[4.5em] overflow-hidden" }>
                        <p class="card-text m-0">{shown_text}</p>
                    </div>
                    {show_toggle.then(|| view! {
                        <button
                            type="button"
                            class="btn btn-link p-0 text-brand"
                            on:click=move |_| on_toggle.call(id.clone())
                        >
                            {move || expansion_label(expanded.get())}
                        </button>
                    })}
                    <div class="flex justify-between mt-2 gap-2">
                        <a href=hotel_detail_path(&hotel.id) class="primary-btn w-1/2 text-center">
                            "More Details"
                        </a>
                        <a href=hotel_reviews_path(&hotel.id) class="primary-btn w-2/5 text-center">
                            "Reviews"
                        </a>
                    </div>
                </div>
            </div>
        </li>
    }
}
