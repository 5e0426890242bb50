use crate::pages::admin_hotels::utils::Page;
use leptos::*;

const HEADER_CELL: &str = "px-4 py-3 text-left text-xs font-semibold uppercase text-fg-muted";

#[component]
pub fn HotelTableView(
    #[prop(into)] page: Signal<Page>,
    on_edit: Callback<String>,
    on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <table class="min-w-full divide-y divide-border">
            <thead class="bg-surface-muted">
                <tr>
                    <th class=HEADER_CELL>"Title"</th>
                    <th class=HEADER_CELL>"Image"</th>
                    <th class=HEADER_CELL>"Price"</th>
                    <th class=HEADER_CELL>"Actions"</th>
                </tr>
            </thead>
            <tbody class="divide-y divide-border">
                <For
                    each=move || page.get().items
                    key=|hotel| hotel.id.clone()
                    children=move |hotel| {
                        let edit_id = hotel.id.clone();
                        let delete_id = hotel.id.clone();
                        view! {
                            <tr>
                                <td class="px-4 py-3 font-medium">{hotel.name.clone()}</td>
                                <td class="px-4 py-3">
                                    <img src=hotel.image.clone() alt=hotel.name.clone() class="h-12 w-20 object-cover rounded" />
                                </td>
                                <td class="px-4 py-3">{hotel.price.to_string()}</td>
                                <td class="px-4 py-3 space-x-3">
                                    <button
                                        type="button"
                                        class="text-brand hover:underline"
                                        on:click=move |_| on_edit.call(edit_id.clone())
                                    >
                                        "Edit"
                                    </button>
                                    <button
                                        type="button"
                                        class="text-action-danger-bg hover:underline"
                                        on:click=move |_| on_delete.call(delete_id.clone())
                                    >
                                        "Delete"
                                    </button>
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}

#[component]
pub fn Pagination(#[prop(into)] page: Signal<Page>, current: RwSignal<usize>) -> impl IntoView {
    let previous = move |_| current.set(page.get_untracked().number.saturating_sub(1).max(1));
    let next = move |_| {
        let page = page.get_untracked();
        current.set((page.number + 1).min(page.total_pages));
    };

    view! {
        <nav class="flex items-center justify-between py-3" aria-label="pagination">
            <button
                type="button"
                class="px-3 py-1 rounded border border-border disabled:opacity-50"
                disabled=move || !page.get().has_previous()
                on:click=previous
            >
                "Previous"
            </button>
            <span class="text-sm text-fg-muted">
                {move || {
                    let page = page.get();
                    format!("Page {} of {}", page.number, page.total_pages)
                }}
            </span>
            <button
                type="button"
                class="px-3 py-1 rounded border border-border disabled:opacity-50"
                disabled=move || !page.get().has_next()
                on:click=next
            >
                "Next"
            </button>
        </nav>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::admin_hotels::utils::paginate;
    use crate::test_support::helpers::hotel;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_headers_and_one_row_per_record() {
        let html = render_to_string(|| {
            let page = paginate(&[hotel("1", "Harbor View", ""), hotel("2", "Pine Lodge", "")], 1);
            view! {
                <HotelTableView
                    page=Signal::derive(move || page.clone())
                    on_edit=Callback::new(|_| {})
                    on_delete=Callback::new(|_| {})
                />
            }
        });
        for header in ["Title", "Image", "Price", "Actions"] {
            assert!(html.contains(header));
        }
        assert!(html.contains("Harbor View"));
        assert!(html.contains("Pine Lodge"));
        assert_eq!(html.matches("<tr").count(), 3);
    }

    #[test]
    fn pagination_reports_position() {
        let html = render_to_string(|| {
            let hotels: Vec<_> = (1..=25).map(|i| hotel(&i.to_string(), "Inn", "")).collect();
            let page = paginate(&hotels, 2);
            view! { <Pagination page=Signal::derive(move || page.clone()) current=create_rw_signal(2) /> }
        });
        assert!(html.contains("Page 2 of 3"));
    }
}
