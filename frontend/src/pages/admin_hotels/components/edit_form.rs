use crate::{
    components::{common::Button, layout::ErrorMessage},
    pages::admin_hotels::utils::HotelEditDraft,
};
use leptos::{ev, *};

fn edit(draft: RwSignal<Option<HotelEditDraft>>, apply: impl FnOnce(&mut HotelEditDraft)) {
    draft.update(|current| {
        if let Some(current) = current.as_mut() {
            apply(current);
        }
    });
}

#[component]
fn Field(
    label: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let input = if multiline {
        view! {
            <textarea
                class="mt-1 w-full border rounded px-2 py-1"
                rows="4"
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            >
                {value.get_untracked()}
            </textarea>
        }
        .into_view()
    } else {
        view! {
            <input
                class="mt-1 w-full border rounded px-2 py-1"
                value=value.get_untracked()
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
        }
        .into_view()
    };

    view! {
        <label class="block text-sm font-medium text-fg">
            {label}
            {input}
        </label>
    }
}

/// Edits the record held in `draft`; hidden while it is `None`.
#[component]
pub fn HotelEditForm(
    draft: RwSignal<Option<HotelEditDraft>>,
    error: RwSignal<Option<String>>,
    #[prop(into)] busy: MaybeSignal<bool>,
    on_save: Callback<HotelEditDraft>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let text = move |pick: fn(&HotelEditDraft) -> String| {
        Signal::derive(move || draft.with(|d| d.as_ref().map(pick).unwrap_or_default()))
    };
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(current) = draft.get_untracked() {
            on_save.call(current);
        }
    };

    view! {
        <Show when=move || draft.with(Option::is_some)>
            <form class="bg-surface-elevated shadow rounded-lg p-6 space-y-4" on:submit=on_submit>
                <h2 class="text-lg font-medium">"Edit hotel"</h2>
                <Show when=move || error.get().is_some()>
                    <ErrorMessage message=error.get().unwrap_or_default() />
                </Show>
                <Field
                    label="Name"
                    value=text(|d| d.name.clone())
                    on_input=Callback::new(move |v| edit(draft, |d| d.name = v))
                />
                <Field
                    label="Description"
                    multiline=true
                    value=text(|d| d.description.clone())
                    on_input=Callback::new(move |v| edit(draft, |d| d.description = v))
                />
                <Field
                    label="Image URL"
                    value=text(|d| d.image.clone())
                    on_input=Callback::new(move |v| edit(draft, |d| d.image = v))
                />
                <Field
                    label="Price"
                    value=text(|d| d.price.clone())
                    on_input=Callback::new(move |v| edit(draft, |d| d.price = v))
                />
                <div class="flex justify-end gap-2">
                    <button type="button" class="px-4 py-2 rounded-md bg-surface-muted" on:click=move |_| on_cancel.call(())>
                        "Cancel"
                    </button>
                    <Button attr:type="submit" loading=busy>
                        "Save"
                    </Button>
                </div>
            </form>
        </Show>
    }
}
