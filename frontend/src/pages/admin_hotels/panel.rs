use super::{
    components::{
        edit_form::HotelEditForm,
        table::{HotelTableView, Pagination},
    },
    view_model::{use_admin_hotels_view_model, AdminHotelsViewModel},
};
use crate::components::{
    confirm_dialog::ConfirmDialog,
    empty_state::EmptyState,
    guard::RequireAdmin,
    layout::{ErrorMessage, Layout, LoadingSpinner, SuccessMessage},
};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn AdminHotelsPage() -> impl IntoView {
    view! {
        <Title text="Manage hotels | Reserve Mate" />
        <Layout>
            <RequireAdmin>
                <AdminHotelsPanel />
            </RequireAdmin>
        </Layout>
    }
}

#[component]
fn AdminHotelsPanel() -> impl IntoView {
    view! { <AdminHotelsContent vm=use_admin_hotels_view_model() /> }
}

#[component]
pub fn AdminHotelsContent(vm: AdminHotelsViewModel) -> impl IntoView {
    let on_edit = Callback::new(move |id: String| vm.start_edit(&id));
    let on_delete = Callback::new(move |id: String| vm.pending_delete.set(Some(id)));
    let on_cancel_delete = Callback::new(move |_: ()| vm.pending_delete.set(None));
    let delete_message = move || {
        let name = vm.pending_delete.get().and_then(|id| {
            vm.table
                .with(|table| table.find(&id).map(|hotel| hotel.name.clone()))
        });
        format!("Delete {}? This cannot be undone.", name.unwrap_or_else(|| "this hotel".into()))
    };

    let body = move || {
        let (loading, load_error, empty) = vm.table.with(|table| {
            (table.loading, table.load_error.clone(), table.hotels.is_empty())
        });
        if loading {
            return view! { <LoadingSpinner /> }.into_view();
        }
        if let Some(message) = load_error {
            return view! { <ErrorMessage message=format!("Error: {}", message) /> }.into_view();
        }
        if empty {
            return view! { <EmptyState title="No hotels found" /> }.into_view();
        }
        view! {
            <HotelTableView page=vm.visible on_edit=on_edit on_delete=on_delete />
            <Pagination page=vm.visible current=vm.page />
        }
        .into_view()
    };

    view! {
        <section class="space-y-6">
            <div class="flex flex-col gap-4 sm:flex-row sm:items-center sm:justify-between">
                <h1 class="text-2xl font-semibold">"Hotels"</h1>
                <input
                    type="search"
                    class="w-full sm:w-72 border rounded px-3 py-2"
                    placeholder="Search for hotels..."
                    prop:value=move || vm.search.get()
                    on:input=move |ev| vm.set_search(event_target_value(&ev))
                />
            </div>
            <Show when=move || vm.messages.get().error.is_some()>
                <ErrorMessage message=vm.messages.get().error.unwrap_or_default() />
            </Show>
            <Show when=move || vm.messages.get().success.is_some()>
                <SuccessMessage message=vm.messages.get().success.unwrap_or_default() />
            </Show>
            <HotelEditForm
                draft=vm.editing
                error=vm.form_error
                busy=vm.busy
                on_save=vm.save
                on_cancel=Callback::new(move |_| vm.cancel_edit())
            />
            {body}
            <ConfirmDialog
                is_open=Signal::derive(move || vm.pending_delete.get().is_some())
                title="Delete hotel"
                message=Signal::derive(delete_message)
                on_confirm=vm.confirm_delete
                on_cancel=on_cancel_delete
                confirm_label="Delete"
                confirm_disabled=vm.busy
                destructive=true
            />
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{ApiError, Hotel, HotelPatch};
    use crate::pages::admin_hotels::{
        repository::HotelAdminRepository, view_model::use_admin_hotels_view_model_with,
    };
    use crate::test_support::helpers::{admin_user, hotel, regular_user};
    use crate::test_support::ssr::{render_signed_in, render_to_string};

    #[derive(Clone)]
    struct StaticRepo;

    impl HotelAdminRepository for StaticRepo {
        async fn list_all(&self) -> Result<Vec<Hotel>, ApiError> {
            Ok(Vec::new())
        }

        async fn update_fields(&self, _id: &str, _patch: &HotelPatch) -> Result<Hotel, ApiError> {
            Err(ApiError::request_failed("unused"))
        }

        async fn delete_by_id(&self, _id: &str) -> Result<(), ApiError> {
            Ok(())
        }
    }

    fn content_with(setup: impl FnOnce(&AdminHotelsViewModel) + 'static) -> String {
        render_to_string(move || {
            let vm = use_admin_hotels_view_model_with(StaticRepo);
            setup(&vm);
            view! { <AdminHotelsContent vm=vm /> }
        })
    }

    #[test]
    fn shows_spinner_until_loaded() {
        let html = content_with(|_| {});
        assert!(html.contains("animate-spin"));
        assert!(html.contains("Search for hotels..."));
    }

    #[test]
    fn renders_rows_and_notices() {
        let html = content_with(|vm| {
            vm.table
                .update(|t| t.loaded(vec![hotel("1", "Harbor View", ""), hotel("2", "Pine Lodge", "")]));
            vm.messages.update(|m| m.set_error("Delete failed: store unavailable"));
        });
        assert!(html.contains("Harbor View"));
        assert!(html.contains("Pine Lodge"));
        assert!(html.contains("Delete failed: store unavailable"));
        assert!(html.contains("Page 1 of 1"));
    }

    #[test]
    fn pending_delete_opens_the_dialog() {
        let html = content_with(|vm| {
            vm.table.update(|t| t.loaded(vec![hotel("42", "Harbor View", "")]));
            vm.pending_delete.set(Some("42".into()));
        });
        assert!(html.contains("Delete Harbor View? This cannot be undone."));
    }

    #[test]
    fn load_error_is_shown() {
        let html = content_with(|vm| vm.table.update(|t| t.failed("HTTP 500")));
        assert!(html.contains("Error: HTTP 500"));
    }

    #[test]
    fn members_are_turned_away() {
        let html = render_signed_in(regular_user(), || view! { <AdminHotelsPage /> });
        assert!(html.contains("Forbidden"));
        assert!(!html.contains("Search for hotels..."));
    }

    #[test]
    fn admins_see_the_table_shell() {
        let html = render_signed_in(admin_user(), || view! { <AdminHotelsPage /> });
        assert!(html.contains("Search for hotels..."));
    }
}
