use super::{
    repository::{ApiHotelAdminRepository, HotelAdminRepository},
    utils::{filter_by_name, paginate, HotelEditDraft, HotelTable, MessageState, Page},
};
use crate::api::HotelPatch;
use leptos::*;

pub async fn load_hotels<R: HotelAdminRepository>(repo: &R, table: RwSignal<HotelTable>) {
    let result = repo.list_all().await;
    let _ = table.try_update(move |table| match result {
        Ok(hotels) => table.loaded(hotels),
        Err(err) => {
            log::error!("failed to load hotels: {}", err);
            table.failed(err.error)
        }
    });
}

/// The local record is only merged after the store accepted the patch.
pub async fn update_hotel<R: HotelAdminRepository>(
    repo: &R,
    table: RwSignal<HotelTable>,
    messages: RwSignal<MessageState>,
    id: &str,
    patch: HotelPatch,
) -> bool {
    match repo.update_fields(id, &patch).await {
        Ok(_) => {
            let _ = table.try_update(|table| table.apply_update(id, &patch));
            let _ = messages.try_update(|m| m.set_success("Hotel updated."));
            true
        }
        Err(err) => {
            log::error!("failed to update hotel {}: {}", id, err);
            let _ = messages.try_update(|m| m.set_error(format!("Update failed: {}", err.error)));
            false
        }
    }
}

pub async fn delete_hotel<R: HotelAdminRepository>(
    repo: &R,
    table: RwSignal<HotelTable>,
    messages: RwSignal<MessageState>,
    id: &str,
) -> bool {
    match repo.delete_by_id(id).await {
        Ok(()) => {
            let _ = table.try_update(|table| table.remove(id));
            let _ = messages.try_update(|m| m.set_success("Hotel deleted."));
            true
        }
        Err(err) => {
            log::error!("failed to delete hotel {}: {}", id, err);
            let _ = messages.try_update(|m| m.set_error(format!("Delete failed: {}", err.error)));
            false
        }
    }
}

#[derive(Clone, Copy)]
pub struct AdminHotelsViewModel {
    pub table: RwSignal<HotelTable>,
    pub messages: RwSignal<MessageState>,
    pub search: RwSignal<String>,
    pub page: RwSignal<usize>,
    pub visible: Memo<Page>,
    pub editing: RwSignal<Option<HotelEditDraft>>,
    pub form_error: RwSignal<Option<String>>,
    pub pending_delete: RwSignal<Option<String>>,
    pub busy: RwSignal<bool>,
    pub save: Callback<HotelEditDraft>,
    pub confirm_delete: Callback<()>,
}

impl AdminHotelsViewModel {
    pub fn start_edit(&self, id: &str) {
        let draft = self
            .table
            .with_untracked(|table| table.find(id).map(HotelEditDraft::from));
        self.form_error.set(None);
        self.editing.set(draft);
    }

    pub fn cancel_edit(&self) {
        self.form_error.set(None);
        self.editing.set(None);
    }

    pub fn set_search(&self, query: String) {
        self.search.set(query);
        self.page.set(1);
    }
}

pub fn use_admin_hotels_view_model() -> AdminHotelsViewModel {
    use_admin_hotels_view_model_with(ApiHotelAdminRepository::from_context())
}

pub fn use_admin_hotels_view_model_with<R>(repository: R) -> AdminHotelsViewModel
where
    R: HotelAdminRepository + Clone + 'static,
{
    let table = create_rw_signal(HotelTable::default());
    let messages = create_rw_signal(MessageState::default());
    let search = create_rw_signal(String::new());
    let page = create_rw_signal(1usize);
    let editing = create_rw_signal(None::<HotelEditDraft>);
    let form_error = create_rw_signal(None::<String>);
    let pending_delete = create_rw_signal(None::<String>);
    let busy = create_rw_signal(false);

    let visible = create_memo(move |_| {
        let filtered = table.with(|table| filter_by_name(&table.hotels, &search.get()));
        paginate(&filtered, page.get())
    });

    let repo_for_load = repository.clone();
    create_effect(move |_| {
        let repo = repo_for_load.clone();
        spawn_local(async move { load_hotels(&repo, table).await });
    });

    let repo_for_save = repository.clone();
    let save = Callback::new(move |draft: HotelEditDraft| {
        let Some(original) = table.with_untracked(|t| t.find(&draft.id).cloned()) else {
            return;
        };
        let patch = match draft.to_patch(&original) {
            Ok(patch) => patch,
            Err(message) => {
                form_error.set(Some(message));
                return;
            }
        };
        form_error.set(None);
        busy.set(true);
        let repo = repo_for_save.clone();
        spawn_local(async move {
            if update_hotel(&repo, table, messages, &draft.id, patch).await {
                let _ = editing.try_set(None);
            }
            let _ = busy.try_set(false);
        });
    });

    let repo_for_delete = repository;
    let confirm_delete = Callback::new(move |_: ()| {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        busy.set(true);
        let repo = repo_for_delete.clone();
        spawn_local(async move {
            delete_hotel(&repo, table, messages, &id).await;
            let _ = pending_delete.try_set(None);
            let _ = busy.try_set(false);
        });
    });

    AdminHotelsViewModel {
        table,
        messages,
        search,
        page,
        visible,
        editing,
        form_error,
        pending_delete,
        busy,
        save,
        confirm_delete,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{ApiError, Hotel, HotelPrice};
    use crate::test_support::helpers::hotel;
    use crate::test_support::ssr::with_runtime;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeRepo {
        hotels: Vec<Hotel>,
        fail_writes: bool,
        deleted: RefCell<Vec<String>>,
    }

    impl HotelAdminRepository for FakeRepo {
        async fn list_all(&self) -> Result<Vec<Hotel>, ApiError> {
            Ok(self.hotels.clone())
        }

        async fn update_fields(&self, id: &str, patch: &HotelPatch) -> Result<Hotel, ApiError> {
            if self.fail_writes {
                return Err(ApiError::request_failed("store unavailable"));
            }
            let mut hotel = self
                .hotels
                .iter()
                .find(|h| h.id == id)
                .cloned()
                .ok_or_else(|| ApiError::http_status(404))?;
            hotel.apply_patch(patch);
            Ok(hotel)
        }

        async fn delete_by_id(&self, id: &str) -> Result<(), ApiError> {
            if self.fail_writes {
                return Err(ApiError::request_failed("store unavailable"));
            }
            self.deleted.borrow_mut().push(id.to_string());
            Ok(())
        }
    }

    fn loaded_table(repo: &FakeRepo) -> RwSignal<HotelTable> {
        let table = create_rw_signal(HotelTable::default());
        table.update(|t| t.loaded(repo.hotels.clone()));
        table
    }

    #[tokio::test]
    async fn load_fills_the_table() {
        let runtime = create_runtime();
        let repo = FakeRepo {
            hotels: vec![hotel("1", "A", ""), hotel("2", "B", "")],
            ..Default::default()
        };
        let table = create_rw_signal(HotelTable::default());

        load_hotels(&repo, table).await;

        let snapshot = table.get_untracked();
        assert!(!snapshot.loading);
        assert_eq!(snapshot.hotels.len(), 2);
        runtime.dispose();
    }

    #[tokio::test]
    async fn update_merges_patch_into_one_record() {
        let runtime = create_runtime();
        let repo = FakeRepo {
            hotels: vec![hotel("1", "A", "first"), hotel("2", "B", "second")],
            ..Default::default()
        };
        let table = loaded_table(&repo);
        let messages = create_rw_signal(MessageState::default());
        let patch = HotelPatch {
            name: Some("A prime".into()),
            price: Some(HotelPrice::Label("ask".into())),
            ..Default::default()
        };

        assert!(update_hotel(&repo, table, messages, "1", patch).await);

        let snapshot = table.get_untracked();
        assert_eq!(snapshot.hotels[0].name, "A prime");
        assert_eq!(snapshot.hotels[0].description.as_deref(), Some("first"));
        assert_eq!(snapshot.hotels[0].price, HotelPrice::Label("ask".into()));
        assert_eq!(snapshot.hotels[1], repo.hotels[1]);
        assert_eq!(messages.get_untracked().success.as_deref(), Some("Hotel updated."));
        runtime.dispose();
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_record() {
        let runtime = create_runtime();
        let repo = FakeRepo {
            hotels: vec![hotel("1", "A", ""), hotel("42", "B", ""), hotel("3", "C", "")],
            ..Default::default()
        };
        let table = loaded_table(&repo);
        let messages = create_rw_signal(MessageState::default());

        assert!(delete_hotel(&repo, table, messages, "42").await);

        let ids: Vec<String> = table
            .get_untracked()
            .hotels
            .into_iter()
            .map(|h| h.id)
            .collect();
        assert_eq!(ids, vec!["1".to_string(), "3".to_string()]);
        assert_eq!(*repo.deleted.borrow(), vec!["42".to_string()]);
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_delete_leaves_table_unchanged() {
        let runtime = create_runtime();
        let repo = FakeRepo {
            hotels: vec![hotel("42", "Doomed", ""), hotel("7", "Other", "")],
            fail_writes: true,
            ..Default::default()
        };
        let table = loaded_table(&repo);
        let messages = create_rw_signal(MessageState::default());
        let before = table.get_untracked();

        let removed = delete_hotel(&repo, table, messages, "42").await;

        assert!(!removed);
        assert_eq!(table.get_untracked(), before);
        assert!(messages
            .get_untracked()
            .error
            .is_some_and(|m| m.contains("store unavailable")));
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_update_leaves_table_unchanged() {
        let runtime = create_runtime();
        let repo = FakeRepo {
            hotels: vec![hotel("1", "A", "")],
            fail_writes: true,
            ..Default::default()
        };
        let table = loaded_table(&repo);
        let messages = create_rw_signal(MessageState::default());
        let before = table.get_untracked();
        let patch = HotelPatch {
            name: Some("Renamed".into()),
            ..Default::default()
        };

        assert!(!update_hotel(&repo, table, messages, "1", patch).await);
        assert_eq!(table.get_untracked(), before);
        runtime.dispose();
    }

    #[test]
    fn search_resets_page_and_filters_visible_rows() {
        with_runtime(|| {
            let vm = use_admin_hotels_view_model_with(NoopRepo);
            let mut hotels: Vec<Hotel> = (1..=15)
                .map(|i| hotel(&i.to_string(), &format!("Inn {}", i), ""))
                .collect();
            hotels.push(hotel("99", "Harbor View", ""));
            vm.table.update(|t| t.loaded(hotels));
            vm.page.set(2);

            vm.set_search("harbor".into());

            let page = vm.visible.get_untracked();
            assert_eq!(page.number, 1);
            assert_eq!(page.items.len(), 1);
            assert_eq!(page.items[0].id, "99");
        });
    }

    #[test]
    fn invalid_draft_sets_form_error_without_calling_store() {
        with_runtime(|| {
            let vm = use_admin_hotels_view_model_with(NoopRepo);
            vm.table.update(|t| t.loaded(vec![hotel("1", "A", "")]));
            vm.start_edit("1");
            let draft = vm.editing.get_untracked().unwrap();

            vm.save.call(draft);

            assert_eq!(vm.form_error.get_untracked().as_deref(), Some("No changes to save"));
            assert!(!vm.busy.get_untracked());
        });
    }

    #[derive(Clone)]
    struct NoopRepo;

    impl HotelAdminRepository for NoopRepo {
        async fn list_all(&self) -> Result<Vec<Hotel>, ApiError> {
            Ok(Vec::new())
        }

        async fn update_fields(&self, _id: &str, _patch: &HotelPatch) -> Result<Hotel, ApiError> {
            Err(ApiError::request_failed("unused"))
        }

        async fn delete_by_id(&self, _id: &str) -> Result<(), ApiError> {
            Err(ApiError::request_failed("unused"))
        }
    }
}
