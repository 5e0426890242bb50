use super::{
    repository::{HotelCatalog, HotelsRepository},
    utils,
};
use crate::{
    api::Hotel,
    components::guard::LOGIN_PATH,
    state::session::SessionStore,
    utils::navigation::redirect_to,
};
use leptos::*;
use std::collections::HashMap;

/// Per-mount state of the listing page.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingState {
    pub hotels: Vec<Hotel>,
    pub expanded: HashMap<String, bool>,
    pub loading: bool,
    pub error: Option<String>,
    pub ready: bool,
}

impl Default for ListingState {
    fn default() -> Self {
        Self {
            hotels: Vec::new(),
            expanded: HashMap::new(),
            loading: true,
            error: None,
            ready: false,
        }
    }
}

impl ListingState {
    pub fn loaded(&mut self, hotels: Vec<Hotel>) {
        self.hotels = hotels;
        self.error = None;
        self.ready = true;
        self.loading = false;
    }

    pub fn failed(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
    }

    /// Left without fetching (no session).
    pub fn abandon(&mut self) {
        self.loading = false;
    }

    pub fn toggle_expansion(&mut self, id: &str) {
        utils::toggle_expansion(&mut self.expanded, id);
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.get(id).copied().unwrap_or(false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingOutcome {
    Redirected,
    Loaded,
    Failed,
    /// The page was unmounted before the fetch settled.
    Discarded,
}

/// Mount-time flow: without a token go to `/login` and never fetch,
/// otherwise fetch once and record the result.
pub async fn load_hotels<C: HotelCatalog>(
    session: &dyn SessionStore,
    catalog: &C,
    state: RwSignal<ListingState>,
) -> ListingOutcome {
    if !session.has_token() {
        let _ = state.try_update(ListingState::abandon);
        redirect_to(LOGIN_PATH);
        return ListingOutcome::Redirected;
    }

    let result = catalog.list_hotels().await;
    let outcome = match &result {
        Ok(_) => ListingOutcome::Loaded,
        Err(_) => ListingOutcome::Failed,
    };
    let written = state.try_update(move |state| match result {
        Ok(hotels) => state.loaded(hotels),
        Err(err) => {
            log::error!("failed to fetch hotels: {}", err);
            state.failed(err.error)
        }
    });
    if written.is_some() {
        outcome
    } else {
        ListingOutcome::Discarded
    }
}

#[derive(Clone, Copy)]
pub struct HotelsViewModel {
    pub state: RwSignal<ListingState>,
}

impl HotelsViewModel {
    pub fn toggle(&self, id: &str) {
        self.state.update(|state| state.toggle_expansion(id));
    }
}

pub fn use_hotels_view_model() -> HotelsViewModel {
    let state = create_rw_signal(ListingState::default());
    let repository = HotelsRepository::from_context();

    create_effect(move |_| {
        let repository = repository.clone();
        spawn_local(async move {
            let session = repository.session();
            load_hotels(session.as_ref(), &repository, state).await;
        });
    });

    HotelsViewModel { state }
}
