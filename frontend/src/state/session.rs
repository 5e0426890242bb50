//! Credential token storage.
//!
//! Pages never touch browser storage directly; they go through a
//! [`SessionStore`] held by the [`ApiClient`](crate::api::ApiClient) in
//! context, so tests can swap in [`MemorySession`].

use std::{cell::RefCell, rc::Rc};

pub const TOKEN_KEY: &str = "authToken";

pub trait SessionStore {
    fn token(&self) -> Option<String>;
    fn set_token(&self, token: &str);
    fn clear(&self);

    fn has_token(&self) -> bool {
        self.token().is_some_and(|token| !token.is_empty())
    }
}

/// Browser `localStorage` under [`TOKEN_KEY`]. Storage failures read as
/// "no token" and writes are best effort.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageSession;

impl SessionStore for LocalStorageSession {
    fn token(&self) -> Option<String> {
        crate::utils::storage::local_storage()
            .ok()?
            .get_item(TOKEN_KEY)
            .ok()
            .flatten()
    }

    fn set_token(&self, token: &str) {
        match crate::utils::storage::local_storage() {
            Ok(storage) => {
                if storage.set_item(TOKEN_KEY, token).is_err() {
                    log::warn!("failed to persist session token");
                }
            }
            Err(err) => log::warn!("session token not stored: {}", err),
        }
    }

    fn clear(&self) {
        if let Ok(storage) = crate::utils::storage::local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

#[derive(Debug, Default)]
pub struct MemorySession {
    token: RefCell<Option<String>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RefCell::new(Some(token.into())),
        }
    }
}

impl SessionStore for MemorySession {
    fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set_token(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}

#[cfg(target_arch = "wasm32")]
pub fn default_session_store() -> Rc<dyn SessionStore> {
    Rc::new(LocalStorageSession)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_session_store() -> Rc<dyn SessionStore> {
    Rc::new(MemorySession::new())
}

/// Session store of the API client in context.
pub fn use_session_store() -> Rc<dyn SessionStore> {
    leptos::use_context::<crate::api::ApiClient>()
        .unwrap_or_else(crate::api::ApiClient::new)
        .session()
}
