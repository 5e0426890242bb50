#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{ApiClient, Hotel, HotelPrice, UserResponse};
    use crate::state::{auth::AuthState, session::MemorySession};
    use leptos::*;
    use std::rc::Rc;

    pub fn admin_user() -> UserResponse {
        UserResponse {
            id: "u-admin".into(),
            email: "admin@example.com".into(),
            display_name: "Admin User".into(),
            role: "admin".into(),
        }
    }

    pub fn regular_user() -> UserResponse {
        UserResponse {
            id: "u-regular".into(),
            email: "guest@example.com".into(),
            display_name: "Regular User".into(),
            role: "member".into(),
        }
    }

    pub fn provide_auth(
        user: Option<UserResponse>,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let state = match user {
            Some(user) => AuthState::signed_in(user),
            None => AuthState::signed_out(),
        };
        let (auth, set_auth) = create_signal(state);
        provide_context((auth, set_auth));
        (auth, set_auth)
    }

    /// Puts an API client whose session already holds `token` into context.
    pub fn provide_client_with_token(token: &str) -> Rc<MemorySession> {
        let session = Rc::new(MemorySession::with_token(token));
        provide_context(
            ApiClient::new_with_base_url("http://127.0.0.1:9/api").with_session(session.clone()),
        );
        session
    }

    pub fn hotel(id: &str, name: &str, description: &str) -> Hotel {
        Hotel {
            id: id.into(),
            name: name.into(),
            description: Some(description.into()),
            image: format!("/img/{}.png", id),
            price: HotelPrice::Amount(100u32.into()),
        }
    }
}
