use crate::{
    api::{ApiClient, ApiError, LoginRequest, RegisterRequest, UserResponse},
    pages::login::repository::LoginRepository,
};
use leptos::*;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

/// Ambient identity: who the stored token belongs to, once checked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserResponse>,
    pub is_authenticated: bool,
    pub loading: bool,
}

impl AuthState {
    pub fn signed_in(user: UserResponse) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn checking() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }
}

fn create_auth_context() -> AuthContext {
    let api_client = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let has_token = api_client.session().has_token();
    let initial = if has_token {
        AuthState::checking()
    } else {
        AuthState::signed_out()
    };
    let (auth_state, set_auth_state) = create_signal(initial);

    // Effects only run in the browser, so SSR renders keep the initial state.
    create_effect(move |_| {
        if !has_token {
            return;
        }
        let api_client = api_client.clone();
        spawn_local(async move {
            let next = match api_client.get_me().await {
                Ok(user) => AuthState::signed_in(user),
                Err(err) => {
                    log::info!("stored session rejected: {}", err);
                    AuthState::signed_out()
                }
            };
            let _ = set_auth_state.try_set(next);
        });
    });

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn login_request(
    request: LoginRequest,
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    set_auth_state.update(|state| state.loading = true);

    match repo.login(&request).await {
        Ok(response) => {
            let _ = set_auth_state.try_set(AuthState::signed_in(response.user));
            Ok(())
        }
        Err(error) => {
            let _ = set_auth_state.try_update(|state| state.loading = false);
            Err(error)
        }
    }
}

pub async fn register_request(
    request: RegisterRequest,
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let response = repo.register(&request).await?;
    let _ = set_auth_state.try_set(AuthState::signed_in(response.user));
    Ok(())
}

pub fn logout(repo: &LoginRepository, set_auth_state: WriteSignal<AuthState>) {
    repo.logout();
    set_auth_state.set(AuthState::signed_out());
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let repo = LoginRepository::from_context();

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { login_request(payload, &repo, set_auth).await }
    })
}

pub fn use_register_action() -> Action<RegisterRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let repo = LoginRepository::from_context();

    create_action(move |request: &RegisterRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { register_request(payload, &repo, set_auth).await }
    })
}

pub fn use_logout() -> Callback<()> {
    let (_auth, set_auth) = use_auth();
    let repo = LoginRepository::from_context();
    Callback::new(move |_| logout(&repo, set_auth))
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::create_runtime;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    #[test]
    fn use_auth_returns_default_without_context() {
        with_runtime(|| {
            let (state, _set_state) = use_auth();
            let snapshot = state.get();
            assert!(!snapshot.is_authenticated);
            assert!(snapshot.user.is_none());
        });
    }

    #[test]
    fn provider_without_token_settles_signed_out() {
        with_runtime(|| {
            let (state, _) = create_auth_context();
            assert_eq!(state.get_untracked(), AuthState::signed_out());
        });
    }
}
