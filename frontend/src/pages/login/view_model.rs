use super::utils::{FieldErrors, LOGIN_FAILURE, LOGIN_SUCCESS, REDIRECT_DELAY_MS};
use crate::{
    api::{ApiError, LoginRequest},
    state::auth,
    utils::navigation::redirect_after,
};
use leptos::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginNotice {
    Success,
    Failure,
}

impl LoginNotice {
    pub fn from_result(result: &Result<(), ApiError>) -> Self {
        match result {
            Ok(()) => LoginNotice::Success,
            Err(err) => {
                log::error!("login failed: {}", err);
                LoginNotice::Failure
            }
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            LoginNotice::Success => LOGIN_SUCCESS,
            LoginNotice::Failure => LOGIN_FAILURE,
        }
    }
}

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub errors: RwSignal<FieldErrors>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            errors: create_rw_signal(FieldErrors::default()),
        }
    }
}

impl LoginFormState {
    /// Re-checks both fields; returns the request when they pass.
    pub fn validate(&self) -> Option<LoginRequest> {
        let email = self.email.get_untracked();
        let password = self.password.get_untracked();
        let errors = FieldErrors::check(&email, &password);
        let clear = errors.is_clear();
        self.errors.set(errors);
        clear.then(|| LoginRequest {
            email: email.trim().to_string(),
            password,
        })
    }

    pub fn is_complete(&self) -> bool {
        FieldErrors::check(&self.email.get(), &self.password.get()).is_clear()
    }
}

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub notice: RwSignal<Option<LoginNotice>>,
    pub login_action: Action<LoginRequest, Result<(), ApiError>>,
}

impl LoginViewModel {
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        if let Some(request) = self.form.validate() {
            self.notice.set(None);
            self.login_action.dispatch(request);
        }
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let form = LoginFormState::default();
    let notice = create_rw_signal(None::<LoginNotice>);
    let login_action = auth::use_login_action();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            let next = LoginNotice::from_result(&result);
            if next == LoginNotice::Success {
                redirect_after("/", REDIRECT_DELAY_MS);
            }
            notice.set(Some(next));
        }
    });

    LoginViewModel {
        form,
        notice,
        login_action,
    }
}
