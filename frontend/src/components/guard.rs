//! Session guard for pages that need a signed-in viewer.
//!
//! The guard only checks that a token is stored. Whether the token is still
//! valid is the server's call; a 401 from any API call clears it.

use crate::{
    components::layout::LoadingSpinner,
    state::{auth::use_auth, auth::AuthState, session::use_session_store},
    utils::navigation::redirect_to,
};
use leptos::*;

pub const LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Redirect(&'static str),
    Pending,
    MustAuthenticate,
    Forbidden,
    Allow,
}

pub fn guard_decision(token_present: bool, auth: &AuthState) -> GuardDecision {
    if !token_present {
        GuardDecision::Redirect(LOGIN_PATH)
    } else if auth.loading {
        GuardDecision::Pending
    } else if auth.user.is_none() {
        GuardDecision::MustAuthenticate
    } else {
        GuardDecision::Allow
    }
}

pub fn admin_guard_decision(token_present: bool, auth: &AuthState) -> GuardDecision {
    match guard_decision(token_present, auth) {
        GuardDecision::Allow if !auth.user.as_ref().is_some_and(|user| user.is_admin()) => {
            GuardDecision::Forbidden
        }
        decision => decision,
    }
}

fn guarded_view(decide: fn(bool, &AuthState) -> GuardDecision, children: ChildrenFn) -> View {
    let (auth, _) = use_auth();
    // Read once per mount.
    let token_present = use_session_store().has_token();
    let decision = create_memo(move |_| decide(token_present, &auth.get()));

    create_effect(move |_| {
        if let GuardDecision::Redirect(path) = decision.get() {
            redirect_to(path);
        }
    });

    (move || match decision.get() {
        GuardDecision::Allow => children().into_view(),
        GuardDecision::Pending => view! { <LoadingSpinner /> }.into_view(),
        GuardDecision::MustAuthenticate => view! { <AuthRequired /> }.into_view(),
        GuardDecision::Forbidden => view! { <AdminOnly /> }.into_view(),
        GuardDecision::Redirect(_) => ().into_view(),
    })
    .into_view()
}

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    guarded_view(guard_decision, children)
}

#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    guarded_view(admin_guard_decision, children)
}

#[component]
pub fn AuthRequired() -> impl IntoView {
    view! {
        <div class="max-w-md mx-auto mt-16 text-center space-y-4">
            <h2 class="text-2xl font-semibold text-fg">"Authentication required"</h2>
            <p class="text-fg-muted">"Please log in or create an account to continue."</p>
            <div class="flex justify-center gap-4">
                <a href="/login" class="primary-btn">"Log In"</a>
                <a href="/register" class="primary-btn">"Sign Up"</a>
            </div>
        </div>
    }
}

#[component]
fn AdminOnly() -> impl IntoView {
    view! {
        <div class="max-w-md mx-auto mt-16 text-center space-y-2">
            <h2 class="text-2xl font-semibold text-fg">"Forbidden"</h2>
            <p class="text-fg-muted">"Only administrators can manage hotels."</p>
        </div>
    }
}
