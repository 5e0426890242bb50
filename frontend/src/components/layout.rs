use crate::state::auth::{use_auth, use_logout};
use crate::utils::navigation::redirect_to;
use leptos::*;

const NAV_LINK_CLASS: &str =
    "text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover";

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let is_signed_in = move || auth.get().is_authenticated;
    let can_access_admin = move || auth.get().user.as_ref().is_some_and(|user| user.is_admin());
    let greeting = move || {
        auth.get()
            .user
            .map(|user| user.display_name)
            .unwrap_or_default()
    };
    let logout = use_logout();
    let on_logout = move |_| {
        logout.call(());
        redirect_to("/login");
    };

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href="/" class="text-xl font-semibold text-fg">"Reserve Mate"</a>
                    <nav class="flex items-center space-x-4">
                        <a href="/hotels" class=NAV_LINK_CLASS>"Hotels"</a>
                        <Show when=can_access_admin>
                            <a href="/admin/hotels" class=NAV_LINK_CLASS>"Manage hotels"</a>
                        </Show>
                        <Show
                            when=is_signed_in
                            fallback=|| view! { <a href="/login" class=NAV_LINK_CLASS>"Log In"</a> }
                        >
                            <span class="text-sm text-fg-muted">{greeting}</span>
                            <button type="button" class=NAV_LINK_CLASS on:click=on_logout>
                                "Log Out"
                            </button>
                        </Show>
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8" aria-label="loading">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4" role="alert">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4" role="status">
            <p class="text-sm">{message}</p>
        </div>
    }
}
