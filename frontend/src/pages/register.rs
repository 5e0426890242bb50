use crate::{
    api::RegisterRequest,
    components::{
        common::Button,
        error::InlineErrorMessage,
        layout::{ErrorMessage, SuccessMessage},
    },
    pages::login::utils::{validate_email, validate_password, REDIRECT_DELAY_MS},
    state::auth::use_register_action,
    utils::navigation::redirect_after,
};
use leptos::{ev::SubmitEvent, *};
use leptos_meta::Title;

const INPUT_CLASS: &str = "block w-full px-3 py-2 border border-border rounded-md sm:text-sm";

pub fn validate_registration(request: &RegisterRequest) -> Result<(), String> {
    if request.display_name.trim().is_empty() {
        return Err("Display name is required!".into());
    }
    validate_email(&request.email)?;
    validate_password(&request.password)
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let display_name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let form_error = create_rw_signal(None::<String>);
    let registered = create_rw_signal(false);

    let action = use_register_action();
    let pending = action.pending();
    let api_error = Signal::derive(move || action.value().get().and_then(Result::err));

    create_effect(move |_| {
        if let Some(Ok(())) = action.value().get() {
            registered.set(true);
            redirect_after("/", REDIRECT_DELAY_MS);
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let request = RegisterRequest {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
            display_name: display_name.get_untracked().trim().to_string(),
        };
        match validate_registration(&request) {
            Ok(()) => {
                form_error.set(None);
                action.dispatch(request);
            }
            Err(message) => form_error.set(Some(message)),
        }
    };

    view! {
        <Title text="Sign Up | Reserve Mate" />
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4">
            <div class="max-w-md w-full space-y-6">
                <h1 class="text-center text-3xl font-extrabold text-fg">"Create your account"</h1>
                <Show when=move || registered.get()>
                    <SuccessMessage message="Account created!" />
                </Show>
                <Show when=move || form_error.get().is_some()>
                    <ErrorMessage message=form_error.get().unwrap_or_default() />
                </Show>
                <InlineErrorMessage error=api_error />
                <form class="space-y-4" on:submit=on_submit novalidate>
                    <label class="block text-sm font-medium text-fg">
                        "Display name"
                        <input
                            class=INPUT_CLASS
                            prop:value=move || display_name.get()
                            on:input=move |ev| display_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="block text-sm font-medium text-fg">
                        "Email"
                        <input
                            type="email"
                            class=INPUT_CLASS
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="block text-sm font-medium text-fg">
                        "Password"
                        <input
                            type="password"
                            class=INPUT_CLASS
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="flex items-center gap-4">
                        <Button attr:type="submit" loading=pending>
                            "Sign Up"
                        </Button>
                        <a href="/login" class="text-brand">"Already have an account? Log In"</a>
                    </div>
                </form>
            </div>
        </div>
    }
}
