use crate::{
    components::{
        common::Button,
        layout::{ErrorMessage, SuccessMessage},
    },
    pages::login::view_model::{LoginNotice, LoginViewModel},
};
use leptos::{ev::SubmitEvent, *};

const INPUT_CLASS: &str =
    "appearance-none block w-full px-3 py-2 border border-border rounded-md shadow-sm focus:outline-none focus:ring-action-primary-bg sm:text-sm";

#[component]
fn FieldError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message
            .get()
            .map(|text| view! { <small class="text-status-error-text">{text}</small> })
    }
}

#[component]
pub fn LoginForm(vm: LoginViewModel) -> impl IntoView {
    let form = vm.form;
    let pending = vm.login_action.pending();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };
    let notice = move || {
        vm.notice.get().map(|notice| match notice {
            LoginNotice::Success => view! { <SuccessMessage message=notice.message() /> }.into_view(),
            LoginNotice::Failure => view! { <ErrorMessage message=notice.message() /> }.into_view(),
        })
    };

    view! {
        <form class="space-y-6" on:submit=on_submit novalidate>
            {notice}
            <div>
                <label for="email" class="block text-sm font-medium text-fg">"Email"</label>
                <input
                    id="email"
                    name="email"
                    type="email"
                    required
                    class=INPUT_CLASS
                    prop:value=move || form.email.get()
                    on:input=move |ev| form.email.set(event_target_value(&ev))
                />
                <FieldError message=Signal::derive(move || form.errors.get().email) />
            </div>
            <div>
                <label for="password" class="block text-sm font-medium text-fg">"Password"</label>
                <input
                    id="password"
                    name="password"
                    type="password"
                    required
                    class=INPUT_CLASS
                    prop:value=move || form.password.get()
                    on:input=move |ev| form.password.set(event_target_value(&ev))
                />
                <FieldError message=Signal::derive(move || form.errors.get().password) />
            </div>
            <div class="flex items-center gap-4">
                <Button
                    attr:type="submit"
                    disabled=Signal::derive(move || !form.is_complete())
                    loading=pending
                >
                    {move || if pending.get() { "Logging in..." } else { "Log In" }}
                </Button>
                <a href="/register" class="text-brand">"Sign Up"</a>
            </div>
        </form>
    }
}
