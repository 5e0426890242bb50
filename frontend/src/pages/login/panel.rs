use crate::pages::login::{components::form::LoginForm, view_model::use_login_view_model};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();

    view! {
        <Title text="Log In | Reserve Mate" />
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4">
            <div class="max-w-md w-full space-y-8">
                <a href="/" class="block text-center text-3xl font-extrabold text-fg">"Reserve Mate"</a>
                <LoginForm vm=vm />
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::login::view_model::LoginNotice;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_fields_and_sign_up_link() {
        let html = render_to_string(|| view! { <LoginPanel /> });
        assert!(html.contains("Email"));
        assert!(html.contains("type=\"password\""));
        assert!(html.contains("Log In"));
        assert!(html.contains("href=\"/register\""));
    }

    #[test]
    fn failure_notice_is_rendered() {
        let html = render_to_string(|| {
            let vm = use_login_view_model();
            vm.notice.set(Some(LoginNotice::Failure));
            view! { <LoginForm vm=vm /> }
        });
        assert!(html.contains("Login failed. Please check your credentials."));
    }

    #[test]
    fn field_errors_are_rendered() {
        let html = render_to_string(|| {
            let vm = use_login_view_model();
            vm.form.email.set("nope".into());
            vm.submit();
            view! { <LoginForm vm=vm /> }
        });
        assert!(html.contains("Invalid email address!"));
        assert!(html.contains("You must specify a password!"));
    }
}
