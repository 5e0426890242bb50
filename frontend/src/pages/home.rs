use crate::components::layout::Layout;
use crate::state::auth::use_auth;
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn HomePage() -> impl IntoView {
    let (auth, _) = use_auth();
    let signed_in = move || auth.get().is_authenticated;

    view! {
        <Title text="Reserve Mate" />
        <Layout>
            <div class="text-center py-12">
                <h1 class="text-4xl font-extrabold text-fg sm:text-5xl">"Reserve Mate"</h1>
                <p class="mt-3 max-w-md mx-auto text-base text-fg-muted sm:text-lg">
                    "Find a place to stay and book it in minutes."
                </p>
                <div class="mt-8 flex justify-center gap-4">
                    <a href="/hotels" class="primary-btn">"Browse hotels"</a>
                    <Show when=move || !signed_in()>
                        <a href="/login" class="primary-btn">"Log In"</a>
                    </Show>
                </div>
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{provide_auth, regular_user};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn anonymous_visitors_get_a_login_link() {
        let html = render_to_string(|| {
            provide_auth(None);
            view! { <HomePage /> }
        });
        assert!(html.contains("Browse hotels"));
        assert!(html.contains("href=\"/login\""));
    }

    #[test]
    fn signed_in_visitors_see_their_name() {
        let html = render_to_string(|| {
            provide_auth(Some(regular_user()));
            view! { <HomePage /> }
        });
        assert!(html.contains("Regular User"));
    }
}
