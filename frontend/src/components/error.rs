use crate::api::ApiError;
use leptos::*;

/// Error banner for form submissions; lists validation details when the
/// server sent them.
#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    let details = move || {
        error
            .get()
            .and_then(|e| e.details)
            .and_then(|details| details.get("errors").and_then(|v| v.as_array()).cloned())
            .unwrap_or_default()
    };

    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2" role="alert">
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                <Show when=move || !details().is_empty()>
                    <ul class="list-disc list-inside text-sm">
                        {move || {
                            details()
                                .into_iter()
                                .map(|item| {
                                    let text = item.as_str().unwrap_or_default().to_string();
                                    view! { <li>{text}</li> }
                                })
                                .collect_view()
                        }}
                    </ul>
                </Show>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    #[test]
    fn inline_error_renders_validation_details() {
        let html = render_to_string(move || {
            let error = ApiError {
                error: "Validation failed".into(),
                code: "VALIDATION_ERROR".into(),
                details: Some(json!({
                    "errors": ["password: weak_password", "email: email"]
                })),
            };
            let signal = create_rw_signal(Some(error));
            view! { <InlineErrorMessage error=signal /> }
        });
        assert!(html.contains("Validation failed"));
        assert!(html.contains("password: weak_password"));
    }

    #[test]
    fn inline_error_hidden_without_error() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(None::<ApiError>);
            view! { <InlineErrorMessage error=signal /> }
        });
        assert!(!html.contains("role=\"alert\""));
    }
}
