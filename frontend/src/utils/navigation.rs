use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

// Characters that would change the meaning of a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub fn encode_segment(raw: &str) -> String {
    utf8_percent_encode(raw, SEGMENT).to_string()
}

pub fn hotel_detail_path(id: &str) -> String {
    format!("/hotels/{}", encode_segment(id))
}

pub fn hotel_reviews_path(id: &str) -> String {
    format!("/hotels/{}/reviews", encode_segment(id))
}

/// Full-page navigation.
#[cfg(target_arch = "wasm32")]
pub fn redirect_to(path: &str) {
    if let Ok(window) = super::storage::window() {
        let _ = window.location().set_href(path);
    }
}

/// Outside the browser there is nothing to navigate.
#[cfg(not(target_arch = "wasm32"))]
pub fn redirect_to(path: &str) {
    log::debug!("redirect to {} skipped outside the browser", path);
}

#[cfg(target_arch = "wasm32")]
pub fn redirect_after(path: &'static str, delay_ms: u32) {
    gloo_timers::callback::Timeout::new(delay_ms, move || redirect_to(path)).forget();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn redirect_after(path: &'static str, delay_ms: u32) {
    log::debug!("redirect to {} after {}ms skipped outside the browser", path, delay_ms);
}

/// Sends the viewer to `/login` unless they are already there.
#[cfg(target_arch = "wasm32")]
pub fn redirect_to_login() {
    if let Ok(window) = super::storage::window() {
        let location = window.location();
        if location.pathname().is_ok_and(|path| path == "/login") {
            return;
        }
        let _ = location.set_href("/login");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn redirect_to_login() {
    redirect_to("/login");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_encode_ids_as_single_segments() {
        assert_eq!(hotel_detail_path("abc123"), "/hotels/abc123");
        assert_eq!(hotel_reviews_path("a/b c"), "/hotels/a%2Fb%20c/reviews");
    }
}
