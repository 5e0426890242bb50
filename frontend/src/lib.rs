pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

/// Browser entry point: logging, runtime config, then the app.
#[cfg(target_arch = "wasm32")]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"logger already initialised".into());
    }
    log::info!("starting Reserve Mate frontend");

    leptos::spawn_local(async move {
        config::init().await;
        log::debug!("runtime config initialised");
    });

    router::mount_app();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn start() {
    log::warn!("the Reserve Mate frontend only runs in the browser");
}
