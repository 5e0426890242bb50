use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
mod globals {
    use super::RuntimeConfig;
    use wasm_bindgen::JsValue;

    const ENV_GLOBAL: &str = "__RESERVE_MATE_ENV";
    const CONFIG_GLOBAL: &str = "__RESERVE_MATE_CONFIG";

    fn read_global(name: &str, keys: [&str; 2]) -> Option<String> {
        let window = web_sys::window()?;
        let any = js_sys::Reflect::get(&window, &name.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        let obj = js_sys::Object::from(any);
        keys.iter()
            .filter_map(|key| js_sys::Reflect::get(&obj, &(*key).into()).ok())
            .find(|value| !value.is_undefined() && !value.is_null())
            .and_then(|value| value.as_string())
    }

    /// `window.__RESERVE_MATE_ENV` (env.js) wins over `window.__RESERVE_MATE_CONFIG`.
    pub fn snapshot() -> Option<String> {
        read_global(ENV_GLOBAL, ["API_BASE_URL", "api_base_url"])
            .or_else(|| read_global(CONFIG_GLOBAL, ["api_base_url", "API_BASE_URL"]))
    }

    pub fn write_config(cfg: &RuntimeConfig) {
        let (Some(url), Some(window)) = (&cfg.api_base_url, web_sys::window()) else {
            return;
        };
        let obj = js_sys::Object::new();
        let _ = js_sys::Reflect::set(&obj, &"api_base_url".into(), &JsValue::from_str(url));
        let _ = js_sys::Reflect::set(&window, &CONFIG_GLOBAL.into(), &obj);
    }

    pub fn config_url() -> Option<String> {
        let href = web_sys::window()?.location().href().ok()?;
        reqwest::Url::parse(&href)
            .ok()?
            .join("./config.json")
            .ok()
            .map(|url| url.to_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod globals {
    use super::RuntimeConfig;

    pub fn snapshot() -> Option<String> {
        None
    }

    pub fn write_config(_cfg: &RuntimeConfig) {}

    pub fn config_url() -> Option<String> {
        None
    }
}

fn cache_base_url(value: &str) -> String {
    let value = value.trim_end_matches('/').to_string();
    let _ = API_BASE_URL.set(value.clone());
    value
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let url = globals::config_url()?;
    let resp = reqwest::get(url).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = globals::snapshot() {
        return cache_base_url(&existing);
    }
    if let Some(cfg) = fetch_runtime_config().await {
        globals::write_config(&cfg);
        if let Some(url) = cfg.api_base_url {
            return cache_base_url(&url);
        }
    }
    log::info!("using default API base URL {}", DEFAULT_API_BASE_URL);
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let base = await_api_base_url().await;
    log::debug!("API base URL resolved to {}", base);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_config_accepts_missing_url() {
        let cfg: RuntimeConfig = serde_json::from_str("{}").unwrap();
        assert!(cfg.api_base_url.is_none());
        let cfg: RuntimeConfig =
            serde_json::from_str(r#"{"api_base_url":"https://api.example/api"}"#).unwrap();
        assert_eq!(cfg.api_base_url.as_deref(), Some("https://api.example/api"));
    }
}
