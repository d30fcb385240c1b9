use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "https://test-api.pro-manager.net/zohorain-v1";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> Option<String> {
    // Optional global object: window.__DASHBOARD_ENV = { API_BASE_URL: "..." }
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &"__DASHBOARD_ENV".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    js_sys::Reflect::get(&obj, &"API_BASE_URL".into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .or_else(|| js_sys::Reflect::get(&obj, &"api_base_url".into()).ok())
        .and_then(|v| v.as_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn snapshot_from_globals() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
fn config_json_url() -> anyhow::Result<reqwest::Url> {
    let href = web_sys::window()
        .ok_or_else(|| anyhow::anyhow!("no global window"))?
        .location()
        .href()
        .map_err(|_| anyhow::anyhow!("location.href unavailable"))?;
    Ok(reqwest::Url::parse(&href)?.join("/config.json")?)
}

#[cfg(not(target_arch = "wasm32"))]
fn config_json_url() -> anyhow::Result<reqwest::Url> {
    anyhow::bail!("config.json is only served to the browser build")
}

async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
    let response = reqwest::get(config_json_url()?).await?;
    anyhow::ensure!(
        response.status().is_success(),
        "config.json returned {}",
        response.status()
    );
    Ok(response.json::<RuntimeConfig>().await?)
}

fn cache_base_url(value: &str) -> String {
    let _ = API_BASE_URL.set(value.to_string());
    API_BASE_URL.get().cloned().unwrap_or_else(|| value.to_string())
}

/// Resolves the API base URL once: `window.__DASHBOARD_ENV`, then
/// `config.json`, then the built-in default.
pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals().as_deref().and_then(normalize_base_url) {
        return cache_base_url(&existing);
    }
    match fetch_runtime_config().await {
        Ok(cfg) => {
            if let Some(url) = cfg.api_base_url.as_deref().and_then(normalize_base_url) {
                return cache_base_url(&url);
            }
        }
        Err(err) => log::debug!("runtime config unavailable: {err:#}"),
    }
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let url = await_api_base_url().await;
    log::info!("API base URL: {}", url);
}
