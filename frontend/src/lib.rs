use wasm_bindgen::prelude::wasm_bindgen;

rust_i18n::i18n!("locales", fallback = "en");

pub mod api;
mod components;
pub mod config;
pub mod forms;
pub mod navigation;
mod pages;
pub mod router;
mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

/// Browser entry point: logging, locale, runtime config, then the app.
#[wasm_bindgen]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }

    let language = state::locale::stored_language(&utils::storage::default_store());
    rust_i18n::set_locale(language.code());
    log::info!("starting vendor dashboard ({})", language.code());

    leptos::spawn_local(async move {
        config::init().await;
        router::mount_app();
    });
}
