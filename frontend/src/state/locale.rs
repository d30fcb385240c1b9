use crate::utils::storage::{default_store, SharedStore, LANGUAGE_KEY};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "en" => Some(Language::En),
            "ar" => Some(Language::Ar),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }

    pub fn dir(self) -> &'static str {
        match self {
            Language::En => "ltr",
            Language::Ar => "rtl",
        }
    }

    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ar => "العربية",
        }
    }
}

pub fn stored_language(storage: &SharedStore) -> Language {
    storage
        .get(LANGUAGE_KEY)
        .and_then(|code| Language::from_code(&code))
        .unwrap_or_default()
}

#[derive(Clone)]
pub struct LocaleState {
    language: RwSignal<Language>,
    storage: SharedStore,
}

impl LocaleState {
    pub fn new(storage: SharedStore) -> Self {
        let language = create_rw_signal(stored_language(&storage));
        Self { language, storage }
    }

    pub fn language(&self) -> Signal<Language> {
        self.language.into()
    }

    /// Persists the other language. The page reloads so every string picks
    /// up the new locale.
    pub fn toggle(&self) {
        let next = self.language.get_untracked().toggled();
        if let Err(err) = self.storage.set(LANGUAGE_KEY, next.code()) {
            log::warn!("failed to persist language: {}", err);
            return;
        }
        self.language.set(next);
        reload_page();
    }
}

#[cfg(target_arch = "wasm32")]
fn reload_page() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn reload_page() {}

pub fn provide_locale(state: LocaleState) {
    provide_context(state);
}

pub fn use_locale() -> LocaleState {
    use_context::<LocaleState>().unwrap_or_else(|| LocaleState::new(default_store()))
}
