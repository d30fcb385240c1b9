#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::ApiClient;
    use crate::state::session::{provide_session, SessionStore};
    use crate::utils::storage::{MemoryStore, SharedStore, TOKEN_KEY, USER_KEY};
    use leptos::*;
    use std::rc::Rc;

    pub const OWNER_EMAIL: &str = "owner@example.com";

    pub fn signed_in_store() -> SharedStore {
        Rc::new(MemoryStore::with_entries([
            (TOKEN_KEY, "tok-test"),
            (USER_KEY, r#"{"email":"owner@example.com","token":"tok-test"}"#),
        ]))
    }

    /// Provides a session restored from `storage` and an API client that
    /// reads its token from the same store.
    pub fn provide_session_with(storage: SharedStore) -> SessionStore {
        let store = SessionStore::restore(storage.clone());
        provide_session(store.clone());
        provide_context(ApiClient::new_with_base_url("http://127.0.0.1:9").with_storage(storage));
        store
    }

    pub fn provide_api(base_url: impl Into<String>, storage: SharedStore) -> ApiClient {
        let api = ApiClient::new_with_base_url(base_url).with_storage(storage);
        provide_context(api.clone());
        api
    }
}
