use crate::{
    api::{ApiClient, ApiError, LoginRequest},
    utils::storage::{default_store, SharedStore, TOKEN_KEY, USER_KEY},
};
use leptos::*;
use serde::{Deserialize, Serialize};

/// Persisted under `user` as `{ "email": ..., "token": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "email", default, skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    pub token: String,
}

#[derive(Clone)]
pub struct SessionStore {
    session: RwSignal<Option<Session>>,
    storage: SharedStore,
}

impl SessionStore {
    /// Rebuilds the session from durable storage. A missing token or an
    /// unreadable `user` entry yields no session.
    pub fn restore(storage: SharedStore) -> Self {
        let session = read_session(&storage);
        Self {
            session: create_rw_signal(session),
            storage,
        }
    }

    pub fn storage(&self) -> SharedStore {
        self.storage.clone()
    }

    pub fn current_session(&self) -> Option<Session> {
        self.session.get_untracked()
    }

    pub fn session(&self) -> Signal<Option<Session>> {
        self.session.into()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(Option::is_some)
    }

    pub async fn login(&self, api: &ApiClient, request: LoginRequest) -> Result<Session, ApiError> {
        let response = api.login(&request).await?;
        let session = Session {
            user_email: response.vendor.and_then(|vendor| vendor.email),
            token: response.token,
        };
        self.persist(&session)?;
        self.session.set(Some(session.clone()));
        log::info!("vendor signed in");
        Ok(session)
    }

    pub fn logout(&self) {
        for key in [USER_KEY, TOKEN_KEY] {
            if let Err(err) = self.storage.remove(key) {
                log::warn!("failed to clear {}: {}", key, err);
            }
        }
        self.session.set(None);
    }

    fn persist(&self, session: &Session) -> Result<(), ApiError> {
        let user = serde_json::to_string(session)
            .map_err(|err| ApiError::unknown(format!("Failed to store session: {}", err)))?;
        self.storage
            .set(TOKEN_KEY, &session.token)
            .and_then(|_| self.storage.set(USER_KEY, &user))
            .map_err(ApiError::unknown)
    }
}

fn read_session(storage: &SharedStore) -> Option<Session> {
    let token = storage.get(TOKEN_KEY).filter(|t| !t.trim().is_empty())?;
    let raw = storage.get(USER_KEY)?;
    match serde_json::from_str::<Session>(&raw) {
        Ok(user) => Some(Session {
            user_email: user.user_email,
            token,
        }),
        Err(err) => {
            log::warn!("discarding unreadable stored user: {}", err);
            None
        }
    }
}

pub fn provide_session(store: SessionStore) {
    provide_context(store);
}

pub fn use_session() -> SessionStore {
    use_context::<SessionStore>().unwrap_or_else(|| SessionStore::restore(default_store()))
}
