use reqwest::{header, Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{
    endpoints::{VENDOR_TYPE_HEADER, VENDOR_TYPE_OWNER},
    types::{ApiError, NETWORK_ERROR_MESSAGE},
};
use crate::{
    config,
    utils::storage::{default_store, SharedStore, TOKEN_KEY},
};

/// Whether a call carries the `vendorType` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scope {
    Public,
    Vendor,
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    storage: SharedStore,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            storage: default_store(),
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            storage: default_store(),
        }
    }

    /// Reads the bearer token from `storage` instead of the default store.
    pub fn with_storage(mut self, storage: SharedStore) -> Self {
        self.storage = storage;
        self
    }

    pub fn storage(&self) -> SharedStore {
        self.storage.clone()
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.trim_end_matches('/').to_string()
        } else {
            config::await_api_base_url().await
        }
    }

    fn bearer_token(&self) -> Option<String> {
        self.storage
            .get(TOKEN_KEY)
            .filter(|token| !token.trim().is_empty())
    }

    pub(crate) async fn request(&self, method: Method, path: &str, scope: Scope) -> RequestBuilder {
        let url = format!("{}{}", self.resolved_base_url().await, path);
        let mut builder = self
            .client
            .request(method, url)
            .header(header::ACCEPT, "application/json");
        if let Some(token) = self.bearer_token() {
            builder = builder.bearer_auth(token);
        }
        if scope == Scope::Vendor {
            builder = builder.header(VENDOR_TYPE_HEADER, VENDOR_TYPE_OWNER);
        }
        builder
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = builder.send().await.map_err(|err| {
            log::warn!("request failed: {}", err);
            ApiError::request_failed(NETWORK_ERROR_MESSAGE)
        })?;
        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().await.map_err(|err| {
        log::warn!("failed to read response body: {}", err);
        ApiError::request_failed(NETWORK_ERROR_MESSAGE)
    })?;

    if !status.is_success() {
        let message = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|value| server_message(&value));
        log::debug!("server rejected request with {}", status);
        return Err(ApiError::server(status.as_u16(), message));
    }

    let body = if body.trim().is_empty() { "null" } else { body.as_str() };
    serde_json::from_str(body)
        .map_err(|err| ApiError::parse(format!("Failed to parse response: {}", err)))
}

/// `message`, or the first `errors[].message` the backend reports.
pub(crate) fn server_message(body: &Value) -> Option<String> {
    let direct = body
        .get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty());
    if let Some(message) = direct {
        return Some(message.to_string());
    }
    body.get("errors")
        .and_then(Value::as_array)
        .and_then(|errors| errors.first())
        .and_then(|first| first.get("message").or(Some(first)))
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::server_message;
    use serde_json::json;

    #[test]
    fn server_message_prefers_top_level_message() {
        let body = json!({ "message": "Invalid credentials", "errors": [{ "message": "x" }] });
        assert_eq!(server_message(&body).as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn server_message_falls_back_to_errors_array() {
        let body = json!({ "errors": [{ "code": "auth", "message": "Credential does not match" }] });
        assert_eq!(
            server_message(&body).as_deref(),
            Some("Credential does not match")
        );
        let plain = json!({ "errors": ["Email is taken"] });
        assert_eq!(server_message(&plain).as_deref(), Some("Email is taken"));
    }

    #[test]
    fn server_message_absent_when_body_has_none() {
        assert!(server_message(&json!({})).is_none());
        assert!(server_message(&json!({ "message": "  " })).is_none());
    }
}
