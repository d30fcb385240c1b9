use crate::api::{
    endpoints::{VENDOR_TYPE_OWNER, VENDOR_TYPE_RESTAURANT},
    ApiClient, ApiError, ForgotPasswordRequest, LoginRequest, MessageResponse,
};
use crate::state::session::{Session, SessionStore};

pub async fn login(
    session: SessionStore,
    api: ApiClient,
    email: String,
    password: String,
) -> Result<Session, ApiError> {
    let request = LoginRequest {
        email: email.trim().to_string(),
        password,
        vendor_type: VENDOR_TYPE_OWNER.to_string(),
    };
    session.login(&api, request).await
}

pub async fn forgot_password(api: ApiClient, email: String) -> Result<MessageResponse, ApiError> {
    let request = ForgotPasswordRequest {
        email: email.trim().to_string(),
        vendor_type: VENDOR_TYPE_RESTAURANT.to_string(),
    };
    api.forgot_password(&request).await
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::utils::storage::{KeyValueStore, MemoryStore, TOKEN_KEY};
    use httpmock::prelude::*;
    use leptos::create_runtime;
    use serde_json::json;
    use std::rc::Rc;

    #[tokio::test]
    async fn login_sends_owner_vendor_type() {
        let runtime = create_runtime();
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/v1/auth/vendor/login")
                    .json_body(json!({
                        "email": "owner@example.com",
                        "password": "secret1",
                        "vendor_type": "owner"
                    }));
                then.status(200).json_body(json!({
                    "token": "tok-1",
                    "vendor": { "email": "owner@example.com" }
                }));
            })
            .await;

        let storage = Rc::new(MemoryStore::default());
        let api = ApiClient::new_with_base_url(server.base_url()).with_storage(storage.clone());
        let session = SessionStore::restore(storage.clone());
        let result = login(session, api, " owner@example.com ".into(), "secret1".into())
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(result.user_email.as_deref(), Some("owner@example.com"));
        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("tok-1"));
        runtime.dispose();
    }

    #[tokio::test]
    async fn forgot_password_sends_restaurant_vendor_type() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/v1/auth/vendor/forgot-password")
                    .json_body(json!({ "email": "owner@example.com", "vendor_type": "restaurant" }));
                then.status(200).json_body(json!({ "message": "sent" }));
            })
            .await;

        let api = ApiClient::new_with_base_url(server.base_url())
            .with_storage(Rc::new(MemoryStore::default()));
        let response = forgot_password(api, "owner@example.com".into()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.message.as_deref(), Some("sent"));
    }

    #[tokio::test]
    async fn forgot_password_surfaces_unknown_email() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/v1/auth/vendor/forgot-password");
                then.status(404).json_body(json!({}));
            })
            .await;

        let api = ApiClient::new_with_base_url(server.base_url())
            .with_storage(Rc::new(MemoryStore::default()));
        let err = forgot_password(api, "ghost@example.com".into()).await.unwrap_err();

        assert_eq!(err.status(), Some(404));
        assert_eq!(
            err.message_or(crate::pages::login::utils::FORGOT_FAILED_MESSAGE),
            "Email does not exist or is not registered."
        );
    }
}
