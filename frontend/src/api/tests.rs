#![cfg(not(coverage))]

use super::*;
use crate::utils::storage::{KeyValueStore, MemoryStore, TOKEN_KEY};
use httpmock::prelude::*;
use serde_json::json;
use std::rc::Rc;

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.base_url())
}

fn authed_client_for(server: &MockServer, token: &str) -> ApiClient {
    let storage = Rc::new(MemoryStore::default());
    storage.set(TOKEN_KEY, token).unwrap();
    client_for(server).with_storage(storage)
}

#[tokio::test]
async fn login_posts_credentials_and_parses_token() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v1/auth/vendor/login")
                .header("accept", "application/json")
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

    let response = client_for(&server)
        .login(&LoginRequest {
            email: "owner@example.com".into(),
            password: "secret1".into(),
            vendor_type: "owner".into(),
        })
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.token, "tok-1");
    assert_eq!(
        response.vendor.and_then(|v| v.email).as_deref(),
        Some("owner@example.com")
    );
}

#[tokio::test]
async fn rejected_login_surfaces_server_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v1/auth/vendor/login");
            then.status(401)
                .json_body(json!({ "errors": [{ "code": "auth-001", "message": "Credential does not match." }] }));
        })
        .await;

    let err = client_for(&server)
        .login(&LoginRequest {
            email: "owner@example.com".into(),
            password: "wrong-pass".into(),
            vendor_type: "owner".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.code, "SERVER_ERROR");
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.error, "Credential does not match.");
}

#[tokio::test]
async fn rejection_without_body_leaves_message_to_caller() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v1/auth/vendor/forgot-password");
            then.status(404);
        })
        .await;

    let err = client_for(&server)
        .forgot_password(&ForgotPasswordRequest {
            email: "missing@example.com".into(),
            vendor_type: "restaurant".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(
        err.message_or("Email does not exist or is not registered."),
        "Email does not exist or is not registered."
    );
}

#[tokio::test]
async fn vendor_calls_carry_bearer_and_vendor_type() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/vendor/profile")
                .header("authorization", "Bearer tok-9")
                .header("vendortype", "owner");
            then.status(200).json_body(json!({
                "f_name": "Sara",
                "l_name": "Khan",
                "email": "sara@example.com",
                "restaurants": [{ "name": "Zohorain Grill", "phone": "+966500000000" }]
            }));
        })
        .await;

    let profile = authed_client_for(&server, "tok-9").get_profile().await.unwrap();

    mock.assert_async().await;
    assert_eq!(profile.initials(), "SK");
    assert_eq!(
        profile.primary_restaurant().and_then(|r| r.name.clone()).as_deref(),
        Some("Zohorain Grill")
    );
}

#[tokio::test]
async fn update_profile_uses_put_with_json_body() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/api/v1/vendor/update-profile")
                .json_body(json!({
                    "f_name": "Sara",
                    "l_name": "Khan",
                    "phone": "+966512345678",
                    "email": "sara@example.com"
                }));
            then.status(200).json_body(json!({ "message": "updated" }));
        })
        .await;

    let response = authed_client_for(&server, "tok")
        .update_profile(&ProfileUpdateRequest {
            f_name: Some("Sara".into()),
            l_name: Some("Khan".into()),
            phone: Some("+966512345678".into()),
            email: Some("sara@example.com".into()),
            password: None,
        })
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.message.as_deref(), Some("updated"));
}

#[tokio::test]
async fn update_basic_info_sends_localized_multipart_fields() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v1/vendor/update-basic-info")
                .body_contains("name=\"name[]\"")
                .body_contains("Grill House Default")
                .body_contains("name=\"lang[]\"")
                .body_contains("name=\"contact\"")
                .body_contains("filename=\"logo.png\"");
            then.status(200).json_body(json!({ "message": "ok" }));
        })
        .await;

    let update = BasicInfoUpdate {
        names: [
            "Grill House Default".into(),
            "Grill House English".into(),
            "Grill House Arabic".into(),
        ],
        addresses: ["Street 1".into(), "Street 1".into(), "Street 1".into()],
        contact: "+966500000000".into(),
        logo: Some(Upload {
            file_name: "logo.png".into(),
            mime_type: "image/png".into(),
            bytes: vec![137, 80, 78, 71],
        }),
        cover: None,
    };
    authed_client_for(&server, "tok")
        .update_basic_info(&update)
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn order_details_passes_order_id_query() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/vendor/order-details")
                .query_param("order_id", "100042");
            then.status(200).json_body(json!({ "id": 100042 }));
        })
        .await;

    let details = authed_client_for(&server, "tok")
        .order_details("100042")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(details["id"], json!(100042));
}

#[tokio::test]
async fn update_product_appends_id_to_path() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v1/vendor/product/update/7");
            then.status(200).json_body(json!({ "message": "saved" }));
        })
        .await;

    let body = json!({ "name": "Shawarma" });
    authed_client_for(&server, "tok")
        .update_product("7", &body)
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn undecodable_success_body_is_parse_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/vendor/profile");
            then.status(200).body("<html>maintenance</html>");
        })
        .await;

    let err = authed_client_for(&server, "tok")
        .get_profile()
        .await
        .unwrap_err();
    assert_eq!(err.code, "PARSE_ERROR");
}

#[tokio::test]
async fn unreachable_server_is_network_error() {
    let err = ApiClient::new_with_base_url("http://127.0.0.1:9")
        .current_orders()
        .await
        .unwrap_err();
    assert_eq!(err.code, "REQUEST_FAILED");
    assert_eq!(err.error, NETWORK_ERROR_MESSAGE);
}
