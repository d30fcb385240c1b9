use crate::api::{ApiClient, ApiError, BusinessSetupRequest, MessageResponse, RestaurantRecord};
use crate::pages::restaurant_profile::repository::load_restaurant;

/// The stored setup rides on the restaurant record of the vendor profile.
pub async fn load_setup(api: ApiClient) -> Result<RestaurantRecord, ApiError> {
    load_restaurant(api).await
}

pub async fn save_setup(
    api: ApiClient,
    request: BusinessSetupRequest,
) -> Result<MessageResponse, ApiError> {
    api.update_business_setup(&request).await
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::signed_in_store;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn save_setup_posts_the_configuration() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/v1/vendor/update-business-setup")
                    .header("vendortype", "owner")
                    .body_contains("\"minimum_delivery_charge\":5.0")
                    .body_contains("\"halal_tag_status\":true");
                then.status(200).json_body(json!({ "message": "ok" }));
            })
            .await;

        let api = ApiClient::new_with_base_url(server.base_url()).with_storage(signed_in_store());
        let request = BusinessSetupRequest {
            minimum_delivery_charge: Some(5.0),
            halal_tag_status: true,
            ..Default::default()
        };
        save_setup(api, request).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn load_setup_reads_the_restaurant_setup() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/v1/vendor/profile")
                    .header("authorization", "Bearer tok-test");
                then.status(200).json_body(json!({
                    "email": "owner@example.com",
                    "restaurants": [{
                        "name": "Zohorain",
                        "schedule_order": 0,
                        "gst_status": "1",
                        "tags": ["bakery"]
                    }]
                }));
            })
            .await;

        let api = ApiClient::new_with_base_url(server.base_url()).with_storage(signed_in_store());
        let record = load_setup(api).await.unwrap();
        mock.assert_async().await;
        assert_eq!(record.name.as_deref(), Some("Zohorain"));
        assert_eq!(crate::api::json_flag(&record.setup.schedule_order), Some(false));
        assert_eq!(crate::api::json_flag(&record.setup.gst_status), Some(true));
        assert_eq!(record.setup.tags, vec!["bakery".to_string()]);
    }
}
