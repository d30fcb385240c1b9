use super::utils::NO_RESTAURANT;
use crate::api::{AnnouncementRequest, ApiClient, ApiError, MessageResponse, RestaurantRecord};

/// The vendor profile carries the restaurant; the first entry is the one shown.
pub async fn load_restaurant(api: ApiClient) -> Result<RestaurantRecord, ApiError> {
    let profile = api.get_profile().await?;
    profile
        .primary_restaurant()
        .cloned()
        .ok_or_else(|| ApiError::unknown(NO_RESTAURANT))
}

pub async fn publish_announcement(
    api: ApiClient,
    status: bool,
    message: String,
) -> Result<MessageResponse, ApiError> {
    let request = AnnouncementRequest {
        announcement_status: status,
        announcement_message: message.trim().to_string(),
    };
    api.update_announcement(&request).await
}
