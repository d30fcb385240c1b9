use crate::api::{ApiClient, ApiError, BasicInfoUpdate, MessageResponse};

pub use crate::pages::restaurant_profile::repository::load_restaurant;

pub async fn save_restaurant(
    api: ApiClient,
    update: BasicInfoUpdate,
) -> Result<MessageResponse, ApiError> {
    api.update_basic_info(&update).await
}
