use crate::api::{ApiClient, ApiError, MessageResponse, ProfileUpdateRequest, VendorProfile};

pub async fn load_profile(api: ApiClient) -> Result<VendorProfile, ApiError> {
    api.get_profile().await
}

pub async fn update_profile(
    api: ApiClient,
    request: ProfileUpdateRequest,
) -> Result<MessageResponse, ApiError> {
    api.update_profile(&request).await
}

/// The password tab reuses `update-profile` with only the new password.
pub async fn update_password(
    api: ApiClient,
    new_password: String,
) -> Result<MessageResponse, ApiError> {
    let request = ProfileUpdateRequest {
        password: Some(new_password),
        ..Default::default()
    };
    api.update_profile(&request).await
}
