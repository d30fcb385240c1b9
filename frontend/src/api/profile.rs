use reqwest::{
    multipart::{Form, Part},
    Method,
};

use super::{
    client::{ApiClient, Scope},
    endpoints,
    types::{
        AnnouncementRequest, ApiError, BasicInfoUpdate, BusinessSetupRequest, MessageResponse,
        ProfileUpdateRequest, Upload, VendorProfile, LANG_CODES,
    },
};

fn upload_part(upload: &Upload) -> Result<Part, ApiError> {
    Part::bytes(upload.bytes.clone())
        .file_name(upload.file_name.clone())
        .mime_str(&upload.mime_type)
        .map_err(|err| ApiError::validation(format!("Unsupported file type: {}", err)))
}

/// `name[]`, `address[]` and `lang[]` in [`LANG_CODES`] order, then contact
/// and the optional logo (`image`) and cover (`photo`).
pub(crate) fn basic_info_form(update: &BasicInfoUpdate) -> Result<Form, ApiError> {
    let mut form = Form::new();
    for name in &update.names {
        form = form.text("name[]", name.clone());
    }
    for address in &update.addresses {
        form = form.text("address[]", address.clone());
    }
    for code in LANG_CODES {
        form = form.text("lang[]", code);
    }
    form = form.text("contact", update.contact.clone());
    if let Some(logo) = &update.logo {
        form = form.part("image", upload_part(logo)?);
    }
    if let Some(cover) = &update.cover {
        form = form.part("photo", upload_part(cover)?);
    }
    Ok(form)
}

impl ApiClient {
    pub async fn get_profile(&self) -> Result<VendorProfile, ApiError> {
        let builder = self
            .request(Method::GET, endpoints::PROFILE, Scope::Vendor)
            .await;
        self.send_json(builder).await
    }

    pub async fn update_profile(
        &self,
        request: &ProfileUpdateRequest,
    ) -> Result<MessageResponse, ApiError> {
        let builder = self
            .request(Method::PUT, endpoints::UPDATE_PROFILE, Scope::Vendor)
            .await
            .json(request);
        self.send_json(builder).await
    }

    pub async fn update_basic_info(
        &self,
        update: &BasicInfoUpdate,
    ) -> Result<MessageResponse, ApiError> {
        let form = basic_info_form(update)?;
        let builder = self
            .request(Method::POST, endpoints::UPDATE_BASIC_INFO, Scope::Vendor)
            .await
            .multipart(form);
        self.send_json(builder).await
    }

    pub async fn update_business_setup(
        &self,
        request: &BusinessSetupRequest,
    ) -> Result<MessageResponse, ApiError> {
        let builder = self
            .request(Method::POST, endpoints::UPDATE_BUSINESS_SETUP, Scope::Vendor)
            .await
            .json(request);
        self.send_json(builder).await
    }

    pub async fn update_announcement(
        &self,
        request: &AnnouncementRequest,
    ) -> Result<MessageResponse, ApiError> {
        let builder = self
            .request(Method::POST, endpoints::UPDATE_ANNOUNCEMENT, Scope::Vendor)
            .await
            .json(request);
        self.send_json(builder).await
    }
}
