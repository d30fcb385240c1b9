use reqwest::Method;

use super::{
    client::{ApiClient, Scope},
    endpoints,
    types::{
        ApiError, ForgotPasswordRequest, LoginRequest, LoginResponse, MessageResponse,
        ResetPasswordRequest, VerifyTokenRequest,
    },
};

impl ApiClient {
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let builder = self
            .request(Method::POST, endpoints::LOGIN, Scope::Public)
            .await
            .json(request);
        self.send_json(builder).await
    }

    pub async fn forgot_password(
        &self,
        request: &ForgotPasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        let builder = self
            .request(Method::POST, endpoints::FORGOT_PASSWORD, Scope::Public)
            .await
            .json(request);
        self.send_json(builder).await
    }

    pub async fn verify_token(
        &self,
        request: &VerifyTokenRequest,
    ) -> Result<MessageResponse, ApiError> {
        let builder = self
            .request(Method::POST, endpoints::VERIFY_TOKEN, Scope::Public)
            .await
            .json(request);
        self.send_json(builder).await
    }

    pub async fn reset_password(
        &self,
        request: &ResetPasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        let builder = self
            .request(Method::POST, endpoints::RESET_PASSWORD, Scope::Public)
            .await
            .json(request);
        self.send_json(builder).await
    }

    pub async fn get_config(&self) -> Result<serde_json::Value, ApiError> {
        let builder = self
            .request(Method::GET, endpoints::CONFIG, Scope::Public)
            .await;
        self.send_json(builder).await
    }
}
