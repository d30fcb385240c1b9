use reqwest::Method;
use serde_json::Value;

use super::{
    client::{ApiClient, Scope},
    endpoints,
    types::ApiError,
};

impl ApiClient {
    pub async fn business_plans(&self) -> Result<Value, ApiError> {
        let builder = self
            .request(Method::GET, endpoints::BUSINESS_PLAN, Scope::Vendor)
            .await;
        self.send_json(builder).await
    }

    pub async fn packages(&self) -> Result<Value, ApiError> {
        let builder = self
            .request(Method::GET, endpoints::PACKAGES, Scope::Vendor)
            .await;
        self.send_json(builder).await
    }
}
