use reqwest::Method;
use serde_json::Value;

use super::{
    client::{ApiClient, Scope},
    endpoints,
    types::ApiError,
};

impl ApiClient {
    pub async fn products(&self) -> Result<Value, ApiError> {
        let builder = self
            .request(Method::GET, endpoints::PRODUCT_LIST, Scope::Vendor)
            .await;
        self.send_json(builder).await
    }

    pub async fn add_product(&self, product: &Value) -> Result<Value, ApiError> {
        let builder = self
            .request(Method::POST, endpoints::ADD_PRODUCT, Scope::Vendor)
            .await
            .json(product);
        self.send_json(builder).await
    }

    pub async fn update_product(&self, product_id: &str, product: &Value) -> Result<Value, ApiError> {
        let path = format!("{}/{}", endpoints::UPDATE_PRODUCT, product_id);
        let builder = self
            .request(Method::POST, &path, Scope::Vendor)
            .await
            .json(product);
        self.send_json(builder).await
    }
}
