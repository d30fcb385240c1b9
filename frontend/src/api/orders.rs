use reqwest::Method;
use serde_json::Value;

use super::{
    client::{ApiClient, Scope},
    endpoints,
    types::{ApiError, OrderQuery},
};

impl ApiClient {
    pub async fn all_orders(&self, query: &OrderQuery) -> Result<Value, ApiError> {
        let builder = self
            .request(Method::GET, endpoints::ALL_ORDERS, Scope::Vendor)
            .await
            .query(query);
        self.send_json(builder).await
    }

    pub async fn current_orders(&self) -> Result<Value, ApiError> {
        let builder = self
            .request(Method::GET, endpoints::CURRENT_ORDERS, Scope::Vendor)
            .await;
        self.send_json(builder).await
    }

    pub async fn completed_orders(&self) -> Result<Value, ApiError> {
        let builder = self
            .request(Method::GET, endpoints::COMPLETED_ORDERS, Scope::Vendor)
            .await;
        self.send_json(builder).await
    }

    pub async fn order_details(&self, order_id: &str) -> Result<Value, ApiError> {
        let builder = self
            .request(Method::GET, endpoints::ORDER_DETAILS, Scope::Vendor)
            .await
            .query(&[("order_id", order_id)]);
        self.send_json(builder).await
    }
}
