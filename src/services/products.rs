use std::sync::Arc;

use serde_json::{json, Value};
use tracing::info;

use crate::services::paypal_client::PayPalClient;
use crate::services::ApiError;
use crate::utils::defaults;
use crate::utils::response::handle_response;

/// Catalog Products v1 client. Products are not covered by the upstream
/// server SDKs, so everything here is a direct REST call.
pub struct ProductsApi {
    client: Arc<PayPalClient>,
}

impl ProductsApi {
    pub fn new(client: Arc<PayPalClient>) -> Self {
        Self { client }
    }

    pub async fn create_product(&self, product: Value) -> Result<Value, ApiError> {
        let access_token = self.client.access_token().await?;

        let response = self
            .client
            .http()
            .post(format!("{}/v1/catalogs/products", self.client.base_url()))
            .bearer_auth(access_token)
            .header("Accept", "application/json")
            .header("PayPal-Request-Id", defaults::product_request_id())
            .header("Prefer", "return=representation")
            .json(&product)
            .send()
            .await?;

        handle_response(response).await
    }

    pub async fn get_product(&self, product_id: &str) -> Result<Value, ApiError> {
        let access_token = self.client.access_token().await?;

        let response = self
            .client
            .http()
            .get(format!(
                "{}/v1/catalogs/products/{}",
                self.client.base_url(),
                product_id
            ))
            .bearer_auth(access_token)
            .header("Accept", "application/json")
            .send()
            .await?;

        handle_response(response).await
    }

    pub async fn list_products(&self, page: u32, page_size: u32) -> Result<Value, ApiError> {
        let access_token = self.client.access_token().await?;

        let response = self
            .client
            .http()
            .get(format!(
                "{}/v1/catalogs/products?page={}&page_size={}",
                self.client.base_url(),
                page,
                page_size
            ))
            .bearer_auth(access_token)
            .header("Accept", "application/json")
            .send()
            .await?;

        handle_response(response).await
    }

    /// Applies JSON-Patch operations to a product. The upstream answers
    /// 204 No Content on success.
    pub async fn update_product(
        &self,
        product_id: &str,
        operations: Vec<Value>,
    ) -> Result<Value, ApiError> {
        info!("Updating product {} ({} ops)", product_id, operations.len());
        let access_token = self.client.access_token().await?;

        let response = self
            .client
            .http()
            .patch(format!(
                "{}/v1/catalogs/products/{}",
                self.client.base_url(),
                product_id
            ))
            .bearer_auth(access_token)
            .header("Accept", "application/json")
            .json(&operations)
            .send()
            .await?;

        if response.status().as_u16() == 204 {
            return Ok(json!({
                "success": true,
                "message": "Product updated successfully",
            }));
        }

        handle_response(response).await
    }
}
