use std::sync::Arc;

use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use crate::services::paypal_client::PayPalClient;
use crate::services::ApiError;
use crate::utils::defaults;
use crate::utils::response::handle_response;

/// Orders v2 / Payments v2 client. Every operation is a single upstream
/// call authorized by a freshly exchanged bearer token.
pub struct OrdersApi {
    client: Arc<PayPalClient>,
}

impl OrdersApi {
    pub fn new(client: Arc<PayPalClient>) -> Self {
        Self { client }
    }

    /// Creates a checkout order. The caller-supplied body is relayed as-is
    /// apart from the intent default; the merchant number selects which
    /// credential pair signs the call (multi-merchant checkouts).
    pub async fn create_order(&self, mut order: Value, merchant: u8) -> Result<Value, ApiError> {
        let access_token = self.client.access_token_for_merchant(merchant).await?;

        if let Some(fields) = order.as_object_mut() {
            fields
                .entry("intent")
                .or_insert_with(|| json!(defaults::ORDER_INTENT));
        }

        let response = self
            .client
            .http()
            .post(format!("{}/v2/checkout/orders", self.client.base_url()))
            .bearer_auth(access_token)
            .header("PayPal-Request-Id", Uuid::new_v4().to_string())
            .json(&order)
            .send()
            .await?;

        handle_response(response).await
    }

    pub async fn get_order(&self, order_id: &str) -> Result<Value, ApiError> {
        let access_token = self.client.access_token().await?;

        let response = self
            .client
            .http()
            .get(format!(
                "{}/v2/checkout/orders/{}",
                self.client.base_url(),
                order_id
            ))
            .bearer_auth(access_token)
            .send()
            .await?;

        handle_response(response).await
    }

    pub async fn capture_order(&self, order_id: &str) -> Result<Value, ApiError> {
        info!("Capturing order {}", order_id);
        let access_token = self.client.access_token().await?;

        let response = self
            .client
            .http()
            .post(format!(
                "{}/v2/checkout/orders/{}/capture",
                self.client.base_url(),
                order_id
            ))
            .bearer_auth(access_token)
            .header("Content-Type", "application/json")
            .send()
            .await?;

        handle_response(response).await
    }

    pub async fn authorize_order(&self, order_id: &str) -> Result<Value, ApiError> {
        info!("Authorizing order {}", order_id);
        let access_token = self.client.access_token().await?;

        let response = self
            .client
            .http()
            .post(format!(
                "{}/v2/checkout/orders/{}/authorize",
                self.client.base_url(),
                order_id
            ))
            .bearer_auth(access_token)
            .header("Content-Type", "application/json")
            .send()
            .await?;

        handle_response(response).await
    }

    /// Collects the funds held by a previous authorization.
    pub async fn capture_authorization(&self, authorization_id: &str) -> Result<Value, ApiError> {
        info!("Capturing authorization {}", authorization_id);
        let access_token = self.client.access_token().await?;

        let response = self
            .client
            .http()
            .post(format!(
                "{}/v2/payments/authorizations/{}/capture",
                self.client.base_url(),
                authorization_id
            ))
            .bearer_auth(access_token)
            .header("Content-Type", "application/json")
            .send()
            .await?;

        handle_response(response).await
    }
}
