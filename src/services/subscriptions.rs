use std::sync::Arc;

use serde_json::{json, Value};
use tracing::info;

use crate::services::paypal_client::PayPalClient;
use crate::services::ApiError;
use crate::utils::defaults;
use crate::utils::response::handle_response;

/// Subscriptions v1 + Billing Plans v1 client. Status transitions are
/// forwarded as-is; their legality is enforced by the upstream platform.
pub struct SubscriptionsApi {
    client: Arc<PayPalClient>,
}

impl SubscriptionsApi {
    pub fn new(client: Arc<PayPalClient>) -> Self {
        Self { client }
    }

    pub async fn get_subscription(&self, subscription_id: &str) -> Result<Value, ApiError> {
        let access_token = self.client.access_token().await?;

        let response = self
            .client
            .http()
            .get(format!(
                "{}/v1/billing/subscriptions/{}",
                self.client.base_url(),
                subscription_id
            ))
            .bearer_auth(access_token)
            .send()
            .await?;

        handle_response(response).await
    }

    pub async fn cancel_subscription(
        &self,
        subscription_id: &str,
        reason: Option<String>,
    ) -> Result<Value, ApiError> {
        self.post_status_action(
            subscription_id,
            "cancel",
            reason.unwrap_or_else(|| defaults::CANCEL_REASON.to_string()),
            "Subscription cancelled successfully",
        )
        .await
    }

    pub async fn suspend_subscription(
        &self,
        subscription_id: &str,
        reason: Option<String>,
    ) -> Result<Value, ApiError> {
        self.post_status_action(
            subscription_id,
            "suspend",
            reason.unwrap_or_else(|| defaults::SUSPEND_REASON.to_string()),
            "Subscription suspended successfully",
        )
        .await
    }

    pub async fn activate_subscription(
        &self,
        subscription_id: &str,
        reason: Option<String>,
    ) -> Result<Value, ApiError> {
        self.post_status_action(
            subscription_id,
            "activate",
            reason.unwrap_or_else(|| defaults::ACTIVATE_REASON.to_string()),
            "Subscription activated successfully",
        )
        .await
    }

    // cancel/suspend/activate share one shape: POST the reason, get back
    // 204 No Content, answer with a small confirmation object.
    async fn post_status_action(
        &self,
        subscription_id: &str,
        action: &str,
        reason: String,
        success_message: &str,
    ) -> Result<Value, ApiError> {
        info!("Subscription {} {} requested", subscription_id, action);
        let access_token = self.client.access_token().await?;

        let response = self
            .client
            .http()
            .post(format!(
                "{}/v1/billing/subscriptions/{}/{}",
                self.client.base_url(),
                subscription_id,
                action
            ))
            .bearer_auth(access_token)
            .json(&json!({ "reason": reason }))
            .send()
            .await?;

        if response.status().is_success() {
            return Ok(json!({
                "success": true,
                "message": success_message,
                "subscriptionId": subscription_id,
            }));
        }

        handle_response(response).await
    }

    /// Applies JSON-Patch operations (shipping address, billing info).
    pub async fn update_subscription(
        &self,
        subscription_id: &str,
        operations: Vec<Value>,
    ) -> Result<Value, ApiError> {
        let access_token = self.client.access_token().await?;

        let response = self
            .client
            .http()
            .patch(format!(
                "{}/v1/billing/subscriptions/{}",
                self.client.base_url(),
                subscription_id
            ))
            .bearer_auth(access_token)
            .json(&operations)
            .send()
            .await?;

        if response.status().is_success() {
            return Ok(json!({
                "success": true,
                "message": "Subscription updated successfully",
                "subscriptionId": subscription_id,
            }));
        }

        handle_response(response).await
    }

    /// Moves the subscription to another plan and/or quantity.
    pub async fn revise_subscription(
        &self,
        subscription_id: &str,
        plan_id: &str,
        quantity: Option<Value>,
    ) -> Result<Value, ApiError> {
        let access_token = self.client.access_token().await?;

        let mut body = json!({ "plan_id": plan_id });
        if let Some(quantity) = quantity {
            body["quantity"] = quantity;
        }

        let response = self
            .client
            .http()
            .post(format!(
                "{}/v1/billing/subscriptions/{}/revise",
                self.client.base_url(),
                subscription_id
            ))
            .bearer_auth(access_token)
            .json(&body)
            .send()
            .await?;

        handle_response(response).await
    }

    pub async fn list_transactions(
        &self,
        subscription_id: &str,
        start_time: &str,
        end_time: &str,
    ) -> Result<Value, ApiError> {
        let access_token = self.client.access_token().await?;

        let response = self
            .client
            .http()
            .get(format!(
                "{}/v1/billing/subscriptions/{}/transactions?start_time={}&end_time={}",
                self.client.base_url(),
                subscription_id,
                start_time,
                end_time
            ))
            .bearer_auth(access_token)
            .send()
            .await?;

        handle_response(response).await
    }

    /// Charges the outstanding balance of an active subscription. The
    /// upstream answers 202 Accepted with the capture body.
    pub async fn capture_payment(
        &self,
        subscription_id: &str,
        note: Option<String>,
        capture_type: Option<String>,
        amount: Option<Value>,
    ) -> Result<Value, ApiError> {
        let access_token = self.client.access_token().await?;

        let mut body = json!({
            "capture_type": capture_type.unwrap_or_else(|| defaults::CAPTURE_TYPE.to_string()),
        });
        if let Some(note) = note {
            body["note"] = json!(note);
        }
        if let Some(amount) = amount {
            body["amount"] = amount;
        }

        let response = self
            .client
            .http()
            .post(format!(
                "{}/v1/billing/subscriptions/{}/capture",
                self.client.base_url(),
                subscription_id
            ))
            .bearer_auth(access_token)
            .json(&body)
            .send()
            .await?;

        if response.status().as_u16() == 202 {
            return Ok(response
                .json()
                .await
                .unwrap_or_else(|_| json!({ "success": true })));
        }

        handle_response(response).await
    }

    /// Creates the demo monthly billing plan: the backing catalog product
    /// first, then the plan pointing at its id.
    pub async fn create_plan(&self) -> Result<Value, ApiError> {
        let access_token = self.client.access_token().await?;

        let product_payload = json!({
            "name": "Monthly Subscription Service",
            "description": "Monthly subscription service for $3.99",
            "type": "SERVICE",
            "category": "SOFTWARE",
        });

        let product_response = self
            .client
            .http()
            .post(format!("{}/v1/catalogs/products", self.client.base_url()))
            .bearer_auth(&access_token)
            .header("Accept", "application/json")
            .header("PayPal-Request-Id", defaults::product_request_id())
            .header("Prefer", "return=representation")
            .json(&product_payload)
            .send()
            .await?;

        let product = handle_response(product_response).await?;
        let product_id = product["id"].as_str().ok_or_else(|| {
            ApiError::Unexpected("Product response missing id field".to_string())
        })?;
        info!("Product created for plan: {}", product_id);

        let plan_payload = json!({
            "product_id": product_id,
            "name": "Monthly Subscription Plan",
            "description": "Monthly subscription for $3.99",
            "status": "ACTIVE",
            "billing_cycles": [
                {
                    "frequency": {
                        "interval_unit": "MONTH",
                        "interval_count": 1,
                    },
                    "tenure_type": "REGULAR",
                    "sequence": 1,
                    "total_cycles": 0,
                    "pricing_scheme": {
                        "fixed_price": {
                            "value": "3.99",
                            "currency_code": "USD",
                        },
                    },
                },
            ],
            "payment_preferences": {
                "auto_bill_outstanding": true,
                "setup_fee": {
                    "value": "0",
                    "currency_code": "USD",
                },
                "setup_fee_failure_action": "CONTINUE",
                "payment_failure_threshold": 3,
            },
            "taxes": {
                "percentage": "0",
                "inclusive": false,
            },
        });

        let response = self
            .client
            .http()
            .post(format!("{}/v1/billing/plans", self.client.base_url()))
            .bearer_auth(access_token)
            .header("Prefer", "return=representation")
            .json(&plan_payload)
            .send()
            .await?;

        handle_response(response).await
    }

    pub async fn get_plan(&self, plan_id: &str) -> Result<Value, ApiError> {
        let access_token = self.client.access_token().await?;

        let response = self
            .client
            .http()
            .get(format!(
                "{}/v1/billing/plans/{}",
                self.client.base_url(),
                plan_id
            ))
            .bearer_auth(access_token)
            .send()
            .await?;

        handle_response(response).await
    }
}
