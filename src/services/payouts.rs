use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use crate::services::paypal_client::PayPalClient;
use crate::services::ApiError;
use crate::utils::response::handle_response;

/// Payouts v1 + Identity client.
pub struct PayoutsApi {
    client: Arc<PayPalClient>,
}

impl PayoutsApi {
    pub fn new(client: Arc<PayPalClient>) -> Self {
        Self { client }
    }

    pub async fn create_payout(&self, payout: Value) -> Result<Value, ApiError> {
        let access_token = self.client.access_token().await?;

        let response = self
            .client
            .http()
            .post(format!("{}/v1/payments/payouts", self.client.base_url()))
            .bearer_auth(access_token)
            .json(&payout)
            .send()
            .await?;

        handle_response(response).await
    }

    pub async fn get_payout(&self, payout_batch_id: &str) -> Result<Value, ApiError> {
        let access_token = self.client.access_token().await?;

        let response = self
            .client
            .http()
            .get(format!(
                "{}/v1/payments/payouts/{}",
                self.client.base_url(),
                payout_batch_id
            ))
            .bearer_auth(access_token)
            .send()
            .await?;

        handle_response(response).await
    }

    pub async fn get_payout_item(&self, payout_item_id: &str) -> Result<Value, ApiError> {
        let access_token = self.client.access_token().await?;

        let response = self
            .client
            .http()
            .get(format!(
                "{}/v1/payments/payouts-item/{}",
                self.client.base_url(),
                payout_item_id
            ))
            .bearer_auth(access_token)
            .send()
            .await?;

        handle_response(response).await
    }

    /// Exchanges a "Log in with PayPal" authorization code for tokens.
    /// The redirect URI must match the authorize request byte for byte.
    pub async fn exchange_code_for_token(&self, code: &str) -> Result<Value, ApiError> {
        let config = self.client.config();
        let redirect_uri = config.oauth_redirect_uri();
        info!("Exchanging authorization code, redirect URI {}", redirect_uri);

        let response = self
            .client
            .http()
            .post(format!("{}/v1/oauth2/token", self.client.base_url()))
            .basic_auth(&config.client_id, Some(&config.app_secret))
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", redirect_uri.as_str()),
            ])
            .send()
            .await?;

        handle_response(response).await
    }

    /// Resolves the payer profile behind an authorization code: exchanges
    /// the code, then queries the Identity userinfo endpoint with the
    /// resulting access token.
    pub async fn get_user_info(&self, code: &str) -> Result<Value, ApiError> {
        let token_data = self.exchange_code_for_token(code).await?;
        let access_token = token_data["access_token"].as_str().ok_or_else(|| {
            ApiError::Credentials("Token response missing access_token field".to_string())
        })?;

        let response = self
            .client
            .http()
            .get(format!(
                "{}/v1/identity/oauth2/userinfo?schema=paypalv1.1",
                self.client.base_url()
            ))
            .bearer_auth(access_token)
            .send()
            .await?;

        handle_response(response).await
    }
}
