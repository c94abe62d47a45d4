use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::info;

use crate::app::config::Config;
use crate::services::ApiError;
use crate::utils::response::handle_response;

/// Shared PayPal client: owns the HTTP connection pool, the configured
/// credentials and the token exchange. A fresh token is requested per
/// call cycle; nothing is cached or reused across requests.
pub struct PayPalClient {
    http: Client,
    config: Config,
}

impl PayPalClient {
    pub fn new(config: &Config) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            config: config.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.api_base
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Client-credentials exchange for a first-time payer.
    pub async fn access_token(&self) -> Result<String, ApiError> {
        self.access_token_for_merchant(1).await
    }

    /// Client-credentials exchange against the selected credential pair
    /// (1 or 2, for multi-merchant checkouts).
    pub async fn access_token_for_merchant(&self, merchant: u8) -> Result<String, ApiError> {
        let (client_id, app_secret) = self.merchant_credentials(merchant)?;

        let response = self
            .http
            .post(format!("{}/v1/oauth2/token", self.base_url()))
            .basic_auth(client_id, Some(app_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let body = handle_response(response).await?;
        token_field(&body, "access_token")
    }

    /// Identity token for a returning payer, scoped to the given
    /// customer id so the buttons render that customer's vaulted methods.
    pub async fn returning_access_token(&self, customer_id: &str) -> Result<String, ApiError> {
        info!("Requesting id_token for returning customer");

        let response = self
            .http
            .post(format!("{}/v1/oauth2/token", self.base_url()))
            .basic_auth(&self.config.client_id, Some(&self.config.app_secret))
            .form(&[
                ("grant_type", "client_credentials"),
                ("response_type", "id_token"),
                ("target_customer_id", customer_id),
            ])
            .send()
            .await?;

        let body = handle_response(response).await?;
        token_field(&body, "id_token")
    }

    /// Identity token for a first-time payer (required for Venmo vaulting).
    pub async fn user_id_token(&self) -> Result<String, ApiError> {
        let response = self
            .http
            .post(format!("{}/v1/oauth2/token", self.base_url()))
            .basic_auth(&self.config.client_id, Some(&self.config.app_secret))
            .form(&[
                ("grant_type", "client_credentials"),
                ("response_type", "id_token"),
            ])
            .send()
            .await?;

        let body = handle_response(response).await?;
        token_field(&body, "id_token")
    }

    fn merchant_credentials(&self, merchant: u8) -> Result<(&str, &str), ApiError> {
        if merchant == 2 {
            match (&self.config.client_id_2, &self.config.app_secret_2) {
                (Some(id), Some(secret)) => Ok((id, secret)),
                _ => Err(ApiError::Credentials(
                    "Second merchant credentials (PAYPAL_CLIENT_ID_2, PAYPAL_APP_SECRET_2) not configured"
                        .to_string(),
                )),
            }
        } else {
            Ok((&self.config.client_id, &self.config.app_secret))
        }
    }
}

fn token_field(body: &Value, field: &str) -> Result<String, ApiError> {
    body[field]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ApiError::Credentials(format!("Token response missing {} field", field)))
}
