use axum::extract::{Path, State};
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{error, info};

use crate::app::state::AppState;
use crate::models::payout::{CreatePayoutRequest, PayoutRecipient};
use crate::services::ApiError;

pub async fn create_payout_batch(
    State(state): State<AppState>,
    Json(request): Json<CreatePayoutRequest>,
) -> Result<Json<Value>, ApiError> {
    info!("Create payout batch ({} recipients)", request.recipients.len());
    validate_recipients(&request.recipients)?;

    let payout = state.payouts.create_payout(request.into_payload()).await?;
    Ok(Json(payout))
}

// Mirror of the pre-submit checks the payouts page runs before calling
// this endpoint; nothing reaches the upstream API when they fail.
fn validate_recipients(recipients: &[PayoutRecipient]) -> Result<(), ApiError> {
    if recipients.is_empty() {
        return Err(ApiError::MissingField(
            "Please add at least one recipient".to_string(),
        ));
    }

    for recipient in recipients {
        let has_receiver = recipient.receiver.as_deref().is_some_and(|r| !r.is_empty());
        let has_amount = recipient.amount.as_deref().is_some_and(|a| !a.is_empty());

        if !has_receiver || !has_amount {
            return Err(ApiError::MissingField(
                "Please fill in all required recipient fields (PayPal ID and amount)".to_string(),
            ));
        }
    }

    Ok(())
}

pub async fn get_payout(
    State(state): State<AppState>,
    Path(payout_batch_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let payout = state.payouts.get_payout(&payout_batch_id).await?;
    Ok(Json(payout))
}

pub async fn get_payout_item(
    State(state): State<AppState>,
    Path(payout_item_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let payout_item = state.payouts.get_payout_item(&payout_item_id).await?;
    Ok(Json(payout_item))
}

#[derive(Debug, Deserialize)]
pub struct UserInfoRequest {
    pub code: Option<String>,
}

/// Resolves the payer profile from a "Log in with PayPal" authorization
/// code posted by the browser.
pub async fn get_user_info(
    State(state): State<AppState>,
    Json(request): Json<UserInfoRequest>,
) -> Result<Json<Value>, ApiError> {
    let code = request.code.ok_or_else(|| {
        ApiError::MissingField("Authorization code not provided".to_string())
    })?;

    let user_info = state.payouts.get_user_info(&code).await.map_err(|err| {
        error!("Error getting user info: {}", err);
        err
    })?;
    Ok(Json(user_info))
}

/// Diagnostic endpoint so the payouts page can verify the "Log in with
/// PayPal" return-URL configuration.
pub async fn get_oauth_config(State(state): State<AppState>) -> Json<Value> {
    let config = state.paypal.config();
    let truncated_id: String = config.client_id.chars().take(10).collect();

    Json(json!({
        "clientId": format!("{}...", truncated_id),
        "redirectUri": config.oauth_redirect_uri(),
        "requiredScopes": [
            "openid",
            "profile",
            "email",
            "https://uri.paypal.com/services/paypalattributes",
        ],
        "instructions":
            "Make sure this redirect URI is configured exactly in your PayPal App settings under \"Log In with PayPal\" → \"Return URL\"",
    }))
}
