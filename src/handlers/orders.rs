use axum::extract::{Path, State};
use axum::response::Json;
use serde_json::Value;
use tracing::info;

use crate::app::state::AppState;
use crate::services::ApiError;

pub async fn create_order(
    State(state): State<AppState>,
    Json(mut payload): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    info!("Create Order Request");

    // Merchant selection plus the button-SDK aliases are ours, not part
    // of the Orders v2 contract; strip them before relaying.
    let merchant = payload.get("merchant").and_then(Value::as_u64).unwrap_or(1) as u8;
    if let Some(fields) = payload.as_object_mut() {
        fields.remove("merchant");
        fields.remove("source");
        fields.remove("paymentSource");
    }

    let order = state.orders.create_order(payload, merchant).await?;
    if let Some(id) = order["id"].as_str() {
        info!("Order created: {}", id);
    }
    Ok(Json(order))
}

pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let order = state.orders.get_order(&order_id).await?;
    Ok(Json(order))
}

pub async fn capture_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    info!("Capture order request triggered");
    let capture_data = state.orders.capture_order(&order_id).await?;
    Ok(Json(capture_data))
}

pub async fn authorize_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    info!("Authorize order request triggered");
    let authorize_data = state.orders.authorize_order(&order_id).await?;
    Ok(Json(authorize_data))
}

/// Looks up the authorization behind an order and captures it.
pub async fn capture_authorized_payment(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    info!("Capture authorized payment request triggered");

    let order_details = state.orders.get_order(&order_id).await?;
    let authorization_id = order_details["purchase_units"][0]["payments"]["authorizations"][0]
        ["id"]
        .as_str()
        .ok_or_else(|| {
            ApiError::Unexpected("No authorization found for this order".to_string())
        })?;

    info!("Capturing authorization ID: {}", authorization_id);
    let capture_data = state.orders.capture_authorization(authorization_id).await?;
    Ok(Json(capture_data))
}
