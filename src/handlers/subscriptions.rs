use axum::extract::{Path, Query, State};
use axum::response::Json;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::app::state::AppState;
use crate::models::subscription::{
    CaptureSubscriptionPayment, ReviseSubscription, SubscriptionAction, SubscriptionUpdate,
};
use crate::services::ApiError;

pub async fn get_subscription(
    State(state): State<AppState>,
    Path(subscription_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let subscription = state
        .subscriptions
        .get_subscription(&subscription_id)
        .await?;
    Ok(Json(subscription))
}

// The status endpoints accept an optional body; an absent or empty one
// falls back to the per-action default reason.
pub async fn cancel_subscription(
    State(state): State<AppState>,
    Path(subscription_id): Path<String>,
    body: Option<Json<SubscriptionAction>>,
) -> Result<Json<Value>, ApiError> {
    let reason = body.and_then(|Json(action)| action.reason);
    let result = state
        .subscriptions
        .cancel_subscription(&subscription_id, reason)
        .await?;
    Ok(Json(result))
}

pub async fn suspend_subscription(
    State(state): State<AppState>,
    Path(subscription_id): Path<String>,
    body: Option<Json<SubscriptionAction>>,
) -> Result<Json<Value>, ApiError> {
    let reason = body.and_then(|Json(action)| action.reason);
    let result = state
        .subscriptions
        .suspend_subscription(&subscription_id, reason)
        .await?;
    Ok(Json(result))
}

pub async fn activate_subscription(
    State(state): State<AppState>,
    Path(subscription_id): Path<String>,
    body: Option<Json<SubscriptionAction>>,
) -> Result<Json<Value>, ApiError> {
    let reason = body.and_then(|Json(action)| action.reason);
    let result = state
        .subscriptions
        .activate_subscription(&subscription_id, reason)
        .await?;
    Ok(Json(result))
}

pub async fn update_subscription(
    State(state): State<AppState>,
    Path(subscription_id): Path<String>,
    Json(update): Json<SubscriptionUpdate>,
) -> Result<Json<Value>, ApiError> {
    let result = state
        .subscriptions
        .update_subscription(&subscription_id, update.patch_ops())
        .await?;
    Ok(Json(result))
}

pub async fn revise_subscription(
    State(state): State<AppState>,
    Path(subscription_id): Path<String>,
    Json(revision): Json<ReviseSubscription>,
) -> Result<Json<Value>, ApiError> {
    let plan_id = revision
        .plan_id
        .ok_or_else(|| ApiError::MissingField("Plan ID is required".to_string()))?;

    let result = state
        .subscriptions
        .revise_subscription(&subscription_id, &plan_id, revision.quantity)
        .await?;
    Ok(Json(result))
}

#[derive(Debug, Deserialize)]
pub struct TransactionsQuery {
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

pub async fn list_transactions(
    State(state): State<AppState>,
    Path(subscription_id): Path<String>,
    Query(query): Query<TransactionsQuery>,
) -> Result<Json<Value>, ApiError> {
    let (Some(start_time), Some(end_time)) = (query.start_time, query.end_time) else {
        return Err(ApiError::MissingField(
            "start_time and end_time are required".to_string(),
        ));
    };

    let transactions = state
        .subscriptions
        .list_transactions(&subscription_id, &start_time, &end_time)
        .await?;
    Ok(Json(transactions))
}

pub async fn capture_payment(
    State(state): State<AppState>,
    Path(subscription_id): Path<String>,
    Json(capture): Json<CaptureSubscriptionPayment>,
) -> Result<Json<Value>, ApiError> {
    let result = state
        .subscriptions
        .capture_payment(
            &subscription_id,
            capture.note,
            capture.capture_type,
            capture.amount,
        )
        .await?;
    Ok(Json(result))
}

pub async fn create_plan(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    info!("Create subscription plan request");
    let plan = state.subscriptions.create_plan().await?;
    Ok(Json(plan))
}

pub async fn get_plan(
    State(state): State<AppState>,
    Path(plan_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let plan = state.subscriptions.get_plan(&plan_id).await?;
    Ok(Json(plan))
}
