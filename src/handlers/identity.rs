use axum::extract::State;
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::app::state::AppState;
use crate::services::ApiError;

#[derive(Debug, Deserialize)]
pub struct IdTokenRequest {
    pub customer_id: Option<String>,
}

/// Issues the identity token the button SDK needs for vaulted payment
/// methods: scoped to the customer for returning payers, unscoped for
/// first-time payers.
pub async fn create_id_token(
    State(state): State<AppState>,
    body: Option<Json<IdTokenRequest>>,
) -> Result<Json<Value>, ApiError> {
    let customer_id = body.and_then(|Json(request)| request.customer_id);

    let id_token = match customer_id {
        Some(customer_id) => state.paypal.returning_access_token(&customer_id).await?,
        None => state.paypal.user_id_token().await?,
    };

    Ok(Json(json!({ "id_token": id_token })))
}
