use reqwest::Response;
use serde_json::Value;
use tracing::warn;

use crate::services::ApiError;

/// Shared normalization point for PayPal API responses.
///
/// 200/201 answers are deserialized exactly once and handed to callers as
/// parsed JSON; anything else becomes an [`ApiError::Upstream`] carrying
/// the original status code and the body text verbatim.
pub async fn handle_response(response: Response) -> Result<Value, ApiError> {
    let status = response.status().as_u16();

    if status == 200 || status == 201 {
        return Ok(response.json().await?);
    }

    let body = response.text().await?;
    warn!("Upstream returned {}: {}", status, body);
    Err(ApiError::Upstream { status, body })
}
