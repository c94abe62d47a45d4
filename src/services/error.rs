use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;
use tracing::error;

/// Errors surfaced by the PayPal resource clients and handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx answer from PayPal, relayed with its original status and
    /// raw body text.
    #[error("{body}")]
    Upstream { status: u16, body: String },

    /// Caller omitted a mandatory field; never reaches the upstream API.
    #[error("{0}")]
    MissingField(String),

    /// Credential configuration problem (e.g. second merchant pair not
    /// set, token response without the expected field).
    #[error("{0}")]
    Credentials(String),

    /// Anything that should fall through to the generic 500 answer.
    #[error("{0}")]
    Unexpected(String),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Upstream { status, body } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                body,
            ),
            ApiError::MissingField(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Credentials(message) | ApiError::Unexpected(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
            ApiError::Transport(err) => {
                error!("Upstream transport failure: {}", err);
                (StatusCode::BAD_GATEWAY, err.to_string())
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_error_keeps_status_and_body() {
        let err = ApiError::Upstream {
            status: 422,
            body: "UNPROCESSABLE_ENTITY".to_string(),
        };
        assert_eq!(err.to_string(), "UNPROCESSABLE_ENTITY");

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn missing_field_maps_to_bad_request() {
        let response = ApiError::MissingField("Product ID is required".to_string())
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
