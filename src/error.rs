/// Failure taxonomy for the relay pipeline
/// Every variant renders as a JSON envelope with a human-readable message

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::http::add_cors;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// Request body failed to parse as JSON; carries the parser's message
    #[error("{0}")]
    BadPayload(String),

    #[error("Configuration Error: API Key missing on server.")]
    MissingApiKey,

    /// Outbound call never produced a status + body
    #[error("{0}")]
    Transport(String),

    /// Upstream answered with a non-success status
    #[error("Upstream API Error: {status}")]
    UpstreamStatus { status: u16, details: String },

    /// Upstream answered 2xx but the payload lacks `choices[0].message`
    #[error("Invalid response from AI provider")]
    MalformedUpstream,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::UpstreamStatus { .. } => StatusCode::BAD_GATEWAY,
            ApiError::BadPayload(_)
            | ApiError::MissingApiKey
            | ApiError::Transport(_)
            | ApiError::MalformedUpstream => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            ApiError::UpstreamStatus { details, .. } => {
                json!({ "error": self.to_string(), "details": details })
            }
            _ => json!({ "error": self.to_string() }),
        };

        tracing::warn!("[RELAY] Request failed: status={}, error={}", status, self);

        add_cors((status, Json(body)).into_response())
    }
}
