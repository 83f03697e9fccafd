//! JSON API error domain.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::data::UpstreamError;

/// Every JSON endpoint failure, mapped onto a structured body and status.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unauthorized access")]
    Unauthorized,
    /// Upstream answered with a non-200 status; we relay it.
    #[error("{message}")]
    UpstreamStatus { status: StatusCode, message: String },
    /// Upstream answered 200 but reported failure in its payload.
    #[error("{0}")]
    UpstreamRejected(String),
    /// Transport-level failure reaching the upstream.
    #[error("External API request failed")]
    Transport(#[source] reqwest::Error),
    #[error("An unexpected error occurred")]
    Unexpected(anyhow::Error),
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Unexpected(err)
    }
}

impl ApiError {
    /// Attach the endpoint-specific message to an upstream failure.
    ///
    /// Body decode errors count as unexpected rather than transport: the
    /// upstream was reachable, its payload was not what it documents.
    pub fn from_upstream(err: UpstreamError, message: &str) -> Self {
        match err {
            UpstreamError::Status { status, .. } => Self::UpstreamStatus {
                status: StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                message: message.to_string(),
            },
            UpstreamError::Rejected(detail) => Self::UpstreamRejected(detail),
            UpstreamError::Transport { source, .. } if source.is_decode() => {
                Self::Unexpected(source.into())
            }
            UpstreamError::Transport { source, .. } => Self::Transport(source),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                json!({"error": "Unauthorized access"}),
            ),
            Self::UpstreamStatus { status, message } => {
                warn!(%status, %message, "relaying upstream status");
                (status, json!({"error": message}))
            }
            Self::UpstreamRejected(message) => {
                warn!(%message, "upstream rejected request");
                (StatusCode::BAD_REQUEST, json!({"error": message}))
            }
            Self::Transport(err) => {
                error!(%err, "upstream request error");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    json!({"error": "External API request failed", "details": err.to_string()}),
                )
            }
            Self::Unexpected(err) => {
                error!(%err, "unexpected error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": "An unexpected error occurred", "details": err.to_string()}),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
