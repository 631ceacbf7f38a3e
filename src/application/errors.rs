use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::infrastructure::immich::UpstreamError;

/// JSON body for every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Public error kinds. Two families exist: client errors detected before any
/// outbound call, and upstream errors re-signalled at the call boundary.
#[derive(Debug)]
pub enum ApiError {
    /// Missing or empty required input.
    BadRequest(String),
    /// The image relay's uniform failure outcome.
    NotFound(String),
    /// Mandatory server configuration is absent.
    Misconfigured(String),
    /// The photo service could not complete the operation.
    Gateway {
        status: StatusCode,
        message: String,
    },
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn misconfigured(message: impl Into<String>) -> Self {
        Self::Misconfigured(message.into())
    }

    /// The one upstream-to-public mapping rule: use the upstream's status
    /// when it reported one, else 502. The original error goes to the log,
    /// never to the client.
    pub fn gateway_from(err: &UpstreamError, message: impl Into<String>) -> Self {
        let message = message.into();
        warn!(error = %err, "{message}");
        Self::Gateway {
            status: err.status().unwrap_or(StatusCode::BAD_GATEWAY),
            message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Self::NotFound(message) => (StatusCode::NOT_FOUND, message),
            Self::Misconfigured(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
            Self::Gateway { status, message } => (status, message),
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
