//! JSON error envelopes for failed requests.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::config::StatusPolicy;
use crate::VidsumError;

const FALLBACK_MESSAGE: &str = "Internal server error";

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

/// Turns pipeline failures into status codes and envelopes.
#[derive(Debug, Clone)]
pub struct ErrorResponder {
    default_status: StatusCode,
    policy: StatusPolicy,
    expose_stack: bool,
}

impl ErrorResponder {
    pub fn new(policy: StatusPolicy, production: bool) -> Self {
        Self {
            default_status: StatusCode::BAD_REQUEST,
            policy,
            expose_stack: !production,
        }
    }

    pub fn respond(&self, err: &anyhow::Error) -> ApiError {
        let message = format!("{err:#}");
        let message = if message.trim().is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            message
        };

        ApiError {
            status: self.status_for(err),
            envelope: ErrorEnvelope {
                error: message,
                stack: self.expose_stack.then(|| format!("{err:?}")),
            },
        }
    }

    fn status_for(&self, err: &anyhow::Error) -> StatusCode {
        match self.policy {
            StatusPolicy::Literal => self.default_status,
            StatusPolicy::ByKind => match err.downcast_ref::<VidsumError>() {
                Some(VidsumError::MissingInput(_) | VidsumError::Validation(_)) => {
                    self.default_status
                }
                Some(VidsumError::UpstreamFetch(_) | VidsumError::UpstreamModel(_)) => {
                    StatusCode::BAD_GATEWAY
                }
                Some(VidsumError::Schema(_)) => StatusCode::UNPROCESSABLE_ENTITY,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub envelope: ErrorEnvelope,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.envelope)).into_response()
    }
}
