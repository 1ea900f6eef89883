//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into consistent JSON responses and status
//! codes.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode};
use crate::middleware::trace::TraceId;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure surfaced by an HTTP handler.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// A service call failed.
    #[error(transparent)]
    Domain(#[from] Error),
    /// The request could not be decoded into service input.
    #[error("{message}")]
    Malformed { message: String },
}

impl ApiError {
    /// Request decoding failure with a client-facing `message`.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }

    /// Stable code used to pick the status.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Domain(err) => err.code(),
            Self::Malformed { .. } => ErrorCode::InvalidRequest,
        }
    }
}

/// JSON error envelope returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    pub code: ErrorCode,
    /// Human-readable message returned to clients.
    #[schema(example = "driver name is invalid,driver email is invalid")]
    pub message: String,
    /// Correlation identifier matching the `trace-id` response header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
    /// Supplementary details, e.g. `{"violations": [...]}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn body_for(error: &ApiError) -> ErrorBody {
    let code = error.code();
    let trace_id = TraceId::current().map(|id| id.to_string());

    if matches!(code, ErrorCode::InternalError) {
        error!(error = %error, trace_id = ?trace_id, "internal failure redacted");
        return ErrorBody {
            code,
            message: "Internal server error".to_owned(),
            trace_id,
            details: None,
        };
    }

    let details = match error {
        ApiError::Domain(err) => err
            .violations()
            .map(|violations| json!({ "violations": violations })),
        ApiError::Malformed { .. } => None,
    };
    ErrorBody {
        code,
        message: error.to_string(),
        trace_id,
        details,
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(body_for(self))
    }
}

#[cfg(test)]
mod tests;
