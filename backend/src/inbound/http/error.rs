//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into consistent JSON responses and status
//! codes.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::error;
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode};
use crate::middleware::trace::RequestId;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// JSON envelope written for every failed request.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    pub code: ErrorCode,
    /// Human-readable error message.
    #[schema(example = "request body must be a JSON user")]
    pub message: String,
    /// Identifier of the request that failed, matching the `request-id` header.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "6f1c2a1e-8a4b-4c8e-9a51-0d3f1b2c4d5e")]
    pub request_id: Option<String>,
    /// Supplementary structured details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorBody {
    /// Build the response envelope for `error`, redacting internal failures.
    #[must_use]
    pub fn from_error(error: &Error) -> Self {
        let request_id = RequestId::current().map(|id| id.to_string());
        if matches!(error.code(), ErrorCode::InternalError) {
            return Self {
                code: ErrorCode::InternalError,
                message: "Internal server error".to_owned(),
                request_id,
                details: None,
            };
        }
        Self {
            code: error.code(),
            message: error.message().to_owned(),
            request_id,
            details: error.details().cloned(),
        }
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if matches!(self.code(), ErrorCode::InternalError) {
            error!(error = %self, "request failed with internal error");
        }
        HttpResponse::build(self.status_code()).json(ErrorBody::from_error(self))
    }
}
