//! Mapping core results onto HTTP responses.
//!
//! # Responsibilities
//! - 400 with a JSON body listing every violation
//! - 404 with a plain-text body
//! - 500 for store failures that should never happen with a sane id generator
//!
//! # Design Decisions
//! - The core never sees status codes; this is the only place they are chosen
//! - A body that fails to parse as JSON is reported like any other violation

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::standings::error::StandingsError;
use crate::standings::validation::{Rule, ValidationFailure, Violation};

/// JSON body of a 400 response.
#[derive(Debug, Serialize)]
pub struct ValidationBody {
    pub error: &'static str,
    pub message: String,
    pub details: Vec<Violation>,
}

impl From<ValidationFailure> for ValidationBody {
    fn from(failure: ValidationFailure) -> Self {
        Self {
            error: "ValidationError",
            message: failure.to_string(),
            details: failure.details,
        }
    }
}

impl IntoResponse for StandingsError {
    fn into_response(self) -> Response {
        match self {
            StandingsError::Validation(failure) => {
                tracing::debug!(violations = failure.details.len(), "Validation failed");
                (StatusCode::BAD_REQUEST, Json(ValidationBody::from(failure))).into_response()
            }
            StandingsError::DriverNotFound(lookup) => {
                tracing::debug!(%lookup, "Driver not found");
                (StatusCode::NOT_FOUND, "Driver not found").into_response()
            }
            StandingsError::TeamNotFound(position) => {
                tracing::debug!(position, "Team not found");
                (StatusCode::NOT_FOUND, "Team not found").into_response()
            }
            err @ (StandingsError::DuplicateId(_) | StandingsError::IdExhausted(_)) => {
                tracing::error!(error = %err, "Driver store failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}

/// Turn a JSON extraction failure into a validation failure on `body`.
pub fn invalid_body(rejection: JsonRejection) -> StandingsError {
    StandingsError::Validation(ValidationFailure::single(
        "body",
        Rule::ObjectBase,
        rejection.body_text(),
    ))
}
