//! Typed error handling for the API layer
//!
//! Every failure in the request pipeline maps to one of four terminal
//! outcomes:
//!
//! - `BadRequest` (400): malformed or missing payload, path/payload id
//!   mismatch, schema validation failure
//! - `NotFound` (404): the target entity or a referenced foreign entity
//!   does not exist
//! - `Conflict` (422): a semantic conflict, i.e. a duplicate unique name
//! - `Internal` (500): the store raised an error on commit, or a write
//!   reported zero rows affected
//!
//! No retries happen anywhere; every error is reported synchronously in
//! the response.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

use crate::store::StoreError;

/// The main error type for request handling
#[derive(Debug)]
pub enum ApiError {
    /// Input shape error: missing body, invalid schema, id mismatch
    BadRequest { message: String },

    /// The target or a referenced entity does not exist
    NotFound { entity_type: &'static str, id: i32 },

    /// Semantic conflict, distinct from malformed input (duplicate name)
    Conflict { message: String },

    /// Persistence failure: store error or zero rows affected
    Internal { message: String },
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest {
            message: message.into(),
        }
    }

    pub fn not_found(entity_type: &'static str, id: i32) -> Self {
        ApiError::NotFound { entity_type, id }
    }

    /// Duplicate unique name for `entity_type` (e.g. "Category already exists")
    pub fn already_exists(entity_type: &'static str) -> Self {
        ApiError::Conflict {
            message: format!("{} already exists", entity_type),
        }
    }

    /// A write committed zero rows without raising a store error
    pub fn write_failed(operation: &str) -> Self {
        ApiError::Internal {
            message: format!("Something went wrong while {}", operation),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::BadRequest { .. } => "BAD_REQUEST",
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::Conflict { .. } => "ALREADY_EXISTS",
            ApiError::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response body
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest { message } => write!(f, "{}", message),
            ApiError::NotFound { entity_type, id } => {
                write!(f, "{} with id '{}' not found", entity_type, id)
            }
            ApiError::Conflict { message } => write!(f, "{}", message),
            ApiError::Internal { message } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for ApiError {}

/// Store failures surface as 500, embedding the underlying message
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Internal {
            message: err.to_string(),
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_returns_404() {
        let err = ApiError::not_found("pokemon", 9);
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_code(), "NOT_FOUND");
        assert_eq!(err.to_string(), "pokemon with id '9' not found");
    }

    #[test]
    fn test_already_exists_returns_422() {
        let err = ApiError::already_exists("Category");
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.to_string(), "Category already exists");
    }

    #[test]
    fn test_bad_request_returns_400() {
        let err = ApiError::bad_request("id mismatch");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_write_failed_returns_500_with_generic_message() {
        let err = ApiError::write_failed("saving");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Something went wrong while saving");
    }

    #[test]
    fn test_store_error_converts_to_500_with_detail() {
        let err: ApiError = StoreError::ForeignKey {
            table: "PokemonOwner",
            message: "owner 42 does not exist".to_string(),
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("owner 42 does not exist"));
    }

    #[test]
    fn test_error_response_shape() {
        let body = ApiError::already_exists("Reviewer").to_response();
        assert_eq!(body.code, "ALREADY_EXISTS");
        assert_eq!(body.message, "Reviewer already exists");
    }
}
