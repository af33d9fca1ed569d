//! Error handling - maps store failures onto `{ "error": ... }` responses.

use actix_web::{HttpRequest, HttpResponse, ResponseError, error, http::StatusCode};
use quickboard_core::StoreError;
use quickboard_shared::ErrorResponse;
use std::fmt;

/// Application-level error type returned by handlers.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::NotFound(detail) | AppError::BadRequest(detail) => {
                ErrorResponse::new(detail.clone())
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(msg) => AppError::BadRequest(msg),
            StoreError::NotFound { .. } => AppError::NotFound("Post not found".to_string()),
            StoreError::Persistence(e) => AppError::Internal(e.to_string()),
        }
    }
}

/// Body for malformed JSON payloads.
pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "Rejected JSON payload");
    AppError::BadRequest(format!("Invalid request body: {}", err)).into()
}

/// Body for malformed query strings.
pub fn query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "Rejected query string");
    AppError::BadRequest(format!("Invalid query string: {}", err)).into()
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use quickboard_core::PersistenceError;

    use super::*;

    #[test]
    fn test_store_error_status() {
        let cases = [
            (StoreError::validation("Title, description, and tag are required"), 400),
            (StoreError::not_found("42"), 404),
            (
                StoreError::Persistence(PersistenceError::Write("disk full".into())),
                500,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(AppError::from(err).status_code().as_u16(), status);
        }
    }

    #[test]
    fn test_internal_detail_not_in_body() {
        let err = AppError::from(StoreError::Persistence(PersistenceError::Write(
            "/srv/db.json: permission denied".into(),
        )));
        assert!(matches!(&err, AppError::Internal(d) if d.contains("permission denied")));
        assert_eq!(err.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
