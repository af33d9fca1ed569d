//! Error response body shared by every endpoint.

use serde::{Deserialize, Serialize};

/// `{ "error": "..." }`
///
/// The request id is not repeated here; it travels in the `X-Request-ID`
/// response header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    pub fn internal_error() -> Self {
        Self::new("Internal server error")
    }
}
