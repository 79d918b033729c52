use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error body returned to the web client.
#[derive(Object, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
