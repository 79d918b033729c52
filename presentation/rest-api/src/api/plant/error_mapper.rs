use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::plant::errors::ImageInputError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

pub const PHOTO_REQUIRED_MESSAGE: &str = "Photo data is required";
pub const INVALID_PHOTO_MESSAGE: &str = "Invalid photo data";
pub const UNREADABLE_REQUEST_MESSAGE: &str = "Failed to identify plant. Please try again.";

impl IntoErrorResponse for ImageInputError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = match &self {
            ImageInputError::Missing => PHOTO_REQUIRED_MESSAGE,
            ImageInputError::MalformedDataUri
            | ImageInputError::UnsupportedMimeType(_)
            | ImageInputError::InvalidBase64
            | ImageInputError::Empty => INVALID_PHOTO_MESSAGE,
        };

        (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_missing_photo_to_required_message() {
        let (status, json) = ImageInputError::Missing.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.error, "Photo data is required");
    }

    #[test]
    fn should_map_malformed_photo_to_invalid_message() {
        let (status, json) =
            ImageInputError::UnsupportedMimeType("text/plain".to_string()).into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.error, "Invalid photo data");
    }
}
