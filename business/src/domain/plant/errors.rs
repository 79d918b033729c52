/// Errors raised while turning a raw upload into an [`ImageInput`].
///
/// [`ImageInput`]: super::image::ImageInput
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ImageInputError {
    #[error("image.missing")]
    Missing,
    #[error("image.malformed_data_uri")]
    MalformedDataUri,
    #[error("image.unsupported_mime_type")]
    UnsupportedMimeType(String),
    #[error("image.invalid_base64")]
    InvalidBase64,
    #[error("image.empty")]
    Empty,
}

/// Failures reported by a vision model adapter.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    #[error("model.request_failed")]
    Request(String),
    #[error("model.unexpected_status")]
    Status(u16),
    #[error("model.empty_response")]
    EmptyResponse,
    #[error("model.malformed_response")]
    MalformedResponse,
}

/// Reason an identification ended in the fallback result.
///
/// Never surfaces to callers of `execute`; it is kept so logs and tests can
/// tell a provider failure apart from an unusable answer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IdentificationError {
    #[error("plant.model_invocation_failed")]
    ModelInvocation(#[from] ModelError),
    #[error("plant.model_timeout")]
    ModelTimeout,
    #[error("plant.no_json_found")]
    NoJsonFound,
    #[error("plant.invalid_json")]
    InvalidJson(String),
}
