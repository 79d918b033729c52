use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::errors::ImageInputError;

const DATA_URI_SCHEME: &str = "data:";
const BASE64_MARKER: &str = ";base64";

/// A single in-memory photo handed to the identification pipeline.
///
/// Always holds a non-empty payload tagged with an `image/*` MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInput {
    bytes: Vec<u8>,
    mime_type: String,
}

impl ImageInput {
    /// Creates an image from raw bytes and their MIME type.
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Result<Self, ImageInputError> {
        let mime_type = mime_type.into().trim().to_lowercase();

        if !mime_type.starts_with("image/") || mime_type.len() == "image/".len() {
            return Err(ImageInputError::UnsupportedMimeType(mime_type));
        }
        if bytes.is_empty() {
            return Err(ImageInputError::Empty);
        }

        Ok(Self { bytes, mime_type })
    }

    /// Parses a `data:<mime>;base64,<payload>` string.
    ///
    /// Whitespace inside the payload is ignored, so line-wrapped base64 from
    /// clipboard or form uploads is accepted.
    pub fn from_data_uri(raw: &str) -> Result<Self, ImageInputError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ImageInputError::Missing);
        }

        let rest = raw
            .strip_prefix(DATA_URI_SCHEME)
            .ok_or(ImageInputError::MalformedDataUri)?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or(ImageInputError::MalformedDataUri)?;
        let mime_type = header
            .strip_suffix(BASE64_MARKER)
            .ok_or(ImageInputError::MalformedDataUri)?;
        // Parameters such as `;charset=` may precede the base64 marker.
        let mime_type = mime_type.split(';').next().unwrap_or_default();
        if mime_type.is_empty() {
            return Err(ImageInputError::MalformedDataUri);
        }

        let clean: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
        if clean.is_empty() {
            return Err(ImageInputError::Empty);
        }

        let bytes = STANDARD
            .decode(clean.as_bytes())
            .map_err(|_| ImageInputError::InvalidBase64)?;

        Self::new(bytes, mime_type)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Returns the payload as standard base64, the inline encoding model
    /// providers expect.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }
}
