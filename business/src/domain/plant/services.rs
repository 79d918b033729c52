use async_trait::async_trait;

use super::errors::ModelError;
use super::image::ImageInput;

/// Service port for a hosted multimodal model.
///
/// One call sends the instruction text and the photo and returns the full
/// text completion. Implementations must not retry.
#[async_trait]
pub trait PlantVisionModel: Send + Sync {
    async fn generate(&self, prompt: &str, image: &ImageInput) -> Result<String, ModelError>;
}
