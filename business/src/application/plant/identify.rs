use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::plant::errors::IdentificationError;
use crate::domain::plant::extraction::parse_identification;
use crate::domain::plant::model::IdentificationResult;
use crate::domain::plant::prompt::build_identification_prompt;
use crate::domain::plant::services::PlantVisionModel;
use crate::domain::plant::use_cases::identify::{
    IdentificationOutcome, IdentifyPlantParams, IdentifyPlantUseCase,
};

pub const DEFAULT_MODEL_TIMEOUT: Duration = Duration::from_secs(30);

pub struct IdentifyPlantUseCaseImpl {
    pub model: Arc<dyn PlantVisionModel>,
    pub logger: Arc<dyn Logger>,
    pub model_timeout: Duration,
}

impl IdentifyPlantUseCaseImpl {
    async fn try_identify(
        &self,
        params: &IdentifyPlantParams,
    ) -> Result<IdentificationResult, IdentificationError> {
        let prompt = build_identification_prompt();

        // Exactly one model call; dropping the future on timeout abandons it.
        let text = tokio::time::timeout(
            self.model_timeout,
            self.model.generate(&prompt, &params.image),
        )
        .await
        .map_err(|_| IdentificationError::ModelTimeout)??;

        self.logger.debug(&format!(
            "Model answered with {} characters",
            text.chars().count()
        ));

        parse_identification(&text)
    }
}

#[async_trait]
impl IdentifyPlantUseCase for IdentifyPlantUseCaseImpl {
    async fn execute_detailed(&self, params: IdentifyPlantParams) -> IdentificationOutcome {
        self.logger.info(&format!(
            "Identifying plant from {} image ({} bytes)",
            params.image.mime_type(),
            params.image.bytes().len()
        ));

        match self.try_identify(&params).await {
            Ok(result) => {
                if result.is_plant() {
                    self.logger.info(&format!(
                        "Plant identified: {} ({})",
                        result.identification.common_name, result.identification.latin_name
                    ));
                } else {
                    self.logger.info("Image does not contain a plant");
                }
                IdentificationOutcome::Succeeded(result)
            }
            Err(reason) => {
                let message = format!(
                    "Plant identification fell back to default result: {} ({:?})",
                    reason, reason
                );
                match reason {
                    IdentificationError::ModelInvocation(_) | IdentificationError::ModelTimeout => {
                        self.logger.error(&message)
                    }
                    IdentificationError::NoJsonFound | IdentificationError::InvalidJson(_) => {
                        self.logger.warn(&message)
                    }
                }
                IdentificationOutcome::Fallback {
                    result: IdentificationResult::fallback(),
                    reason,
                }
            }
        }
    }
}
