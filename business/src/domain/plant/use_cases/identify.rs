use async_trait::async_trait;

use crate::domain::plant::errors::IdentificationError;
use crate::domain::plant::image::ImageInput;
use crate::domain::plant::model::IdentificationResult;

pub struct IdentifyPlantParams {
    pub image: ImageInput,
}

/// How an identification call ended.
#[derive(Debug, Clone, PartialEq)]
pub enum IdentificationOutcome {
    Succeeded(IdentificationResult),
    Fallback {
        result: IdentificationResult,
        reason: IdentificationError,
    },
}

impl IdentificationOutcome {
    pub fn result(&self) -> &IdentificationResult {
        match self {
            IdentificationOutcome::Succeeded(result) => result,
            IdentificationOutcome::Fallback { result, .. } => result,
        }
    }

    pub fn into_result(self) -> IdentificationResult {
        match self {
            IdentificationOutcome::Succeeded(result) => result,
            IdentificationOutcome::Fallback { result, .. } => result,
        }
    }

    pub fn failure_reason(&self) -> Option<&IdentificationError> {
        match self {
            IdentificationOutcome::Succeeded(_) => None,
            IdentificationOutcome::Fallback { reason, .. } => Some(reason),
        }
    }
}

#[async_trait]
pub trait IdentifyPlantUseCase: Send + Sync {
    /// Identifies the plant in the photo. Never fails: any model or parsing
    /// problem yields [`IdentificationResult::fallback`].
    async fn execute(&self, params: IdentifyPlantParams) -> IdentificationResult {
        self.execute_detailed(params).await.into_result()
    }

    async fn execute_detailed(&self, params: IdentifyPlantParams) -> IdentificationOutcome;
}
