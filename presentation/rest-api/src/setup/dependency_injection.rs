use std::sync::Arc;

use logger::TracingLogger;

use gemini::client::GeminiClient;
use gemini::plant_identifier::PlantIdentifierGemini;

use business::application::plant::identify::IdentifyPlantUseCaseImpl;

use crate::config::gemini_config::GeminiConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::HealthApi,
    pub plant_api: crate::api::plant::routes::PlantApi,
}

impl DependencyContainer {
    pub fn new(gemini_config: GeminiConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::HealthApi::new();

        // Infrastructure adapters
        let gemini_client = GeminiClient::new(
            gemini_config.api_key,
            gemini_config.model,
            gemini_config.base_url,
            gemini_config.timeout,
        );
        let plant_identifier = Arc::new(PlantIdentifierGemini::new(gemini_client));

        // Plant use cases
        let identify_use_case = Arc::new(IdentifyPlantUseCaseImpl {
            model: plant_identifier,
            logger,
            model_timeout: gemini_config.timeout,
        });

        let plant_api = crate::api::plant::routes::PlantApi::new(identify_use_case);

        Self {
            health_api,
            plant_api,
        }
    }
}
