use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::plant::image::ImageInput;
use business::domain::plant::use_cases::identify::{IdentifyPlantParams, IdentifyPlantUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::plant::dto::{IdentifyPlantBody, IdentifyPlantRequest};
use crate::api::plant::error_mapper::UNREADABLE_REQUEST_MESSAGE;
use crate::api::tags::ApiTags;

pub struct PlantApi {
    identify_use_case: Arc<dyn IdentifyPlantUseCase>,
}

impl PlantApi {
    pub fn new(identify_use_case: Arc<dyn IdentifyPlantUseCase>) -> Self {
        Self { identify_use_case }
    }
}

/// Plant identification API
#[OpenApi]
impl PlantApi {
    /// Identify a plant from a photo
    ///
    /// Uses a vision model to recognise the plant and returns care tips,
    /// benefits and placement advice in English and Tagalog. Photos without
    /// a plant, and identifications the model could not complete, answer
    /// with an `error` message instead of plant details.
    #[oai(path = "/api/identify-plant", method = "post", tag = "ApiTags::Plants")]
    async fn identify_plant(&self, body: Json<IdentifyPlantRequest>) -> IdentifyPlantResponse {
        let raw = body.0.photo_data_uri.unwrap_or_default();

        let image = match ImageInput::from_data_uri(&raw) {
            Ok(image) => image,
            Err(err) => {
                let (_, json) = err.into_error_response();
                return IdentifyPlantResponse::BadRequest(json);
            }
        };

        let result = self
            .identify_use_case
            .execute(IdentifyPlantParams { image })
            .await;

        IdentifyPlantResponse::Ok(Json(result.into()))
    }
}

#[derive(poem_openapi::ApiResponse)]
#[oai(bad_request_handler = "unreadable_request")]
pub enum IdentifyPlantResponse {
    #[oai(status = 200)]
    Ok(Json<IdentifyPlantBody>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}

/// Keeps malformed bodies on the same `{ "error": ... }` shape as every
/// other answer of this endpoint.
fn unreadable_request(err: poem::Error) -> IdentifyPlantResponse {
    tracing::debug!("Rejected identify-plant request body: {}", err);
    IdentifyPlantResponse::BadRequest(Json(ErrorResponse::new(UNREADABLE_REQUEST_MESSAGE)))
}
