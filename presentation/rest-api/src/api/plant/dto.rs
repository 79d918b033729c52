use poem_openapi::{Object, Union};

use business::domain::plant::model::IdentificationResult;

use crate::api::error::ErrorResponse;

pub const NOT_A_PLANT_MESSAGE: &str = "This image does not contain a plant.";

/// Request to identify the plant in a photo.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct IdentifyPlantRequest {
    /// Photo encoded as a data URI, e.g. `data:image/jpeg;base64,...`
    pub photo_data_uri: Option<String>,
}

/// Tagalog view of an identified plant.
#[derive(Debug, Clone, PartialEq, Object)]
#[oai(rename_all = "camelCase")]
pub struct TagalogPlantDetailsResponse {
    pub name: String,
    pub common_name: String,
    pub description: String,
    pub care_tips: String,
    pub care_instructions: String,
    pub benefits: String,
    pub placement: String,
    pub fun_facts: Vec<String>,
}

/// Identified plant, English fields at the top level.
#[derive(Debug, Clone, PartialEq, Object)]
#[oai(rename_all = "camelCase")]
pub struct PlantDetailsResponse {
    /// Latin name
    pub name: String,
    pub common_name: String,
    pub description: String,
    pub care_info: String,
    pub care_tips: String,
    pub benefits: String,
    /// Indoor/outdoor placement and light conditions
    pub placement: String,
    pub tagalog: TagalogPlantDetailsResponse,
}

impl From<IdentificationResult> for PlantDetailsResponse {
    fn from(result: IdentificationResult) -> Self {
        let identification = result.identification;
        let tagalog = result.translations.tagalog;

        Self {
            description: format!("{} is a plant species.", identification.common_name),
            name: identification.latin_name,
            common_name: identification.common_name,
            care_info: result.care_tips.clone(),
            care_tips: result.care_tips,
            benefits: result.benefits,
            placement: result.placement,
            tagalog: TagalogPlantDetailsResponse {
                name: tagalog.common_name.clone(),
                description: format!("Ang {} ay isang uri ng halaman.", tagalog.common_name),
                common_name: tagalog.common_name,
                care_instructions: tagalog.care_tips.clone(),
                care_tips: tagalog.care_tips,
                benefits: tagalog.benefits,
                placement: tagalog.placement,
                fun_facts: Vec::new(),
            },
        }
    }
}

/// Body of a completed identification: either the plant details or a
/// message explaining that no plant was recognised.
#[derive(Debug, Clone, PartialEq, Union)]
#[oai(one_of)]
pub enum IdentifyPlantBody {
    Plant(PlantDetailsResponse),
    NotAPlant(ErrorResponse),
}

impl From<IdentificationResult> for IdentifyPlantBody {
    fn from(result: IdentificationResult) -> Self {
        if result.is_plant() {
            IdentifyPlantBody::Plant(result.into())
        } else {
            IdentifyPlantBody::NotAPlant(ErrorResponse::new(NOT_A_PLANT_MESSAGE))
        }
    }
}
