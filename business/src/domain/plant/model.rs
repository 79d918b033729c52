use serde::{Deserialize, Serialize};

pub const NOT_A_PLANT_COMMON_NAME: &str = "Not a plant";
pub const NOT_APPLICABLE: &str = "Not applicable";
pub const NOT_A_PLANT_COMMON_NAME_TL: &str = "Hindi halaman";
pub const NOT_APPLICABLE_TL: &str = "Hindi angkop";

pub const ERROR_COMMON_NAME: &str = "Error identifying plant";
pub const ERROR_CARE_TIPS: &str = "Unable to provide care tips due to an error.";
pub const ERROR_BENEFITS: &str = "Unable to provide benefits due to an error.";
pub const ERROR_PLACEMENT: &str = "Unable to provide placement information due to an error.";
pub const ERROR_COMMON_NAME_TL: &str = "Hindi ma-identify ang halaman";
pub const ERROR_CARE_TIPS_TL: &str = "Hindi makakuha ng payo sa pag-aalaga dahil sa error.";
pub const ERROR_BENEFITS_TL: &str = "Hindi makakuha ng mga benepisyo dahil sa error.";
pub const ERROR_PLACEMENT_TL: &str =
    "Hindi makakuha ng impormasyon sa pagkakalagay dahil sa error.";

/// The plant/not-plant decision plus the names the model assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identification {
    pub is_plant: bool,
    pub common_name: String,
    pub latin_name: String,
}

/// Tagalog rendition of the descriptive fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagalogTranslation {
    pub common_name: String,
    pub care_tips: String,
    pub benefits: String,
    pub placement: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translations {
    pub tagalog: TagalogTranslation,
}

/// Bilingual description of a photographed plant.
///
/// The serialized shape is the exact JSON contract the model is asked to
/// produce, so a model answer deserializes straight into this type. Every key
/// is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentificationResult {
    pub identification: Identification,
    pub care_tips: String,
    pub benefits: String,
    pub placement: String,
    pub translations: Translations,
}

impl IdentificationResult {
    /// The answer expected when the photo does not show a plant.
    pub fn not_a_plant() -> Self {
        Self {
            identification: Identification {
                is_plant: false,
                common_name: NOT_A_PLANT_COMMON_NAME.to_string(),
                latin_name: NOT_APPLICABLE.to_string(),
            },
            care_tips: NOT_APPLICABLE.to_string(),
            benefits: NOT_APPLICABLE.to_string(),
            placement: NOT_APPLICABLE.to_string(),
            translations: Translations {
                tagalog: TagalogTranslation {
                    common_name: NOT_A_PLANT_COMMON_NAME_TL.to_string(),
                    care_tips: NOT_APPLICABLE_TL.to_string(),
                    benefits: NOT_APPLICABLE_TL.to_string(),
                    placement: NOT_APPLICABLE_TL.to_string(),
                },
            },
        }
    }

    /// Result returned whenever the model call or its answer is unusable.
    pub fn fallback() -> Self {
        Self {
            identification: Identification {
                is_plant: false,
                common_name: ERROR_COMMON_NAME.to_string(),
                latin_name: NOT_APPLICABLE.to_string(),
            },
            care_tips: ERROR_CARE_TIPS.to_string(),
            benefits: ERROR_BENEFITS.to_string(),
            placement: ERROR_PLACEMENT.to_string(),
            translations: Translations {
                tagalog: TagalogTranslation {
                    common_name: ERROR_COMMON_NAME_TL.to_string(),
                    care_tips: ERROR_CARE_TIPS_TL.to_string(),
                    benefits: ERROR_BENEFITS_TL.to_string(),
                    placement: ERROR_PLACEMENT_TL.to_string(),
                },
            },
        }
    }

    pub fn is_plant(&self) -> bool {
        self.identification.is_plant
    }

    pub fn tagalog(&self) -> &TagalogTranslation {
        &self.translations.tagalog
    }

    /// True when the fallback content is present.
    pub fn is_fallback(&self) -> bool {
        !self.is_plant() && self.identification.common_name == ERROR_COMMON_NAME
    }

    /// Checks that no descriptive field, English or Tagalog, is blank.
    pub fn is_well_formed(&self) -> bool {
        let tagalog = self.tagalog();
        [
            &self.identification.common_name,
            &self.identification.latin_name,
            &self.care_tips,
            &self.benefits,
            &self.placement,
            &tagalog.common_name,
            &tagalog.care_tips,
            &tagalog.benefits,
            &tagalog.placement,
        ]
        .iter()
        .all(|field| !field.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MONSTERA_JSON: &str = r#"{
        "identification": {
            "isPlant": true,
            "commonName": "Swiss cheese plant",
            "latinName": "Monstera deliciosa"
        },
        "careTips": "Water when the top soil is dry.",
        "benefits": "Purifies indoor air.",
        "placement": "Indoor, bright indirect light",
        "translations": {
            "tagalog": {
                "commonName": "Halamang Swiss cheese",
                "careTips": "Diligan kapag tuyo na ang ibabaw ng lupa.",
                "benefits": "Nililinis ang hangin sa loob ng bahay.",
                "placement": "Sa loob ng bahay, maliwanag na hindi direktang liwanag"
            }
        }
    }"#;

    #[test]
    fn should_deserialize_model_contract_with_camel_case_keys() {
        let result: IdentificationResult = serde_json::from_str(MONSTERA_JSON).unwrap();

        assert!(result.is_plant());
        assert_eq!(result.identification.latin_name, "Monstera deliciosa");
        assert_eq!(result.placement, "Indoor, bright indirect light");
        assert_eq!(result.tagalog().common_name, "Halamang Swiss cheese");
        assert!(result.is_well_formed());
    }

    #[test]
    fn should_reject_json_missing_required_keys() {
        let json = r#"{"identification":{"isPlant":true,"commonName":"Fern","latinName":"Polypodiopsida"},"careTips":"Mist daily."}"#;

        assert!(serde_json::from_str::<IdentificationResult>(json).is_err());
    }

    #[test]
    fn should_serialize_back_to_the_same_shape() {
        let result: IdentificationResult = serde_json::from_str(MONSTERA_JSON).unwrap();
        let value = serde_json::to_value(&result).unwrap();
        let expected: serde_json::Value = serde_json::from_str(MONSTERA_JSON).unwrap();

        assert_eq!(value, expected);
    }

    #[test]
    fn should_build_not_a_plant_result_with_sentinel_texts() {
        let result = IdentificationResult::not_a_plant();

        assert!(!result.is_plant());
        assert_eq!(result.identification.common_name, "Not a plant");
        assert_eq!(result.identification.latin_name, "Not applicable");
        assert_eq!(result.care_tips, "Not applicable");
        assert_eq!(result.benefits, "Not applicable");
        assert_eq!(result.placement, "Not applicable");
        assert_eq!(result.tagalog().common_name, "Hindi halaman");
        assert_eq!(result.tagalog().care_tips, "Hindi angkop");
        assert_eq!(result.tagalog().benefits, "Hindi angkop");
        assert_eq!(result.tagalog().placement, "Hindi angkop");
        assert!(result.is_well_formed());
        assert!(!result.is_fallback());
    }

    #[test]
    fn should_build_fallback_result_with_error_texts() {
        let result = IdentificationResult::fallback();

        assert!(!result.is_plant());
        assert!(result.is_fallback());
        assert_eq!(result.identification.common_name, "Error identifying plant");
        assert_eq!(result.identification.latin_name, "Not applicable");
        assert_eq!(
            result.care_tips,
            "Unable to provide care tips due to an error."
        );
        assert_eq!(
            result.tagalog().common_name,
            "Hindi ma-identify ang halaman"
        );
        assert!(result.is_well_formed());
    }

    #[test]
    fn should_flag_blank_fields_as_not_well_formed() {
        let mut result: IdentificationResult = serde_json::from_str(MONSTERA_JSON).unwrap();
        result.translations.tagalog.benefits = "  ".to_string();

        assert!(!result.is_well_formed());
    }
}
