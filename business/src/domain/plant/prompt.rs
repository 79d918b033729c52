use super::model::{
    NOT_A_PLANT_COMMON_NAME, NOT_A_PLANT_COMMON_NAME_TL, NOT_APPLICABLE, NOT_APPLICABLE_TL,
};

/// JSON shape the model must reproduce, keys and nesting included.
pub const RESPONSE_TEMPLATE: &str = r#"{
  "identification": {
    "isPlant": boolean,
    "commonName": "string",
    "latinName": "string"
  },
  "careTips": "string",
  "benefits": "string",
  "placement": "string",
  "translations": {
    "tagalog": {
      "commonName": "string",
      "careTips": "string",
      "benefits": "string",
      "placement": "string"
    }
  }
}"#;

/// Builds the instruction sent alongside the photo.
///
/// The text is static: persona, the plant/not-plant decision, the fixed
/// sentinel answers for the negative branch, the fields required for the
/// positive branch and finally the literal response template.
pub fn build_identification_prompt() -> String {
    format!(
        r#"You are an expert botanist. You will identify the plant in the photo and provide detailed information about it.

Your response must be in JSON format and strictly adhere to the output schema.

First, determine if the image provided is a plant. Set the 'isPlant' field in the 'identification' object accordingly.

If it is NOT a plant:
- Set 'identification.isPlant' to false.
- Set 'identification.commonName' to "{not_a_plant}".
- Set 'identification.latinName' to "{not_applicable}".
- Set 'careTips', 'benefits', and 'placement' to "{not_applicable}".
- In 'translations.tagalog':
    - Set 'commonName' to "{not_a_plant_tl}".
    - Set 'careTips', 'benefits', and 'placement' to "{not_applicable_tl}".

If it IS a plant:
- Set 'identification.isPlant' to true.
- Proceed to identify it and provide all requested English details:
    - 'identification.commonName': The plant's common name.
    - 'identification.latinName': The plant's Latin name.
    - 'careTips': Detailed care tips.
    - 'benefits': Its benefits (e.g., air purification, medicinal uses, aesthetic appeal).
    - 'placement': Whether it is better suited for indoor or outdoor placement, including any specific conditions (e.g., "Indoor, bright indirect light", "Outdoor, full sun").
- Additionally, translate the common name, care tips, benefits, and placement information into Tagalog/Filipino. Provide these translations in the 'translations.tagalog' object. Every field must be filled in.

Return only valid JSON that matches this exact structure, with no text before or after it:
{template}"#,
        not_a_plant = NOT_A_PLANT_COMMON_NAME,
        not_applicable = NOT_APPLICABLE,
        not_a_plant_tl = NOT_A_PLANT_COMMON_NAME_TL,
        not_applicable_tl = NOT_APPLICABLE_TL,
        template = RESPONSE_TEMPLATE,
    )
}
