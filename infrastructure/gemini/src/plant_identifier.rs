use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use business::domain::plant::errors::ModelError;
use business::domain::plant::image::ImageInput;
use business::domain::plant::services::PlantVisionModel;

use crate::client::GeminiClient;

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

pub struct PlantIdentifierGemini {
    client: GeminiClient,
}

impl PlantIdentifierGemini {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    /// Builds a single-turn request: the instruction text followed by the
    /// photo as an inline base64 part.
    fn build_request_body(prompt: &str, image: &ImageInput) -> serde_json::Value {
        json!({
            "contents": [
                {
                    "parts": [
                        {"text": prompt},
                        {
                            "inline_data": {
                                "mime_type": image.mime_type(),
                                "data": image.to_base64(),
                            }
                        },
                    ]
                }
            ],
            "generationConfig": {
                "temperature": 0.1,
            },
        })
    }

    /// Joins the text parts of the first candidate.
    fn extract_text(data: &GenerateContentResponse) -> Result<String, ModelError> {
        let parts = data
            .candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| &content.parts)
            .ok_or(ModelError::EmptyResponse)?;

        let text = parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect::<Vec<_>>()
            .join("\n");

        if text.trim().is_empty() {
            return Err(ModelError::EmptyResponse);
        }

        Ok(text)
    }
}

#[async_trait]
impl PlantVisionModel for PlantIdentifierGemini {
    async fn generate(&self, prompt: &str, image: &ImageInput) -> Result<String, ModelError> {
        let body = Self::build_request_body(prompt, image);

        let response = self
            .client
            .client
            .post(self.client.generate_content_url())
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.client.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| ModelError::Request(err.to_string()))?;

        if !response.status().is_success() {
            return Err(ModelError::Status(response.status().as_u16()));
        }

        let data: GenerateContentResponse = response
            .json()
            .await
            .map_err(|_| ModelError::MalformedResponse)?;

        Self::extract_text(&data)
    }
}
