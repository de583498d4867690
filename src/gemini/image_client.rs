use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::{
    error::{Result, VtoError},
    models::gemini::{
        Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, ImageConfig,
        Part,
    },
    models::{SynthesisRequest, SynthesisResponse},
    prompt,
};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Clone)]
pub struct ImageClient {
    http: reqwest::Client,
    api_key: String,
    default_model: String,
}

impl ImageClient {
    pub fn new(http: reqwest::Client, api_key: String, default_model: String) -> Self {
        Self {
            http,
            api_key,
            default_model,
        }
    }

    /// Send one or more file-backed images plus a trailing text prompt to the
    /// model and extract the first inline image of the first candidate.
    ///
    /// Transport errors, non-2xx statuses and imageless responses all come
    /// back as the same generation failure. Nothing is retried.
    pub async fn generate(&self, request: SynthesisRequest) -> Result<SynthesisResponse> {
        let model_id = request.model_id.as_deref().unwrap_or(&self.default_model);

        let mut parts = Vec::with_capacity(request.images.len() + 1);
        for path in &request.images {
            let bytes = tokio::fs::read(path).await.map_err(|e| {
                VtoError::Internal(format!("failed to read image {}: {}", path.display(), e))
            })?;
            parts.push(Part::inline_png(STANDARD.encode(&bytes)));
        }
        log::info!("Gemini - sending {} image(s)", request.images.len());
        parts.push(Part::text(request.prompt.clone()));

        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user".into(),
                parts,
            }],
            generation_config: Some(GenerationConfig {
                image_config: ImageConfig {
                    aspect_ratio: request
                        .aspect_ratio
                        .clone()
                        .unwrap_or_else(|| prompt::ASPECT_RATIO.into()),
                    image_size: request
                        .image_size
                        .clone()
                        .unwrap_or_else(|| prompt::IMAGE_SIZE.into()),
                },
            }),
        };

        log::info!("Generating image with model: {}", model_id);

        let url = format!("{}/models/{}:generateContent", GEMINI_API_BASE, model_id);
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                log::error!("Gemini request error: {}", e);
                VtoError::Generation(format!("Gemini request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            log::error!("Gemini API error: HTTP {} - {}", status, detail);
            return Err(VtoError::Generation(format!("Gemini error: HTTP {}", status)));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|e| {
            VtoError::Generation(format!("Gemini response parse error: {}", e))
        })?;

        let image_data = parsed
            .first_inline_image()
            .ok_or_else(|| VtoError::Generation("no image generated by Gemini".into()))?;

        Ok(SynthesisResponse {
            image_data: image_data.to_string(),
            model: model_id.to_string(),
        })
    }
}
