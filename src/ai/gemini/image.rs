use super::client::GeminiHttpClient;
use super::types::{Content, GenerateContentResponse, InlineData, Part};
use crate::ai::ImageSynthesisService;
use crate::compose::CompositePart;
use crate::models::SynthesizedImage;
use crate::{Error, Result};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Serialize)]
struct SynthesisRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: SynthesisGenerationConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SynthesisGenerationConfig {
    response_modalities: Vec<String>,
    image_config: ImageConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageConfig {
    aspect_ratio: String,
    image_size: String,
}

/// Multimodal composite-photo synthesis via Gemini.
pub struct GeminiImageSynthesisClient {
    http: GeminiHttpClient,
}

impl GeminiImageSynthesisClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::new_with_client(api_key, model, reqwest::Client::new())
    }

    pub fn new_with_client(api_key: String, model: String, client: reqwest::Client) -> Self {
        Self {
            http: GeminiHttpClient::new_with_client(
                api_key,
                model,
                Duration::from_secs(120),
                client,
            ),
        }
    }

    fn to_wire_part(part: &CompositePart) -> Part {
        use base64::Engine as _;

        match part {
            CompositePart::Text(text) => Part::text(text.clone()),
            CompositePart::Image { bytes, mime_type } => Part::InlineData {
                inline_data: InlineData {
                    mime_type: mime_type.clone(),
                    data: base64::engine::general_purpose::STANDARD.encode(bytes),
                },
                thought: false,
            },
        }
    }
}

super::impl_with_gemini_base_url!(GeminiImageSynthesisClient);

#[async_trait]
impl ImageSynthesisService for GeminiImageSynthesisClient {
    async fn synthesize(&self, parts: &[CompositePart]) -> Result<SynthesizedImage> {
        let request = SynthesisRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: parts.iter().map(Self::to_wire_part).collect(),
            }],
            generation_config: SynthesisGenerationConfig {
                response_modalities: vec!["TEXT".to_string(), "IMAGE".to_string()],
                image_config: ImageConfig {
                    aspect_ratio: "1:1".to_string(),
                    image_size: "1K".to_string(),
                },
            },
        };

        let response: GenerateContentResponse = self.http.generate_content(&request).await?;

        // First non-reasoning inline part wins; no image part at all is a
        // distinct failure from a transport error.
        let image_data = response
            .candidates
            .first()
            .and_then(|c| {
                c.content.parts.iter().find_map(|p| match p {
                    Part::InlineData {
                        inline_data,
                        thought: false,
                    } => Some(inline_data),
                    _ => None,
                })
            })
            .ok_or(Error::EmptySynthesis)?;

        tracing::debug!(
            "Gemini returned image with mime_type: {}",
            image_data.mime_type
        );

        use base64::Engine as _;
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(&image_data.data)
            .map_err(|e| {
                Error::AiProvider(format!("Failed to decode Gemini base64 image: {}", e))
            })?;

        // An image part with no payload counts as no image at all.
        if bytes.is_empty() {
            return Err(Error::EmptySynthesis);
        }

        Ok(SynthesizedImage {
            bytes,
            mime_type: image_data.mime_type.clone(),
        })
    }
}
