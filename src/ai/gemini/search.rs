use super::client::GeminiHttpClient;
use super::types::{Content, GenerateContentResponse, Part};
use crate::ai::SearchGenerationService;
use crate::Result;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Serialize)]
struct SearchRequest {
    contents: Vec<Content>,
    tools: Vec<Tool>,
}

#[derive(Debug, Serialize)]
struct Tool {
    google_search: GoogleSearch,
}

#[derive(Debug, Serialize)]
struct GoogleSearch {}

/// Search-grounded text generation via Gemini's `google_search` tool.
pub struct GeminiSearchClient {
    http: GeminiHttpClient,
}

impl GeminiSearchClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::new_with_client(api_key, model, reqwest::Client::new())
    }

    pub fn new_with_client(api_key: String, model: String, client: reqwest::Client) -> Self {
        Self {
            http: GeminiHttpClient::new_with_client(
                api_key,
                model,
                Duration::from_secs(30),
                client,
            ),
        }
    }

    /// Joins the non-reasoning text parts of the first candidate.
    fn extract_text(response: &GenerateContentResponse) -> String {
        response
            .candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .filter_map(|p| match p {
                        Part::Text {
                            text,
                            thought: false,
                        } => Some(text.as_str()),
                        _ => None,
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .unwrap_or_default()
    }
}

super::impl_with_gemini_base_url!(GeminiSearchClient);

#[async_trait]
impl SearchGenerationService for GeminiSearchClient {
    async fn search_text(&self, query: &str) -> Result<String> {
        let request = SearchRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part::text(query)],
            }],
            tools: vec![Tool {
                google_search: GoogleSearch {},
            }],
        };

        let response: GenerateContentResponse = self.http.generate_content(&request).await?;
        Ok(Self::extract_text(&response))
    }
}
