//! HTTP boundary: one JSON endpoint over the generation pipeline.
//!
//! `POST /api/generate` takes `{prompt?, imageData?, mimeType?}` and returns
//! `200 {image, mimeType, text}` or `500 {"error": ...}` (every pipeline
//! failure maps to 500 via [`Error::into_response`]).

use crate::app::App;
use crate::models::{GenerationRequest, InlineImage};
use crate::{Error, Result};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

/// Assumed format for uploads whose magic bytes match nothing we know.
const FALLBACK_UPLOAD_MIME: &str = "image/png";

/// Identify an uploaded photo by its magic bytes.
///
/// Covers the formats browsers actually submit (JPEG, PNG, WebP); anything
/// else is `None` and the caller picks the fallback.
fn sniff_upload_mime(bytes: &[u8]) -> Option<&'static str> {
    match bytes {
        [0xFF, 0xD8, 0xFF, ..] => Some("image/jpeg"),
        [0x89, b'P', b'N', b'G', ..] => Some("image/png"),
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => Some("image/webp"),
        _ => None,
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub prompt: Option<String>,
    pub image_data: Option<String>,
    pub mime_type: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub image: String,
    pub mime_type: String,
    pub text: String,
}

impl GenerateRequest {
    /// Decode the wire body into a pipeline request.
    ///
    /// A missing `mimeType` next to present `imageData` is filled in by
    /// sniffing the decoded bytes; invalid base64 is a request failure.
    fn into_generation_request(self) -> Result<GenerationRequest> {
        let user_image = match self.image_data {
            Some(data) => {
                let bytes = base64::engine::general_purpose::STANDARD
                    .decode(&data)
                    .map_err(|e| Error::InvalidRequest(format!("invalid image data: {}", e)))?;
                let mime_type = match self.mime_type {
                    Some(mime) => mime,
                    None => sniff_upload_mime(&bytes)
                        .unwrap_or_else(|| {
                            warn!(
                                "unrecognized upload format (first bytes: {:02X?}); assuming {}",
                                &bytes[..bytes.len().min(4)],
                                FALLBACK_UPLOAD_MIME
                            );
                            FALLBACK_UPLOAD_MIME
                        })
                        .to_string(),
                };
                Some(InlineImage { bytes, mime_type })
            }
            None => None,
        };

        Ok(GenerationRequest {
            prompt: self.prompt,
            user_image,
        })
    }
}

/// Build the application router.
pub fn router(app: Arc<App>) -> Router {
    Router::new()
        .route("/api/generate", post(generate))
        .layer(TraceLayer::new_for_http())
        .with_state(app)
}

async fn generate(
    State(app): State<Arc<App>>,
    body: std::result::Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>> {
    // A body that fails extraction still gets the JSON error envelope.
    let Json(body) =
        body.map_err(|e| Error::InvalidRequest(format!("invalid request body: {}", e)))?;

    debug!(
        has_prompt = body.prompt.is_some(),
        has_image = body.image_data.is_some(),
        "generation request received"
    );

    let request = body.into_generation_request()?;
    let result = app.generate(request).await?;

    Ok(Json(GenerateResponse {
        image: base64::engine::general_purpose::STANDARD.encode(&result.image_bytes),
        mime_type: result.mime_type,
        text: result.narrative,
    }))
}
