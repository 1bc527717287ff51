//! Data models and structures
//!
//! Defines the core data structures passed through the generation pipeline
//! plus the environment-backed server configuration.

use std::path::PathBuf;

/// An image carried inline through the pipeline as raw bytes.
///
/// Base64 encoding only happens at the Gemini wire boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

/// One generation request, after the HTTP layer has decoded the body.
///
/// Both fields may be absent: the pipeline then falls back to the default
/// narrative and synthesizes using only the reference portrait.
#[derive(Debug, Clone, Default)]
pub struct GenerationRequest {
    pub prompt: Option<String>,
    pub user_image: Option<InlineImage>,
}

/// A restaurant parsed out of the search reply. Name and address are both
/// non-empty after trimming; a result set holds at most three of these in
/// order of appearance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantRecord {
    pub name: String,
    pub address: String,
}

/// Output of one image-synthesis call. `bytes` is non-empty by construction:
/// a response without an image part is an error, never an empty value.
#[derive(Debug, Clone)]
pub struct SynthesizedImage {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

/// Final result of one pipeline run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub image_bytes: Vec<u8>,
    pub mime_type: String,
    pub narrative: String,
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub search_model: String,
    pub image_model: String,
    pub reference_dir: PathBuf,
    pub bind_address: String,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .map_err(|_| crate::Error::Generic("GEMINI_API_KEY not set".to_string()))?,
            search_model: std::env::var("SEARCH_MODEL")
                .unwrap_or_else(|_| "gemini-2.0-flash".to_string()),
            image_model: std::env::var("IMAGE_MODEL")
                .unwrap_or_else(|_| "gemini-3-pro-image-preview".to_string()),
            reference_dir: std::env::var("REFERENCE_IMAGE_DIR")
                .unwrap_or_else(|_| "data/reference".to_string())
                .into(),
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
        })
    }
}
