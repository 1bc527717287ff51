//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.
//! Every error reaching the HTTP boundary is rendered as a
//! `500 {"error": ...}` JSON body; only restaurant-search failures are
//! absorbed before they get here.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("AI provider error: {0}")]
    AiProvider(String),

    /// The synthesis call succeeded but returned no image part. The message
    /// is the fixed user-facing copy shown in the client.
    #[error("이미지를 생성하지 못했습니다. 다시 시도해 주세요.")]
    EmptySynthesis,

    /// A reference portrait could not be read. Fatal: synthesis has no
    /// second subject without it.
    #[error("Reference asset error: {0}")]
    ReferenceAsset(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Generic error: {0}")]
    Generic(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        error!(error = %self, "generation request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
