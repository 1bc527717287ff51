//! Lunchmate - composes a couple portrait of the user and a fixed reference
//! subject, with an optional restaurant-recommendation caption.
//!
//! The pipeline detects a food keyword in the user's prompt, optionally looks
//! up nearby restaurants via a search-grounded Gemini call, then synthesizes
//! the composite photo via a multimodal Gemini call and returns both the
//! image and a narrative caption over a small HTTP API.

pub mod ai;
pub mod app;
pub mod compose;
pub mod error;
pub mod keywords;
pub mod models;
pub mod narrative;
pub mod prompts;
pub mod reference;
pub mod restaurants;
pub mod server;

pub use error::{Error, Result};
