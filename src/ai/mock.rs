//! Builder-style mock services for tests.
//!
//! Mocks cycle through configured responses, count calls, and record what
//! they were called with so tests can assert on ordering and content.

use super::{ImageSynthesisService, SearchGenerationService};
use crate::compose::CompositePart;
use crate::models::SynthesizedImage;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct MockSearchClient {
    text_responses: Arc<Mutex<Vec<String>>>,
    queries: Arc<Mutex<Vec<String>>>,
    fail: Arc<Mutex<bool>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockSearchClient {
    pub fn new() -> Self {
        Self {
            text_responses: Arc::new(Mutex::new(Vec::new())),
            queries: Arc::new(Mutex::new(Vec::new())),
            fail: Arc::new(Mutex::new(false)),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_text_response(self, response: String) -> Self {
        self.text_responses.lock().unwrap().push(response);
        self
    }

    /// Every call fails with an AI provider error.
    pub fn with_failure(self) -> Self {
        *self.fail.lock().unwrap() = true;
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    pub fn recorded_queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

impl Default for MockSearchClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SearchGenerationService for MockSearchClient {
    async fn search_text(&self, query: &str) -> Result<String> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;
        self.queries.lock().unwrap().push(query.to_string());

        if *self.fail.lock().unwrap() {
            return Err(Error::AiProvider("mock search failure".to_string()));
        }

        let responses = self.text_responses.lock().unwrap();
        if responses.is_empty() {
            Ok(String::new())
        } else {
            let index = (*count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}

#[derive(Clone)]
pub struct MockImageSynthesisClient {
    image_responses: Arc<Mutex<Vec<SynthesizedImage>>>,
    recorded_parts: Arc<Mutex<Vec<Vec<CompositePart>>>>,
    empty_result: Arc<Mutex<bool>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockImageSynthesisClient {
    pub fn new() -> Self {
        Self {
            image_responses: Arc::new(Mutex::new(Vec::new())),
            recorded_parts: Arc::new(Mutex::new(Vec::new())),
            empty_result: Arc::new(Mutex::new(false)),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_image_response(self, bytes: Vec<u8>, mime_type: &str) -> Self {
        self.image_responses.lock().unwrap().push(SynthesizedImage {
            bytes,
            mime_type: mime_type.to_string(),
        });
        self
    }

    /// Every call fails with `EmptySynthesis`, as if the response carried
    /// no image part.
    pub fn with_empty_result(self) -> Self {
        *self.empty_result.lock().unwrap() = true;
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Part sequences received so far, in call order.
    pub fn recorded_parts(&self) -> Vec<Vec<CompositePart>> {
        self.recorded_parts.lock().unwrap().clone()
    }
}

impl Default for MockImageSynthesisClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageSynthesisService for MockImageSynthesisClient {
    async fn synthesize(&self, parts: &[CompositePart]) -> Result<SynthesizedImage> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;
        self.recorded_parts.lock().unwrap().push(parts.to_vec());

        if *self.empty_result.lock().unwrap() {
            return Err(Error::EmptySynthesis);
        }

        let responses = self.image_responses.lock().unwrap();
        if responses.is_empty() {
            // Return a tiny valid PNG as default
            Ok(SynthesizedImage {
                bytes: vec![
                    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, // PNG signature
                    0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52, // IHDR chunk
                    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, // 1x1 pixel
                    0x08, 0x02, 0x00, 0x00, 0x00, 0x90, 0x77, 0x53, 0xDE, 0x00, 0x00, 0x00,
                    0x0C, 0x49, 0x44, 0x41, // IDAT chunk
                    0x54, 0x08, 0x99, 0x63, 0xF8, 0xCF, 0xC0, 0x00, 0x00, 0x00, 0x01, 0x00,
                    0x01, 0xE2, 0x25, 0x00, 0xBC, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45,
                    0x4E, // IEND chunk
                    0x44, 0xAE, 0x42, 0x60, 0x82,
                ],
                mime_type: "image/png".to_string(),
            })
        } else {
            let index = (*count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}
