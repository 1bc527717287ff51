//! Pipeline orchestration for one generation request.

use crate::ai::{
    GeminiImageSynthesisClient, GeminiSearchClient, ImageSynthesisService,
    SearchGenerationService,
};
use crate::keywords::KeywordDetector;
use crate::models::{Config, GenerationRequest, GenerationResult};
use crate::narrative;
use crate::reference::ReferenceImageStore;
use crate::restaurants::RestaurantFinder;
use crate::Result;
use rand::thread_rng;
use tracing::info;

/// Sequences the generation pipeline: detect food → (maybe) find
/// restaurants → compose narrative → pick reference → build composite
/// parts → synthesize → assemble result.
///
/// Holds no mutable state beyond the injected services, so one instance can
/// serve concurrent requests.
pub struct App {
    detector: KeywordDetector,
    reference: ReferenceImageStore,
    finder: RestaurantFinder,
    synthesis: Box<dyn ImageSynthesisService>,
}

/// Injectable service bundle used to construct [`App`] in tests/harnesses.
pub struct AppServices {
    pub search: Box<dyn SearchGenerationService>,
    pub synthesis: Box<dyn ImageSynthesisService>,
    pub reference: ReferenceImageStore,
}

impl App {
    /// Build an app from concrete service dependencies.
    pub fn with_services(services: AppServices) -> Self {
        Self {
            detector: KeywordDetector::new(),
            reference: services.reference,
            finder: RestaurantFinder::new(services.search),
            synthesis: services.synthesis,
        }
    }

    /// Construct an app wired to the real Gemini services.
    pub fn new(config: &Config) -> Self {
        // Reuse one HTTP connection pool across both Gemini clients.
        let http_client = reqwest::Client::new();

        info!(
            search_model = %config.search_model,
            image_model = %config.image_model,
            "Gemini clients configured"
        );

        let search = Box::new(GeminiSearchClient::new_with_client(
            config.gemini_api_key.clone(),
            config.search_model.clone(),
            http_client.clone(),
        ));
        let synthesis = Box::new(GeminiImageSynthesisClient::new_with_client(
            config.gemini_api_key.clone(),
            config.image_model.clone(),
            http_client,
        ));

        Self::with_services(AppServices {
            search,
            synthesis,
            reference: ReferenceImageStore::new(config.reference_dir.clone()),
        })
    }

    /// Run the full pipeline for one request.
    ///
    /// Restaurant lookup failures never surface; reference-asset and
    /// synthesis failures do.
    pub async fn generate(&self, request: GenerationRequest) -> Result<GenerationResult> {
        let food = request
            .prompt
            .as_deref()
            .and_then(|prompt| self.detector.detect(prompt));

        let restaurants = match food {
            Some(food) => {
                info!(food, "food keyword detected, looking up restaurants");
                self.finder.find(food).await
            }
            None => Vec::new(),
        };

        // The caption is fixed before synthesis so it never depends on the
        // synthesis outcome.
        let narrative = narrative::compose(food, &restaurants);

        let picked = self.reference.pick(&mut thread_rng());
        let reference = self.reference.load(picked)?;

        let parts = crate::compose::build_instruction_set(request.user_image.as_ref(), &reference);
        let image = self.synthesis.synthesize(&parts).await?;

        info!(
            reference = picked.file,
            restaurants = restaurants.len(),
            image_bytes = image.bytes.len(),
            "generation complete"
        );

        Ok(GenerationResult {
            image_bytes: image.bytes,
            mime_type: image.mime_type,
            narrative,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{App, AppServices};
    use crate::ai::{MockImageSynthesisClient, MockSearchClient};
    use crate::compose::CompositePart;
    use crate::models::{GenerationRequest, InlineImage};
    use crate::reference::{ReferenceImageStore, REFERENCE_IMAGES};
    use crate::Error;

    fn reference_store() -> (tempfile::TempDir, ReferenceImageStore) {
        let dir = tempfile::tempdir().unwrap();
        for image in REFERENCE_IMAGES {
            std::fs::write(dir.path().join(image.file), [0xFF, 0xD8, 0xFF, 0xE0]).unwrap();
        }
        let store = ReferenceImageStore::new(dir.path());
        (dir, store)
    }

    fn build_app(
        search: MockSearchClient,
        synthesis: MockImageSynthesisClient,
    ) -> (tempfile::TempDir, App) {
        let (dir, reference) = reference_store();
        let app = App::with_services(AppServices {
            search: Box::new(search),
            synthesis: Box::new(synthesis),
            reference,
        });
        (dir, app)
    }

    #[tokio::test]
    async fn test_generate_with_detected_food_and_restaurants() {
        let search = MockSearchClient::new()
            .with_text_response("1. Foo Bar | 123 Road\n2. Baz | 456 Ave".to_string());
        let synthesis =
            MockImageSynthesisClient::new().with_image_response(vec![1, 2, 3], "image/png");
        let (_dir, app) = build_app(search, synthesis);

        let result = app
            .generate(GenerationRequest {
                prompt: Some("오늘 냉면 먹을래요".to_string()),
                user_image: None,
            })
            .await
            .unwrap();

        assert_eq!(result.image_bytes, vec![1, 2, 3]);
        assert_eq!(result.mime_type, "image/png");
        assert!(result.narrative.contains("냉면 맛집 추천이에요"));
        assert!(result.narrative.contains("1. Foo Bar"));
        assert!(result.narrative.contains("2. Baz"));
        assert!(result.narrative.contains("456 Ave"));
    }

    #[tokio::test]
    async fn test_generate_without_keyword_skips_search() {
        let search = MockSearchClient::new();
        let probe = search.clone();
        let (_dir, app) = build_app(search, MockImageSynthesisClient::new());

        let result = app
            .generate(GenerationRequest {
                prompt: Some("오늘 날씨가 좋네요".to_string()),
                user_image: None,
            })
            .await
            .unwrap();

        assert_eq!(probe.get_call_count(), 0);
        assert!(result.narrative.contains("점심 챗은 어때요"));
    }

    #[tokio::test]
    async fn test_generate_with_empty_request_still_synthesizes() {
        let (_dir, app) = build_app(MockSearchClient::new(), MockImageSynthesisClient::new());

        let result = app.generate(GenerationRequest::default()).await.unwrap();
        assert!(!result.image_bytes.is_empty());
    }

    #[tokio::test]
    async fn test_generate_orders_composite_parts() {
        let synthesis = MockImageSynthesisClient::new();
        let probe = synthesis.clone();
        let (_dir, app) = build_app(MockSearchClient::new(), synthesis);

        app.generate(GenerationRequest {
            prompt: None,
            user_image: Some(InlineImage {
                bytes: vec![7, 7, 7],
                mime_type: "image/png".to_string(),
            }),
        })
        .await
        .unwrap();

        let recorded = probe.recorded_parts();
        assert_eq!(recorded.len(), 1);
        let parts = &recorded[0];
        assert_eq!(parts.len(), 3);
        assert!(matches!(&parts[0], CompositePart::Text(_)));
        assert!(
            matches!(&parts[1], CompositePart::Image { bytes, .. } if bytes == &vec![7, 7, 7])
        );
        assert!(
            matches!(&parts[2], CompositePart::Image { mime_type, .. } if mime_type == "image/jpeg")
        );
    }

    #[tokio::test]
    async fn test_generate_search_failure_degrades_to_no_list() {
        let search = MockSearchClient::new().with_failure();
        let (_dir, app) = build_app(search, MockImageSynthesisClient::new());

        let result = app
            .generate(GenerationRequest {
                prompt: Some("냉면 먹자".to_string()),
                user_image: None,
            })
            .await
            .unwrap();

        // Keyword matched but no restaurants: the no-list variant.
        assert!(result.narrative.contains("냉면을(를) 좋아하세요"));
        assert!(!result.narrative.contains("1."));
    }

    #[tokio::test]
    async fn test_generate_empty_synthesis_fails_despite_restaurants() {
        let search =
            MockSearchClient::new().with_text_response("1. Foo | 123 Road".to_string());
        let synthesis = MockImageSynthesisClient::new().with_empty_result();
        let (_dir, app) = build_app(search, synthesis);

        let err = app
            .generate(GenerationRequest {
                prompt: Some("냉면 먹자".to_string()),
                user_image: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, Error::EmptySynthesis));
    }

    #[tokio::test]
    async fn test_generate_missing_reference_asset_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        // No portrait files written: every pick will fail to load.
        let app = App::with_services(AppServices {
            search: Box::new(MockSearchClient::new()),
            synthesis: Box::new(MockImageSynthesisClient::new()),
            reference: ReferenceImageStore::new(dir.path()),
        });

        let err = app.generate(GenerationRequest::default()).await.unwrap_err();
        assert!(matches!(err, Error::ReferenceAsset(_)));
    }
}
