pub mod client;
pub mod image;
pub mod search;
pub mod types;

pub use image::GeminiImageSynthesisClient;
pub use search::GeminiSearchClient;

/// Generates a `#[cfg(test)] with_base_url` constructor for a client that
/// wraps a `GeminiHttpClient` in a field named `http`.
macro_rules! impl_with_gemini_base_url {
    ($client:ty) => {
        #[cfg(test)]
        impl $client {
            pub(crate) fn with_base_url(mut self, base_url: String) -> Self {
                self.http = self.http.with_base_url(base_url);
                self
            }
        }
    };
}

pub(crate) use impl_with_gemini_base_url;

#[cfg(test)]
pub(crate) mod test_support {
    use wiremock::matchers::{method, path_regex};
    use wiremock::{Mock, MockBuilder};

    pub const GENERATE_CONTENT_PATH_REGEX: &str = r"/v1beta/models/.+:generateContent";

    pub fn post_path_regex(pattern: &str) -> MockBuilder {
        Mock::given(method("POST")).and(path_regex(pattern))
    }
}
