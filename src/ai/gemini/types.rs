//! Shared Gemini payload types used by the search and synthesis modules.

use serde::{Deserialize, Serialize};

/// Gemini content container used in both requests and responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

/// Untagged union of response/request parts.
///
/// Variant order matters for `#[serde(untagged)]` decoding: `Other` must
/// stay last so unknown part shapes (function calls, grounding stubs) decode
/// into a skippable catch-all instead of failing the whole response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
        #[serde(default, skip_serializing_if = "std::ops::Not::not")]
        thought: bool,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
        #[serde(default, skip_serializing_if = "std::ops::Not::not")]
        thought: bool,
    },
    Other(serde_json::Value),
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            thought: false,
        }
    }
}

/// Base64 inline payload used for image parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

/// Top-level `generateContent` response envelope.
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// Candidate completion item returned by Gemini.
#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Content,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_decodes_thought_flag() {
        let part: Part = serde_json::from_str(r#"{"text": "reasoning...", "thought": true}"#)
            .unwrap();
        assert!(matches!(part, Part::Text { thought: true, .. }));
    }

    #[test]
    fn test_part_thought_defaults_to_false() {
        let part: Part = serde_json::from_str(r#"{"text": "answer"}"#).unwrap();
        assert!(matches!(part, Part::Text { thought: false, .. }));
    }

    #[test]
    fn test_unknown_part_shape_decodes_as_other() {
        let part: Part =
            serde_json::from_str(r#"{"functionCall": {"name": "lookup"}}"#).unwrap();
        assert!(matches!(part, Part::Other(_)));
    }

    #[test]
    fn test_text_part_serializes_without_thought_field() {
        let json = serde_json::to_string(&Part::text("hello")).unwrap();
        assert_eq!(json, r#"{"text":"hello"}"#);
    }

    #[test]
    fn test_inline_data_round_trips_camel_case() {
        let part: Part = serde_json::from_str(
            r#"{"inlineData": {"mimeType": "image/png", "data": "QUJD"}}"#,
        )
        .unwrap();
        match part {
            Part::InlineData { inline_data, .. } => {
                assert_eq!(inline_data.mime_type, "image/png");
                assert_eq!(inline_data.data, "QUJD");
            }
            other => panic!("expected inline data part, got {:?}", other),
        }
    }
}
