//! Restaurant lookup via search-grounded text generation
//!
//! Builds the fixed Korean query for restaurants near 광화문역, sends it
//! through a [`SearchGenerationService`], and parses the loosely-structured
//! `이름 | 주소` reply into at most three records. Lookup never fails the
//! request: any transport or parse problem degrades to an empty list.

use crate::ai::SearchGenerationService;
use crate::models::RestaurantRecord;
use crate::prompts;
use tracing::{debug, warn};

const MAX_RESTAURANTS: usize = 3;

/// Finds restaurants serving a given food near the fixed landmark.
pub struct RestaurantFinder {
    search: Box<dyn SearchGenerationService>,
}

impl RestaurantFinder {
    pub fn new(search: Box<dyn SearchGenerationService>) -> Self {
        Self { search }
    }

    /// Look up at most three restaurants serving `food`.
    ///
    /// Never errors: search failures are logged and yield an empty list,
    /// preserving the always-respond-with-something guarantee for the
    /// conversational part of the result.
    pub async fn find(&self, food: &str) -> Vec<RestaurantRecord> {
        let query = prompts::render(prompts::RESTAURANT_QUERY, &[("food", food)]);

        match self.search.search_text(&query).await {
            Ok(raw) => {
                debug!(food, raw, "restaurant search reply");
                parse_restaurant_lines(&raw)
            }
            Err(e) => {
                warn!(food, error = %e, "restaurant search failed; continuing without results");
                Vec::new()
            }
        }
    }
}

/// Strip a `digits + '.' | ')'` ordinal marker at the very start of the
/// line, if present. An indented ordinal is not a marker.
fn strip_ordinal(line: &str) -> &str {
    let after_digits = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if after_digits.len() < line.len() {
        if let Some(rest) = after_digits.strip_prefix(['.', ')']) {
            return rest;
        }
    }
    line
}

/// Parse `이름 | 주소` lines into records, dropping anything malformed.
///
/// Per line: strip the ordinal marker, strip `*` emphasis characters, trim,
/// then split at the first `|`. The `|` must not be the first character and
/// both sides must trim non-empty. Stops after three accepted records.
pub fn parse_restaurant_lines(raw: &str) -> Vec<RestaurantRecord> {
    let mut restaurants = Vec::new();

    for line in raw.lines() {
        let clean = strip_ordinal(line).replace('*', "");
        let clean = clean.trim();

        if let Some(idx) = clean.find('|') {
            if idx > 0 {
                let name = clean[..idx].trim();
                let address = clean[idx + 1..].trim();
                if !name.is_empty() && !address.is_empty() {
                    restaurants.push(RestaurantRecord {
                        name: name.to_string(),
                        address: address.to_string(),
                    });
                }
            }
        }

        if restaurants.len() == MAX_RESTAURANTS {
            break;
        }
    }

    restaurants
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::MockSearchClient;
    use pretty_assertions::assert_eq;

    fn record(name: &str, address: &str) -> RestaurantRecord {
        RestaurantRecord {
            name: name.to_string(),
            address: address.to_string(),
        }
    }

    #[test]
    fn test_parse_skips_garbage_and_strips_markup() {
        let raw = "1. Foo Bar | 123 Road\n2. **Baz** | 456 Ave\nGarbage line\n3. Qux | 789 Ln";

        assert_eq!(
            parse_restaurant_lines(raw),
            vec![
                record("Foo Bar", "123 Road"),
                record("Baz", "456 Ave"),
                record("Qux", "789 Ln"),
            ]
        );
    }

    #[test]
    fn test_parse_caps_at_three_records() {
        let raw = "1. A | a\n2. B | b\n3. C | c\n4. D | d";
        let parsed = parse_restaurant_lines(raw);

        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[2], record("C", "c"));
    }

    #[test]
    fn test_parse_accepts_paren_ordinals() {
        assert_eq!(
            parse_restaurant_lines("1) 광화문국밥 | 종로구 새문안로 12"),
            vec![record("광화문국밥", "종로구 새문안로 12")]
        );
    }

    #[test]
    fn test_parse_rejects_pipe_at_line_start() {
        assert!(parse_restaurant_lines("| only an address").is_empty());
    }

    #[test]
    fn test_parse_rejects_empty_name_or_address() {
        assert!(parse_restaurant_lines("** | 456 Ave").is_empty());
        assert!(parse_restaurant_lines("Foo |   ").is_empty());
    }

    #[test]
    fn test_parse_keeps_indented_ordinal_in_name() {
        // Only a column-0 ordinal counts as a marker.
        assert_eq!(
            parse_restaurant_lines("  1. Foo | 123 Road"),
            vec![record("1. Foo", "123 Road")]
        );
    }

    #[test]
    fn test_parse_keeps_ordinal_digits_without_marker() {
        // Digits not followed by '.' or ')' are part of the name.
        assert_eq!(
            parse_restaurant_lines("24시국밥 | 종로구 1번지"),
            vec![record("24시국밥", "종로구 1번지")]
        );
    }

    #[tokio::test]
    async fn test_find_parses_search_reply() {
        let search = MockSearchClient::new()
            .with_text_response("1. Foo Bar | 123 Road\n2. Baz | 456 Ave".to_string());
        let finder = RestaurantFinder::new(Box::new(search));

        let restaurants = finder.find("냉면").await;
        assert_eq!(
            restaurants,
            vec![record("Foo Bar", "123 Road"), record("Baz", "456 Ave")]
        );
    }

    #[tokio::test]
    async fn test_find_renders_food_into_query() {
        let search = MockSearchClient::new().with_text_response(String::new());
        let probe = search.clone();
        let finder = RestaurantFinder::new(Box::new(search));

        finder.find("냉면").await;

        let queries = probe.recorded_queries();
        assert_eq!(queries.len(), 1);
        assert!(queries[0].contains("\"냉면\""));
        assert!(queries[0].contains("광화문역"));
    }

    #[tokio::test]
    async fn test_find_absorbs_search_failure() {
        let search = MockSearchClient::new().with_failure();
        let finder = RestaurantFinder::new(Box::new(search));

        assert!(finder.find("냉면").await.is_empty());
    }
}
