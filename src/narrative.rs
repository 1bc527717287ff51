//! Narrative caption selection
//!
//! Chooses the conversational text returned with the image. Evaluated before
//! synthesis, so the caption never depends on the synthesis outcome.

use crate::models::RestaurantRecord;

const DEFAULT_NARRATIVE: &str =
    "데이터사이언스파트에서 근무하는 이창욱 선임과 점심 챗은 어때요? 🍱";

/// Select the narrative for a request.
///
/// No keyword: the fixed default invitation. Keyword with results: the
/// match message plus a 1-indexed list of up to three restaurants. Keyword
/// without results: the match message with a generic invitation.
pub fn compose(food: Option<&str>, restaurants: &[RestaurantRecord]) -> String {
    let Some(food) = food else {
        return DEFAULT_NARRATIVE.to_string();
    };

    if restaurants.is_empty() {
        return format!(
            "이창욱님도 {food}을(를) 좋아하세요! 🍱\n광화문역 근처에서 함께 드셔보는 건 어떨까요?"
        );
    }

    let list = restaurants
        .iter()
        .enumerate()
        .map(|(i, r)| format!("{}. {}\n   📍 {}", i + 1, r.name, r.address))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "이창욱님과 음식 취향이 같습니다! 🍱\n광화문역 근처 {food} 맛집 추천이에요:\n\n{list}\n\n함께 점심 어떨까요?"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(name: &str, address: &str) -> RestaurantRecord {
        RestaurantRecord {
            name: name.to_string(),
            address: address.to_string(),
        }
    }

    #[test]
    fn test_no_keyword_yields_default_narrative() {
        assert_eq!(compose(None, &[]), DEFAULT_NARRATIVE);
    }

    #[test]
    fn test_no_keyword_ignores_restaurants() {
        // Restaurants without a detected keyword cannot happen in the
        // pipeline, but the narrative choice only keys off the keyword.
        assert_eq!(compose(None, &[record("A", "a")]), DEFAULT_NARRATIVE);
    }

    #[test]
    fn test_keyword_without_restaurants() {
        let text = compose(Some("냉면"), &[]);
        assert_eq!(
            text,
            "이창욱님도 냉면을(를) 좋아하세요! 🍱\n광화문역 근처에서 함께 드셔보는 건 어떨까요?"
        );
    }

    #[test]
    fn test_keyword_with_restaurants_builds_numbered_list() {
        let restaurants = vec![
            record("Foo Bar", "123 Road"),
            record("Baz", "456 Ave"),
        ];
        let text = compose(Some("냉면"), &restaurants);

        assert_eq!(
            text,
            "이창욱님과 음식 취향이 같습니다! 🍱\n\
             광화문역 근처 냉면 맛집 추천이에요:\n\n\
             1. Foo Bar\n   📍 123 Road\n\
             2. Baz\n   📍 456 Ave\n\n\
             함께 점심 어떨까요?"
        );
    }
}
