//! Food keyword detection
//!
//! Scans the user prompt for the first vocabulary entry contained in it.
//! The vocabulary is ordered, and declaration order is the only precedence:
//! a short term declared before a longer one that contains it (e.g. `갈비`
//! before `갈비탕`) wins even when the prompt spells out the longer term.
//! There is deliberately no tokenization or word-boundary check.

/// Food vocabulary, in matching-precedence order.
pub const FOOD_KEYWORDS: &[&str] = &[
    "쌀국수", "국밥", "한정식", "삼겹살", "갈비", "갈비탕", "설렁탕", "곰탕",
    "냉면", "칼국수", "순대", "떡볶이", "김밥", "비빔밥", "된장찌개", "김치찌개",
    "순두부", "부대찌개", "감자탕", "해장국", "추어탕", "삼계탕",
    "족발", "보쌈", "낙지", "해물", "조개", "꽃게", "굴",
    "라멘", "우동", "소바", "돈까스", "초밥", "회", "오마카세",
    "치킨", "피자", "파스타", "스테이크", "햄버거", "샐러드",
    "마라탕", "마라", "샤브샤브", "훠궈", "짜장면", "짬뽕", "탕수육", "볶음밥",
    "쌀밥", "덮밥", "카레", "규동", "라면", "만두", "교자",
    "베트남", "태국", "인도", "멕시칸", "이탈리안", "프렌치",
    "불고기", "제육", "오겹살", "목살", "항정살",
];

/// Detects food keywords by ordered substring containment.
pub struct KeywordDetector {
    vocabulary: Vec<String>,
}

impl KeywordDetector {
    /// Build a detector over the fixed product vocabulary.
    pub fn new() -> Self {
        Self::with_vocabulary(FOOD_KEYWORDS.iter().map(|k| k.to_string()).collect())
    }

    /// Build a detector over a custom vocabulary, in precedence order.
    pub fn with_vocabulary(vocabulary: Vec<String>) -> Self {
        Self { vocabulary }
    }

    /// Returns the first vocabulary entry that is a substring of `prompt`.
    pub fn detect(&self, prompt: &str) -> Option<&str> {
        self.vocabulary
            .iter()
            .find(|keyword| prompt.contains(keyword.as_str()))
            .map(|keyword| keyword.as_str())
    }
}

impl Default for KeywordDetector {
    fn default() -> Self {
        Self::new()
    }
}
