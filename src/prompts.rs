pub const COMPOSITE_INSTRUCTION: &str =
    include_str!("../data/prompts/composite_instruction.txt");
pub const RESTAURANT_QUERY: &str = include_str!("../data/prompts/restaurant_query.txt");

/// Replace `{{key}}` placeholders in a template string.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        result = result.replace(&format!("{{{{{}}}}}", key), value);
    }
    result
}
