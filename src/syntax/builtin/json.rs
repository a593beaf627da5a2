//! JSON rule set

use crate::error::Result;
use crate::syntax::rules::Rule;
use crate::syntax::tokens::ColorTag;

/// Double-quoted run allowing backslash escapes
const STRING: &str = r#""(?:\\.|[^"])*""#;

/// Create the JSON rules
pub fn json_rules() -> Result<Vec<Rule>> {
    Ok(vec![
        Rule::new("string", STRING, ColorTag::String)?,
        // Strings followed by a colon are object keys; recolors the string
        Rule::with_group("key", &format!(r"({})\s*:", STRING), 1, ColorTag::Key)?
            .with_trailing_context(),
        Rule::new(
            "number",
            r"-?(?:0|[1-9][0-9]*)(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?",
            ColorTag::Number,
        )?,
        Rule::new("literal", r"\b(?:true|false|null)\b", ColorTag::Boolean)?,
    ])
}
