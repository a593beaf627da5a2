//! XML rule set

use crate::error::Result;
use crate::syntax::rules::Rule;
use crate::syntax::tokens::ColorTag;

/// Create the XML rules
pub fn xml_rules() -> Result<Vec<Rule>> {
    Ok(vec![
        Rule::new("comment", r"(?s)<!--.*?-->", ColorTag::Comment)?,
        Rule::with_group("tag", r"</?\s*([A-Za-z_][A-Za-z0-9_:.-]*)", 1, ColorTag::Tag)?,
        Rule::with_group(
            "attr_name",
            r"\s([A-Za-z_:][A-Za-z0-9_:.-]*)\s*=",
            1,
            ColorTag::AttrName,
        )?
        .with_trailing_context(),
        Rule::new("attr_value", r#""[^"]*"|'[^']*'"#, ColorTag::AttrValue)?,
    ])
}
