//! Highlighter engine
//!
//! Runs a format's rules in order over the whole text and records every
//! colored range in application order. Overlaps are left in place; the
//! later range wins when the result is painted.

use super::format::Format;
use super::registry::RuleRegistry;
use super::style::StyledText;
use crate::error::Result;

/// Stateless (apart from configuration) highlighting engine
pub struct Highlighter {
    registry: RuleRegistry,
    /// Whether syntax highlighting is enabled
    enabled: bool,
}

impl Highlighter {
    /// Create a highlighter with the built-in rule sets
    pub fn new() -> Result<Self> {
        Ok(Self::with_registry(RuleRegistry::new()?))
    }

    /// Create a highlighter over a custom registry
    pub fn with_registry(registry: RuleRegistry) -> Self {
        Self {
            registry,
            enabled: true,
        }
    }

    /// Access the rule registry
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Mutable access to the rule registry
    pub fn registry_mut(&mut self) -> &mut RuleRegistry {
        &mut self.registry
    }

    /// Check whether highlighting is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable highlighting; disabled passes color nothing
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Highlight `text` as `format`
    pub fn highlight(&self, text: &str, format: Format) -> StyledText {
        let mut styled = StyledText::plain(text);
        if !self.enabled {
            return styled;
        }

        for rule in self.registry.rules_for(format) {
            for range in rule.ranges(text) {
                styled.apply(range);
            }
        }

        tracing::trace!(
            ?format,
            len = text.len(),
            ranges = styled.ranges().len(),
            "highlight pass"
        );
        styled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::ColorTag;
    use proptest::prelude::*;

    fn tags(styled: &StyledText) -> Vec<(String, ColorTag)> {
        styled
            .segments()
            .into_iter()
            .filter_map(|s| s.tag.map(|t| (styled.plain_text()[s.start..s.end].to_string(), t)))
            .collect()
    }

    #[test]
    fn test_plain_is_identity() {
        let h = Highlighter::new().unwrap();
        let styled = h.highlight(r#"{"a": true}"#, Format::Plain);
        assert_eq!(styled.plain_text(), r#"{"a": true}"#);
        assert!(styled.ranges().is_empty());
    }

    #[test]
    fn test_key_precedence() {
        let h = Highlighter::new().unwrap();
        let styled = h.highlight(r#"{"a": 1}"#, Format::Json);

        assert_eq!(styled.tag_at(1), Some(ColorTag::Key));
        assert_eq!(styled.tag_at(3), Some(ColorTag::Key));
        // The string rule still recorded its range first
        assert_eq!(styled.ranges()[0].tag, ColorTag::String);
        assert_eq!(
            tags(&styled),
            vec![("\"a\"".to_string(), ColorTag::Key), ("1".to_string(), ColorTag::Number)]
        );
    }

    #[test]
    fn test_json_document() {
        let h = Highlighter::new().unwrap();
        let styled = h.highlight(r#"{"n": -3.14e-2, "s": "x", "b": false, "z": null}"#, Format::Json);
        let tags = tags(&styled);

        assert!(tags.contains(&("-3.14e-2".to_string(), ColorTag::Number)));
        assert!(tags.contains(&("\"x\"".to_string(), ColorTag::String)));
        assert!(tags.contains(&("false".to_string(), ColorTag::Boolean)));
        assert!(tags.contains(&("null".to_string(), ColorTag::Boolean)));
    }

    #[test]
    fn test_nan_is_uncolored() {
        let h = Highlighter::new().unwrap();
        assert!(h.highlight("NaN", Format::Json).ranges().is_empty());
    }

    #[test]
    fn test_literal_inside_string_is_recolored() {
        let h = Highlighter::new().unwrap();
        let styled = h.highlight(r#"["is true"]"#, Format::Json);
        assert_eq!(styled.tag_at(2), Some(ColorTag::String));
        assert_eq!(styled.tag_at(5), Some(ColorTag::Boolean));
    }

    #[test]
    fn test_xml_comment_spanning_lines() {
        let h = Highlighter::new().unwrap();
        let text = "<!--\nhidden\n-->";
        let styled = h.highlight(text, Format::Xml);

        assert_eq!(styled.ranges().len(), 1);
        let range = styled.ranges()[0];
        assert_eq!((range.start, range.end, range.tag), (0, text.len(), ColorTag::Comment));
    }

    #[test]
    fn test_xml_document() {
        let h = Highlighter::new().unwrap();
        let styled = h.highlight(r#"<root id="1"><child/></root>"#, Format::Xml);
        assert_eq!(
            tags(&styled),
            vec![
                ("root".to_string(), ColorTag::Tag),
                ("id".to_string(), ColorTag::AttrName),
                ("\"1\"".to_string(), ColorTag::AttrValue),
                ("child".to_string(), ColorTag::Tag),
                ("root".to_string(), ColorTag::Tag),
            ]
        );
    }

    #[test]
    fn test_malformed_input_does_not_fail() {
        let h = Highlighter::new().unwrap();
        let styled = h.highlight(r#"{"open: [1, <a b='"#, Format::Json);
        assert_eq!(styled.tag_at(9), Some(ColorTag::Number));
        let styled = h.highlight("<a b='x <!-- open", Format::Xml);
        assert_eq!(styled.tag_at(1), Some(ColorTag::Tag));
    }

    #[test]
    fn test_disabled_colors_nothing() {
        let mut h = Highlighter::new().unwrap();
        h.set_enabled(false);
        assert!(h.highlight(r#"{"a": 1}"#, Format::Json).ranges().is_empty());
    }

    #[test]
    fn test_ranges_within_bounds() {
        let h = Highlighter::new().unwrap();
        let text = r#"{"ключ": "значение", "n": 1}"#;
        let styled = h.highlight(text, Format::Json);
        for range in styled.ranges() {
            assert!(range.start < range.end && range.end <= text.len());
            assert!(text.is_char_boundary(range.start) && text.is_char_boundary(range.end));
        }
    }

    proptest! {
        #[test]
        fn prop_highlight_is_idempotent(text in "[ -~\n]{0,64}", index in 0usize..3) {
            let h = Highlighter::new().unwrap();
            let format = Format::from_index(index).unwrap();
            let first = h.highlight(&text, format);
            let second = h.highlight(first.plain_text(), format);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_plain_has_no_ranges(text in "\\PC{0,64}") {
            let h = Highlighter::new().unwrap();
            prop_assert!(h.highlight(&text, Format::Plain).ranges().is_empty());
        }
    }
}
