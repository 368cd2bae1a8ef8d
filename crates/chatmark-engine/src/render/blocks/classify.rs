use crate::render::types::CalloutKind;

use super::kinds::{BlockQuote, Callout, Heading, ListMarker, Rule};

/// Classification of a single line of a plain-text run, local facts only.
///
/// Fences and tables are recognized by the segmenter before lines reach
/// this point, so those shapes never appear here.
#[derive(Debug, Clone, PartialEq)]
pub enum LineClass<'a> {
    Blank,
    Heading { level: u8, text: &'a str },
    Bullet { text: &'a str },
    Ordered { number: &'a str, text: &'a str },
    Quote { text: &'a str },
    Rule,
    Callout { kind: CalloutKind, text: &'a str },
    Text(&'a str),
}

/// Classifies one line. Precedence: rule and heading, then list items and
/// quotes, then callout markers; callouts outrank only plain paragraphs.
pub fn classify(line: &str) -> LineClass<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineClass::Blank;
    }
    if Rule::is(trimmed) {
        return LineClass::Rule;
    }
    if let Some((level, text)) = Heading::parse(trimmed) {
        return LineClass::Heading { level, text };
    }
    if let Some((number, text)) = ListMarker::ordered(trimmed) {
        return LineClass::Ordered { number, text };
    }
    if let Some(text) = ListMarker::bullet(trimmed) {
        return LineClass::Bullet { text };
    }
    if let Some(text) = BlockQuote::strip(trimmed) {
        return LineClass::Quote { text };
    }
    if let Some((kind, text)) = Callout::parse(trimmed) {
        return LineClass::Callout { kind, text };
    }
    LineClass::Text(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn blank_lines() {
        assert_eq!(classify(""), LineClass::Blank);
        assert_eq!(classify("   \t"), LineClass::Blank);
    }

    #[test]
    fn heading_line() {
        assert_eq!(
            classify("## Usage"),
            LineClass::Heading {
                level: 2,
                text: "Usage"
            }
        );
    }

    #[test]
    fn rule_beats_bullet_reading() {
        assert_eq!(classify("---"), LineClass::Rule);
        assert_eq!(classify("- item"), LineClass::Bullet { text: "item" });
    }

    #[test]
    fn ordered_item_keeps_numeral() {
        assert_eq!(
            classify("3. third"),
            LineClass::Ordered {
                number: "3",
                text: "third"
            }
        );
    }

    #[test]
    fn quoted_line() {
        assert_eq!(classify("> wisdom"), LineClass::Quote { text: "wisdom" });
    }

    #[rstest]
    #[case("✅ Done", CalloutKind::Success)]
    #[case("⚠️ Careful", CalloutKind::Warning)]
    #[case("❌ Nope", CalloutKind::Error)]
    #[case("ℹ️ Note", CalloutKind::Info)]
    fn callout_lines(#[case] line: &str, #[case] kind: CalloutKind) {
        match classify(line) {
            LineClass::Callout { kind: got, .. } => assert_eq!(got, kind),
            other => panic!("expected callout, got {other:?}"),
        }
    }

    #[test]
    fn list_outranks_callout() {
        // A bullet whose content is a marker glyph is still a list item.
        assert_eq!(classify("- ✅ shipped"), LineClass::Bullet { text: "✅ shipped" });
    }

    #[test]
    fn everything_else_is_text() {
        assert_eq!(classify("just words"), LineClass::Text("just words"));
        assert_eq!(classify("##### five"), LineClass::Text("##### five"));
        assert_eq!(classify("1.5 million"), LineClass::Text("1.5 million"));
    }
}
