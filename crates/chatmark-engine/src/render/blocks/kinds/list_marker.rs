/// List item markers with owned delimiter constants.
pub struct ListMarker;

impl ListMarker {
    /// Unordered bullet characters.
    pub const BULLETS: [char; 3] = ['-', '*', '+'];
    /// The character that ends an ordered item's numeral.
    pub const DOT: char = '.';

    /// Returns the item content for `- item` / `* item` / `+ item`.
    /// The bullet must be followed by a space, so `---` and `**bold**`
    /// openings don't read as items.
    pub fn bullet(line: &str) -> Option<&str> {
        let mut chars = line.chars();
        let first = chars.next()?;
        if !Self::BULLETS.contains(&first) {
            return None;
        }
        chars.as_str().strip_prefix(' ').map(str::trim)
    }

    /// Returns `(numeral, content)` for `1. item` style lines.
    /// The dot must be followed by a space or end the line, so decimal
    /// numbers (`1.5 million`) don't read as items.
    pub fn ordered(line: &str) -> Option<(&str, &str)> {
        let digits = line
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(line.len());
        if digits == 0 {
            return None;
        }
        let rest = line[digits..].strip_prefix(Self::DOT)?;
        if !rest.is_empty() && !rest.starts_with(' ') {
            return None;
        }
        Some((&line[..digits], rest.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("- dash")]
    #[case("* star")]
    #[case("+ plus")]
    fn bullet_forms(#[case] line: &str) {
        assert!(ListMarker::bullet(line).is_some());
    }

    #[test]
    fn bullet_without_space_is_not_an_item() {
        assert_eq!(ListMarker::bullet("-nope"), None);
        assert_eq!(ListMarker::bullet("---"), None);
        assert_eq!(ListMarker::bullet("**bold**"), None);
    }

    #[test]
    fn ordered_keeps_numeral_text() {
        assert_eq!(ListMarker::ordered("12. twelfth"), Some(("12", "twelfth")));
    }

    #[test]
    fn decimal_number_is_not_an_item() {
        assert_eq!(ListMarker::ordered("1.5 million users"), None);
    }

    #[test]
    fn numeral_without_dot_is_not_an_item() {
        assert_eq!(ListMarker::ordered("1977 was a year"), None);
    }
}
