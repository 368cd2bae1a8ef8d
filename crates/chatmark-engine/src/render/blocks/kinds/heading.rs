/// ATX heading kind with owned delimiter constants.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: char = '#';
    /// Deepest supported level; longer runs are not headings.
    pub const MAX_LEVEL: u8 = 4;

    /// Returns `(level, content)` for a `#`..`####` prefixed line.
    ///
    /// The marker run must be followed by whitespace (or end the line);
    /// `#hashtag` is not a heading.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let hashes = line.chars().take_while(|&c| c == Self::MARKER).count();
        if hashes == 0 || hashes > Self::MAX_LEVEL as usize {
            return None;
        }
        let rest = &line[hashes..];
        if !rest.is_empty() && !rest.starts_with(' ') {
            return None;
        }
        Some((hashes as u8, rest.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_one_through_four() {
        assert_eq!(Heading::parse("# One"), Some((1, "One")));
        assert_eq!(Heading::parse("## Two"), Some((2, "Two")));
        assert_eq!(Heading::parse("### Three"), Some((3, "Three")));
        assert_eq!(Heading::parse("#### Four"), Some((4, "Four")));
    }

    #[test]
    fn five_hashes_is_not_a_heading() {
        assert_eq!(Heading::parse("##### Five"), None);
    }

    #[test]
    fn hashtag_is_not_a_heading() {
        assert_eq!(Heading::parse("#hashtag"), None);
    }

    #[test]
    fn empty_heading_is_allowed() {
        assert_eq!(Heading::parse("#"), Some((1, "")));
    }
}
