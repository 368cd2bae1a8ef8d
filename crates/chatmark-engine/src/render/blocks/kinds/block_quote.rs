/// Blockquote kind with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips the quote prefix, returning the quoted content.
    /// One space after the marker is consumed if present.
    pub fn strip(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX)
            .map(|rest| rest.strip_prefix(' ').unwrap_or(rest).trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_quote() {
        assert_eq!(BlockQuote::strip("> hello"), Some("hello"));
    }

    #[test]
    fn strip_quote_without_space() {
        assert_eq!(BlockQuote::strip(">hello"), Some("hello"));
    }

    #[test]
    fn not_a_quote() {
        assert_eq!(BlockQuote::strip("hello"), None);
    }

    #[test]
    fn bare_marker_is_an_empty_quote() {
        assert_eq!(BlockQuote::strip(">"), Some(""));
    }
}
