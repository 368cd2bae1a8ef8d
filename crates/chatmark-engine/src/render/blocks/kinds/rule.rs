/// Horizontal rule kind with owned delimiter constant.
pub struct Rule;

impl Rule {
    /// The rule line, matched exactly after trimming.
    pub const LINE: &'static str = "---";

    pub fn is(line: &str) -> bool {
        line.trim() == Self::LINE
    }
}
