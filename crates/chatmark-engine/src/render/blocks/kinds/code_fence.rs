/// Fenced code block kind with owned delimiter constant.
///
/// Fences are raw zones: no block or inline parsing happens inside.
pub struct CodeFence;

impl CodeFence {
    /// The fence marker.
    pub const FENCE: &'static str = "```";

    /// Returns the language tag if the line opens a fence.
    ///
    /// The tag is whatever follows the marker, trimmed; a bare fence
    /// yields an empty tag.
    pub fn opens(line: &str) -> Option<&str> {
        line.trim().strip_prefix(Self::FENCE).map(str::trim)
    }

    /// Whether the line closes an open fence.
    pub fn closes(line: &str) -> bool {
        line.trim().starts_with(Self::FENCE)
    }
}
