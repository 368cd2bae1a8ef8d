use serde::{Deserialize, Serialize};

use super::inline::InlineNode;

/// One structural unit of rendered output.
///
/// Blocks are produced as an ordered sequence; the order is rendering
/// order. Together the blocks cover the whole input buffer; a line that
/// matches no other shape still comes through as a [`ContentBlock::Paragraph`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ContentBlock {
    /// ATX heading, levels 1 through 4.
    Heading { level: u8, content: Vec<InlineNode> },
    /// Regular paragraph text.
    Paragraph { content: Vec<InlineNode> },
    /// Ordered or unordered list of consecutive same-kind items.
    List { ordered: bool, items: Vec<ListItem> },
    /// A `>`-prefixed quoted line.
    BlockQuote { content: Vec<InlineNode> },
    /// Horizontal rule (`---` on its own line).
    HorizontalRule,
    /// Fenced code block.
    ///
    /// `closed: false` means the closing fence had not arrived yet when the
    /// buffer was rendered; that state only occurs while streaming.
    CodeBlock {
        language: String,
        source: String,
        closed: bool,
    },
    /// A detected table. Rows may be ragged; padding is the renderer's job.
    Table(TableData),
    /// A short highlighted block detected via a leading marker glyph.
    Callout {
        kind: CalloutKind,
        content: Vec<InlineNode>,
    },
}

/// One list entry. Ordered items keep the numeral text they were written
/// with (`"1"`, `"12"`); bullet items carry `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub content: Vec<InlineNode>,
    pub number: Option<String>,
}

/// Severity/flavor of a callout block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalloutKind {
    Info,
    Warning,
    Error,
    Success,
}

/// A parsed table grid. Cell text is raw (inline markup intact); the
/// export path strips it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}
