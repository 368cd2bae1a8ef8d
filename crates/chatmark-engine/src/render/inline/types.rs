use serde::{Deserialize, Serialize};

/// One unit of resolved character-level markup within a block's text.
///
/// Wrapper variants hold the child nodes of their inner text; a child's
/// matched range is always fully contained in its parent's. `InlineCode`
/// and `Image` are terminal: their text is never re-parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InlineNode {
    /// Plain text that isn't part of any special construct.
    Text(String),
    Bold(Vec<InlineNode>),
    Italic(Vec<InlineNode>),
    Underline(Vec<InlineNode>),
    Strikethrough(Vec<InlineNode>),
    Superscript(Vec<InlineNode>),
    Subscript(Vec<InlineNode>),
    /// Backtick-delimited code. Raw zone: content kept verbatim.
    InlineCode(String),
    Link {
        href: String,
        content: Vec<InlineNode>,
    },
    Image {
        src: String,
        alt: String,
    },
}

impl InlineNode {
    /// Visible text of this node and its children, markup removed.
    /// Images contribute their alt text.
    pub fn visible_text(&self) -> String {
        match self {
            InlineNode::Text(s) | InlineNode::InlineCode(s) => s.clone(),
            InlineNode::Bold(children)
            | InlineNode::Italic(children)
            | InlineNode::Underline(children)
            | InlineNode::Strikethrough(children)
            | InlineNode::Superscript(children)
            | InlineNode::Subscript(children)
            | InlineNode::Link {
                content: children, ..
            } => children.iter().map(InlineNode::visible_text).collect(),
            InlineNode::Image { alt, .. } => alt.clone(),
        }
    }
}

/// Visible text of a whole node list, concatenated.
pub fn visible_text(nodes: &[InlineNode]) -> String {
    nodes.iter().map(InlineNode::visible_text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_text_flattens_nesting() {
        let nodes = vec![
            InlineNode::Text("a ".into()),
            InlineNode::Bold(vec![
                InlineNode::Text("b ".into()),
                InlineNode::Italic(vec![InlineNode::Text("c".into())]),
            ]),
        ];
        assert_eq!(visible_text(&nodes), "a b c");
    }

    #[test]
    fn visible_text_uses_image_alt() {
        let node = InlineNode::Image {
            src: "x.png".into(),
            alt: "diagram".into(),
        };
        assert_eq!(node.visible_text(), "diagram");
    }
}
