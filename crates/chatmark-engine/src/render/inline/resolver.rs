use super::matchers::{MATCHER_ORDER, MatchKind, SpanMatch, WrapStyle};
use super::types::InlineNode;

/// Nesting beyond this degrades to literal text. Bounded so adversarial
/// input cannot recurse without limit.
const MAX_DEPTH: usize = 16;

/// Resolves a text fragment's inline markup into a node tree.
///
/// Total: never fails. Unmatched syntax (a lone `**`, an unclosed tag)
/// is left as literal text, delimiters included. Top-level spans in the
/// result never overlap; nested markup lives in the children of its
/// enclosing node.
pub fn resolve(text: &str) -> Vec<InlineNode> {
    resolve_at(text, 0)
}

fn resolve_at(text: &str, depth: usize) -> Vec<InlineNode> {
    if text.is_empty() {
        return vec![];
    }
    if depth >= MAX_DEPTH {
        return vec![InlineNode::Text(text.to_string())];
    }

    let mut candidates = Vec::new();
    for matcher in MATCHER_ORDER {
        matcher(text, &mut candidates);
    }
    // Stable by start offset: equal starts keep matcher precedence order.
    candidates.sort_by_key(|m| m.range.start);

    // Keep earliest spans; a candidate starting inside an already-kept
    // span is nested content and reappears when that span's inner text
    // is resolved recursively.
    let mut kept: Vec<SpanMatch> = Vec::new();
    for candidate in candidates {
        let nested = kept
            .last()
            .is_some_and(|prev| candidate.range.start < prev.range.end);
        if !nested {
            kept.push(candidate);
        }
    }

    let mut out = Vec::new();
    let mut pos = 0;
    for m in &kept {
        if m.range.start > pos {
            out.push(InlineNode::Text(text[pos..m.range.start].to_string()));
        }
        out.push(build_node(text, m, depth));
        pos = m.range.end;
    }
    if pos < text.len() {
        out.push(InlineNode::Text(text[pos..].to_string()));
    }
    out
}

fn build_node(text: &str, m: &SpanMatch, depth: usize) -> InlineNode {
    match &m.kind {
        MatchKind::Wrap { style, inner } => {
            let children = resolve_at(&text[inner.clone()], depth + 1);
            match style {
                WrapStyle::Bold => InlineNode::Bold(children),
                WrapStyle::Italic => InlineNode::Italic(children),
                WrapStyle::Underline => InlineNode::Underline(children),
                WrapStyle::Strikethrough => InlineNode::Strikethrough(children),
                WrapStyle::Superscript => InlineNode::Superscript(children),
                WrapStyle::Subscript => InlineNode::Subscript(children),
            }
        }
        MatchKind::Code { inner } => InlineNode::InlineCode(text[inner.clone()].to_string()),
        MatchKind::Link { content, href } => InlineNode::Link {
            href: href.clone(),
            content: resolve_at(&text[content.clone()], depth + 1),
        },
        MatchKind::Image { alt, src } => InlineNode::Image {
            src: src.clone(),
            alt: alt.clone(),
        },
    }
}
