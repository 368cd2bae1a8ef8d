//! Candidate span discovery for inline markup.
//!
//! Each matcher scans a whole text fragment and pushes every place its
//! syntax could apply, including candidates that overlap other matchers'
//! spans; the resolver sorts the combined list and keeps the earliest
//! non-nested spans. Matchers never consume input and never fail; text
//! that matches nothing simply produces no candidates.

use std::ops::Range;
use std::sync::OnceLock;

use regex::{Captures, Regex};

/// A candidate inline span: the full range to consume plus how to build
/// the node for it.
#[derive(Debug, Clone)]
pub(crate) struct SpanMatch {
    pub range: Range<usize>,
    pub kind: MatchKind,
}

#[derive(Debug, Clone)]
pub(crate) enum MatchKind {
    /// Wrapper whose inner text is recursively resolved.
    Wrap {
        style: WrapStyle,
        inner: Range<usize>,
    },
    /// Inline code: inner text kept verbatim.
    Code { inner: Range<usize> },
    /// Link: label text is recursively resolved, href is extracted.
    Link { content: Range<usize>, href: String },
    /// Image: terminal, both pieces extracted.
    Image { alt: String, src: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WrapStyle {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Superscript,
    Subscript,
}

pub(crate) type Matcher = fn(&str, &mut Vec<SpanMatch>);

/// Fixed matcher precedence, documented once.
///
/// Bold runs before italic so `**` pairs are claimed before single `*`
/// pairs; emphasis runs before inline code so a code span containing `*`
/// cannot swallow emphasis around it. Candidates are later stable-sorted
/// by start offset, so for spans starting at the same byte the earlier
/// matcher in this list wins.
pub(crate) const MATCHER_ORDER: &[Matcher] = &[
    match_bold,
    match_italic,
    match_strikethrough,
    match_inline_code,
    match_image,
    match_link,
    match_html_tags,
];

/// Collects matches of `re`, rescanning from one byte past each match
/// start so candidates overlapping a prior match are still discovered.
/// The resolver's nesting rule needs those: an inner span must exist as
/// its own candidate even when an outer span already covers it.
fn scan(re: &Regex, text: &str, out: &mut Vec<SpanMatch>, build: impl Fn(&Captures) -> MatchKind) {
    let mut at = 0;
    while at <= text.len() {
        let Some(caps) = re.captures_at(text, at) else {
            break;
        };
        let Some(whole) = caps.get(0) else { break };
        out.push(SpanMatch {
            range: whole.range(),
            kind: build(&caps),
        });
        at = whole.start() + 1;
    }
}

fn group_range(caps: &Captures, i: usize) -> Range<usize> {
    caps.get(i).map(|g| g.range()).unwrap_or(0..0)
}

fn group_text(caps: &Captures, i: usize) -> String {
    caps.get(i).map(|g| g.as_str().trim().to_string()).unwrap_or_default()
}

fn match_bold(text: &str, out: &mut Vec<SpanMatch>) {
    static STAR: OnceLock<Regex> = OnceLock::new();
    static UNDERSCORE: OnceLock<Regex> = OnceLock::new();
    // Content-aware inner pattern: tolerates one nested single-delimiter
    // italic run so `**bold *and italic* text**` matches as a whole.
    let star = STAR.get_or_init(|| {
        Regex::new(r"\*\*([^*]*(?:\*[^*]+\*[^*]*)?)\*\*").expect("bold star pattern")
    });
    let underscore = UNDERSCORE.get_or_init(|| {
        Regex::new(r"__([^_]*(?:_[^_]+_[^_]*)?)__").expect("bold underscore pattern")
    });
    for re in [star, underscore] {
        scan(re, text, out, |caps| MatchKind::Wrap {
            style: WrapStyle::Bold,
            inner: group_range(caps, 1),
        });
    }
}

fn match_italic(text: &str, out: &mut Vec<SpanMatch>) {
    static STAR: OnceLock<Regex> = OnceLock::new();
    static UNDERSCORE: OnceLock<Regex> = OnceLock::new();
    let star = STAR.get_or_init(|| Regex::new(r"\*([^*]+)\*").expect("italic star pattern"));
    let underscore =
        UNDERSCORE.get_or_init(|| Regex::new(r"_([^_]+)_").expect("italic underscore pattern"));
    for re in [star, underscore] {
        scan(re, text, out, |caps| MatchKind::Wrap {
            style: WrapStyle::Italic,
            inner: group_range(caps, 1),
        });
    }
}

fn match_strikethrough(text: &str, out: &mut Vec<SpanMatch>) {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"~~(.+?)~~").expect("strikethrough pattern"));
    scan(re, text, out, |caps| MatchKind::Wrap {
        style: WrapStyle::Strikethrough,
        inner: group_range(caps, 1),
    });
}

fn match_inline_code(text: &str, out: &mut Vec<SpanMatch>) {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"`([^`]+)`").expect("inline code pattern"));
    scan(re, text, out, |caps| MatchKind::Code {
        inner: group_range(caps, 1),
    });
}

fn match_image(text: &str, out: &mut Vec<SpanMatch>) {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"!\[([^\]]*)\]\(([^)]*)\)").expect("image pattern"));
    scan(re, text, out, |caps| MatchKind::Image {
        alt: group_text(caps, 1),
        src: group_text(caps, 2),
    });
}

fn match_link(text: &str, out: &mut Vec<SpanMatch>) {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\[([^\]]+)\]\(([^)]*)\)").expect("link pattern"));
    scan(re, text, out, |caps| MatchKind::Link {
        content: group_range(caps, 1),
        href: group_text(caps, 2),
    });
}

/// HTML-style tags carried through from model output: the only spelling
/// for underline/superscript/subscript, plus the usual aliases.
const TAG_STYLES: &[(&str, WrapStyle)] = &[
    ("b", WrapStyle::Bold),
    ("strong", WrapStyle::Bold),
    ("i", WrapStyle::Italic),
    ("em", WrapStyle::Italic),
    ("u", WrapStyle::Underline),
    ("s", WrapStyle::Strikethrough),
    ("strike", WrapStyle::Strikethrough),
    ("del", WrapStyle::Strikethrough),
    ("sup", WrapStyle::Superscript),
    ("sub", WrapStyle::Subscript),
];

fn tag_style(name: &str) -> Option<WrapStyle> {
    TAG_STYLES
        .iter()
        .find(|(tag, _)| *tag == name)
        .map(|(_, style)| *style)
}

fn match_html_tags(text: &str, out: &mut Vec<SpanMatch>) {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'<' {
            i += 1;
            continue;
        }
        if let Some(m) = try_tag_at(text, i) {
            out.push(m);
        }
        i += 1;
    }
}

/// Parses one supported tag pair (or a void `<img>`) starting at `at`.
/// Unknown tags, closing tags, and unclosed pairs produce no candidate,
/// leaving the `<` to render as literal text.
fn try_tag_at(text: &str, at: usize) -> Option<SpanMatch> {
    let rest = &text[at + 1..];
    let open_len = rest.find('>')?;
    let tag_body = &rest[..open_len];
    if tag_body.starts_with('/') {
        return None;
    }
    let name_len = tag_body
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(tag_body.len());
    if name_len == 0 {
        return None;
    }
    let name = tag_body[..name_len].to_ascii_lowercase();
    let open_end = at + 1 + open_len + 1;

    if name == "img" {
        return Some(SpanMatch {
            range: at..open_end,
            kind: MatchKind::Image {
                alt: attr(tag_body, "alt").unwrap_or_default(),
                src: attr(tag_body, "src")?,
            },
        });
    }

    let style = tag_style(&name);
    if style.is_none() && name != "code" && name != "a" {
        return None;
    }

    let (close_start, close_end) = find_tag_close(text, open_end, &name)?;
    let inner = open_end..close_start;
    let kind = match name.as_str() {
        "code" => MatchKind::Code { inner },
        "a" => MatchKind::Link {
            content: inner,
            href: attr(tag_body, "href").unwrap_or_default(),
        },
        _ => MatchKind::Wrap {
            style: style?,
            inner,
        },
    };
    Some(SpanMatch {
        range: at..close_end,
        kind,
    })
}

/// Depth-counted search for the matching close: every further opener of
/// the *same* tag name increments, every closer decrements; the match is
/// the closer that brings the depth back to zero. Different tag names
/// never interfere; each outer match scans only for its own name.
fn find_tag_close(text: &str, from: usize, name: &str) -> Option<(usize, usize)> {
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut i = from;
    while i < bytes.len() {
        if bytes[i] != b'<' {
            i += 1;
            continue;
        }
        let rest = &text[i + 1..];
        let Some(len) = rest.find('>') else {
            return None;
        };
        let body = &rest[..len];
        let end = i + 1 + len + 1;
        if let Some(closer) = body.strip_prefix('/') {
            if closer.trim().eq_ignore_ascii_case(name) {
                if depth == 0 {
                    return Some((i, end));
                }
                depth -= 1;
                i = end;
                continue;
            }
        } else {
            let name_len = body
                .find(|c: char| !c.is_ascii_alphanumeric())
                .unwrap_or(body.len());
            if body[..name_len].eq_ignore_ascii_case(name) {
                depth += 1;
                i = end;
                continue;
            }
        }
        i += 1;
    }
    None
}

/// Extracts a quoted (or bare) attribute value from a tag body like
/// `a href="https://x"` or `img src=pic.png alt='cat'`.
fn attr(tag_body: &str, name: &str) -> Option<String> {
    let bytes = tag_body.as_bytes();
    let mut search = 0;
    while let Some(pos) = tag_body[search..].find(name) {
        let abs = search + pos;
        search = abs + name.len();
        if abs > 0 && bytes[abs - 1].is_ascii_alphanumeric() {
            continue;
        }
        let rest = tag_body[abs + name.len()..].trim_start();
        let Some(rest) = rest.strip_prefix('=') else {
            continue;
        };
        let rest = rest.trim_start();
        let mut chars = rest.chars();
        match chars.next() {
            Some(q @ ('"' | '\'')) => {
                let inner = &rest[1..];
                if let Some(end) = inner.find(q) {
                    return Some(inner[..end].to_string());
                }
            }
            Some(_) => {
                let end = rest
                    .find(|c: char| c.is_whitespace() || c == '/')
                    .unwrap_or(rest.len());
                if end > 0 {
                    return Some(rest[..end].to_string());
                }
            }
            None => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_candidates(text: &str) -> Vec<SpanMatch> {
        let mut out = Vec::new();
        for matcher in MATCHER_ORDER {
            matcher(text, &mut out);
        }
        out
    }

    #[test]
    fn bold_tolerates_nested_italic() {
        let mut out = Vec::new();
        match_bold("**bold *and italic* text**", &mut out);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].range, 0..26);
    }

    #[test]
    fn overlapping_italic_candidates_are_all_discovered() {
        // The second `*` pair shares a delimiter with the first; both
        // candidates must exist so the resolver can pick.
        let mut out = Vec::new();
        match_italic("*a* *b*", &mut out);
        let starts: Vec<usize> = out.iter().map(|m| m.range.start).collect();
        assert!(starts.contains(&0));
        assert!(starts.contains(&4));
    }

    #[test]
    fn image_candidate_starts_before_its_link_shadow() {
        let candidates = all_candidates("![cat](cat.png)");
        let image_start = candidates
            .iter()
            .find(|m| matches!(m.kind, MatchKind::Image { .. }))
            .map(|m| m.range.start);
        let link_start = candidates
            .iter()
            .find(|m| matches!(m.kind, MatchKind::Link { .. }))
            .map(|m| m.range.start);
        assert_eq!(image_start, Some(0));
        assert_eq!(link_start, Some(1));
    }

    #[test]
    fn html_tag_with_depth_counted_close() {
        let mut out = Vec::new();
        match_html_tags("<u>a<u>b</u>c</u>", &mut out);
        // Outer match spans the whole input; the nested opener is also
        // discovered as its own candidate.
        assert!(out.iter().any(|m| m.range == (0..17)));
        assert!(out.iter().any(|m| m.range.start == 4));
    }

    #[test]
    fn unclosed_tag_is_not_a_candidate() {
        let mut out = Vec::new();
        match_html_tags("<u>never closed", &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn unknown_tag_is_ignored() {
        let mut out = Vec::new();
        match_html_tags("<blink>hi</blink>", &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn img_tag_extracts_src_and_alt() {
        let mut out = Vec::new();
        match_html_tags(r#"<img src="p.png" alt="pic">"#, &mut out);
        assert_eq!(out.len(), 1);
        match &out[0].kind {
            MatchKind::Image { src, alt } => {
                assert_eq!(src, "p.png");
                assert_eq!(alt, "pic");
            }
            other => panic!("expected image, got {other:?}"),
        }
    }

    #[test]
    fn anchor_tag_extracts_href() {
        let mut out = Vec::new();
        match_html_tags(r#"<a href="https://example.com">here</a>"#, &mut out);
        assert_eq!(out.len(), 1);
        match &out[0].kind {
            MatchKind::Link { href, .. } => assert_eq!(href, "https://example.com"),
            other => panic!("expected link, got {other:?}"),
        }
    }

    #[test]
    fn attr_handles_single_quotes_and_bare_values() {
        assert_eq!(attr("img src='a.png'", "src").as_deref(), Some("a.png"));
        assert_eq!(attr("img src=a.png alt=x", "src").as_deref(), Some("a.png"));
        assert_eq!(attr("img alt=x", "src"), None);
    }
}
