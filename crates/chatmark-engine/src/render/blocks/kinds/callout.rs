use crate::render::types::CalloutKind;

/// Callout kind with the owned marker glyph set.
///
/// Variation-selector forms are listed before their bare forms so the
/// selector is consumed with the marker rather than leaking into content.
pub struct Callout;

impl Callout {
    pub const MARKERS: &'static [(&'static str, CalloutKind)] = &[
        ("ℹ️", CalloutKind::Info),
        ("ℹ", CalloutKind::Info),
        ("💡", CalloutKind::Info),
        ("⚠️", CalloutKind::Warning),
        ("⚠", CalloutKind::Warning),
        ("❌", CalloutKind::Error),
        ("⛔", CalloutKind::Error),
        ("✅", CalloutKind::Success),
    ];

    /// Returns `(kind, content)` if the line starts with a marker glyph.
    pub fn parse(line: &str) -> Option<(CalloutKind, &str)> {
        for (marker, kind) in Self::MARKERS {
            if let Some(rest) = line.strip_prefix(marker) {
                return Some((*kind, rest.trim()));
            }
        }
        None
    }
}
