//! # Spreadsheet export
//!
//! The reverse transform: rendered table cells still carry raw markup
//! and character entities, and spreadsheet paste targets want plain
//! text. [`strip`] peels markup off one cell; [`export_table`] turns a
//! [`TableData`] into a rectangular grid of stripped cells.

use std::sync::OnceLock;

use regex::Regex;

use crate::render::types::TableData;

struct StripRule {
    pattern: &'static str,
    replacement: &'static str,
}

/// Applied in order: tags drop entirely, images and links keep their
/// visible text, emphasis and code keep their inner text. Images go
/// before links so the leading `!` never leaves an orphan.
const STRIP_RULES: [StripRule; 9] = [
    StripRule {
        pattern: r"</?[a-zA-Z][^>\n]*>",
        replacement: "",
    },
    StripRule {
        pattern: r"!\[([^\]]*)\]\(([^)]*)\)",
        replacement: "$1",
    },
    StripRule {
        pattern: r"\[([^\]]+)\]\(([^)]*)\)",
        replacement: "$1",
    },
    StripRule {
        pattern: r"\*\*(.*?)\*\*",
        replacement: "$1",
    },
    StripRule {
        pattern: r"__(.*?)__",
        replacement: "$1",
    },
    StripRule {
        pattern: r"\*([^*]+)\*",
        replacement: "$1",
    },
    StripRule {
        pattern: r"_([^_]+)_",
        replacement: "$1",
    },
    StripRule {
        pattern: r"~~(.*?)~~",
        replacement: "$1",
    },
    StripRule {
        pattern: r"`([^`]+)`",
        replacement: "$1",
    },
];

fn strip_regexes() -> &'static Vec<Regex> {
    static REGEXES: OnceLock<Vec<Regex>> = OnceLock::new();
    REGEXES.get_or_init(|| {
        STRIP_RULES
            .iter()
            .map(|rule| Regex::new(rule.pattern).expect("strip rule regex"))
            .collect()
    })
}

/// Strips markup from a single cell: tag markers, Markdown
/// emphasis/strikethrough/code/link/image syntax, and character
/// entities, then trims. Plain text passes through unchanged, and a
/// second pass is a no-op.
///
/// Entity decoding can surface fresh markup ("&lt;b&gt;x&lt;/b&gt;"
/// becomes "<b>x</b>") and entities can nest ("&amp;lt;"), so the whole
/// remove-then-decode cycle runs until the text is stable.
pub fn strip(cell: &str) -> String {
    let mut text = cell.to_string();
    loop {
        let mut pass = text.clone();
        for (regex, rule) in strip_regexes().iter().zip(STRIP_RULES.iter()) {
            pass = regex.replace_all(&pass, rule.replacement).into_owned();
        }
        pass = html_escape::decode_html_entities(&pass).into_owned();
        if pass == text {
            break;
        }
        text = pass;
    }
    text.trim().to_string()
}

/// Flattens a table into a rectangular grid: headers as row 0, every
/// cell stripped, short rows padded with empty cells to the widest row.
pub fn export_table(table: &TableData) -> Vec<Vec<String>> {
    let width = table
        .rows
        .iter()
        .map(Vec::len)
        .chain([table.headers.len()])
        .max()
        .unwrap_or(0);
    let mut grid = Vec::with_capacity(table.rows.len() + 1);
    for source in std::iter::once(&table.headers).chain(table.rows.iter()) {
        let mut row: Vec<String> = source.iter().map(|cell| strip(cell)).collect();
        row.resize(width, String::new());
        grid.push(row);
    }
    grid
}
