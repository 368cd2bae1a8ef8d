//! # Rendering pipeline
//!
//! [`render`] is the single entry point: it takes the full message
//! buffer as received so far and returns the complete block list. It is
//! pure and total, so callers re-render on every delta and diff the
//! output; there is no incremental state to invalidate.
//!
//! Segmentation walks the buffer line by line with a fixed priority:
//! fenced code first, then the two table heuristics, then plain-run
//! classification. Fences are raw zones and win over everything that
//! could otherwise match inside them.

pub mod blocks;
pub mod inline;
pub mod tables;
pub mod types;

use self::blocks::kinds::CodeFence;
use self::blocks::{RunBuilder, classify};
use self::inline::resolve;
use self::tables::{AsciiTable, PipeTable, TableExtractor, is_well_formed};
use self::types::ContentBlock;

/// Renders a chat message buffer into content blocks.
///
/// `streaming` marks the buffer as a prefix of a message still arriving:
/// an unterminated code fence then stays open (`closed: false`) instead
/// of being force-closed. Rendering a prefix and later the full buffer
/// yields identical blocks for the parts that were already complete.
pub fn render(buffer: &str, streaming: bool) -> Vec<ContentBlock> {
    let lines: Vec<&str> = buffer.lines().collect();
    let mut out = Vec::new();
    let mut run = RunBuilder::new();
    let mut i = 0;

    while i < lines.len() {
        if let Some(language) = CodeFence::opens(lines[i]) {
            out.append(&mut std::mem::take(&mut run).finish());
            let mut j = i + 1;
            while j < lines.len() && !CodeFence::closes(lines[j]) {
                j += 1;
            }
            let found_close = j < lines.len();
            out.push(ContentBlock::CodeBlock {
                language: language.to_string(),
                source: lines[i + 1..j].join("\n"),
                closed: found_close || !streaming,
            });
            i = if found_close { j + 1 } else { j };
            continue;
        }

        let window = &lines[i..];
        let detected = AsciiTable
            .detect(window)
            .map(|r| (r.end, AsciiTable.parse(&window[..r.end])))
            .or_else(|| {
                PipeTable
                    .detect(window)
                    .map(|r| (r.end, PipeTable.parse(&window[..r.end])))
            });
        if let Some((len, table)) = detected {
            out.append(&mut std::mem::take(&mut run).finish());
            if is_well_formed(&table) {
                out.push(ContentBlock::Table(table));
            } else {
                // Degraded grid: keep the text visible as paragraphs.
                for line in &window[..len] {
                    let trimmed = line.trim();
                    if !trimmed.is_empty() {
                        out.push(ContentBlock::Paragraph {
                            content: resolve(trimmed),
                        });
                    }
                }
            }
            i += len;
            continue;
        }

        run.push(classify(lines[i]));
        i += 1;
    }

    out.append(&mut run.finish());
    out
}
