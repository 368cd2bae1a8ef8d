//! # Table extraction
//!
//! Two independent heuristics locate and parse tables inside a window of
//! lines: [`AsciiTable`] for box-drawn tables and [`PipeTable`] for
//! markdown pipe tables. Both share the [`TableExtractor`] contract.
//!
//! Detection is advisory: the segmenter validates the parsed grid with
//! [`is_well_formed`] and re-emits the source lines as paragraphs when a
//! candidate doesn't hold up, so table-ish text is never dropped.

pub mod ascii;
pub mod pipe;

use std::ops::Range;

use crate::render::types::TableData;

pub use ascii::AsciiTable;
pub use pipe::PipeTable;

/// Shared contract of the two table heuristics.
///
/// `detect` reports the line range of a table starting at line 0 of the
/// window, or `None`. `parse` turns exactly that range's lines into a grid;
/// it is deterministic and side-effect free. A parse whose grid fails
/// [`is_well_formed`] (including zero headers) is treated as detection
/// failure by the caller.
pub trait TableExtractor {
    fn detect(&self, lines: &[&str]) -> Option<Range<usize>>;
    fn parse(&self, lines: &[&str]) -> TableData;
}

/// Structural validation: at least one header and one row, and every
/// cell non-empty after trimming.
pub(crate) fn is_well_formed(table: &TableData) -> bool {
    !table.headers.is_empty()
        && table.headers.iter().all(|h| !h.trim().is_empty())
        && !table.rows.is_empty()
        && table
            .rows
            .iter()
            .all(|row| !row.is_empty() && row.iter().all(|cell| !cell.trim().is_empty()))
}
