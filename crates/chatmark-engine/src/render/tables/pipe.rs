use std::ops::Range;

use crate::render::types::TableData;

use super::{AsciiTable, TableExtractor};

/// Markdown pipe table heuristic.
///
/// ```text
/// | Name | Role |
/// |------|------|
/// | Ada  | Eng  |
/// ```
///
/// Detection is anchored: the first window line must start and end with
/// `|` and the second must be a separator row. The region then extends
/// while lines keep starting with `|`. Unlike the box heuristic, inner
/// empty cells are preserved, so ragged and sparse rows survive.
pub struct PipeTable;

impl PipeTable {
    fn is_pipe_row(line: &str) -> bool {
        let trimmed = line.trim();
        trimmed.len() >= 2 && trimmed.starts_with('|') && trimmed.ends_with('|')
    }

    /// Strips the outer pipes and splits on the inner ones. Cells are
    /// trimmed but empty inner cells are kept.
    fn split_row(line: &str) -> Vec<String> {
        let trimmed = line.trim();
        let inner = trimmed.strip_prefix('|').unwrap_or(trimmed);
        let inner = inner.strip_suffix('|').unwrap_or(inner);
        inner.split('|').map(|cell| cell.trim().to_string()).collect()
    }
}

impl TableExtractor for PipeTable {
    fn detect(&self, lines: &[&str]) -> Option<Range<usize>> {
        if lines.len() < 2 || !Self::is_pipe_row(lines[0]) {
            return None;
        }
        if !AsciiTable::is_separator(lines[1]) {
            return None;
        }
        let mut end = 2;
        while end < lines.len() && lines[end].trim_start().starts_with('|') {
            end += 1;
        }
        Some(0..end)
    }

    fn parse(&self, lines: &[&str]) -> TableData {
        let mut headers = Vec::new();
        let mut rows = Vec::new();
        for (i, line) in lines.iter().enumerate() {
            if i == 0 {
                headers = Self::split_row(line);
            } else if !AsciiTable::is_separator(line) {
                rows.push(Self::split_row(line));
            }
        }
        TableData { headers, rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BASIC: [&str; 4] = ["| A | B |", "|---|---|", "| 1 | 2 |", "| 3 | 4 |"];

    #[test]
    fn detects_anchored_table() {
        assert_eq!(PipeTable.detect(&BASIC), Some(0..4));
    }

    #[test]
    fn parses_cells_in_order() {
        let table = PipeTable.parse(&BASIC);
        assert_eq!(
            table,
            TableData {
                headers: vec!["A".into(), "B".into()],
                rows: vec![vec!["1".into(), "2".into()], vec!["3".into(), "4".into()]],
            }
        );
    }

    #[test]
    fn region_ends_at_first_non_pipe_line() {
        let lines = ["| A |", "|---|", "| 1 |", "done"];
        assert_eq!(PipeTable.detect(&lines), Some(0..3));
    }

    #[test]
    fn requires_separator_on_second_line() {
        let lines = ["| A | B |", "| 1 | 2 |"];
        assert_eq!(PipeTable.detect(&lines), None);
    }

    #[test]
    fn requires_anchored_first_line() {
        let lines = ["A | B", "|---|---|", "| 1 | 2 |"];
        assert_eq!(PipeTable.detect(&lines), None);
    }

    #[test]
    fn ragged_rows_keep_their_own_width() {
        let lines = ["| A | B |", "|---|---|", "| 1 |", "| 2 | 3 | 4 |"];
        let table = PipeTable.parse(&lines);
        assert_eq!(table.rows[0], vec!["1"]);
        assert_eq!(table.rows[1], vec!["2", "3", "4"]);
    }

    #[test]
    fn inner_empty_cells_are_preserved() {
        let lines = ["| A | B | C |", "|---|---|---|", "| 1 |   | 3 |"];
        let table = PipeTable.parse(&lines);
        assert_eq!(table.rows[0], vec!["1", "", "3"]);
    }
}
