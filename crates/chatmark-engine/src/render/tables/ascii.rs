use std::ops::Range;

use crate::render::types::TableData;

use super::TableExtractor;

/// Box-drawn table heuristic.
///
/// ```text
/// +------+------+
/// | Name | Role |
/// +------+------+
/// | Ada  | Eng  |
/// +------+------+
/// ```
///
/// Classification looks at the whole contiguous non-blank run starting
/// the window, so surrounding prose can veto a marginal match; the
/// extracted region is the contiguous table-line prefix. Separator lines
/// delimit the header from the body and are discarded.
pub struct AsciiTable;

impl AsciiTable {
    /// Shortest region worth considering.
    const MIN_LINES: usize = 2;
    /// Required share of content (non-separator) run lines containing
    /// `|`. Separator lines are excluded from the basis: box borders
    /// like `+----+----+` carry no pipe at all.
    const PIPE_RATIO: f32 = 0.6;

    /// Characters a separator line may consist of.
    const SEPARATOR_CHARS: [char; 4] = ['-', '=', '+', '|'];

    /// A line of only `-`, `=`, `+`, `|` and whitespace.
    pub fn is_separator(line: &str) -> bool {
        let trimmed = line.trim();
        !trimmed.is_empty()
            && trimmed
                .chars()
                .all(|c| Self::SEPARATOR_CHARS.contains(&c) || c.is_whitespace())
    }

    fn is_table_line(line: &str) -> bool {
        let trimmed = line.trim();
        !trimmed.is_empty() && (trimmed.contains('|') || Self::is_separator(trimmed))
    }

    fn split_cells(line: &str) -> Vec<String> {
        line.split('|')
            .map(str::trim)
            .filter(|cell| !cell.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl TableExtractor for AsciiTable {
    fn detect(&self, lines: &[&str]) -> Option<Range<usize>> {
        // Candidate = the contiguous non-blank run from the window start.
        let run_end = lines
            .iter()
            .position(|l| l.trim().is_empty())
            .unwrap_or(lines.len());
        if run_end < Self::MIN_LINES {
            return None;
        }
        let run = &lines[..run_end];

        let content: Vec<&&str> = run.iter().filter(|l| !Self::is_separator(l)).collect();
        if content.is_empty() {
            return None;
        }
        let piped = content.iter().filter(|l| l.contains('|')).count();
        if (piped as f32) < (content.len() as f32) * Self::PIPE_RATIO {
            return None;
        }

        // Table region: contiguous table-lines from the window start,
        // which must themselves include a separator.
        let mut end = 0;
        while end < run_end && Self::is_table_line(run[end]) {
            end += 1;
        }
        if end < Self::MIN_LINES || !run[..end].iter().any(|l| Self::is_separator(l)) {
            return None;
        }
        Some(0..end)
    }

    fn parse(&self, lines: &[&str]) -> TableData {
        let mut headers = Vec::new();
        let mut rows = Vec::new();
        let mut seen_content = false;
        let mut in_body = false;
        for line in lines {
            if Self::is_separator(line) {
                // A leading box border doesn't end the header; only a
                // separator after actual content does.
                if seen_content {
                    in_body = true;
                }
                continue;
            }
            let cells = Self::split_cells(line);
            if cells.is_empty() {
                continue;
            }
            seen_content = true;
            if in_body {
                rows.push(cells);
            } else {
                headers.extend(cells);
            }
        }
        TableData { headers, rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BOX: [&str; 5] = [
        "+----+----+",
        "| A  | B  |",
        "+----+----+",
        "| 1  | 2  |",
        "+----+----+",
    ];

    #[test]
    fn detects_whole_box_table() {
        assert_eq!(AsciiTable.detect(&BOX), Some(0..5));
    }

    #[test]
    fn parses_box_table() {
        let table = AsciiTable.parse(&BOX);
        assert_eq!(
            table,
            TableData {
                headers: vec!["A".into(), "B".into()],
                rows: vec![vec!["1".into(), "2".into()]],
            }
        );
    }

    #[test]
    fn equals_separator_also_delimits() {
        let lines = ["| A | B |", "===========", "| 1 | 2 |"];
        let table = AsciiTable.parse(&lines);
        assert_eq!(table.headers, vec!["A", "B"]);
        assert_eq!(table.rows, vec![vec!["1", "2"]]);
    }

    #[test]
    fn detect_region_stops_at_blank() {
        let lines = ["| A | B |", "+---+---+", "| 1 | 2 |", "", "| x | y |"];
        assert_eq!(AsciiTable.detect(&lines), Some(0..3));
    }

    #[test]
    fn detect_region_stops_at_prose_tail() {
        let lines = ["| A | B |", "+---+---+", "| 1 | 2 |", "then prose continues"];
        assert_eq!(AsciiTable.detect(&lines), Some(0..3));
    }

    #[test]
    fn run_without_separator_is_not_a_table() {
        let lines = ["| A | B |", "| 1 | 2 |"];
        assert_eq!(AsciiTable.detect(&lines), None);
    }

    #[test]
    fn surrounding_prose_vetoes_marginal_match() {
        // One piped line drowned in prose: under the pipe ratio.
        let lines = [
            "| a | b |",
            "----",
            "prose one",
            "prose two",
            "prose three",
        ];
        assert_eq!(AsciiTable.detect(&lines), None);
    }

    #[test]
    fn single_line_is_never_a_table() {
        assert_eq!(AsciiTable.detect(&["| lonely |"]), None);
    }

    #[test]
    fn separators_only_is_not_a_table() {
        assert_eq!(AsciiTable.detect(&["+---+", "+---+"]), None);
    }

    #[test]
    fn multi_line_header_cells_concatenate() {
        let lines = ["| A |", "| B |", "+---+", "| 1 |"];
        let table = AsciiTable.parse(&lines);
        assert_eq!(table.headers, vec!["A", "B"]);
        assert_eq!(table.rows, vec![vec!["1"]]);
    }
}
