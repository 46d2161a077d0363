//! Puzzle input files.
//!
//! Layout, one item per line:
//!
//! ```text
//! header row 1            (52 columns)
//! header row 2
//! header row 3
//! N                       (number of test cases)
//! case 1 row 1
//! case 1 row 2
//! case 1 row 3
//! ...                     (N groups of three rows)
//! ```
//!
//! Rows are kept verbatim apart from the line terminator, since blank cells
//! are spaces and trimming would shift columns.

use std::path::Path;

use super::error::InputError;
use crate::braille::{BlankGlyph, GlyphDecoder, Phrase};

/// Index of the line holding the test case count.
const CASE_COUNT_LINE: usize = 3;

/// A parsed puzzle: the alphabet header and the phrases to decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub header: Phrase,
    pub cases: Vec<Phrase>,
}

impl Puzzle {
    /// Read and parse a puzzle file.
    pub fn load(path: &Path) -> Result<Self, InputError> {
        let content = std::fs::read_to_string(path).map_err(|e| InputError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        log::info!("Loaded puzzle input from {}", path.display());
        Self::parse(&content)
    }

    /// Parse puzzle text.
    ///
    /// Header rows are only checked for equal, even length here; the 52-column
    /// requirement is enforced when the alphabet is built.
    pub fn parse(content: &str) -> Result<Self, InputError> {
        let lines: Vec<&str> = content.lines().collect();
        let row = |index: usize| lines.get(index).copied();

        let mut header_rows = [""; 3];
        for (i, slot) in header_rows.iter_mut().enumerate() {
            *slot = row(i).ok_or(InputError::MissingHeader { line: i + 1 })?;
        }
        let header = Phrase::new(header_rows[0], header_rows[1], header_rows[2])
            .map_err(InputError::Header)?;

        let count_line = row(CASE_COUNT_LINE).ok_or(InputError::MissingCaseCount {
            line: CASE_COUNT_LINE + 1,
        })?;
        let count: usize = count_line
            .trim()
            .parse()
            .map_err(|_| InputError::InvalidCaseCount {
                line: CASE_COUNT_LINE + 1,
                value: count_line.trim().to_string(),
            })?;

        // Never reserve more than the remaining lines can hold
        let available = lines.len().saturating_sub(CASE_COUNT_LINE + 1) / 3;
        let mut cases = Vec::with_capacity(count.min(available));
        for case in 0..count {
            let first = CASE_COUNT_LINE + 1 + case * 3;
            let mut rows = [""; 3];
            for (offset, slot) in rows.iter_mut().enumerate() {
                *slot = row(first + offset).ok_or(InputError::TruncatedCase {
                    case,
                    line: first + offset + 1,
                })?;
            }
            let phrase = Phrase::new(rows[0], rows[1], rows[2]).map_err(|e| InputError::Case {
                case,
                line: first + 1,
                source: e,
            })?;
            cases.push(phrase);
        }

        let consumed = CASE_COUNT_LINE + 1 + cases.len() * 3;
        if lines.len() > consumed {
            log::debug!(
                "Ignoring {} trailing line(s) after the last test case",
                lines.len() - consumed
            );
        }

        Ok(Puzzle { header, cases })
    }

    /// Build a decoder from the header and decode every case in order.
    pub fn solve(&self, blank: BlankGlyph) -> Result<Vec<String>, InputError> {
        let mut decoder = GlyphDecoder::new().with_blank(blank);
        decoder
            .initialize_alphabet(&self.header)
            .map_err(InputError::Header)?;

        self.cases
            .iter()
            .enumerate()
            .map(|(case, phrase)| {
                decoder.decode_phrase(phrase).map_err(|e| InputError::Case {
                    case,
                    line: CASE_COUNT_LINE + 2 + case * 3,
                    source: e,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::braille::BrailleError;

    fn header_lines() -> String {
        let top: String = ('a'..='z').flat_map(|c| [c, '.']).collect();
        let rest = ".".repeat(52);
        format!("{top}\n{rest}\n{rest}\n")
    }

    #[test]
    fn test_parse_and_solve() {
        let content = format!(
            "{}2\nh.i.\n....\n....\na.  b.\n......\n......\n",
            header_lines()
        );
        let puzzle = Puzzle::parse(&content).unwrap();
        assert_eq!(puzzle.cases.len(), 2);
        assert_eq!(
            puzzle.solve(BlankGlyph::Space).unwrap(),
            vec!["HI".to_string(), "A?B".to_string()]
        );
    }

    #[test]
    fn test_parse_crlf() {
        let content = format!("{}1\r\na.\r\n..\r\n..\r\n", header_lines().replace('\n', "\r\n"));
        let puzzle = Puzzle::parse(&content).unwrap();
        assert_eq!(puzzle.solve(BlankGlyph::Space).unwrap(), vec!["A".to_string()]);
    }

    #[test]
    fn test_parse_zero_cases() {
        let content = format!("{}0\n", header_lines());
        let puzzle = Puzzle::parse(&content).unwrap();
        assert!(puzzle.cases.is_empty());
        assert!(puzzle.solve(BlankGlyph::Space).unwrap().is_empty());
    }

    #[test]
    fn test_parse_missing_header() {
        let err = Puzzle::parse("ab\ncd\n").unwrap_err();
        assert!(matches!(err, InputError::MissingHeader { line: 3 }));
    }

    #[test]
    fn test_parse_missing_count() {
        let err = Puzzle::parse(&header_lines()).unwrap_err();
        assert!(matches!(err, InputError::MissingCaseCount { line: 4 }));
    }

    #[test]
    fn test_parse_invalid_count() {
        let content = format!("{}three\n", header_lines());
        let err = Puzzle::parse(&content).unwrap_err();
        match err {
            InputError::InvalidCaseCount { line, value } => {
                assert_eq!(line, 4);
                assert_eq!(value, "three");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_truncated_case() {
        let content = format!("{}2\na.\n..\n..\nb.\n", header_lines());
        let err = Puzzle::parse(&content).unwrap_err();
        assert!(matches!(err, InputError::TruncatedCase { case: 1, line: 9 }));
    }

    #[test]
    fn test_parse_huge_count_is_truncated() {
        let content = format!("{}{}\na.\n..\n..\n", header_lines(), usize::MAX);
        let err = Puzzle::parse(&content).unwrap_err();
        assert!(matches!(err, InputError::TruncatedCase { case: 1, line: 8 }));
    }

    #[test]
    fn test_parse_invalid_case_rows() {
        let content = format!("{}1\na.\n...\n..\n", header_lines());
        let err = Puzzle::parse(&content).unwrap_err();
        assert!(matches!(
            err,
            InputError::Case {
                case: 0,
                line: 5,
                source: BrailleError::UnequalRows { .. }
            }
        ));
    }

    #[test]
    fn test_solve_short_header() {
        let content = "ab\ncd\nef\n0\n";
        let puzzle = Puzzle::parse(content).unwrap();
        let err = puzzle.solve(BlankGlyph::Space).unwrap_err();
        assert_eq!(
            err.braille_error(),
            Some(&BrailleError::HeaderLength { len: 2 })
        );
    }

    #[test]
    fn test_load_missing_file() {
        let err = Puzzle::load(Path::new("/nonexistent/wedstrijd.in")).unwrap_err();
        assert!(matches!(err, InputError::Io { .. }));
    }
}
