//! Error types for puzzle and solution files.

use std::path::PathBuf;

use crate::braille::BrailleError;

/// Errors that can occur while reading or decoding a puzzle file.
///
/// Line numbers are 1-based.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Missing header row on line {line}")]
    MissingHeader { line: usize },

    #[error("Missing test case count on line {line}")]
    MissingCaseCount { line: usize },

    #[error("Invalid test case count '{value}' on line {line}")]
    InvalidCaseCount { line: usize, value: String },

    #[error("Test case {case} is truncated: expected a row on line {line}")]
    TruncatedCase { case: usize, line: usize },

    #[error("Invalid header: {0}")]
    Header(#[source] BrailleError),

    #[error("Invalid test case {case} (line {line}): {source}")]
    Case {
        case: usize,
        line: usize,
        source: BrailleError,
    },
}

impl InputError {
    /// The underlying decoding error, if this failure came from the braille layer.
    pub fn braille_error(&self) -> Option<&BrailleError> {
        match self {
            InputError::Header(e) | InputError::Case { source: e, .. } => Some(e),
            _ => None,
        }
    }
}
