//! Error types for phrase validation and glyph decoding.

/// Broad category of a [`BrailleError`].
///
/// Validation errors mean the input grid is malformed. State errors mean the
/// decoder was used before an alphabet was loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    State,
}

/// Errors raised while building phrases or decoding glyphs.
///
/// An unrecognized glyph is not an error; it decodes to
/// [`UNKNOWN_GLYPH`](super::UNKNOWN_GLYPH).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BrailleError {
    #[error("rows must be equal length (got {row1}, {row2}, {row3})")]
    UnequalRows {
        row1: usize,
        row2: usize,
        row3: usize,
    },

    #[error("row length must be even (got {len})")]
    OddLength { len: usize },

    #[error("alphabet must be 52 characters long (got {len})")]
    HeaderLength { len: usize },

    #[error("braille glyph must be 6 characters long (got {len})")]
    GlyphLength { len: usize },

    #[error("glyph column {index} is not an even offset inside a phrase of length {len}")]
    GlyphOutOfRange { index: usize, len: usize },

    #[error("alphabet not initialized")]
    AlphabetNotInitialized,
}

impl BrailleError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BrailleError::AlphabetNotInitialized => ErrorKind::State,
            _ => ErrorKind::Validation,
        }
    }
}
