//! Six-cell glyph patterns.
//!
//! A glyph covers two character columns across three rows. Its pattern is
//! the three 2-character row slices concatenated top to bottom:
//!
//! ```text
//! row1: "1 "
//! row2: "11"     ->  "1 11  "
//! row3: "  "
//! ```

use std::fmt;

use super::error::BrailleError;

/// Number of cells in one glyph (2 columns x 3 rows).
pub const GLYPH_CELLS: usize = 6;

/// Width of one glyph in character columns.
pub const GLYPH_WIDTH: usize = 2;

/// Pattern of a glyph with no raised cells.
pub const BLANK_PATTERN: &str = "      ";

/// A validated 6-character glyph pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Glyph(String);

impl Glyph {
    /// Build a glyph from a raw pattern.
    ///
    /// Fails with [`BrailleError::GlyphLength`] unless the pattern is exactly
    /// six characters long.
    pub fn new(pattern: impl Into<String>) -> Result<Self, BrailleError> {
        let pattern = pattern.into();
        let len = pattern.chars().count();
        if len != GLYPH_CELLS {
            return Err(BrailleError::GlyphLength { len });
        }
        Ok(Glyph(pattern))
    }

    /// The all-blank glyph.
    pub fn blank() -> Self {
        Glyph(BLANK_PATTERN.to_string())
    }

    /// Assemble a glyph from the three 2-cell row slices.
    ///
    /// Callers guarantee each slice holds exactly [`GLYPH_WIDTH`] cells.
    pub(crate) fn from_rows(top: &[char], middle: &[char], bottom: &[char]) -> Self {
        debug_assert!(
            top.len() == GLYPH_WIDTH && middle.len() == GLYPH_WIDTH && bottom.len() == GLYPH_WIDTH
        );
        Glyph(top.iter().chain(middle).chain(bottom).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if every cell is a space.
    pub fn is_blank(&self) -> bool {
        self.0 == BLANK_PATTERN
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for Glyph {
    type Error = BrailleError;

    fn try_from(pattern: &str) -> Result<Self, Self::Error> {
        Glyph::new(pattern)
    }
}

impl AsRef<str> for Glyph {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
