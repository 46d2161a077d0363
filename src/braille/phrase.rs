//! Three-row text grids.

use super::error::BrailleError;
use super::glyph::{Glyph, GLYPH_WIDTH};

/// Three parallel rows of equal, even length.
///
/// Lengths are counted in characters. A phrase is validated once at
/// construction and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    rows: [Vec<char>; 3],
}

impl Phrase {
    /// Validate and wrap three rows.
    ///
    /// # Errors
    /// * [`BrailleError::UnequalRows`] if the rows differ in length
    /// * [`BrailleError::OddLength`] if the common length is odd
    pub fn new(row1: &str, row2: &str, row3: &str) -> Result<Self, BrailleError> {
        let rows = [
            row1.chars().collect::<Vec<_>>(),
            row2.chars().collect::<Vec<_>>(),
            row3.chars().collect::<Vec<_>>(),
        ];

        if rows[0].len() != rows[1].len() || rows[1].len() != rows[2].len() {
            return Err(BrailleError::UnequalRows {
                row1: rows[0].len(),
                row2: rows[1].len(),
                row3: rows[2].len(),
            });
        }
        if rows[0].len() % 2 != 0 {
            return Err(BrailleError::OddLength { len: rows[0].len() });
        }

        Ok(Phrase { rows })
    }

    /// Common row length.
    pub fn length(&self) -> usize {
        self.rows[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.length() == 0
    }

    /// Number of glyphs in the phrase.
    pub fn glyph_count(&self) -> usize {
        self.length() / GLYPH_WIDTH
    }

    /// The three rows, top to bottom.
    pub fn rows(&self) -> [String; 3] {
        self.rows.clone().map(|row| row.into_iter().collect())
    }

    /// Extract the glyph starting at column `index`.
    ///
    /// Indices are bounds checked rather than truncated: `index` must be even
    /// and leave a full glyph before the end of the phrase.
    pub fn extract_glyph(&self, index: usize) -> Result<Glyph, BrailleError> {
        if index % GLYPH_WIDTH != 0 || index + GLYPH_WIDTH > self.length() {
            return Err(BrailleError::GlyphOutOfRange {
                index,
                len: self.length(),
            });
        }
        Ok(self.glyph_at(index))
    }

    /// Iterate over every glyph from left to right.
    pub fn glyphs(&self) -> impl Iterator<Item = Glyph> + '_ {
        (0..self.length())
            .step_by(GLYPH_WIDTH)
            .map(move |index| self.glyph_at(index))
    }

    fn glyph_at(&self, index: usize) -> Glyph {
        let cols = index..index + GLYPH_WIDTH;
        Glyph::from_rows(
            &self.rows[0][cols.clone()],
            &self.rows[1][cols.clone()],
            &self.rows[2][cols],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let phrase = Phrase::new("1 1 ", "11  ", "  11").unwrap();
        assert_eq!(phrase.length(), 4);
        assert_eq!(phrase.glyph_count(), 2);
        assert!(!phrase.is_empty());
    }

    #[test]
    fn test_new_empty_rows() {
        let phrase = Phrase::new("", "", "").unwrap();
        assert_eq!(phrase.length(), 0);
        assert!(phrase.is_empty());
        assert_eq!(phrase.glyphs().count(), 0);
    }

    #[test]
    fn test_new_unequal_rows() {
        let err = Phrase::new("11", "1111", "11").unwrap_err();
        assert_eq!(
            err,
            BrailleError::UnequalRows {
                row1: 2,
                row2: 4,
                row3: 2
            }
        );
    }

    #[test]
    fn test_new_odd_length() {
        let err = Phrase::new("111", "111", "111").unwrap_err();
        assert_eq!(err, BrailleError::OddLength { len: 3 });
    }

    #[test]
    fn test_extract_glyph() {
        let phrase = Phrase::new("ab12", "cd34", "ef56").unwrap();
        assert_eq!(phrase.extract_glyph(0).unwrap().as_str(), "abcdef");
        assert_eq!(phrase.extract_glyph(2).unwrap().as_str(), "123456");
    }

    #[test]
    fn test_extract_glyph_out_of_range() {
        let phrase = Phrase::new("ab12", "cd34", "ef56").unwrap();
        assert_eq!(
            phrase.extract_glyph(4),
            Err(BrailleError::GlyphOutOfRange { index: 4, len: 4 })
        );
        assert_eq!(
            phrase.extract_glyph(1),
            Err(BrailleError::GlyphOutOfRange { index: 1, len: 4 })
        );
    }

    #[test]
    fn test_glyphs_in_order() {
        let phrase = Phrase::new("ab12", "cd34", "ef56").unwrap();
        let patterns: Vec<String> = phrase.glyphs().map(|g| g.to_string()).collect();
        assert_eq!(patterns, vec!["abcdef", "123456"]);
    }

    #[test]
    fn test_rows_roundtrip_text() {
        let phrase = Phrase::new("ab", "cd", "ef").unwrap();
        assert_eq!(phrase.rows(), ["ab".to_string(), "cd".to_string(), "ef".to_string()]);
    }
}
