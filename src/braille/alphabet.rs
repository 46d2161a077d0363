//! Pattern table learned from a header phrase.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::error::BrailleError;
use super::glyph::{Glyph, GLYPH_WIDTH};
use super::phrase::Phrase;

/// Number of letters defined by a header.
pub const LETTER_COUNT: usize = 26;

/// Required header width in columns (26 glyphs of 2 columns each).
pub const HEADER_LENGTH: usize = LETTER_COUNT * GLYPH_WIDTH;

/// What the all-blank glyph decodes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlankGlyph {
    /// A single space character
    #[default]
    Space,
    /// Nothing; blank glyphs vanish from the decoded line
    Empty,
}

impl BlankGlyph {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlankGlyph::Space => " ",
            BlankGlyph::Empty => "",
        }
    }
}

/// Mapping from glyph pattern to decoded text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    table: HashMap<Glyph, String>,
}

impl Alphabet {
    /// Learn an alphabet from a 52-column header.
    ///
    /// Block `i` of the header binds to letter `'A' + i`. Entries are inserted
    /// in order, so a repeated pattern keeps the later letter. The blank glyph
    /// is inserted last and wins over any letter drawn blank in the header.
    pub fn from_header(header: &Phrase, blank: BlankGlyph) -> Result<Self, BrailleError> {
        if header.length() != HEADER_LENGTH {
            return Err(BrailleError::HeaderLength {
                len: header.length(),
            });
        }

        let mut table = HashMap::with_capacity(LETTER_COUNT + 1);
        for (glyph, letter) in header.glyphs().zip('A'..='Z') {
            if let Some(previous) = table.insert(glyph.clone(), letter.to_string()) {
                log::warn!(
                    "Header pattern {:?} bound to both {} and {}; keeping {}",
                    glyph.as_str(),
                    previous,
                    letter,
                    letter
                );
            }
        }
        table.insert(Glyph::blank(), blank.as_str().to_string());

        log::debug!("Alphabet built with {} patterns", table.len());
        Ok(Alphabet { table })
    }

    /// Look up a glyph. `None` means the pattern is not in the alphabet.
    pub fn lookup(&self, glyph: &Glyph) -> Option<&str> {
        self.table.get(glyph).map(String::as_str)
    }

    /// Number of distinct patterns, including the blank glyph.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Header where block `i` has the code of letter `i` in its top row.
    fn header() -> Phrase {
        let top: String = ('a'..='z').flat_map(|c| [c, '.']).collect();
        let blank = " ".repeat(HEADER_LENGTH);
        Phrase::new(&top, &blank, &blank).unwrap()
    }

    #[test]
    fn test_from_header_binds_letters() {
        let alphabet = Alphabet::from_header(&header(), BlankGlyph::Space).unwrap();
        assert_eq!(alphabet.len(), 27);
        assert_eq!(alphabet.lookup(&Glyph::new("a.    ").unwrap()), Some("A"));
        assert_eq!(alphabet.lookup(&Glyph::new("z.    ").unwrap()), Some("Z"));
    }

    #[test]
    fn test_from_header_blank_entry() {
        let alphabet = Alphabet::from_header(&header(), BlankGlyph::Space).unwrap();
        assert_eq!(alphabet.lookup(&Glyph::blank()), Some(" "));

        let alphabet = Alphabet::from_header(&header(), BlankGlyph::Empty).unwrap();
        assert_eq!(alphabet.lookup(&Glyph::blank()), Some(""));
    }

    #[test]
    fn test_from_header_wrong_length() {
        let short = Phrase::new("ab", "cd", "ef").unwrap();
        assert_eq!(
            Alphabet::from_header(&short, BlankGlyph::Space),
            Err(BrailleError::HeaderLength { len: 2 })
        );
    }

    #[test]
    fn test_duplicate_pattern_keeps_later_letter() {
        // Blocks 0 and 1 share a pattern
        let mut top: Vec<char> = ('a'..='z').flat_map(|c| [c, '.']).collect();
        top[2] = 'a';
        let top: String = top.into_iter().collect();
        let blank = " ".repeat(HEADER_LENGTH);
        let header = Phrase::new(&top, &blank, &blank).unwrap();

        let alphabet = Alphabet::from_header(&header, BlankGlyph::Space).unwrap();
        assert_eq!(alphabet.lookup(&Glyph::new("a.    ").unwrap()), Some("B"));
        assert_eq!(alphabet.len(), 26);
    }

    #[test]
    fn test_blank_entry_overrides_blank_letter() {
        let mut top: Vec<char> = ('a'..='z').flat_map(|c| [c, '.']).collect();
        top[0] = ' ';
        top[1] = ' ';
        let top: String = top.into_iter().collect();
        let blank = " ".repeat(HEADER_LENGTH);
        let header = Phrase::new(&top, &blank, &blank).unwrap();

        let alphabet = Alphabet::from_header(&header, BlankGlyph::Space).unwrap();
        assert_eq!(alphabet.lookup(&Glyph::blank()), Some(" "));
    }

    #[test]
    fn test_blank_glyph_default() {
        assert_eq!(BlankGlyph::default(), BlankGlyph::Space);
    }
}
