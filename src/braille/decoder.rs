//! Glyph and phrase decoding.

use super::alphabet::{Alphabet, BlankGlyph};
use super::error::BrailleError;
use super::glyph::Glyph;
use super::phrase::Phrase;

/// Decoded output for a glyph that is not in the alphabet.
pub const UNKNOWN_GLYPH: &str = "?";

/// Decodes glyphs against an alphabet it owns.
///
/// A decoder starts without an alphabet; every decode call fails with
/// [`BrailleError::AlphabetNotInitialized`] until
/// [`initialize_alphabet`](Self::initialize_alphabet) succeeds. Decoders do
/// not share state, so differently-initialized decoders can coexist.
#[derive(Debug, Clone, Default)]
pub struct GlyphDecoder {
    alphabet: Option<Alphabet>,
    blank: BlankGlyph,
}

impl GlyphDecoder {
    /// Create an uninitialized decoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decoder and learn its alphabet from `header`.
    pub fn from_header(header: &Phrase) -> Result<Self, BrailleError> {
        let mut decoder = Self::new();
        decoder.initialize_alphabet(header)?;
        Ok(decoder)
    }

    /// Choose what the blank glyph decodes to.
    ///
    /// Takes effect at the next [`initialize_alphabet`](Self::initialize_alphabet).
    pub fn with_blank(mut self, blank: BlankGlyph) -> Self {
        self.blank = blank;
        self
    }

    pub fn blank(&self) -> BlankGlyph {
        self.blank
    }

    pub fn is_initialized(&self) -> bool {
        self.alphabet.is_some()
    }

    /// Replace the alphabet with one learned from `header`.
    ///
    /// On error the previous alphabet, if any, stays in place.
    pub fn initialize_alphabet(&mut self, header: &Phrase) -> Result<(), BrailleError> {
        let alphabet = Alphabet::from_header(header, self.blank)?;
        self.alphabet = Some(alphabet);
        Ok(())
    }

    /// Decode one glyph to its letter, the blank output, or [`UNKNOWN_GLYPH`].
    pub fn decode_glyph(&self, glyph: &Glyph) -> Result<&str, BrailleError> {
        let alphabet = self.alphabet()?;
        Ok(alphabet.lookup(glyph).unwrap_or(UNKNOWN_GLYPH))
    }

    /// Decode a raw 6-character pattern.
    pub fn decode_pattern(&self, pattern: &str) -> Result<&str, BrailleError> {
        let glyph = Glyph::new(pattern)?;
        self.decode_glyph(&glyph)
    }

    /// Decode every glyph of `phrase`, left to right.
    pub fn decode_phrase(&self, phrase: &Phrase) -> Result<String, BrailleError> {
        let alphabet = self.alphabet()?;

        let mut decoded = String::with_capacity(phrase.glyph_count());
        let mut unknown = 0usize;
        for glyph in phrase.glyphs() {
            match alphabet.lookup(&glyph) {
                Some(text) => decoded.push_str(text),
                None => {
                    unknown += 1;
                    decoded.push_str(UNKNOWN_GLYPH);
                }
            }
        }

        if unknown > 0 {
            log::debug!(
                "{} of {} glyphs not in alphabet",
                unknown,
                phrase.glyph_count()
            );
        }
        Ok(decoded)
    }

    fn alphabet(&self) -> Result<&Alphabet, BrailleError> {
        self.alphabet
            .as_ref()
            .ok_or(BrailleError::AlphabetNotInitialized)
    }
}
