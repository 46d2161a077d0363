//! Braille grid decoding.
//!
//! Text is written as three rows of characters. Every two columns form a
//! glyph of six cells, and each glyph stands for one letter:
//!
//! 1. **Phrase** - validated three-row grid, sliced into glyphs
//! 2. **Alphabet** - pattern table learned from a 52-column header
//! 3. **Decoder** - turns glyphs and whole phrases back into letters
//!
//! Glyph meaning is purely positional: the `i`-th glyph of the header is the
//! `i`-th letter of the alphabet. Patterns the header never defines decode to
//! [`UNKNOWN_GLYPH`].

mod alphabet;
mod decoder;
mod error;
mod glyph;
mod phrase;

pub use alphabet::{Alphabet, BlankGlyph, HEADER_LENGTH, LETTER_COUNT};
pub use decoder::{GlyphDecoder, UNKNOWN_GLYPH};
pub use error::{BrailleError, ErrorKind};
pub use glyph::{Glyph, BLANK_PATTERN, GLYPH_CELLS, GLYPH_WIDTH};
pub use phrase::Phrase;
