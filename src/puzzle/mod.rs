//! Puzzle input and solution files.
//!
//! This is the file-facing side of the decoder: it turns the contest input
//! format into [`Phrase`](crate::braille::Phrase) values and reads the
//! expected sentences to check against.

mod error;
mod input;
mod solution;

pub use error::InputError;
pub use input::Puzzle;
pub use solution::{load_solutions, parse_solution_line, parse_solutions};
