//! Expected-output files.
//!
//! Each line holds a label followed by the expected sentence, e.g.
//! `1 HELLO WORLD`. Only the text after the first space is kept.

use std::path::Path;

use super::error::InputError;

/// Read and parse a solution file.
pub fn load_solutions(path: &Path) -> Result<Vec<String>, InputError> {
    let content = std::fs::read_to_string(path).map_err(|e| InputError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    log::info!("Loaded solutions from {}", path.display());
    Ok(parse_solutions(&content))
}

/// Parse solution text into one expected sentence per line.
pub fn parse_solutions(content: &str) -> Vec<String> {
    content.lines().map(parse_solution_line).collect()
}

/// Strip the leading label from one solution line.
///
/// A line without a space is taken whole.
pub fn parse_solution_line(line: &str) -> String {
    let line = line.trim();
    match line.split_once(' ') {
        Some((_label, sentence)) => sentence.to_string(),
        None => line.to_string(),
    }
}
