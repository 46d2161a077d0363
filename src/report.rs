//! Per-line verification of decoded sentences.
//!
//! A mismatch is a normal outcome, reported line by line; it never aborts
//! the batch.

use std::io::{self, Write};
use std::time::Duration;

/// Result of comparing one decoded line with its expected sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOutcome {
    pub index: usize,
    pub decoded: String,
    /// `None` when the solution file has no line for this index.
    pub expected: Option<String>,
}

impl LineOutcome {
    pub fn matched(&self) -> bool {
        self.expected.as_deref() == Some(self.decoded.as_str())
    }
}

/// Outcomes for a whole puzzle plus the time spent decoding it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub outcomes: Vec<LineOutcome>,
    pub elapsed: Duration,
}

impl Report {
    /// Pair each decoded line with the expected line at the same index.
    ///
    /// Extra expected lines are ignored.
    pub fn verify(decoded: Vec<String>, expected: &[String], elapsed: Duration) -> Self {
        let outcomes = decoded
            .into_iter()
            .enumerate()
            .map(|(index, decoded)| LineOutcome {
                index,
                decoded,
                expected: expected.get(index).cloned(),
            })
            .collect();
        Report { outcomes, elapsed }
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn matched_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.matched()).count()
    }

    pub fn all_matched(&self) -> bool {
        self.outcomes.iter().all(LineOutcome::matched)
    }

    pub fn mismatches(&self) -> impl Iterator<Item = &LineOutcome> {
        self.outcomes.iter().filter(|o| !o.matched())
    }

    /// Render the report. Matches and the summary go to `out`, mismatches to `err`.
    pub fn write_to<W: Write, E: Write>(&self, out: &mut W, err: &mut E) -> io::Result<()> {
        for outcome in &self.outcomes {
            if outcome.matched() {
                writeln!(out, "Sentence {} matched.", outcome.index)?;
            } else {
                writeln!(
                    err,
                    "Sentence {} wrong? \"{}\" {}",
                    outcome.index,
                    outcome.decoded,
                    outcome
                        .expected
                        .as_ref()
                        .map(|e| format!("\"{}\"", e))
                        .unwrap_or_else(|| "<missing>".to_string())
                )?;
            }
        }
        writeln!(
            out,
            "Decoding took {:.3} msec.",
            self.elapsed.as_secs_f64() * 1000.0
        )?;
        writeln!(
            out,
            "{}/{} sentences matched.",
            self.matched_count(),
            self.total()
        )
    }

    /// Render the report to stdout and stderr.
    pub fn print(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let stderr = io::stderr();
        self.write_to(&mut stdout.lock(), &mut stderr.lock())
    }
}
