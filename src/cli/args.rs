//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Decode three-row braille grids and check them against expected sentences
#[derive(Parser, Debug)]
#[command(name = "braille-decoder")]
#[command(version, about = "Decode three-row braille grids", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Decode src/wedstrijd.in and compare with src/wedstrijd.uit
    braille-decoder

    # Explicit files, fail when any sentence differs
    braille-decoder verify -i round1.in -s round1.uit --strict

    # Print decoded sentences only
    braille-decoder decode -i round1.in")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Options for the default `verify` run
    #[command(flatten)]
    pub verify: VerifyArgs,

    /// Config file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Log decoding details to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

impl Args {
    /// The subcommand to run; a bare invocation verifies.
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Verify(self.verify))
    }
}

#[derive(clap::Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyArgs {
    /// Puzzle input file
    #[arg(long, short, env = "BRAILLE_INPUT")]
    pub input: Option<PathBuf>,

    /// Solution file with the expected sentences
    #[arg(long, short, env = "BRAILLE_SOLUTION")]
    pub solution: Option<PathBuf>,

    /// Exit with status 2 if any sentence does not match
    #[arg(long)]
    pub strict: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode the puzzle and compare each sentence with the solution file
    Verify(VerifyArgs),
    /// Decode the puzzle and print one sentence per line
    Decode {
        /// Puzzle input file
        #[arg(long, short, env = "BRAILLE_INPUT")]
        input: Option<PathBuf>,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
