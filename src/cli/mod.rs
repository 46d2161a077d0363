//! Command-line interface definitions and helpers.
//!
//! This module contains all CLI argument parsing and subcommand handlers.

mod args;
mod commands;

pub use args::{Args, Command, ConfigAction, VerifyArgs};
pub use commands::{config_summary, handle_config_action, run_decode, run_verify};
