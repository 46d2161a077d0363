//! braille-decoder library crate.
//!
//! [`braille`] holds the decoding model and touches no files. [`puzzle`],
//! [`report`], [`config`] and [`cli`] make up the command-line tool around it.

pub mod braille;
pub mod cli;
pub mod config;
pub mod puzzle;
pub mod report;
