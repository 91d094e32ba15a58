//! Command-line interface
//!
//! Argument parsing for the `mnid` binary.

pub mod commands;

pub use commands::{Command, Opt};
