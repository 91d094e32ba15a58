//! Configuration management
//!
//! Settings for the `mnid` binary: output format and log verbosity. Codec
//! constants are compile-time and never come from here.

pub mod settings;

pub use settings::{Config, OutputFormat, CONFIG_PATH_KEY, LOG_LEVEL_KEY, OUTPUT_KEY};
