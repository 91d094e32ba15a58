use std::collections::HashMap;
use std::env;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::{MnidError, Result};

/// Environment variable naming an optional TOML settings file
pub const CONFIG_PATH_KEY: &str = "MNID_CONFIG";
pub const OUTPUT_KEY: &str = "MNID_OUTPUT";
pub const LOG_LEVEL_KEY: &str = "MNID_LOG_LEVEL";

static DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid output format: {s}. Valid options: text, json")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Settings resolved from, in increasing priority: defaults, the TOML file
/// named by `MNID_CONFIG`, `MNID_OUTPUT`/`MNID_LOG_LEVEL`, then CLI flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub output: OutputFormat,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output: OutputFormat::Text,
            log_level: String::from(DEFAULT_LOG_LEVEL),
        }
    }
}

impl Config {
    /// Loads settings from the process environment
    pub fn load() -> Result<Config> {
        let vars: HashMap<String, String> = env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect();
        Config::load_from(&vars)
    }

    /// Loads settings from an explicit variable map
    pub fn load_from(vars: &HashMap<String, String>) -> Result<Config> {
        let mut config = match vars.get(CONFIG_PATH_KEY) {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        if let Some(output) = vars.get(OUTPUT_KEY) {
            config.set_output(output)?;
        }
        if let Some(level) = vars.get(LOG_LEVEL_KEY) {
            config.set_log_level(level)?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            MnidError::Config(format!("Failed to read {}: {e}", path.display()))
        })?;
        Config::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Config> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn set_output(&mut self, output: &str) -> Result<()> {
        self.output = output.parse().map_err(MnidError::Config)?;
        Ok(())
    }

    pub fn set_log_level(&mut self, level: &str) -> Result<()> {
        parse_level(level)?;
        self.log_level = level.to_lowercase();
        Ok(())
    }

    pub fn level_filter(&self) -> LevelFilter {
        // validated on every path that sets it
        parse_level(&self.log_level).unwrap_or(LevelFilter::Warn)
    }

    fn validate(&self) -> Result<()> {
        parse_level(&self.log_level).map(|_| ())
    }
}

fn parse_level(level: &str) -> Result<LevelFilter> {
    LevelFilter::from_str(level).map_err(|_| {
        MnidError::Config(format!(
            "Invalid log level: {level}. Valid options: off, error, warn, info, debug, trace"
        ))
    })
}
