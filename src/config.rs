//! Configuration file handling for braille-decoder.
//!
//! Loads configuration from `~/.config/braille-decoder/config.toml` or a custom path.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::braille::BlankGlyph;

/// Puzzle input used when neither the CLI, the environment nor the config names one.
pub const DEFAULT_INPUT: &str = "src/wedstrijd.in";

/// Solution file used when neither the CLI, the environment nor the config names one.
pub const DEFAULT_SOLUTION: &str = "src/wedstrijd.uit";

/// Commented template written by `config init`.
pub const DEFAULT_CONFIG: &str = r#"# braille-decoder configuration

[paths]
# Puzzle input file (header, case count, cases)
# input = "src/wedstrijd.in"
# Expected sentences, one "<label> <sentence>" per line
# solution = "src/wedstrijd.uit"

[decode]
# What a blank glyph decodes to: "space" or "empty"
blank = "space"
"#;

/// Configuration file structure for braille-decoder.
/// Loaded from ~/.config/braille-decoder/config.toml (or custom path via --config).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub decode: DecodeConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathsConfig {
    pub input: Option<PathBuf>,
    pub solution: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DecodeConfig {
    #[serde(default)]
    pub blank: BlankGlyph,
}

impl Config {
    /// Load configuration.
    ///
    /// With `None`, reads the default path and falls back to defaults if that
    /// file doesn't exist. An explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound {
                        path: path.to_path_buf(),
                    });
                }
                Self::read(path)
            }
            None => {
                let path = default_path();
                if path.exists() {
                    Self::read(&path)
                } else {
                    log::debug!("No config file at {}, using defaults", path.display());
                    Ok(Config::default())
                }
            }
        }
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Puzzle input path: `cli` (flag or environment) > config > default.
    pub fn input_path(&self, cli: Option<PathBuf>) -> PathBuf {
        cli.or_else(|| self.paths.input.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT))
    }

    /// Solution path: `cli` (flag or environment) > config > default.
    pub fn solution_path(&self, cli: Option<PathBuf>) -> PathBuf {
        cli.or_else(|| self.paths.solution.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SOLUTION))
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = Self::from_toml(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    NotFound {
        path: PathBuf,
    },
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NotFound { path } => {
                write!(f, "Config file '{}' not found", path.display())
            }
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::NotFound { .. } => None,
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("braille-decoder").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/braille-decoder/config.toml")
        })
}
