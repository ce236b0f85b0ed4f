//! Configuration types and CLI options.
//!
//! This module defines the library parser configuration and the enums and
//! structs used for command-line argument parsing.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::MAX_DOCUMENT_SIZE;
use crate::error_handling::ConfigError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Parser configuration (no CLI dependencies).
///
/// # Examples
///
/// ```
/// use opengraph::ParserConfig;
///
/// let config = ParserConfig {
///     title_fallback: false,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Use the `<title>` text when the document has no `og:title`
    pub title_fallback: bool,

    /// Maximum number of bytes read from the source before failing the scan
    pub max_document_bytes: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            title_fallback: true,
            max_document_bytes: MAX_DOCUMENT_SIZE,
        }
    }
}

impl ParserConfig {
    /// Checks that every field holds a usable value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_document_bytes == 0 {
            return Err(ConfigError {
                field: "max_document_bytes",
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

/// Command-line options for the `opengraph` binary.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "opengraph",
    about = "Extracts Open Graph metadata from an HTML document and prints it as JSON"
)]
pub struct Opt {
    /// HTML file to read ("-" reads stdin)
    #[arg(default_value = "-")]
    pub file: PathBuf,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Do not fall back to the <title> element when og:title is missing
    #[arg(long)]
    pub no_title_fallback: bool,

    /// Maximum document size in bytes
    #[arg(long, default_value_t = MAX_DOCUMENT_SIZE)]
    pub max_bytes: usize,

    /// Print compact JSON instead of pretty-printed JSON
    #[arg(long)]
    pub compact: bool,
}

impl Opt {
    /// Builds the library configuration from the command-line options.
    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig {
            title_fallback: !self.no_title_fallback,
            max_document_bytes: self.max_bytes,
        }
    }
}
