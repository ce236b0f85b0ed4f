//! Error type definitions.
//!
//! This module defines the fatal error types and the non-fatal warning kinds
//! tracked while aggregating Open Graph tags.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Errors raised while scanning the raw document.
///
/// These are the only failures that abort a parse. Problems with the content
/// of individual tags are never surfaced as errors; see [`WarningType`].
#[derive(Error, Debug)]
pub enum ScanError {
    /// The underlying reader failed (I/O error, read deadline, truncated stream).
    #[error("Failed to read document: {0}")]
    Io(#[from] std::io::Error),

    /// The document is larger than the configured limit.
    #[error("Document exceeds the maximum size of {limit} bytes")]
    TooLarge {
        /// The configured limit in bytes
        limit: usize,
    },
}

/// A rejected configuration value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid configuration for '{field}': {message}")]
pub struct ConfigError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong and what is accepted instead
    pub message: String,
}

/// Content problems that cause a single tag to be dropped.
///
/// Warnings never abort a parse; they are counted in
/// [`ParseStats`](super::ParseStats).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum WarningType {
    /// `og:*` or profile property that maps to no known field
    UnknownProperty,
    /// Open Graph property without a `content` attribute
    MissingContent,
    /// Width, height or duration that is not an unsigned integer
    InvalidInteger,
    /// Date that is not RFC 3339
    InvalidTimestamp,
    /// Profile property contradicting an already declared `og:type`
    TypeMismatch,
    /// A second `<title>` element (only the first one is used)
    DuplicateTitle,
}

impl std::fmt::Display for WarningType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl WarningType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::UnknownProperty => "Unknown Open Graph property",
            WarningType::MissingContent => "Meta tag without content",
            WarningType::InvalidInteger => "Invalid integer value",
            WarningType::InvalidTimestamp => "Invalid timestamp value",
            WarningType::TypeMismatch => "Profile property conflicts with og:type",
            WarningType::DuplicateTitle => "Duplicate title element",
        }
    }
}
