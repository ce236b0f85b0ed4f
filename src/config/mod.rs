//! Configuration and constants.
//!
//! This module provides:
//! - Configuration constants (size limits, selector and attribute names)
//! - The library parser configuration
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{LogFormat, LogLevel, Opt, ParserConfig};
