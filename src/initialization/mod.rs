//! Application initialization.
//!
//! Logger setup for the `opengraph` binary and for library users who want the
//! same log formatting.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
