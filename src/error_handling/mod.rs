//! Error handling and parse statistics.
//!
//! This module provides:
//! - Error type definitions (scanning, configuration, initialization)
//! - Warning kinds for tags that are dropped without failing the parse
//! - Per-parse warning counters
//!
//! Only [`ScanError`] aborts a parse. Content problems (unknown properties,
//! unparsable numbers or dates) drop the offending tag and are counted.

mod stats;
mod types;

// Re-export public API
pub use stats::ParseStats;
pub use types::{ConfigError, InitializationError, ScanError, WarningType};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parse_stats_initialization() {
        let stats = ParseStats::new();
        for warning_type in WarningType::iter() {
            assert_eq!(stats.get_warning_count(warning_type), 0);
        }
        assert_eq!(stats.total_warnings(), 0);
    }

    #[test]
    fn test_parse_stats_increment() {
        let mut stats = ParseStats::new();
        stats.increment_warning(WarningType::InvalidInteger);
        assert_eq!(stats.get_warning_count(WarningType::InvalidInteger), 1);
        assert_eq!(stats.get_warning_count(WarningType::UnknownProperty), 0);
    }

    #[test]
    fn test_parse_stats_totals() {
        let mut stats = ParseStats::new();
        stats.increment_warning(WarningType::UnknownProperty);
        stats.increment_warning(WarningType::UnknownProperty);
        stats.increment_warning(WarningType::InvalidTimestamp);

        assert_eq!(stats.get_warning_count(WarningType::UnknownProperty), 2);
        assert_eq!(stats.total_warnings(), 3);
    }

    #[test]
    fn test_parse_stats_default_matches_new() {
        assert_eq!(ParseStats::default(), ParseStats::new());
    }
}
