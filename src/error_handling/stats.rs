//! Per-parse warning statistics.
//!
//! Each parse owns its own [`ParseStats`], so plain counters are enough; no
//! atomics or locking are involved.

use std::collections::HashMap;
use strum::IntoEnumIterator;

use super::types::WarningType;

/// Counts of dropped tags by reason.
///
/// All warning types are initialized to zero on creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStats {
    warnings: HashMap<WarningType, usize>,
}

impl ParseStats {
    pub fn new() -> Self {
        let mut warnings = HashMap::new();
        for warning in WarningType::iter() {
            warnings.insert(warning, 0);
        }
        ParseStats { warnings }
    }

    /// Increment a warning counter.
    pub fn increment_warning(&mut self, warning: WarningType) {
        *self.warnings.entry(warning).or_insert(0) += 1;
    }

    /// Get the count for a warning type.
    pub fn get_warning_count(&self, warning: WarningType) -> usize {
        self.warnings.get(&warning).copied().unwrap_or(0)
    }

    /// Get total warning count across all warning types.
    pub fn total_warnings(&self) -> usize {
        WarningType::iter().map(|w| self.get_warning_count(w)).sum()
    }

    /// Logs every non-zero counter at debug level.
    pub fn log_summary(&self) {
        for warning in WarningType::iter() {
            let count = self.get_warning_count(warning);
            if count > 0 {
                log::debug!("{}: {} tag(s) dropped", warning, count);
            }
        }
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
