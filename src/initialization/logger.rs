//! Logger setup for the `opengraph` binary.
//!
//! Dropped tags are logged at `trace` by the router, scan summaries at
//! `debug` and per-document warning totals at `info`. Markup parser crates
//! are kept quiet so their recovery chatter does not drown those lines.

use std::io::Write;

use chrono::{SecondsFormat, Utc};
use colored::*;
use log::{Level, LevelFilter, Record};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Log target prefix of this crate.
const CRATE_TARGET: &str = "opengraph";

/// Dependencies whose output is capped regardless of the requested level.
const QUIET_MODULES: &[(&str, LevelFilter)] = &[
    ("html5ever", LevelFilter::Error),
    ("markup5ever", LevelFilter::Error),
    ("selectors", LevelFilter::Warn),
];

/// Installs the global logger.
///
/// `RUST_LOG` is read first; `level` then applies to everything, including
/// `opengraph::*` targets, while [`QUIET_MODULES`] stay capped.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Show every dropped tag
/// opengraph page.html --log-level trace
///
/// # Only the router
/// RUST_LOG=opengraph::parse::router=trace opengraph page.html
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    for &(module, cap) in QUIET_MODULES {
        builder.filter_module(module, cap.min(level));
    }
    builder.filter_module(CRATE_TARGET, level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| writeln!(buf, "{}", json_line(record)));
        }
        LogFormat::Plain => {
            builder.format(|buf, record| writeln!(buf, "{}", plain_line(record)));
        }
    }

    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// Renders a record as one JSON object with `ts`, `level`, `target` and `msg`.
fn json_line(record: &Record<'_>) -> String {
    serde_json::json!({
        "ts": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        "level": record.level().as_str(),
        "target": record.target(),
        "msg": record.args().to_string(),
    })
    .to_string()
}

fn plain_line(record: &Record<'_>) -> String {
    format!(
        "{} [{}] {}",
        record.target().cyan(),
        colored_level(record.level()),
        record.args()
    )
}

fn colored_level(level: Level) -> ColoredString {
    let name = level.as_str();
    match level {
        Level::Error => name.red(),
        Level::Warn => name.yellow(),
        Level::Info => name.green(),
        Level::Debug => name.blue(),
        Level::Trace => name.purple(),
    }
}
