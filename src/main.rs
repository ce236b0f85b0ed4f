//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `opengraph` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Reading the document from a file or stdin
//! - Printing the result as JSON
//!
//! All extraction logic is implemented in the library crate.

use std::fs::File;
use std::io::{self, Read};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use opengraph::config::Opt;
use opengraph::initialization::init_logger_with;
use opengraph::{Aggregator, ParseOutput};

fn main() -> Result<()> {
    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    let config = opt.parser_config();
    config.validate().context("Invalid command-line options")?;

    let source: Box<dyn Read> = if opt.file.as_os_str() == "-" {
        log::debug!("Reading document from stdin");
        Box::new(io::stdin().lock())
    } else {
        let file = File::open(&opt.file)
            .with_context(|| format!("Failed to open {}", opt.file.display()))?;
        Box::new(file)
    };

    let ParseOutput { graph, stats } = match Aggregator::with_config(config).parse_document(source)
    {
        Ok(output) => output,
        Err(e) => {
            eprintln!("opengraph error: {:#}", e);
            process::exit(1);
        }
    };

    if stats.total_warnings() > 0 {
        log::info!("Dropped {} malformed Open Graph tag(s)", stats.total_warnings());
    }

    let json = if opt.compact {
        serde_json::to_string(&graph)
    } else {
        serde_json::to_string_pretty(&graph)
    }
    .context("Failed to serialize result")?;
    println!("{}", json);

    Ok(())
}
