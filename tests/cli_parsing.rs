//! Tests for CLI option parsing and file-based input.

use std::io::Write;

use clap::Parser;
use opengraph::config::{Opt, MAX_DOCUMENT_SIZE};
use opengraph::{Aggregator, LogFormat, LogLevel};

#[test]
fn test_cli_defaults_read_stdin() {
    let opt = Opt::try_parse_from(["opengraph"]).expect("Should parse with no arguments");
    assert_eq!(opt.file.as_os_str(), "-");
    assert!(matches!(opt.log_level, LogLevel::Warn));
    assert!(matches!(opt.log_format, LogFormat::Plain));
    assert_eq!(opt.max_bytes, MAX_DOCUMENT_SIZE);
}

#[test]
fn test_cli_zero_max_bytes_fails_validation() {
    let opt = Opt::try_parse_from(["opengraph", "--max-bytes", "0"]).expect("Should parse");
    let err = opt.parser_config().validate().unwrap_err();
    assert_eq!(err.field, "max_document_bytes");
}

#[test]
fn test_cli_rejects_non_numeric_max_bytes() {
    assert!(Opt::try_parse_from(["opengraph", "--max-bytes", "lots"]).is_err());
}

#[test]
fn test_parse_from_file_with_cli_config() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    write!(
        file,
        r#"<html><head><title>From File</title>
        <meta property="og:image" content="https://example.com/a.png">
        <meta property="og:image:type" content="image/png"></head></html>"#
    )
    .expect("Failed to write temp file");

    let path = file.path().to_string_lossy().to_string();
    let opt = Opt::try_parse_from(["opengraph", path.as_str(), "--no-title-fallback"])
        .expect("Should parse");

    let source = std::fs::File::open(&opt.file).expect("Failed to open temp file");
    let output = Aggregator::with_config(opt.parser_config())
        .parse_document(source)
        .expect("Document should scan");

    assert_eq!(output.graph.title, "");
    assert_eq!(output.graph.images.len(), 1);
    assert_eq!(output.graph.images[0].mime_type, "image/png");
}
