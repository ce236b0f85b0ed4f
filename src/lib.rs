//! opengraph library: Open Graph metadata extraction
//!
//! This library reads an HTML document and assembles its `og:*` meta tags into
//! a typed [`OpenGraph`] value: title, type, canonical URL, description,
//! images, videos, audios, and the `article`, `book`, `music` and `profile`
//! objects.
//!
//! # Example
//!
//! ```
//! use opengraph::OpenGraph;
//!
//! let html = r#"
//!     <title>Fallback title</title>
//!     <meta property="og:type" content="video.other" />
//!     <meta property="og:video" content="https://example.com/a.mp4" />
//!     <meta property="og:video:width" content="720" />
//!     <meta property="og:video" content="https://example.com/a.ogg" />
//!     <meta property="og:video:width" content="360" />
//! "#;
//!
//! let og = OpenGraph::parse_str(html)?;
//! assert_eq!(og.og_type, "video.other");
//! assert_eq!(og.title, "Fallback title");
//! assert_eq!(og.videos.len(), 2);
//! assert_eq!(og.videos[1].width, 360);
//! # Ok::<(), opengraph::ScanError>(())
//! ```
//!
//! Callers with their own HTML tokenizer can feed attribute mappings one at a
//! time through [`OpenGraph::apply_tag`] or an [`Aggregator`].

pub mod config;
mod error_handling;
pub mod initialization;
mod models;
mod parse;
mod scan;

// Re-export public API
pub use config::{LogFormat, LogLevel, ParserConfig};
pub use error_handling::{ConfigError, InitializationError, ParseStats, ScanError, WarningType};
pub use models::{Article, Audio, Book, Image, Music, OpenGraph, Profile, Video};
pub use parse::{Aggregator, ParseOutput};
pub use scan::{decode_document, read_document, scan_document, MetaAttributes, ScanEvent};
