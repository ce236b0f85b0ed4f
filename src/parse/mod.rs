//! Open Graph tag aggregation.
//!
//! This module turns a stream of `<meta>` attribute mappings into an
//! [`OpenGraph`] value:
//! - `router`: maps a property name to exactly one destination
//! - `media`: splits `og:image` / `og:video` / `og:audio` tags into entries
//! - `profile`: builds the `article`, `book`, `music` and `profile` objects
//!
//! Tags are applied one at a time in document order. Content problems drop
//! the offending tag and are counted in [`ParseStats`]; only scanning the
//! raw document can fail.

mod media;
mod profile;
mod router;

use std::io::Read;

use crate::config::ParserConfig;
use crate::error_handling::{ParseStats, ScanError, WarningType};
use crate::models::OpenGraph;
use crate::scan::{read_document, scan_document, MetaAttributes, ScanEvent};

use router::{route_tag, TagOutcome};

/// Completed parse: the aggregated graph and the warnings collected on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutput {
    pub graph: OpenGraph,
    pub stats: ParseStats,
}

/// Stateful tag aggregation engine.
///
/// One aggregator builds one [`OpenGraph`]. Feed it tags with
/// [`apply_tag`](Self::apply_tag) and the document title with
/// [`apply_title`](Self::apply_title), then call [`finish`](Self::finish); or
/// hand it a whole document with [`parse_document`](Self::parse_document).
///
/// # Example
///
/// ```
/// use opengraph::{Aggregator, MetaAttributes};
///
/// let mut aggregator = Aggregator::new();
/// aggregator.apply_tag(&MetaAttributes::from([
///     ("property".to_string(), "og:video".to_string()),
///     ("content".to_string(), "https://example.com/a.mp4".to_string()),
/// ]));
/// let output = aggregator.finish();
/// assert_eq!(output.graph.videos.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Aggregator {
    config: ParserConfig,
    graph: OpenGraph,
    stats: ParseStats,
    og_title_seen: bool,
    document_title: Option<String>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Aggregator {
            config,
            graph: OpenGraph::default(),
            stats: ParseStats::new(),
            og_title_seen: false,
            document_title: None,
        }
    }

    /// Applies one `<meta>` attribute mapping.
    ///
    /// Never fails: tags that are not Open Graph are skipped, malformed Open
    /// Graph tags are dropped and counted.
    pub fn apply_tag(&mut self, attrs: &MetaAttributes) {
        match route_tag(&mut self.graph, attrs) {
            TagOutcome::AppliedTitle => self.og_title_seen = true,
            TagOutcome::Dropped(warning) => self.stats.increment_warning(warning),
            TagOutcome::Applied | TagOutcome::NotOpenGraph => {}
        }
    }

    /// Records the text of a `<title>` element. Only the first one is kept.
    pub fn apply_title(&mut self, title: &str) {
        if self.document_title.is_some() {
            self.stats.increment_warning(WarningType::DuplicateTitle);
            return;
        }
        self.document_title = Some(title.to_string());
    }

    /// The graph as aggregated so far.
    pub fn graph(&self) -> &OpenGraph {
        &self.graph
    }

    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }

    /// Completes the parse, applying the `<title>` fallback when no
    /// `og:title` tag was seen.
    pub fn finish(mut self) -> ParseOutput {
        if self.config.title_fallback && !self.og_title_seen {
            if let Some(title) = self.document_title.take() {
                log::debug!("No og:title found, using <title> text");
                self.graph.title = title;
            }
        }

        ParseOutput {
            graph: self.graph,
            stats: self.stats,
        }
    }

    /// Reads, scans and aggregates a whole document.
    ///
    /// # Errors
    ///
    /// Returns a [`ScanError`] if the source cannot be read or exceeds
    /// `max_document_bytes`. Nothing aggregated by this call survives an
    /// error.
    pub fn parse_document<R: Read>(mut self, source: R) -> Result<ParseOutput, ScanError> {
        let html = read_document(source, self.config.max_document_bytes)?;

        for event in scan_document(&html) {
            match event {
                ScanEvent::Title(title) => self.apply_title(&title),
                ScanEvent::Meta(attrs) => self.apply_tag(&attrs),
            }
        }

        let output = self.finish();
        output.stats.log_summary();
        Ok(output)
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a whole HTML document with the default configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use opengraph::OpenGraph;
    ///
    /// let html = r#"<meta property="og:type" content="video.other">
    ///               <meta property="og:video" content="https://example.com/a.mp4">
    ///               <meta property="og:video:width" content="720">"#;
    /// let og = OpenGraph::parse(html.as_bytes()).unwrap();
    /// assert_eq!(og.og_type, "video.other");
    /// assert_eq!(og.videos[0].width, 720);
    /// ```
    pub fn parse<R: Read>(source: R) -> Result<Self, ScanError> {
        Aggregator::new()
            .parse_document(source)
            .map(|output| output.graph)
    }

    /// Parses an in-memory HTML document.
    pub fn parse_str(html: &str) -> Result<Self, ScanError> {
        Self::parse(html.as_bytes())
    }

    /// Applies a single pre-extracted `<meta>` attribute mapping.
    ///
    /// Unknown or malformed tags leave the graph unchanged.
    pub fn apply_tag(&mut self, attrs: &MetaAttributes) {
        let _ = route_tag(self, attrs);
    }
}
