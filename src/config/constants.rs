//! Configuration constants.
//!
//! This module defines the default limits and the fixed HTML names the
//! scanner and router look for.

/// Maximum document size in bytes (4MB)
/// Documents larger than this fail the scan instead of being buffered
pub const MAX_DOCUMENT_SIZE: usize = 4 * 1024 * 1024;

// CSS selector strings
/// Matches title and meta elements in document order
pub const SCAN_SELECTOR_STR: &str = "title, meta";
pub const TITLE_ELEMENT: &str = "title";
pub const META_ELEMENT: &str = "meta";
/// Namespace of HTML elements; `<title>` in SVG or MathML lives elsewhere
pub const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// Leading bytes searched for a `charset=` declaration
pub const CHARSET_PRESCAN_BYTES: usize = 1024;

// Meta attribute names
/// Attribute carrying the namespaced property name (`og:title`)
pub const PROPERTY_ATTR: &str = "property";
/// Fallback attribute some producers use instead of `property`
pub const NAME_ATTR: &str = "name";
/// Attribute carrying the raw value
pub const CONTENT_ATTR: &str = "content";
