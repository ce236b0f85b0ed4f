//! Element scanning.
//!
//! Reads a byte source, tokenizes it with `scraper` (html5ever) and yields the
//! `<title>` text and every `<meta>` attribute mapping in document order.
//! Bytes are decoded with `encoding_rs`: a byte order mark wins, then a
//! charset declared near the top of the document, then lossy UTF-8. Tag syntax
//! recovery is left to html5ever. The only scanning failures are reader errors
//! and oversized documents.

use std::collections::HashMap;
use std::io::Read;
use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use scraper::{Html, Selector};

use crate::config::{
    CHARSET_PRESCAN_BYTES, HTML_NAMESPACE, META_ELEMENT, SCAN_SELECTOR_STR, TITLE_ELEMENT,
};
use crate::error_handling::ScanError;

/// Attributes of one `<meta>` element, keyed by lowercase attribute name.
pub type MetaAttributes = HashMap<String, String>;

/// One element of interest, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    /// Text content of a `<title>` element, trimmed
    Title(String),
    /// Attribute mapping of a `<meta>` element
    Meta(MetaAttributes),
}

static SCAN_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(SCAN_SELECTOR_STR).unwrap_or_else(|e| {
        panic!(
            "Failed to parse CSS selector '{}' in SCAN_SELECTOR: {}. This is a programming error.",
            SCAN_SELECTOR_STR, e
        )
    })
});

/// Reads the whole source and decodes it, failing once `limit` bytes are exceeded.
///
/// At most `limit + 1` bytes are pulled from the reader, so an endless or
/// hostile source cannot grow the buffer past the limit. Decoding never
/// fails; undecodable bytes become U+FFFD.
///
/// # Errors
///
/// * `ScanError::Io` if the reader fails
/// * `ScanError::TooLarge` if the source holds more than `limit` bytes
pub fn read_document<R: Read>(source: R, limit: usize) -> Result<String, ScanError> {
    let mut buffer = Vec::new();
    source
        .take((limit as u64).saturating_add(1))
        .read_to_end(&mut buffer)?;

    if buffer.len() > limit {
        log::debug!("Document exceeds {} byte limit", limit);
        return Err(ScanError::TooLarge { limit });
    }

    Ok(decode_document(&buffer))
}

/// Decodes raw document bytes into a string.
///
/// A byte order mark takes precedence over a declared charset; without
/// either the bytes are read as UTF-8.
pub fn decode_document(bytes: &[u8]) -> String {
    let declared = sniff_declared_charset(bytes).unwrap_or(UTF_8);
    // decode() handles BOM sniffing and removal itself
    let (text, used, had_errors) = declared.decode(bytes);

    if had_errors {
        log::debug!(
            "Document is not valid {}, undecodable bytes were replaced",
            used.name()
        );
    } else if used != UTF_8 {
        log::debug!("Decoded document as {}", used.name());
    }

    text.into_owned()
}

/// Looks for a `charset=` declaration in the first bytes of the document.
///
/// Covers both `<meta charset="...">` and the `http-equiv` content type
/// form. UTF-16 labels map to UTF-8 since an ASCII declaration cannot be
/// UTF-16 text.
fn sniff_declared_charset(bytes: &[u8]) -> Option<&'static Encoding> {
    const NEEDLE: &[u8] = b"charset";

    let head = bytes[..bytes.len().min(CHARSET_PRESCAN_BYTES)].to_ascii_lowercase();
    let mut rest = head.as_slice();

    while let Some(pos) = rest.windows(NEEDLE.len()).position(|w| w == NEEDLE) {
        rest = &rest[pos + NEEDLE.len()..];

        let Some(value) = rest.trim_ascii_start().strip_prefix(b"=") else {
            continue;
        };
        let value = value.trim_ascii_start();
        let value = value
            .strip_prefix(b"\"")
            .or_else(|| value.strip_prefix(b"'"))
            .unwrap_or(value);
        let end = value
            .iter()
            .position(|&b| {
                matches!(b, b'"' | b'\'' | b';' | b'/' | b'>') || b.is_ascii_whitespace()
            })
            .unwrap_or(value.len());

        if let Some(encoding) = Encoding::for_label(&value[..end]) {
            return Some(encoding.output_encoding());
        }
    }

    None
}

/// Tokenizes `html` and returns title and meta events in document order.
///
/// Every HTML `<title>` element is reported; deciding which one counts is up
/// to the caller. Titles inside inline SVG or MathML are skipped.
pub fn scan_document(html: &str) -> Vec<ScanEvent> {
    let document = Html::parse_document(html);

    let events: Vec<ScanEvent> = document
        .select(&SCAN_SELECTOR)
        .filter_map(|element| {
            let value = element.value();
            match value.name() {
                TITLE_ELEMENT if &*value.name.ns != HTML_NAMESPACE => None,
                TITLE_ELEMENT => Some(ScanEvent::Title(
                    element.text().collect::<String>().trim().to_string(),
                )),
                META_ELEMENT => Some(ScanEvent::Meta(
                    value
                        .attrs()
                        .map(|(name, content)| (name.to_string(), content.to_string()))
                        .collect(),
                )),
                _ => None,
            }
        })
        .collect();

    log::debug!("Scanned {} title/meta elements", events.len());
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::TimedOut, "read deadline exceeded"))
        }
    }

    #[test]
    fn test_scan_preserves_document_order() {
        let html = r#"<html><head>
            <meta property="og:video" content="a.mp4">
            <title>Page</title>
            <meta property="og:video:width" content="720">
        </head></html>"#;
        let events = scan_document(html);
        assert_eq!(events.len(), 3);
        match &events[0] {
            ScanEvent::Meta(attrs) => assert_eq!(attrs["content"], "a.mp4"),
            other => panic!("Expected meta event, got {:?}", other),
        }
        assert_eq!(events[1], ScanEvent::Title("Page".to_string()));
        match &events[2] {
            ScanEvent::Meta(attrs) => assert_eq!(attrs["property"], "og:video:width"),
            other => panic!("Expected meta event, got {:?}", other),
        }
    }

    #[test]
    fn test_scan_meta_in_body() {
        // Meta tags outside <head> still count
        let html = r#"<html><body><meta property="og:site_name" content="YouTube"></body></html>"#;
        let events = scan_document(html);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_scan_decodes_entities_and_lowercases_attribute_names() {
        let html = r#"<meta PROPERTY="og:title" CONTENT="WordPress 4.3 &quot;Billie&quot;">"#;
        let events = scan_document(html);
        match &events[0] {
            ScanEvent::Meta(attrs) => {
                assert_eq!(attrs["property"], "og:title");
                assert_eq!(attrs["content"], "WordPress 4.3 \"Billie\"");
            }
            other => panic!("Expected meta event, got {:?}", other),
        }
    }

    #[test]
    fn test_scan_title_is_trimmed() {
        let html = "<html><head><title>\n   Spaced Title \n</title></head></html>";
        assert_eq!(
            scan_document(html),
            vec![ScanEvent::Title("Spaced Title".to_string())]
        );
    }

    #[test]
    fn test_read_document_within_limit() {
        let doc = read_document("<title>x</title>".as_bytes(), 1024).unwrap();
        assert_eq!(doc, "<title>x</title>");
    }

    #[test]
    fn test_read_document_exactly_at_limit() {
        assert!(read_document("abcd".as_bytes(), 4).is_ok());
    }

    #[test]
    fn test_read_document_too_large() {
        let err = read_document("abcde".as_bytes(), 4).unwrap_err();
        assert!(matches!(err, ScanError::TooLarge { limit: 4 }));
    }

    #[test]
    fn test_read_document_undeclared_invalid_utf8_is_lossy() {
        let bytes: &[u8] = &[b'<', b'p', b'>', 0xff, 0xfe, b'<', b'/', b'p', b'>'];
        let doc = read_document(bytes, 1024).unwrap();
        assert_eq!(doc, "<p>\u{FFFD}\u{FFFD}</p>");
    }

    #[test]
    fn test_read_document_uses_declared_charset() {
        let bytes: &[u8] = b"<meta charset=\"windows-1252\"><title>Caf\xE9</title>";
        let doc = read_document(bytes, 1024).unwrap();
        assert!(doc.ends_with("<title>Caf\u{e9}</title>"));
    }

    #[test]
    fn test_read_document_uses_http_equiv_charset() {
        let bytes: &[u8] = b"<meta http-equiv=\"Content-Type\" content=\"text/html; charset=ISO-8859-1\">\xFCber";
        let doc = read_document(bytes, 1024).unwrap();
        assert!(doc.ends_with("\u{fc}ber"));
    }

    #[test]
    fn test_read_document_bom_overrides_declaration() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice("<meta charset=\"windows-1252\">é".as_bytes());
        let doc = read_document(bytes.as_slice(), 1024).unwrap();
        assert_eq!(doc, "<meta charset=\"windows-1252\">é");
    }

    #[test]
    fn test_sniff_ignores_unknown_labels() {
        assert_eq!(sniff_declared_charset(b"<meta charset=\"klingon\">"), None);
        assert_eq!(sniff_declared_charset(b"<META CHARSET=UTF-16>"), Some(UTF_8));
    }

    #[test]
    fn test_scan_skips_svg_title() {
        let html = r#"<html><head></head><body>
            <svg><title>Icon</title></svg>
            <title>Real</title>
        </body></html>"#;
        assert_eq!(
            scan_document(html),
            vec![ScanEvent::Title("Real".to_string())]
        );
    }

    #[test]
    fn test_read_document_reader_failure() {
        let err = read_document(FailingReader, 1024).unwrap_err();
        match err {
            ScanError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::TimedOut),
            other => panic!("Expected I/O error, got {:?}", other),
        }
    }
}
