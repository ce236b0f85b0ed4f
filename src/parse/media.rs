//! Media entry aggregation for `og:image`, `og:video` and `og:audio`.
//!
//! Each media list is a sequence of entries whose last element is the entry
//! currently being built. The identifier (`url`) delimits entries: it fills
//! the current entry while that entry has none, and otherwise opens a new
//! one. Every other attribute lands on the current entry, creating the first
//! entry if the list is still empty.

use crate::error_handling::WarningType;
use crate::models::{Audio, Image, OpenGraph, Video};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MediaKind {
    Image,
    Video,
    Audio,
}

/// Canonical media attribute.
///
/// Both `og:video` and `og:video:url` resolve to [`MediaAttr::Url`], so the
/// aggregation logic only ever sees one identifier key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MediaAttr {
    Url,
    SecureUrl,
    MimeType,
    Width,
    Height,
    Alt,
    Duration,
    Tag,
}

impl MediaAttr {
    /// Resolves the part after `og:<kind>:`.
    pub(crate) fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "url" => Some(MediaAttr::Url),
            "secure_url" => Some(MediaAttr::SecureUrl),
            "type" => Some(MediaAttr::MimeType),
            "width" => Some(MediaAttr::Width),
            "height" => Some(MediaAttr::Height),
            "alt" => Some(MediaAttr::Alt),
            "duration" => Some(MediaAttr::Duration),
            "tag" => Some(MediaAttr::Tag),
            _ => None,
        }
    }

    fn is_integer(self) -> bool {
        matches!(
            self,
            MediaAttr::Width | MediaAttr::Height | MediaAttr::Duration
        )
    }
}

/// A parsed attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MediaValue<'a> {
    Text(&'a str),
    Integer(u64),
}

impl<'a> MediaValue<'a> {
    fn parse(attr: MediaAttr, content: &'a str) -> Result<Self, WarningType> {
        if attr.is_integer() {
            content
                .trim()
                .parse::<u64>()
                .map(MediaValue::Integer)
                .map_err(|_| WarningType::InvalidInteger)
        } else {
            Ok(MediaValue::Text(content))
        }
    }
}

/// An entry in one of the media lists.
trait MediaEntry: Default {
    /// Whether this kind of media carries `attr` at all.
    fn supports(attr: MediaAttr) -> bool;

    fn url(&self) -> &str;

    fn set(&mut self, attr: MediaAttr, value: MediaValue<'_>);
}

impl MediaEntry for Image {
    fn supports(attr: MediaAttr) -> bool {
        !matches!(attr, MediaAttr::Duration | MediaAttr::Tag)
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn set(&mut self, attr: MediaAttr, value: MediaValue<'_>) {
        match (attr, value) {
            (MediaAttr::Url, MediaValue::Text(v)) => self.url = v.to_string(),
            (MediaAttr::SecureUrl, MediaValue::Text(v)) => self.secure_url = v.to_string(),
            (MediaAttr::MimeType, MediaValue::Text(v)) => self.mime_type = v.to_string(),
            (MediaAttr::Alt, MediaValue::Text(v)) => self.alt = v.to_string(),
            (MediaAttr::Width, MediaValue::Integer(n)) => self.width = n,
            (MediaAttr::Height, MediaValue::Integer(n)) => self.height = n,
            _ => {}
        }
    }
}

impl MediaEntry for Video {
    fn supports(attr: MediaAttr) -> bool {
        attr != MediaAttr::Alt
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn set(&mut self, attr: MediaAttr, value: MediaValue<'_>) {
        match (attr, value) {
            (MediaAttr::Url, MediaValue::Text(v)) => self.url = v.to_string(),
            (MediaAttr::SecureUrl, MediaValue::Text(v)) => self.secure_url = v.to_string(),
            (MediaAttr::MimeType, MediaValue::Text(v)) => self.mime_type = v.to_string(),
            (MediaAttr::Tag, MediaValue::Text(v)) => self.tags.push(v.to_string()),
            (MediaAttr::Width, MediaValue::Integer(n)) => self.width = n,
            (MediaAttr::Height, MediaValue::Integer(n)) => self.height = n,
            (MediaAttr::Duration, MediaValue::Integer(n)) => self.duration = n,
            _ => {}
        }
    }
}

impl MediaEntry for Audio {
    fn supports(attr: MediaAttr) -> bool {
        matches!(
            attr,
            MediaAttr::Url | MediaAttr::SecureUrl | MediaAttr::MimeType
        )
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn set(&mut self, attr: MediaAttr, value: MediaValue<'_>) {
        match (attr, value) {
            (MediaAttr::Url, MediaValue::Text(v)) => self.url = v.to_string(),
            (MediaAttr::SecureUrl, MediaValue::Text(v)) => self.secure_url = v.to_string(),
            (MediaAttr::MimeType, MediaValue::Text(v)) => self.mime_type = v.to_string(),
            _ => {}
        }
    }
}

/// Applies one media attribute to the matching list in `graph`.
///
/// The value is validated before the list is touched, so a dropped tag never
/// creates an entry.
pub(crate) fn apply(
    graph: &mut OpenGraph,
    kind: MediaKind,
    attr: MediaAttr,
    content: &str,
) -> Result<(), WarningType> {
    let value = MediaValue::parse(attr, content)?;
    match kind {
        MediaKind::Image => aggregate(&mut graph.images, attr, value),
        MediaKind::Video => aggregate(&mut graph.videos, attr, value),
        MediaKind::Audio => aggregate(&mut graph.audios, attr, value),
    }
}

fn aggregate<T: MediaEntry>(
    entries: &mut Vec<T>,
    attr: MediaAttr,
    value: MediaValue<'_>,
) -> Result<(), WarningType> {
    if !T::supports(attr) {
        return Err(WarningType::UnknownProperty);
    }

    let opens_entry = match entries.last() {
        None => true,
        Some(current) => attr == MediaAttr::Url && !current.url().is_empty(),
    };
    if opens_entry {
        entries.push(T::default());
    }

    if let Some(current) = entries.last_mut() {
        current.set(attr, value);
    }
    Ok(())
}
