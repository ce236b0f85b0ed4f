//! Open Graph object model.
//!
//! The root [`OpenGraph`] value owns every nested media entry and profile
//! sub-object. Scalar fields are last-write-wins; list fields are append-only.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// Open Graph metadata extracted from a single document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OpenGraph {
    /// `og:type`, e.g. `article` or `video.other`
    #[serde(rename = "type")]
    pub og_type: String,
    /// `og:title`, or the `<title>` text when no `og:title` was present
    pub title: String,
    /// `og:url`
    pub url: String,
    /// `og:description`
    pub description: String,
    /// `og:determiner`
    pub determiner: String,
    /// `og:site_name`
    pub site_name: String,
    /// `og:locale`
    pub locale: String,
    /// Every `og:locale:alternate`, in document order
    pub locale_alternates: Vec<String>,
    pub images: Vec<Image>,
    pub videos: Vec<Video>,
    pub audios: Vec<Audio>,
    /// Present once any `og:article:*` tag was seen
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article: Option<Article>,
    /// Present once any `og:book:*` tag was seen
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book: Option<Book>,
    /// Present once any `og:music:*` tag was seen
    #[serde(skip_serializing_if = "Option::is_none")]
    pub music: Option<Music>,
    /// Present once any `og:profile:*` tag was seen
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
}

/// An `og:image` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Image {
    pub url: String,
    pub secure_url: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub alt: String,
    pub width: u64,
    pub height: u64,
}

/// An `og:video` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Video {
    pub url: String,
    pub secure_url: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub width: u64,
    pub height: u64,
    /// Length in seconds
    pub duration: u64,
    pub tags: Vec<String>,
}

/// An `og:audio` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Audio {
    pub url: String,
    pub secure_url: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

/// The `og:article:*` profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Article {
    pub published_time: Option<DateTime<FixedOffset>>,
    pub modified_time: Option<DateTime<FixedOffset>>,
    pub expiration_time: Option<DateTime<FixedOffset>>,
    pub section: String,
    pub authors: Vec<String>,
    pub tags: Vec<String>,
}

/// The `og:book:*` profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Book {
    pub isbn: String,
    pub release_date: Option<DateTime<FixedOffset>>,
    pub authors: Vec<String>,
    pub tags: Vec<String>,
}

/// The `og:music:*` profile (songs, albums, playlists and stations).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Music {
    /// Length in seconds
    pub duration: u64,
    pub release_date: Option<DateTime<FixedOffset>>,
    pub creator: String,
    pub albums: Vec<String>,
    pub songs: Vec<String>,
    pub musicians: Vec<String>,
}

/// The `og:profile:*` profile describing a person.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub gender: String,
}
