//! Profile sub-object builders (`article`, `book`, `music`, `profile`).
//!
//! A sub-object is created on the first accepted tag of its namespace and
//! then kept for the rest of the parse. Scalar keys overwrite, list keys
//! append without deduplication.

use chrono::{DateTime, FixedOffset};

use crate::error_handling::WarningType;
use crate::models::{Article, Book, Music, OpenGraph, Profile};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProfileKind {
    Article,
    Book,
    Music,
    Profile,
}

impl ProfileKind {
    /// The `og:type` value that declares this kind of object.
    fn declared_type(self) -> &'static str {
        match self {
            ProfileKind::Article => "article",
            ProfileKind::Book => "book",
            ProfileKind::Music => "music",
            ProfileKind::Profile => "profile",
        }
    }

    /// Whether the document's `og:type` rules this namespace out.
    ///
    /// `article`, `book` and `profile` describe the whole page and exclude one
    /// another. Music properties are accepted alongside any type.
    fn conflicts_with(self, og_type: &str) -> bool {
        const EXCLUSIVE: [ProfileKind; 3] =
            [ProfileKind::Article, ProfileKind::Book, ProfileKind::Profile];

        if !EXCLUSIVE.contains(&self) {
            return false;
        }
        let og_type = og_type.trim();
        EXCLUSIVE
            .iter()
            .filter(|&&other| other != self)
            .any(|other| og_type.eq_ignore_ascii_case(other.declared_type()))
    }
}

/// Applies one profile property to `graph`, creating the sub-object if needed.
pub(crate) fn apply(
    graph: &mut OpenGraph,
    kind: ProfileKind,
    key: &str,
    content: &str,
) -> Result<(), WarningType> {
    if kind.conflicts_with(&graph.og_type) {
        return Err(WarningType::TypeMismatch);
    }

    match kind {
        ProfileKind::Article => {
            let article = graph.article.get_or_insert_with(Article::default);
            apply_article(article, key, content)
        }
        ProfileKind::Book => {
            let book = graph.book.get_or_insert_with(Book::default);
            apply_book(book, key, content)
        }
        ProfileKind::Music => {
            let music = graph.music.get_or_insert_with(Music::default);
            apply_music(music, key, content)
        }
        ProfileKind::Profile => {
            let profile = graph.profile.get_or_insert_with(Profile::default);
            apply_profile(profile, key, content)
        }
    }
}

/// Parses an RFC 3339 timestamp (`2015-08-18T19:12:38+00:00`).
fn parse_timestamp(content: &str) -> Result<DateTime<FixedOffset>, WarningType> {
    DateTime::parse_from_rfc3339(content.trim()).map_err(|_| WarningType::InvalidTimestamp)
}

fn parse_integer(content: &str) -> Result<u64, WarningType> {
    content
        .trim()
        .parse::<u64>()
        .map_err(|_| WarningType::InvalidInteger)
}

fn apply_article(article: &mut Article, key: &str, content: &str) -> Result<(), WarningType> {
    match key {
        "published_time" => article.published_time = Some(parse_timestamp(content)?),
        "modified_time" => article.modified_time = Some(parse_timestamp(content)?),
        "expiration_time" => article.expiration_time = Some(parse_timestamp(content)?),
        "section" => article.section = content.to_string(),
        "author" => article.authors.push(content.to_string()),
        "tag" => article.tags.push(content.to_string()),
        _ => return Err(WarningType::UnknownProperty),
    }
    Ok(())
}

fn apply_book(book: &mut Book, key: &str, content: &str) -> Result<(), WarningType> {
    match key {
        "isbn" => book.isbn = content.to_string(),
        "release_date" => book.release_date = Some(parse_timestamp(content)?),
        "author" => book.authors.push(content.to_string()),
        "tag" => book.tags.push(content.to_string()),
        _ => return Err(WarningType::UnknownProperty),
    }
    Ok(())
}

fn apply_music(music: &mut Music, key: &str, content: &str) -> Result<(), WarningType> {
    match key {
        "duration" => music.duration = parse_integer(content)?,
        "release_date" => music.release_date = Some(parse_timestamp(content)?),
        "creator" => music.creator = content.to_string(),
        "album" => music.albums.push(content.to_string()),
        "song" => music.songs.push(content.to_string()),
        "musician" => music.musicians.push(content.to_string()),
        _ => return Err(WarningType::UnknownProperty),
    }
    Ok(())
}

fn apply_profile(profile: &mut Profile, key: &str, content: &str) -> Result<(), WarningType> {
    let value = content.to_string();
    match key {
        "first_name" => profile.first_name = value,
        "last_name" => profile.last_name = value,
        "username" => profile.username = value,
        "gender" => profile.gender = value,
        _ => return Err(WarningType::UnknownProperty),
    }
    Ok(())
}
