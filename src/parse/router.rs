//! Meta tag routing.
//!
//! Maps a namespaced property name onto exactly one [`Route`] using a fixed
//! prefix table, then dispatches the tag to the matching handler.

use crate::config::{CONTENT_ATTR, NAME_ATTR, PROPERTY_ATTR};
use crate::error_handling::WarningType;
use crate::models::OpenGraph;
use crate::scan::MetaAttributes;

use super::media::{self, MediaAttr, MediaKind};
use super::profile::{self, ProfileKind};

/// Prefix shared by every Open Graph property.
const OG_PREFIX: &str = "og:";

/// Media namespaces. Matched as a whole name (`og:video`) or followed by
/// `:<attribute>`.
const MEDIA_NAMESPACES: &[(&str, MediaKind)] = &[
    ("og:video", MediaKind::Video),
    ("og:audio", MediaKind::Audio),
    ("og:image", MediaKind::Image),
];

/// Profile namespaces, including the bare spellings used by most producers.
const PROFILE_NAMESPACES: &[(&str, ProfileKind)] = &[
    ("og:article:", ProfileKind::Article),
    ("og:book:", ProfileKind::Book),
    ("og:music:", ProfileKind::Music),
    ("og:profile:", ProfileKind::Profile),
    ("article:", ProfileKind::Article),
    ("book:", ProfileKind::Book),
    ("music:", ProfileKind::Music),
    ("profile:", ProfileKind::Profile),
];

/// Scalar fields on the root object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Title,
    Type,
    Url,
    Description,
    Determiner,
    SiteName,
    Locale,
    LocaleAlternate,
}

impl Field {
    fn from_property(name: &str) -> Option<Self> {
        match name {
            "og:title" => Some(Field::Title),
            "og:type" => Some(Field::Type),
            "og:url" => Some(Field::Url),
            "og:description" => Some(Field::Description),
            "og:determiner" => Some(Field::Determiner),
            "og:site_name" => Some(Field::SiteName),
            "og:locale" => Some(Field::Locale),
            "og:locale:alternate" => Some(Field::LocaleAlternate),
            _ => None,
        }
    }
}

/// Destination of one tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Route<'a> {
    Field(Field),
    Media(MediaKind, MediaAttr),
    Profile(ProfileKind, &'a str),
    /// Open Graph name with no known destination
    Unknown,
    /// Not an Open Graph tag at all (`viewport`, `twitter:card`, ...)
    Foreign,
}

/// Result of applying one tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TagOutcome {
    Applied,
    /// `og:title` was applied
    AppliedTitle,
    NotOpenGraph,
    Dropped(WarningType),
}

/// Classifies a normalized (trimmed, lowercase) property name.
pub(crate) fn classify(name: &str) -> Route<'_> {
    for &(namespace, kind) in MEDIA_NAMESPACES {
        if let Some(rest) = name.strip_prefix(namespace) {
            if rest.is_empty() {
                return Route::Media(kind, MediaAttr::Url);
            }
            if let Some(suffix) = rest.strip_prefix(':') {
                return MediaAttr::from_suffix(suffix)
                    .map(|attr| Route::Media(kind, attr))
                    .unwrap_or(Route::Unknown);
            }
        }
    }

    for &(prefix, kind) in PROFILE_NAMESPACES {
        if let Some(key) = name.strip_prefix(prefix) {
            return Route::Profile(kind, key);
        }
    }

    match Field::from_property(name) {
        Some(field) => Route::Field(field),
        None if name.starts_with(OG_PREFIX) => Route::Unknown,
        None => Route::Foreign,
    }
}

/// Returns the tag name, preferring `property` over `name`.
fn property_name(attrs: &MetaAttributes) -> Option<&str> {
    attrs
        .get(PROPERTY_ATTR)
        .or_else(|| attrs.get(NAME_ATTR))
        .map(String::as_str)
}

/// Routes one meta tag into `graph`.
pub(crate) fn route_tag(graph: &mut OpenGraph, attrs: &MetaAttributes) -> TagOutcome {
    let Some(property) = property_name(attrs) else {
        return TagOutcome::NotOpenGraph;
    };
    let name = property.trim().to_ascii_lowercase();

    let route = classify(&name);
    if route == Route::Foreign {
        return TagOutcome::NotOpenGraph;
    }

    let Some(content) = attrs.get(CONTENT_ATTR) else {
        log::trace!("Dropping '{}': no content attribute", name);
        return TagOutcome::Dropped(WarningType::MissingContent);
    };

    let result = match route {
        Route::Field(field) => {
            apply_field(graph, field, content);
            if field == Field::Title {
                return TagOutcome::AppliedTitle;
            }
            Ok(())
        }
        Route::Media(kind, attr) => media::apply(graph, kind, attr, content),
        Route::Profile(kind, key) => profile::apply(graph, kind, key, content),
        Route::Unknown | Route::Foreign => Err(WarningType::UnknownProperty),
    };

    match result {
        Ok(()) => TagOutcome::Applied,
        Err(warning) => {
            log::trace!("Dropping '{}' = '{}': {}", name, content, warning);
            TagOutcome::Dropped(warning)
        }
    }
}

fn apply_field(graph: &mut OpenGraph, field: Field, content: &str) {
    let value = content.to_string();
    match field {
        Field::Title => graph.title = value,
        Field::Type => graph.og_type = value,
        Field::Url => graph.url = value,
        Field::Description => graph.description = value,
        Field::Determiner => graph.determiner = value,
        Field::SiteName => graph.site_name = value,
        Field::Locale => graph.locale = value,
        Field::LocaleAlternate => graph.locale_alternates.push(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(property: &str, content: &str) -> MetaAttributes {
        MetaAttributes::from([
            ("property".to_string(), property.to_string()),
            ("content".to_string(), content.to_string()),
        ])
    }

    #[test]
    fn test_classify_media_identifier_spellings() {
        assert_eq!(
            classify("og:video"),
            Route::Media(MediaKind::Video, MediaAttr::Url)
        );
        assert_eq!(
            classify("og:video:url"),
            Route::Media(MediaKind::Video, MediaAttr::Url)
        );
        assert_eq!(
            classify("og:image:width"),
            Route::Media(MediaKind::Image, MediaAttr::Width)
        );
    }

    #[test]
    fn test_classify_media_prefix_requires_separator() {
        // "og:videos" is not the og:video namespace
        assert_eq!(classify("og:videos"), Route::Unknown);
        assert_eq!(classify("og:video:bitrate"), Route::Unknown);
    }

    #[test]
    fn test_classify_profile_namespaces() {
        assert_eq!(
            classify("og:article:published_time"),
            Route::Profile(ProfileKind::Article, "published_time")
        );
        assert_eq!(
            classify("book:isbn"),
            Route::Profile(ProfileKind::Book, "isbn")
        );
        assert_eq!(
            classify("og:music:song"),
            Route::Profile(ProfileKind::Music, "song")
        );
    }

    #[test]
    fn test_classify_top_level_fields() {
        assert_eq!(classify("og:locale"), Route::Field(Field::Locale));
        assert_eq!(
            classify("og:locale:alternate"),
            Route::Field(Field::LocaleAlternate)
        );
        assert_eq!(classify("og:site_name"), Route::Field(Field::SiteName));
    }

    #[test]
    fn test_classify_unknown_and_foreign() {
        assert_eq!(classify("og:rating"), Route::Unknown);
        assert_eq!(classify("twitter:card"), Route::Foreign);
        assert_eq!(classify("viewport"), Route::Foreign);
    }

    #[test]
    fn test_route_tag_normalizes_property_case() {
        let mut graph = OpenGraph::default();
        let outcome = route_tag(&mut graph, &tag("  OG:Type ", "website"));
        assert_eq!(outcome, TagOutcome::Applied);
        assert_eq!(graph.og_type, "website");
    }

    #[test]
    fn test_route_tag_falls_back_to_name_attribute() {
        let mut graph = OpenGraph::default();
        let attrs = MetaAttributes::from([
            ("name".to_string(), "og:title".to_string()),
            ("content".to_string(), "Named".to_string()),
        ]);
        assert_eq!(route_tag(&mut graph, &attrs), TagOutcome::AppliedTitle);
        assert_eq!(graph.title, "Named");
    }

    #[test]
    fn test_route_tag_missing_content() {
        let mut graph = OpenGraph::default();
        let attrs = MetaAttributes::from([("property".to_string(), "og:url".to_string())]);
        assert_eq!(
            route_tag(&mut graph, &attrs),
            TagOutcome::Dropped(WarningType::MissingContent)
        );
        assert_eq!(graph, OpenGraph::default());
    }

    #[test]
    fn test_route_tag_ignores_non_open_graph_meta() {
        let mut graph = OpenGraph::default();
        let attrs = MetaAttributes::from([
            ("name".to_string(), "viewport".to_string()),
            ("content".to_string(), "width=device-width".to_string()),
        ]);
        assert_eq!(route_tag(&mut graph, &attrs), TagOutcome::NotOpenGraph);

        let charset = MetaAttributes::from([("charset".to_string(), "utf-8".to_string())]);
        assert_eq!(route_tag(&mut graph, &charset), TagOutcome::NotOpenGraph);
        assert_eq!(graph, OpenGraph::default());
    }

    #[test]
    fn test_locale_alternates_append() {
        let mut graph = OpenGraph::default();
        route_tag(&mut graph, &tag("og:locale:alternate", "fr_FR"));
        route_tag(&mut graph, &tag("og:locale:alternate", "es_ES"));
        route_tag(&mut graph, &tag("og:locale", "en_US"));
        assert_eq!(graph.locale, "en_US");
        assert_eq!(graph.locale_alternates, vec!["fr_FR", "es_ES"]);
    }
}
