//! Field classification registry.
//!
//! Every field name that can appear in a smart list filter belongs to at most
//! one value domain. The domain decides which operators make sense for the
//! field (see [`super::operation`]). Fields outside the registry have no
//! domain; they are not invalid, they simply get no domain-specific rules.
//!
//! Independently of the domain, each [`Source`] exposes a fixed catalog of
//! selectable attributes. The same field name may appear under several
//! sources (`name` exists on books, series and libraries).

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// The value kind a field's comparisons must respect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldDomain {
    String,
    Number,
    Date,
}

impl FieldDomain {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldDomain::String => "string",
            FieldDomain::Number => "number",
            FieldDomain::Date => "date",
        }
    }
}

impl fmt::Display for FieldDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const STRING_FIELD_NAMES: &[&str] = &[
    "name",
    "extension",
    "status",
    "path",
    "tags",
    "title",
    "summary",
    "series",
    "genres",
    "writers",
    "pencillers",
    "inkers",
    "colorists",
    "letterers",
    "cover_artists",
    "editors",
    "publisher",
    "imprint",
    "characters",
    "teams",
    "links",
    "description",
    "meta_type",
    "booktype",
];

const NUMBER_FIELD_NAMES: &[&str] = &[
    "size",
    "pages",
    "number",
    "volume",
    "year",
    "month",
    "day",
    "age_rating",
    "page_count",
    "comicid",
];

const DATE_FIELD_NAMES: &[&str] = &["createdAt", "updatedAt"];

static STRING_FIELDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STRING_FIELD_NAMES.iter().copied().collect());
static NUMBER_FIELDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| NUMBER_FIELD_NAMES.iter().copied().collect());
static DATE_FIELDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| DATE_FIELD_NAMES.iter().copied().collect());

/// Classify a field by value domain.
///
/// Returns `None` for fields outside the registry.
///
/// ```
/// use smartlists::filters::{domain_of, FieldDomain};
///
/// assert_eq!(domain_of("name"), Some(FieldDomain::String));
/// assert_eq!(domain_of("age_rating"), Some(FieldDomain::Number));
/// assert_eq!(domain_of("createdAt"), Some(FieldDomain::Date));
/// assert_eq!(domain_of("shoe_size"), None);
/// ```
pub fn domain_of(field: &str) -> Option<FieldDomain> {
    if STRING_FIELDS.contains(field) {
        Some(FieldDomain::String)
    } else if NUMBER_FIELDS.contains(field) {
        Some(FieldDomain::Number)
    } else if DATE_FIELDS.contains(field) {
        Some(FieldDomain::Date)
    } else {
        None
    }
}

/// Every field name known to the registry, in domain order.
pub fn registered_fields() -> impl Iterator<Item = &'static str> {
    STRING_FIELD_NAMES
        .iter()
        .chain(NUMBER_FIELD_NAMES)
        .chain(DATE_FIELD_NAMES)
        .copied()
}

/// The entity namespace a filter field is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Book,
    BookMeta,
    Series,
    SeriesMeta,
    Library,
}

impl Source {
    /// All sources, in API key priority order.
    pub const ALL: [Source; 5] = [
        Source::Book,
        Source::BookMeta,
        Source::Series,
        Source::SeriesMeta,
        Source::Library,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Book => "book",
            Source::BookMeta => "book_meta",
            Source::Series => "series",
            Source::SeriesMeta => "series_meta",
            Source::Library => "library",
        }
    }

    /// The top-level key this source is nested under in the API shape.
    pub fn api_key(&self) -> &'static str {
        match self {
            Source::Book => "media",
            Source::BookMeta => "mediaMetadata",
            Source::Series => "series",
            Source::SeriesMeta => "seriesMetadata",
            Source::Library => "library",
        }
    }

    /// The selectable attribute catalog for this source.
    pub fn attributes(&self) -> &'static [&'static str] {
        match self {
            Source::Book => &[
                "name",
                "size",
                "extension",
                "createdAt",
                "updatedAt",
                "status",
                "path",
                "pages",
                "tags",
            ],
            Source::BookMeta => &[
                "title",
                "summary",
                "series",
                "number",
                "volume",
                "year",
                "month",
                "day",
                "genres",
                "writers",
                "pencillers",
                "inkers",
                "colorists",
                "letterers",
                "cover_artists",
                "editors",
                "publisher",
                "characters",
                "teams",
                "links",
                "age_rating",
                "page_count",
            ],
            Source::Series => &[
                "name",
                "description",
                "status",
                "path",
                "createdAt",
                "updatedAt",
                "tags",
            ],
            Source::SeriesMeta => &[
                "meta_type",
                "title",
                "summary",
                "publisher",
                "imprint",
                "comicid",
                "volume",
                "booktype",
                "age_rating",
                "status",
            ],
            Source::Library => &["name", "path", "createdAt", "updatedAt"],
        }
    }

    pub fn has_attribute(&self, field: &str) -> bool {
        self.attributes().contains(&field)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Source {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Source::ALL
            .into_iter()
            .find(|source| source.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "unknown source '{}' (expected one of: book, book_meta, series, series_meta, library)",
                    s
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domains_are_disjoint() {
        for field in STRING_FIELD_NAMES {
            assert!(!NUMBER_FIELDS.contains(field), "{} is string and number", field);
            assert!(!DATE_FIELDS.contains(field), "{} is string and date", field);
        }
        for field in NUMBER_FIELD_NAMES {
            assert!(!DATE_FIELDS.contains(field), "{} is number and date", field);
        }
    }

    #[test]
    fn unknown_field_has_no_domain() {
        assert_eq!(domain_of(""), None);
        assert_eq!(domain_of("Name"), None);
        assert_eq!(domain_of("created_at"), None);
    }

    #[test]
    fn every_catalog_attribute_is_classified() {
        for source in Source::ALL {
            for attr in source.attributes() {
                assert!(
                    domain_of(attr).is_some(),
                    "{}.{} has no domain",
                    source,
                    attr
                );
            }
        }
    }

    #[test]
    fn book_catalog_matches_documented_attributes() {
        assert_eq!(
            Source::Book.attributes(),
            &["name", "size", "extension", "createdAt", "updatedAt", "status", "path", "pages", "tags"]
        );
        assert!(Source::BookMeta.has_attribute("writers"));
        assert!(!Source::Library.has_attribute("pages"));
    }

    #[test]
    fn same_field_under_multiple_sources() {
        let with_name: Vec<Source> = Source::ALL
            .into_iter()
            .filter(|s| s.has_attribute("name"))
            .collect();
        assert_eq!(with_name, vec![Source::Book, Source::Series, Source::Library]);
    }

    #[test]
    fn source_names_roundtrip_through_from_str() {
        for source in Source::ALL {
            assert_eq!(source.as_str().parse::<Source>(), Ok(source));
        }
        assert!("media".parse::<Source>().is_err());
    }

    #[test]
    fn source_serializes_in_snake_case() {
        assert_eq!(
            serde_json::to_string(&Source::SeriesMeta).unwrap(),
            "\"series_meta\""
        );
        let parsed: Source = serde_json::from_str("\"book_meta\"").unwrap();
        assert_eq!(parsed, Source::BookMeta);
    }

    #[test]
    fn api_keys_are_distinct() {
        let keys: HashSet<&str> = Source::ALL.iter().map(|s| s.api_key()).collect();
        assert_eq!(keys.len(), Source::ALL.len());
    }
}
