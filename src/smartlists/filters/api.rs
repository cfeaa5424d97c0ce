//! The nested representation exchanged with the server.
//!
//! A filter is keyed first by source, then by field, then by operation:
//!
//! ```json
//! { "mediaMetadata": { "age_rating": { "gte": 13 } } }
//! ```
//!
//! Joiners are upper-case on this side (`AND`, `OR`, `NOT`).

use super::fields::Source;
use super::form::{GroupJoiner, ListJoiner};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `{ field: { operation: value } }`
pub type FieldMap = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ApiGroupJoiner {
    #[default]
    And,
    Or,
    Not,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ApiListJoiner {
    #[default]
    And,
    Or,
}

impl From<GroupJoiner> for ApiGroupJoiner {
    fn from(joiner: GroupJoiner) -> Self {
        match joiner {
            GroupJoiner::And => ApiGroupJoiner::And,
            GroupJoiner::Or => ApiGroupJoiner::Or,
            GroupJoiner::Not => ApiGroupJoiner::Not,
        }
    }
}

impl From<ApiGroupJoiner> for GroupJoiner {
    fn from(joiner: ApiGroupJoiner) -> Self {
        match joiner {
            ApiGroupJoiner::And => GroupJoiner::And,
            ApiGroupJoiner::Or => GroupJoiner::Or,
            ApiGroupJoiner::Not => GroupJoiner::Not,
        }
    }
}

impl From<ListJoiner> for ApiListJoiner {
    fn from(joiner: ListJoiner) -> Self {
        match joiner {
            ListJoiner::And => ApiListJoiner::And,
            ListJoiner::Or => ApiListJoiner::Or,
        }
    }
}

impl From<ApiListJoiner> for ListJoiner {
    fn from(joiner: ApiListJoiner) -> Self {
        match joiner {
            ApiListJoiner::And => ListJoiner::And,
            ApiListJoiner::Or => ListJoiner::Or,
        }
    }
}

/// A filter as the server stores it.
///
/// At most one source key is expected. Keys that are not source keys are
/// kept in `unrecognized`, which is how a bare `{ field: { op: value } }`
/// book filter arrives.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<FieldMap>,
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "metadata")]
    pub media_metadata: Option<FieldMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<FieldMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_metadata: Option<FieldMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library: Option<FieldMap>,
    #[serde(flatten)]
    pub unrecognized: FieldMap,
}

impl ApiFilter {
    /// Nest a field map under the key for `source`, and nothing else.
    pub fn nested(source: Source, fields: FieldMap) -> Self {
        let mut filter = ApiFilter::default();
        let slot = match source {
            Source::Book => &mut filter.media,
            Source::BookMeta => &mut filter.media_metadata,
            Source::Series => &mut filter.series,
            Source::SeriesMeta => &mut filter.series_metadata,
            Source::Library => &mut filter.library,
        };
        *slot = Some(fields);
        filter
    }

    /// The field map stored under `source`'s key, if that key is present.
    pub fn field_map(&self, source: Source) -> Option<&FieldMap> {
        match source {
            Source::Book => self.media.as_ref(),
            Source::BookMeta => self.media_metadata.as_ref(),
            Source::Series => self.series.as_ref(),
            Source::SeriesMeta => self.series_metadata.as_ref(),
            Source::Library => self.library.as_ref(),
        }
    }

    /// Every top-level key present, source keys first.
    pub fn keys(&self) -> Vec<String> {
        Source::ALL
            .into_iter()
            .filter(|source| self.field_map(*source).is_some())
            .map(|source| source.api_key().to_string())
            .chain(self.unrecognized.keys().cloned())
            .collect()
    }

    /// The first present source key in priority order, with its field map.
    pub fn keyed_source(&self) -> Option<(Source, &FieldMap)> {
        Source::ALL
            .into_iter()
            .find_map(|source| self.field_map(source).map(|fields| (source, fields)))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApiFilterGroup {
    pub joiner: ApiGroupJoiner,
    pub groups: Vec<ApiFilter>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> FieldMap {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {}", other),
        }
    }

    #[test]
    fn nested_uses_exactly_one_key() {
        for source in Source::ALL {
            let filter = ApiFilter::nested(source, fields(json!({ "name": { "eq": "x" } })));
            let json = serde_json::to_value(&filter).unwrap();
            let obj = json.as_object().unwrap();
            assert_eq!(obj.len(), 1, "{} produced {:?}", source, obj);
            assert!(obj.contains_key(source.api_key()));
        }
    }

    #[test]
    fn metadata_is_accepted_for_book_meta() {
        let filter: ApiFilter =
            serde_json::from_value(json!({ "metadata": { "genres": { "any": ["Horror"] } } }))
                .unwrap();
        assert_eq!(filter.keyed_source().map(|(s, _)| s), Some(Source::BookMeta));
    }

    #[test]
    fn bare_fields_land_in_unrecognized() {
        let filter: ApiFilter =
            serde_json::from_value(json!({ "name": { "any": ["foo"] } })).unwrap();
        assert!(filter.keyed_source().is_none());
        assert!(filter.unrecognized.contains_key("name"));
    }

    #[test]
    fn keyed_source_follows_priority_order() {
        let filter: ApiFilter = serde_json::from_value(json!({
            "library": { "name": { "eq": "Comics" } },
            "series": { "name": { "eq": "Saga" } }
        }))
        .unwrap();
        assert_eq!(filter.keyed_source().map(|(s, _)| s), Some(Source::Series));
        assert_eq!(filter.keys(), vec!["series", "library"]);
    }

    #[test]
    fn joiners_use_upper_case() {
        assert_eq!(serde_json::to_string(&ApiGroupJoiner::Not).unwrap(), "\"NOT\"");
        let joiner: ApiListJoiner = serde_json::from_str("\"OR\"").unwrap();
        assert_eq!(joiner, ApiListJoiner::Or);
        assert!(serde_json::from_str::<ApiListJoiner>("\"or\"").is_err());
    }
}
