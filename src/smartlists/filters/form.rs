//! The flat form representation edited by the UI.
//!
//! Joiners are lower-case on this side (`and`, `or`, `not`).

use super::fields::Source;
use super::operation::FilterOperation;
use super::value::FilterValue;
use serde::{Deserialize, Serialize};

/// Combinator for the filters inside a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupJoiner {
    #[default]
    And,
    Or,
    Not,
}

/// Combinator for the groups of a config. Unlike [`GroupJoiner`] there is no `not`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListJoiner {
    #[default]
    And,
    Or,
}

/// A single leaf predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    /// Rendering key, only present on filters read from the API shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub field: String,
    pub source: Source,
    pub operation: FilterOperation,
    pub value: FilterValue,
}

impl Filter {
    pub fn new(
        source: Source,
        field: impl Into<String>,
        operation: FilterOperation,
        value: impl Into<FilterValue>,
    ) -> Self {
        Self {
            id: None,
            field: field.into(),
            source,
            operation,
            value: value.into(),
        }
    }

    /// Equality that ignores the rendering key.
    pub fn same_predicate(&self, other: &Filter) -> bool {
        self.field == other.field
            && self.source == other.source
            && self.operation == other.operation
            && self.value == other.value
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterGroup {
    pub joiner: GroupJoiner,
    /// Read-only on the editing surface; has no effect on conversion.
    #[serde(default)]
    pub is_locked: bool,
    pub filters: Vec<Filter>,
}

impl FilterGroup {
    pub fn new(joiner: GroupJoiner, filters: Vec<Filter>) -> Self {
        Self {
            joiner,
            is_locked: false,
            filters,
        }
    }

    pub fn locked(mut self) -> Self {
        self.is_locked = true;
        self
    }

    pub fn same_predicates(&self, other: &FilterGroup) -> bool {
        self.joiner == other.joiner
            && self.filters.len() == other.filters.len()
            && self
                .filters
                .iter()
                .zip(&other.filters)
                .all(|(a, b)| a.same_predicate(b))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterConfig {
    pub joiner: ListJoiner,
    pub groups: Vec<FilterGroup>,
}

impl FilterConfig {
    pub fn new(joiner: ListJoiner, groups: Vec<FilterGroup>) -> Self {
        Self { joiner, groups }
    }

    pub fn same_predicates(&self, other: &FilterConfig) -> bool {
        self.joiner == other.joiner
            && self.groups.len() == other.groups.len()
            && self
                .groups
                .iter()
                .zip(&other.groups)
                .all(|(a, b)| a.same_predicates(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn filter_decodes_from_form_json() {
        let filter: Filter = serde_json::from_value(json!({
            "field": "name",
            "source": "book",
            "operation": "any",
            "value": ["foo", "shmoo"]
        }))
        .unwrap();

        assert_eq!(
            filter,
            Filter::new(
                Source::Book,
                "name",
                FilterOperation::Any,
                FilterValue::list(["foo", "shmoo"])
            )
        );
    }

    #[test]
    fn missing_id_is_not_serialized() {
        let filter = Filter::new(Source::Library, "path", FilterOperation::Contains, "/comics");
        let json = serde_json::to_value(&filter).unwrap();
        assert!(json.get("id").is_none());
    }

    #[test]
    fn same_predicate_ignores_id() {
        let a = Filter::new(Source::Series, "name", FilterOperation::Not, "Saga");
        let mut b = a.clone();
        b.id = Some("series.name.not.1".to_string());
        assert_ne!(a, b);
        assert!(a.same_predicate(&b));
    }

    #[test]
    fn lock_defaults_to_false() {
        let group: FilterGroup =
            serde_json::from_value(json!({ "joiner": "or", "filters": [] })).unwrap();
        assert!(!group.is_locked);
        assert_eq!(group.joiner, GroupJoiner::Or);
    }

    #[test]
    fn top_level_joiner_rejects_not() {
        let result: Result<FilterConfig, _> =
            serde_json::from_value(json!({ "joiner": "not", "groups": [] }));
        assert!(result.is_err());
    }
}
