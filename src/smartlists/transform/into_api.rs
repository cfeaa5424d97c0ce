use crate::filters::{
    ApiFilter, ApiFilterGroup, FieldMap, Filter, FilterGroup, FilterOperation, FilterValue,
};
use crate::model::{SaveSmartListInput, SmartListForm};
use serde_json::Value;
use tracing::debug;

/// Build `{ operation: value }` for a filter.
///
/// A range is written as the bound object itself, which is what the API
/// side reads back as `range`.
fn operation_map(filter: &Filter) -> Value {
    match (filter.operation, &filter.value) {
        (FilterOperation::Range, FilterValue::Range(range)) => Value::Object(range.into()),
        (operation, value) => {
            let mut map = FieldMap::new();
            map.insert(operation.as_str().to_string(), Value::from(value));
            Value::Object(map)
        }
    }
}

/// Write one form filter in its nested API shape.
pub fn into_api_filter(filter: &Filter) -> ApiFilter {
    let mut fields = FieldMap::new();
    fields.insert(filter.field.clone(), operation_map(filter));
    ApiFilter::nested(filter.source, fields)
}

pub fn into_api_group(group: &FilterGroup) -> ApiFilterGroup {
    ApiFilterGroup {
        joiner: group.joiner.into(),
        groups: group.filters.iter().map(into_api_filter).collect(),
    }
}

/// Write a whole form in the shape the server saves.
///
/// An empty description becomes `null` and a missing grouping becomes
/// `BY_BOOKS`.
pub fn into_api(form: &SmartListForm) -> SaveSmartListInput {
    let filters: Vec<ApiFilterGroup> = form.filters.groups.iter().map(into_api_group).collect();
    debug!(name = %form.name, groups = filters.len(), "wrote smart list in api shape");

    SaveSmartListInput {
        name: form.name.clone(),
        description: form.description.clone().filter(|d| !d.is_empty()),
        visibility: form.visibility,
        default_grouping: form.grouping.unwrap_or_default(),
        joiner: form.filters.joiner.into(),
        filters,
    }
}
