use crate::error::{MalformedReason, Result, SmartListError};
use crate::filters::{
    ApiFilter, ApiFilterGroup, FieldMap, Filter, FilterConfig, FilterGroup, FilterOperation,
    FilterValue, RangeValue, Source,
};
use crate::model::SaveSmartListInput;
use crate::model::SmartListForm;
use serde_json::Value;
use tracing::{debug, warn};

/// What to do with an API filter that carries none of the five source keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceFallback {
    /// Read it as a bare `book` field map only when the field belongs to the
    /// `book` catalog. Anything else is malformed.
    #[default]
    BookCatalog,
    /// Always read it as a bare `book` field map.
    Book,
}

/// Converts the API shape into the form shape.
///
/// Every filter produced gets a rendering key of the form
/// `source.field.operation.n`, where `n` counts up from 1 for the lifetime
/// of the transform.
#[derive(Debug, Default)]
pub struct FormTransform {
    fallback: SourceFallback,
    issued: u64,
}

impl FormTransform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fallback(fallback: SourceFallback) -> Self {
        Self {
            fallback,
            issued: 0,
        }
    }

    pub fn filter(&mut self, filter: &ApiFilter) -> Result<Filter> {
        let (source, fields) = self.resolve_source(filter)?;
        single_entry(fields)?;

        let Some((field, operations)) = fields.iter().next() else {
            return Err(SmartListError::EmptyFilter { origin: source });
        };

        let operations = match operations {
            Value::Object(map) if !map.is_empty() => map,
            _ => {
                return Err(MalformedReason::MissingOperation {
                    field: field.clone(),
                }
                .into())
            }
        };

        let (operation, value) = if operations.contains_key("from") {
            let range = decode::<RangeValue>(field, "from", Value::Object(operations.clone()))?;
            (FilterOperation::Range, FilterValue::Range(range))
        } else {
            single_entry(operations)?;
            let Some((name, raw)) = operations.iter().next() else {
                return Err(MalformedReason::MissingOperation {
                    field: field.clone(),
                }
                .into());
            };
            let operation =
                name.parse::<FilterOperation>()
                    .map_err(|_| MalformedReason::UnknownOperation {
                        field: field.clone(),
                        operation: name.clone(),
                    })?;
            (operation, decode::<FilterValue>(field, name, raw.clone())?)
        };

        let id = self.next_key(source, field, operation);
        debug!(%id, "read filter from api shape");

        Ok(Filter {
            id: Some(id),
            field: field.clone(),
            source,
            operation,
            value,
        })
    }

    pub fn group(&mut self, group: &ApiFilterGroup) -> Result<FilterGroup> {
        let filters = group
            .groups
            .iter()
            .map(|filter| self.filter(filter))
            .collect::<Result<Vec<_>>>()?;
        debug!(filters = filters.len(), joiner = ?group.joiner, "read filter group from api shape");
        Ok(FilterGroup::new(group.joiner.into(), filters))
    }

    pub fn list(&mut self, input: &SaveSmartListInput) -> Result<SmartListForm> {
        let groups = input
            .filters
            .iter()
            .map(|group| self.group(group))
            .collect::<Result<Vec<_>>>()?;
        debug!(name = %input.name, groups = groups.len(), "read smart list from api shape");

        Ok(SmartListForm {
            name: input.name.clone(),
            description: input.description.clone(),
            visibility: input.visibility,
            grouping: Some(input.default_grouping),
            filters: FilterConfig::new(input.joiner.into(), groups),
        })
    }

    fn resolve_source<'a>(&self, filter: &'a ApiFilter) -> Result<(Source, &'a FieldMap)> {
        if let Some(keyed) = filter.keyed_source() {
            let keys = filter.keys();
            if keys.len() > 1 {
                return Err(MalformedReason::NotSingleton { keys }.into());
            }
            return Ok(keyed);
        }

        let bare = &filter.unrecognized;
        if bare.is_empty() {
            return Err(SmartListError::EmptyFilter {
                origin: Source::Book,
            });
        }

        match self.fallback {
            SourceFallback::Book => {
                warn!(keys = ?bare.keys().collect::<Vec<_>>(), "no source key, assuming book");
                Ok((Source::Book, bare))
            }
            SourceFallback::BookCatalog
                if bare.keys().all(|key| Source::Book.has_attribute(key)) =>
            {
                Ok((Source::Book, bare))
            }
            SourceFallback::BookCatalog => Err(MalformedReason::UnrecognizedSource {
                keys: bare.keys().cloned().collect(),
            }
            .into()),
        }
    }

    fn next_key(&mut self, source: Source, field: &str, operation: FilterOperation) -> String {
        self.issued += 1;
        format!("{}.{}.{}.{}", source, field, operation, self.issued)
    }
}

/// A field map or operation map holds exactly one entry; more would be
/// dropped on the way to the form shape.
fn single_entry(map: &FieldMap) -> Result<()> {
    if map.len() > 1 {
        return Err(MalformedReason::NotSingleton {
            keys: map.keys().cloned().collect(),
        }
        .into());
    }
    Ok(())
}

fn decode<T: serde::de::DeserializeOwned>(field: &str, operation: &str, raw: Value) -> Result<T> {
    serde_json::from_value(raw).map_err(|e| {
        MalformedReason::InvalidValue {
            field: field.to_string(),
            operation: operation.to_string(),
            message: e.to_string(),
        }
        .into()
    })
}

/// Read one API filter into its form shape.
pub fn into_form_filter(filter: &ApiFilter) -> Result<Filter> {
    FormTransform::new().filter(filter)
}

/// Read an API filter group into its form shape, preserving filter order.
pub fn into_form_group(group: &ApiFilterGroup) -> Result<FilterGroup> {
    FormTransform::new().group(group)
}

/// Read a whole saved smart list into the form the editing surface uses.
pub fn into_form(input: &SaveSmartListInput) -> Result<SmartListForm> {
    FormTransform::new().list(input)
}
