use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::SaveSmartListInput;
use crate::transform::{FormTransform, SourceFallback};

/// Read a saved smart list into its editable form.
pub fn run(input: &SaveSmartListInput, fallback: SourceFallback) -> Result<CmdResult> {
    let form = FormTransform::with_fallback(fallback).list(input)?;

    let filter_count: usize = form.filters.groups.iter().map(|g| g.filters.len()).sum();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "Loaded '{}': {} group(s), {} filter(s)",
        form.name,
        form.filters.groups.len(),
        filter_count
    )));
    Ok(result.with_form(form))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SmartListError;
    use crate::filters::Source;
    use serde_json::json;

    fn input(filters: serde_json::Value) -> SaveSmartListInput {
        serde_json::from_value(json!({
            "name": "Unread",
            "description": "Everything not read yet",
            "visibility": "PRIVATE",
            "defaultGrouping": "BY_BOOKS",
            "joiner": "AND",
            "filters": filters
        }))
        .unwrap()
    }

    #[test]
    fn loads_form_and_reports_counts() {
        let result = run(
            &input(json!([{
                "joiner": "AND",
                "groups": [
                    { "media": { "status": { "not": "READ" } } },
                    { "series": { "name": { "contains": "Saga" } } }
                ]
            }])),
            SourceFallback::default(),
        )
        .unwrap();

        let form = result.form.unwrap();
        assert_eq!(form.description.as_deref(), Some("Everything not read yet"));
        assert_eq!(form.filters.groups[0].filters[1].source, Source::Series);
        assert_eq!(result.messages[0].content, "Loaded 'Unread': 1 group(s), 2 filter(s)");
    }

    #[test]
    fn propagates_conversion_errors() {
        let err = run(
            &input(json!([{ "joiner": "AND", "groups": [{ "library": {} }] }])),
            SourceFallback::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SmartListError::EmptyFilter { origin: Source::Library }));
    }
}
