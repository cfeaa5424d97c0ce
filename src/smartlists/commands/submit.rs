use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::SmartListForm;
use crate::transform::into_api;
use crate::validation::{validate_form, SiblingNames};
use tracing::debug;

/// Validate a form and, when it is clean, produce the input the server saves.
///
/// Validation problems are not errors: they come back in the report and
/// block the conversion.
pub fn run(form: &SmartListForm, siblings: &SiblingNames) -> Result<CmdResult> {
    let report = validate_form(form, siblings);

    if !report.is_valid() {
        debug!(issues = report.issues.len(), "submission blocked by validation");
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::error(format!(
            "'{}' has {} problem(s) and was not converted",
            form.name,
            report.issues.len()
        )));
        return Ok(result.with_report(report));
    }

    let input = into_api(form);
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("'{}' is ready to save", form.name)));
    Ok(result.with_input(input).with_report(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{
        ApiGroupJoiner, Filter, FilterConfig, FilterGroup, FilterOperation, GroupJoiner,
        ListJoiner, Source,
    };

    fn form(filter: Filter) -> SmartListForm {
        SmartListForm::new(
            "Long reads",
            FilterConfig::new(
                ListJoiner::And,
                vec![FilterGroup::new(GroupJoiner::Or, vec![filter])],
            ),
        )
    }

    #[test]
    fn clean_form_is_converted() {
        let result = run(
            &form(Filter::new(Source::Book, "pages", FilterOperation::Gte, 500i64)),
            &SiblingNames::default(),
        )
        .unwrap();

        let input = result.input.unwrap();
        assert_eq!(input.filters[0].joiner, ApiGroupJoiner::Or);
        assert!(result.report.unwrap().is_valid());
        assert!(!result.messages.is_empty());
    }

    #[test]
    fn illegal_operator_blocks_conversion() {
        let result = run(
            &form(Filter::new(Source::Book, "name", FilterOperation::Gte, "M")),
            &SiblingNames::default(),
        )
        .unwrap();

        assert!(result.input.is_none());
        assert!(result.has_errors());
        assert_eq!(result.report.unwrap().issues.len(), 1);
    }

    #[test]
    fn duplicate_name_blocks_conversion() {
        let siblings = SiblingNames::new(vec!["Long reads".into()]);
        let filter = Filter::new(Source::Book, "pages", FilterOperation::Gte, 500i64);

        let result = run(&form(filter.clone()), &siblings).unwrap();
        assert!(result.input.is_none());

        let result = run(&form(filter), &siblings.editing("Long reads")).unwrap();
        assert!(result.input.is_some());
    }
}
