use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::SmartListForm;
use crate::validation::{validate_form, SiblingNames};

pub fn run(form: &SmartListForm, siblings: &SiblingNames) -> Result<CmdResult> {
    let report = validate_form(form, siblings);
    let mut result = CmdResult::default();

    if report.is_valid() {
        result.add_message(CmdMessage::success(format!("'{}' is valid", form.name)));
    } else {
        for issue in &report.issues {
            result.add_message(CmdMessage::warning(format!("{}: {}", issue.path, issue.message)));
        }
    }

    Ok(result.with_report(report))
}
