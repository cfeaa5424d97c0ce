use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::filters::{domain_of, legal_operations, selector_options, Source};

/// Attribute catalog rows, for one source or all of them.
pub fn run(source: Option<Source>) -> Result<CmdResult> {
    let sources: Vec<Source> = match source {
        Some(source) => vec![source],
        None => Source::ALL.to_vec(),
    };
    let selectors = sources.into_iter().flat_map(selector_options).collect();
    Ok(CmdResult::default().with_selectors(selectors))
}

pub fn operations(field: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match domain_of(field) {
        Some(domain) => result.add_message(CmdMessage::info(format!(
            "'{}' is a {} field",
            field, domain
        ))),
        None => result.add_message(CmdMessage::warning(format!(
            "'{}' is not a known field, only equality is offered",
            field
        ))),
    }
    Ok(result.with_operations(legal_operations(field).to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::FilterOperation;

    #[test]
    fn lists_every_source_by_default() {
        let result = run(None).unwrap();
        let expected: usize = Source::ALL.iter().map(|s| s.attributes().len()).sum();
        assert_eq!(result.selectors.len(), expected);
    }

    #[test]
    fn filters_by_source() {
        let result = run(Some(Source::Library)).unwrap();
        assert!(result.selectors.iter().all(|s| s.source == Source::Library));
        assert_eq!(result.selectors.len(), 4);
    }

    #[test]
    fn operations_for_unknown_field() {
        let result = operations("favorite_color").unwrap();
        assert_eq!(result.operations, vec![FilterOperation::Eq, FilterOperation::Neq]);
    }
}
