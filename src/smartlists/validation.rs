//! Smart list validation.
//!
//! Validation runs on the form shape before it is converted for the server.
//! Problems are expected and routine, so they are reported as values, never
//! as errors:
//!
//! - A `string` field cannot be paired with `gt`, `gte`, `lt`, `lte` or `range`
//! - A value must have the shape its operation expects (scalar, list, range)
//! - Both range bounds share a kind, and it matches the field's domain
//! - A list name is non-empty and unique among the owner's other lists
//!   (exact, case-sensitive match)
//!
//! # Examples
//! ```
//! use smartlists::filters::{Filter, FilterOperation, Source};
//! use smartlists::validation::{validate_filter, ValidationIssue};
//!
//! let ok = Filter::new(Source::Book, "name", FilterOperation::Contains, "Saga");
//! assert!(validate_filter(&ok).is_empty());
//!
//! let bad = Filter::new(Source::Book, "name", FilterOperation::Gt, "Saga");
//! assert!(matches!(
//!     validate_filter(&bad)[0],
//!     ValidationIssue::IllegalOperator { .. }
//! ));
//! ```

use crate::filters::{
    domain_of, FieldDomain, Filter, FilterGroup, FilterOperation, FilterValue, ValueArity,
};
use crate::model::SmartListForm;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// List name is empty or only whitespace
    EmptyName,
    /// Another list owned by the same user already has this name
    DuplicateName(String),
    /// Ordering comparison on a string field
    IllegalOperator {
        field: String,
        operation: FilterOperation,
    },
    /// Value shape does not match the operation
    ValueShape {
        field: String,
        operation: FilterOperation,
        expected: ValueArity,
        found: ValueArity,
    },
    /// Range bounds are of different kinds
    MixedRangeBounds { field: String },
    /// Range bounds are of a different kind than the field
    RangeDomain {
        field: String,
        field_domain: FieldDomain,
        bound_domain: FieldDomain,
    },
}

fn arity_name(arity: ValueArity) -> &'static str {
    match arity {
        ValueArity::Scalar => "a single value",
        ValueArity::List => "a list of values",
        ValueArity::Range => "a range",
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationIssue::EmptyName => write!(f, "name cannot be empty"),
            ValidationIssue::DuplicateName(name) => {
                write!(f, "a smart list named '{}' already exists", name)
            }
            ValidationIssue::IllegalOperator { field, operation } => write!(
                f,
                "'{}' is a text field and cannot use '{}'",
                field, operation
            ),
            ValidationIssue::ValueShape {
                field,
                operation,
                expected,
                found,
            } => write!(
                f,
                "'{}' with '{}' expects {}, found {}",
                field,
                operation,
                arity_name(*expected),
                arity_name(*found)
            ),
            ValidationIssue::MixedRangeBounds { field } => {
                write!(f, "range on '{}' mixes numeric and date bounds", field)
            }
            ValidationIssue::RangeDomain {
                field,
                field_domain,
                bound_domain,
            } => write!(
                f,
                "range on {} field '{}' has {} bounds",
                field_domain, field, bound_domain
            ),
        }
    }
}

impl std::error::Error for ValidationIssue {}

/// A validation issue and where in the form it was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    /// Dotted path into the form, e.g. `filters.groups[0].filters[2]`
    pub path: String,
    pub message: String,
    #[serde(skip)]
    pub issue: ValidationIssue,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub issues: Vec<FieldIssue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn push(&mut self, path: impl Into<String>, issue: ValidationIssue) {
        self.issues.push(FieldIssue {
            path: path.into(),
            message: issue.to_string(),
            issue,
        });
    }
}

/// Names of the owner's other lists, with the name of the list being edited
/// (if any) excluded from the collision check.
#[derive(Debug, Clone, Default)]
pub struct SiblingNames {
    names: Vec<String>,
    editing: Option<String>,
}

impl SiblingNames {
    pub fn new(names: Vec<String>) -> Self {
        Self {
            names,
            editing: None,
        }
    }

    /// Allow the list currently being edited to keep `name`.
    pub fn editing(mut self, name: impl Into<String>) -> Self {
        self.editing = Some(name.into());
        self
    }

    pub fn is_taken(&self, name: &str) -> bool {
        if self.editing.as_deref() == Some(name) {
            return false;
        }
        self.names.iter().any(|existing| existing == name)
    }
}

/// Check that a `(field, operation)` pair is allowed.
pub fn validate_operation(field: &str, operation: FilterOperation) -> Result<(), ValidationIssue> {
    if domain_of(field) == Some(FieldDomain::String) && operation.is_comparison() {
        return Err(ValidationIssue::IllegalOperator {
            field: field.to_string(),
            operation,
        });
    }
    Ok(())
}

pub fn validate_filter(filter: &Filter) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if let Err(issue) = validate_operation(&filter.field, filter.operation) {
        issues.push(issue);
    }

    if !filter.value.fits(filter.operation) {
        issues.push(ValidationIssue::ValueShape {
            field: filter.field.clone(),
            operation: filter.operation,
            expected: filter.operation.arity(),
            found: filter.value.arity(),
        });
    }

    if let FilterValue::Range(range) = &filter.value {
        match (range.domain(), domain_of(&filter.field)) {
            (None, _) => issues.push(ValidationIssue::MixedRangeBounds {
                field: filter.field.clone(),
            }),
            (Some(bound_domain), Some(field_domain @ (FieldDomain::Number | FieldDomain::Date)))
                if bound_domain != field_domain =>
            {
                issues.push(ValidationIssue::RangeDomain {
                    field: filter.field.clone(),
                    field_domain,
                    bound_domain,
                })
            }
            _ => {}
        }
    }

    issues
}

pub fn validate_group(group: &FilterGroup) -> ValidationReport {
    let mut report = ValidationReport::default();
    collect_group(&mut report, "", group);
    report
}

fn collect_group(report: &mut ValidationReport, prefix: &str, group: &FilterGroup) {
    for (i, filter) in group.filters.iter().enumerate() {
        for issue in validate_filter(filter) {
            report.push(format!("{}filters[{}]", prefix, i), issue);
        }
    }
}

pub fn validate_name(name: &str, siblings: &SiblingNames) -> Result<(), ValidationIssue> {
    if name.trim().is_empty() {
        return Err(ValidationIssue::EmptyName);
    }
    if siblings.is_taken(name) {
        return Err(ValidationIssue::DuplicateName(name.to_string()));
    }
    Ok(())
}

/// Validate a whole form before submission.
pub fn validate_form(form: &SmartListForm, siblings: &SiblingNames) -> ValidationReport {
    let mut report = ValidationReport::default();

    if let Err(issue) = validate_name(&form.name, siblings) {
        report.push("name", issue);
    }

    for (i, group) in form.filters.groups.iter().enumerate() {
        collect_group(&mut report, &format!("filters.groups[{}].", i), group);
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::operation::STRING_OPERATIONS;
    use crate::filters::{
        registered_fields, FilterConfig, GroupJoiner, ListJoiner, RangeValue, Source,
    };
    use chrono::{TimeZone, Utc};

    fn string_fields() -> Vec<&'static str> {
        registered_fields()
            .filter(|f| domain_of(f) == Some(FieldDomain::String))
            .collect()
    }

    #[test]
    fn string_fields_reject_comparisons() {
        for field in string_fields() {
            for op in [
                FilterOperation::Gt,
                FilterOperation::Gte,
                FilterOperation::Lt,
                FilterOperation::Lte,
                FilterOperation::Range,
            ] {
                assert!(
                    validate_operation(field, op).is_err(),
                    "{} accepted {}",
                    field,
                    op
                );
            }
        }
    }

    #[test]
    fn string_fields_accept_string_family() {
        for field in string_fields() {
            for op in STRING_OPERATIONS {
                assert!(validate_operation(field, *op).is_ok(), "{} rejected {}", field, op);
            }
        }
    }

    #[test]
    fn unclassified_fields_are_unrestricted() {
        assert!(validate_operation("custom_score", FilterOperation::Gt).is_ok());
    }

    #[test]
    fn numeric_fields_accept_comparisons() {
        assert!(validate_operation("pages", FilterOperation::Lte).is_ok());
        assert!(validate_operation("createdAt", FilterOperation::Range).is_ok());
    }

    #[test]
    fn value_shape_is_checked() {
        let filter = Filter::new(Source::Book, "tags", FilterOperation::Any, "solo");
        assert_eq!(
            validate_filter(&filter),
            vec![ValidationIssue::ValueShape {
                field: "tags".into(),
                operation: FilterOperation::Any,
                expected: ValueArity::List,
                found: ValueArity::Scalar,
            }]
        );
    }

    #[test]
    fn range_bounds_must_agree() {
        let date = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();
        let mixed = RangeValue::new(1i64.into(), date.into());
        let filter = Filter::new(Source::Book, "pages", FilterOperation::Range, mixed);
        assert_eq!(
            validate_filter(&filter),
            vec![ValidationIssue::MixedRangeBounds {
                field: "pages".into()
            }]
        );
    }

    #[test]
    fn range_bounds_must_match_field_domain() {
        let date = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();
        let filter = Filter::new(
            Source::Book,
            "pages",
            FilterOperation::Range,
            RangeValue::dates(date, date),
        );
        assert_eq!(
            validate_filter(&filter),
            vec![ValidationIssue::RangeDomain {
                field: "pages".into(),
                field_domain: FieldDomain::Number,
                bound_domain: FieldDomain::Date,
            }]
        );

        let ok = Filter::new(
            Source::Library,
            "createdAt",
            FilterOperation::Range,
            RangeValue::dates(date, date).inclusive(true),
        );
        assert!(validate_filter(&ok).is_empty());
    }

    #[test]
    fn name_must_not_be_empty() {
        assert_eq!(
            validate_name("   ", &SiblingNames::default()),
            Err(ValidationIssue::EmptyName)
        );
    }

    #[test]
    fn duplicate_names_are_rejected_unless_editing() {
        let siblings = SiblingNames::new(vec!["Unread".into(), "Horror".into()]);
        assert_eq!(
            validate_name("Unread", &siblings),
            Err(ValidationIssue::DuplicateName("Unread".into()))
        );
        assert!(validate_name("unread", &siblings).is_ok());

        let editing = siblings.editing("Unread");
        assert!(validate_name("Unread", &editing).is_ok());
        assert!(validate_name("Horror", &editing).is_err());
    }

    #[test]
    fn form_report_carries_paths() {
        let form = SmartListForm::new(
            "Horror",
            FilterConfig::new(
                ListJoiner::And,
                vec![
                    FilterGroup::new(
                        GroupJoiner::And,
                        vec![Filter::new(Source::Book, "name", FilterOperation::Contains, "x")],
                    ),
                    FilterGroup::new(
                        GroupJoiner::Or,
                        vec![
                            Filter::new(Source::Book, "pages", FilterOperation::Gt, 10i64),
                            Filter::new(Source::BookMeta, "writers", FilterOperation::Lt, "K"),
                        ],
                    ),
                ],
            ),
        );

        let report = validate_form(&form, &SiblingNames::new(vec!["Horror".into()]));
        assert!(!report.is_valid());
        let paths: Vec<&str> = report.issues.iter().map(|i| i.path.as_str()).collect();
        assert_eq!(paths, vec!["name", "filters.groups[1].filters[1]"]);
        assert_eq!(
            report.issues[1].message,
            "'writers' is a text field and cannot use 'lt'"
        );
    }

    #[test]
    fn group_report_uses_relative_paths() {
        let group = FilterGroup::new(
            GroupJoiner::And,
            vec![Filter::new(Source::Series, "name", FilterOperation::Gte, "A")],
        );
        let report = validate_group(&group);
        assert_eq!(report.issues[0].path, "filters[0]");
    }

    #[test]
    fn issue_display() {
        assert_eq!(ValidationIssue::EmptyName.to_string(), "name cannot be empty");
        assert_eq!(
            ValidationIssue::DuplicateName("Unread".into()).to_string(),
            "a smart list named 'Unread' already exists"
        );
        assert_eq!(
            ValidationIssue::MixedRangeBounds {
                field: "pages".into()
            }
            .to_string(),
            "range on 'pages' mixes numeric and date bounds"
        );
    }
}
