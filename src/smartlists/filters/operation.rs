//! Operator taxonomy.
//!
//! Operators are partitioned by the field domains that may use them:
//!
//! | Family | Operators | Used for |
//! |--------|-----------|----------|
//! | String | `any`, `not`, `contains`, `excludes`, `none` | `string` fields |
//! | Numeric | `eq`, `gt`, `gte`, `lt`, `lte`, `range`, `anyOf`, `noneOf` | `number` and `date` fields |
//! | Equality | `eq`, `neq` | fields outside the registry |

use super::fields::{domain_of, FieldDomain, Source};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterOperation {
    Any,
    Not,
    Contains,
    Excludes,
    None,
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
    Range,
    AnyOf,
    NoneOf,
}

/// The value shape an operation expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueArity {
    Scalar,
    List,
    Range,
}

pub const STRING_OPERATIONS: &[FilterOperation] = &[
    FilterOperation::Any,
    FilterOperation::Not,
    FilterOperation::Contains,
    FilterOperation::Excludes,
    FilterOperation::None,
];

pub const NUMERIC_OPERATIONS: &[FilterOperation] = &[
    FilterOperation::Eq,
    FilterOperation::Gt,
    FilterOperation::Gte,
    FilterOperation::Lt,
    FilterOperation::Lte,
    FilterOperation::Range,
    FilterOperation::AnyOf,
    FilterOperation::NoneOf,
];

pub const EQUALITY_OPERATIONS: &[FilterOperation] = &[FilterOperation::Eq, FilterOperation::Neq];

const ALL_OPERATIONS: &[FilterOperation] = &[
    FilterOperation::Any,
    FilterOperation::Not,
    FilterOperation::Contains,
    FilterOperation::Excludes,
    FilterOperation::None,
    FilterOperation::Eq,
    FilterOperation::Neq,
    FilterOperation::Gt,
    FilterOperation::Gte,
    FilterOperation::Lt,
    FilterOperation::Lte,
    FilterOperation::Range,
    FilterOperation::AnyOf,
    FilterOperation::NoneOf,
];

impl FilterOperation {
    pub fn all() -> &'static [FilterOperation] {
        ALL_OPERATIONS
    }

    /// Wire name, shared by the form and API shapes.
    ///
    /// The API spells `range` as the bound object itself (`{ from, to }`), so
    /// `range` never appears as a key there.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOperation::Any => "any",
            FilterOperation::Not => "not",
            FilterOperation::Contains => "contains",
            FilterOperation::Excludes => "excludes",
            FilterOperation::None => "none",
            FilterOperation::Eq => "eq",
            FilterOperation::Neq => "neq",
            FilterOperation::Gt => "gt",
            FilterOperation::Gte => "gte",
            FilterOperation::Lt => "lt",
            FilterOperation::Lte => "lte",
            FilterOperation::Range => "range",
            FilterOperation::AnyOf => "anyOf",
            FilterOperation::NoneOf => "noneOf",
        }
    }

    pub fn arity(&self) -> ValueArity {
        match self {
            FilterOperation::Any
            | FilterOperation::None
            | FilterOperation::AnyOf
            | FilterOperation::NoneOf => ValueArity::List,
            FilterOperation::Range => ValueArity::Range,
            FilterOperation::Not
            | FilterOperation::Contains
            | FilterOperation::Excludes
            | FilterOperation::Eq
            | FilterOperation::Neq
            | FilterOperation::Gt
            | FilterOperation::Gte
            | FilterOperation::Lt
            | FilterOperation::Lte => ValueArity::Scalar,
        }
    }

    /// Ordering comparisons, which only make sense on numbers and dates.
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            FilterOperation::Gt
                | FilterOperation::Gte
                | FilterOperation::Lt
                | FilterOperation::Lte
                | FilterOperation::Range
        )
    }
}

impl fmt::Display for FilterOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterOperation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_OPERATIONS
            .iter()
            .copied()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| format!("unknown operation '{}'", s))
    }
}

/// Legal operators for a value domain. `None` means the field is unclassified.
pub fn operations_for_domain(domain: Option<FieldDomain>) -> &'static [FilterOperation] {
    match domain {
        Some(FieldDomain::String) => STRING_OPERATIONS,
        Some(FieldDomain::Number) | Some(FieldDomain::Date) => NUMERIC_OPERATIONS,
        None => EQUALITY_OPERATIONS,
    }
}

/// Legal operators for a field, derived from its domain.
pub fn legal_operations(field: &str) -> &'static [FilterOperation] {
    operations_for_domain(domain_of(field))
}

pub fn is_legal(field: &str, operation: FilterOperation) -> bool {
    legal_operations(field).contains(&operation)
}

/// One row of an operator selector: a field of a source and the operators
/// offered for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorOption {
    pub source: Source,
    pub field: &'static str,
    pub domain: Option<FieldDomain>,
    pub operations: Vec<FilterOperation>,
}

/// Operator selector rows for every attribute of a source, as an editing
/// surface populates them: classify each attribute, then offer the family
/// of its domain.
///
/// The domain match is repeated here on purpose rather than calling
/// [`operations_for_domain`]; `selector_and_legality_agree_for_every_field` checks the two agree.
pub fn selector_options(source: Source) -> Vec<SelectorOption> {
    source
        .attributes()
        .iter()
        .map(|field| {
            let domain = domain_of(field);
            let operations = match domain {
                Some(FieldDomain::String) => STRING_OPERATIONS.to_vec(),
                Some(FieldDomain::Number | FieldDomain::Date) => NUMERIC_OPERATIONS.to_vec(),
                None => EQUALITY_OPERATIONS.to_vec(),
            };
            SelectorOption {
                source,
                field,
                domain,
                operations,
            }
        })
        .collect()
}
