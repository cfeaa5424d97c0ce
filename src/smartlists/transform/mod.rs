//! # Form / API Transform
//!
//! Two pure pipelines convert a smart list between its flat form shape and
//! its nested API shape. The editing surface only ever sees the form shape;
//! conversion happens at the boundary, API → form on load and form → API on
//! submit.
//!
//! ```text
//! form                                         api
//! { field, source, operation, value }   <->   { sourceKey: { field: { operation: value } } }
//! { joiner: "or", filters: [..] }       <->   { joiner: "OR", groups: [..] }
//! { grouping, description? }            <->   { defaultGrouping, description | null }
//! ```
//!
//! ## Ranges
//!
//! A range is not written under an operation key. The API stores the bounds
//! object directly under the field (`{ age_rating: { from, to, inclusive } }`)
//! and reading it back yields the `range` operation.
//!
//! ## Failures
//!
//! Form → API is total. API → form fails with
//! [`SmartListError::EmptyFilter`](crate::error::SmartListError::EmptyFilter)
//! when a field map is missing or empty and with
//! [`SmartListError::MalformedFilter`](crate::error::SmartListError::MalformedFilter)
//! when it cannot be read. Neither is ever coerced into a default filter.
//!
//! Order of groups and filters is preserved in both directions.

mod into_api;
mod into_form;

pub use into_api::{into_api, into_api_filter, into_api_group};
pub use into_form::{into_form, into_form_filter, into_form_group, FormTransform, SourceFallback};
