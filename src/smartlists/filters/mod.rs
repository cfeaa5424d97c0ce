//! # Filter Vocabulary
//!
//! A smart list describes which books, series or libraries it matches with
//! groups of leaf filters. This module holds the vocabulary shared by both
//! representations of a filter:
//!
//! - **Fields** ([`fields`]): which field names exist, their value domain,
//!   and which attributes each [`Source`] exposes
//! - **Operations** ([`operation`]): the operator taxonomy and which
//!   operators are legal for which domain
//! - **Values** ([`value`]): scalar, list and range value shapes
//! - **Form shape** ([`form`]): the flat representation the editing surface uses
//! - **API shape** ([`api`]): the nested representation the server stores
//!
//! ## Domains and Operators
//!
//! | Domain | Example fields | Operators |
//! |--------|----------------|-----------|
//! | `string` | `name`, `genres`, `writers` | `any`, `not`, `contains`, `excludes`, `none` |
//! | `number` | `pages`, `age_rating`, `year` | `eq`, `gt`, `gte`, `lt`, `lte`, `range`, `anyOf`, `noneOf` |
//! | `date` | `createdAt`, `updatedAt` | same as `number` |
//! | unclassified | anything else | `eq`, `neq` |
//!
//! Converting between the two shapes lives in [`crate::transform`].

pub mod api;
pub mod fields;
pub mod form;
pub mod operation;
pub mod value;

pub use api::{ApiFilter, ApiFilterGroup, ApiGroupJoiner, ApiListJoiner, FieldMap};
pub use fields::{domain_of, registered_fields, FieldDomain, Source};
pub use form::{Filter, FilterConfig, FilterGroup, GroupJoiner, ListJoiner};
pub use operation::{
    is_legal, legal_operations, operations_for_domain, selector_options, FilterOperation,
    SelectorOption, ValueArity,
};
pub use value::{DateValue, FilterValue, RangeBound, RangeValue, ScalarValue};
