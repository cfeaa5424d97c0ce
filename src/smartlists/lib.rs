//! # Smartlists Architecture
//!
//! Smartlists is a **UI-agnostic filter library** for media-library smart lists.
//! A smart list describes which books, series or libraries it matches; this
//! crate defines that description and converts it between the two shapes it
//! travels in. It does not execute filters.
//!
//! ## The Two Shapes
//!
//! - The **form shape** is flat and lower-cased: every filter carries its own
//!   `source`, `field`, `operation` and `value`. The editing surface produces
//!   and consumes only this shape.
//! - The **API shape** is nested and upper-cased: filters are keyed by source,
//!   then field, then operation. The server stores only this shape.
//!
//! Conversion happens at the boundary: API → form on load, form → API on
//! submit, with validation in between.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Reads JSON files, prints JSON and messages               │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, applies configuration         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - load, submit, validate, fields, config                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (filters/, transform/, validation.rs, model.rs)       │
//! │  - Pure, synchronous, no shared state                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use smartlists::filters::{Filter, FilterOperation, FilterValue, Source};
//! use smartlists::transform::{into_api_filter, into_form_filter};
//!
//! let filter = Filter::new(
//!     Source::BookMeta,
//!     "genres",
//!     FilterOperation::Any,
//!     FilterValue::list(["Horror", "Mystery"]),
//! );
//! let api = into_api_filter(&filter);
//! let back = into_form_filter(&api).unwrap();
//! assert!(back.same_predicate(&filter));
//! ```
//!
//! ## Module Overview
//!
//! - [`filters`]: Field registry, operator taxonomy, values and both shapes
//! - [`transform`]: Form ↔ API conversion
//! - [`validation`]: Submission-time checks, reported as values
//! - [`model`]: The smart list aggregate in both shapes
//! - [`api`]: The API facade
//! - [`commands`]: Command implementations
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filters;
pub mod model;
pub mod transform;
pub mod validation;
