//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, the question-type tag, errors, tag tables)
//! - `survey` - Question and answer variants and the survey aggregate

pub mod foundation;
pub mod survey;
