//! Fix strategies, one module per category.
//!
//! Every strategy has the same shape: inspect the statement against the
//! enriched context, and either return a [`FixRecord`] after mutating the
//! statement text, or return `None` and leave it untouched. A strategy
//! must never mutate without also producing a record.
//!
//! [`FixRecord`]: clinifact_core::FixRecord

pub mod entity;
pub mod negation;
pub mod unit;
