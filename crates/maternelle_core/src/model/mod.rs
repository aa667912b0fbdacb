//! Domain model for the enrollment record and its checklist sections.
//!
//! # Responsibility
//! - Define the canonical record built across the enrollment wizard.
//! - Keep checklist key sets as fixed, order-preserving configuration.
//!
//! # Invariants
//! - `age` and `level` are derived projections, never user-settable.
//! - Checklist keys are exhaustive enums; no dynamic keys exist at runtime.

pub mod checklist;
pub mod record;
