//! Form state for the enrollment wizard.
//!
//! # Responsibility
//! - Hold the in-progress record behind a closed mutation command set.
//! - Recompute derived age/level whenever the birth date changes.
//!
//! # Invariants
//! - Derived fields are always a function of `date_of_birth` and the
//!   session's fixed `today`; no command sets them directly.

pub mod derive;
pub mod store;
