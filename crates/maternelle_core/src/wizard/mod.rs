//! Step-gated enrollment wizard.
//!
//! # Responsibility
//! - Sequence the enrollment steps and gate forward movement on per-step
//!   required fields.
//! - Hand completed records to an external sink on submit.
//!
//! # Invariants
//! - Moving backward never validates and never loses entered data.
//! - A refused advance or rejected submit leaves all session state intact.

pub mod rules;
pub mod session;
