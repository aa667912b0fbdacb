//! Collaborator boundary: record source and record sink.
//!
//! # Responsibility
//! - Define the directory contract the wizard and roster views consume.
//! - Provide the in-memory implementation used instead of real storage.
//!
//! # Invariants
//! - Lookup misses are a distinct `None`/`NotFound` outcome, never an empty
//!   record.
//! - The sink assigns identity; records have no id before acceptance.

pub mod child_repo;
