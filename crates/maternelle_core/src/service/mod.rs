//! Use-case services over the directory and wizard layers.
//!
//! # Responsibility
//! - Orchestrate directory, wizard and reporting calls into the APIs the
//!   console screens consume.
//! - Keep rendering layers decoupled from storage and state-machine details.

pub mod enrollment_service;
pub mod report_service;
pub mod roster_service;
