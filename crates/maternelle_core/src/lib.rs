//! Core domain logic for the Maternelle administration console.
//! This crate is the single source of truth for enrollment invariants.

pub mod form;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod wizard;

pub use form::derive::{age_and_level, parse_birth_date, AgeProjection};
pub use form::store::{
    EmergencyField, FieldCommand, FormStateStore, GuardianField, HealthField,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::checklist::{Checklist, ChecklistKind, DocumentKind, ScheduleKind};
pub use model::record::{
    ChildIdentity, EmergencyContact, EnrollmentInfo, EnrollmentRecord, EnrollmentStatus, Gender,
    Guardian, GuardianRole, HealthNotes, Level,
};
pub use repo::child_repo::{
    AttendanceStatus, ChildDirectory, ChildId, DirectoryEnrollmentSink, DirectoryError,
    DirectoryResult, EnrollmentSink, InMemoryChildDirectory, StoredChild, SubmitRejection,
};
pub use service::enrollment_service::EnrollmentService;
pub use service::report_service::{
    catalog_revenue_eur, finance_report, service_catalog, share_percent, CategoryAmount,
    FinanceReport, ServiceOffering,
};
pub use service::roster_service::{RosterEntry, RosterService, RosterStats};
pub use wizard::session::{
    AdvanceOutcome, Step, SubmitReceipt, WizardError, WizardFlow, WizardSession,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
