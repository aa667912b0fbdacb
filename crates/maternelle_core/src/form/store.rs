//! Form state store.
//!
//! # Responsibility
//! - Own the record under construction for one wizard session.
//! - Apply field mutations through a closed command set.
//! - Keep derived age/level in sync with the birth date.
//!
//! # Invariants
//! - `apply` mutates exactly the addressed field (plus derived fields when
//!   the birth date changes) and never fails.
//! - `today` is fixed at session open; derived values never drift mid-session.

use crate::form::derive::age_and_level;
use crate::model::checklist::{DocumentKind, ScheduleKind};
use crate::model::record::{
    EnrollmentRecord, EnrollmentStatus, Gender, GuardianRole,
};
use chrono::{Local, NaiveDate};

/// Guardian field addressed by a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardianField {
    Name,
    Phone,
    Email,
    Occupation,
    Address,
}

/// Health-notes field addressed by a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthField {
    Allergies,
    Medications,
    DietaryRestrictions,
}

/// Emergency-contact field addressed by a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmergencyField {
    Name,
    Phone,
    Relationship,
}

/// Closed set of record mutations.
///
/// One variant per addressable field family; there is no string-keyed path
/// lookup, so an impossible address cannot be expressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldCommand {
    SetChildName(String),
    /// Raw form value; triggers derived-field recomputation.
    SetDateOfBirth(String),
    SetGender(Option<Gender>),
    SetGuardianField(GuardianRole, GuardianField, String),
    SetDocumentFlag(DocumentKind, bool),
    SetScheduleFlag(ScheduleKind, bool),
    SetHealthField(HealthField, String),
    SetEmergencyField(EmergencyField, String),
    /// Edit flow only; ignored by no step of the new-enrollment flow.
    SetEnrollmentStartDate(String),
    SetEnrollmentStatus(EnrollmentStatus),
}

/// Single source of truth for the record one wizard session is building.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormStateStore {
    record: EnrollmentRecord,
    today: NaiveDate,
}

impl FormStateStore {
    /// Creates an empty store anchored to the local calendar date.
    pub fn new() -> Self {
        Self::opened_on(Local::now().date_naive())
    }

    /// Creates an empty store anchored to an explicit date.
    ///
    /// Tests and replays use this to keep derivation deterministic.
    pub fn opened_on(today: NaiveDate) -> Self {
        Self {
            record: EnrollmentRecord::empty(),
            today,
        }
    }

    /// Creates a store pre-populated from an existing record (edit mode).
    ///
    /// Derived fields are recomputed from the stored birth date so the
    /// projection reflects `today`, not the day the record was stored.
    pub fn from_record(record: EnrollmentRecord, today: NaiveDate) -> Self {
        let mut store = Self { record, today };
        store.recompute_derived();
        store
    }

    pub fn record(&self) -> &EnrollmentRecord {
        &self.record
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Applies one mutation command.
    ///
    /// # Contract
    /// - Only the addressed field changes, except `SetDateOfBirth`, which
    ///   also refreshes `child.age` and `child.level`.
    /// - Never fails; out-of-range values are a validation concern, checked
    ///   at step boundaries instead.
    pub fn apply(&mut self, command: FieldCommand) {
        match command {
            FieldCommand::SetChildName(value) => self.record.child.name = value,
            FieldCommand::SetDateOfBirth(value) => {
                self.record.child.date_of_birth = value;
                self.recompute_derived();
            }
            FieldCommand::SetGender(value) => self.record.child.gender = value,
            FieldCommand::SetGuardianField(role, field, value) => {
                let guardian = self.record.guardian_mut(role);
                match field {
                    GuardianField::Name => guardian.name = value,
                    GuardianField::Phone => guardian.phone = value,
                    GuardianField::Email => guardian.email = value,
                    GuardianField::Occupation => guardian.occupation = value,
                    GuardianField::Address => guardian.address = value,
                }
            }
            FieldCommand::SetDocumentFlag(kind, checked) => {
                self.record.documents.set(kind, checked);
            }
            FieldCommand::SetScheduleFlag(kind, checked) => {
                self.record.schedule.set(kind, checked);
            }
            FieldCommand::SetHealthField(field, value) => match field {
                HealthField::Allergies => self.record.health.allergies = value,
                HealthField::Medications => self.record.health.medications = value,
                HealthField::DietaryRestrictions => {
                    self.record.health.dietary_restrictions = value;
                }
            },
            FieldCommand::SetEmergencyField(field, value) => match field {
                EmergencyField::Name => self.record.emergency.name = value,
                EmergencyField::Phone => self.record.emergency.phone = value,
                EmergencyField::Relationship => self.record.emergency.relationship = value,
            },
            FieldCommand::SetEnrollmentStartDate(value) => {
                self.record.enrollment.start_date = value;
            }
            FieldCommand::SetEnrollmentStatus(value) => {
                self.record.enrollment.status = value;
            }
        }
    }

    /// Returns the store to the empty baseline record.
    pub fn reset(&mut self) {
        self.record = EnrollmentRecord::empty();
    }

    fn recompute_derived(&mut self) {
        let projection = age_and_level(&self.record.child.date_of_birth, self.today);
        self.record.child.age = projection.age;
        self.record.child.level = projection.level;
    }
}

impl Default for FormStateStore {
    fn default() -> Self {
        Self::new()
    }
}
