//! Wizard session state machine.
//!
//! # Responsibility
//! - Track the current step of one enrollment or edit flow.
//! - Gate `advance`/`submit` on the step rules and drive the form store.
//!
//! # Invariants
//! - Step index stays within the flow's step slice; movement saturates at
//!   both ends.
//! - Submit acceptance is the only path that resets the session.

use crate::form::store::{FieldCommand, FormStateStore};
use crate::model::record::EnrollmentRecord;
use crate::repo::child_repo::{ChildId, EnrollmentSink};
use crate::wizard::rules::missing_required_fields;
use chrono::NaiveDate;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One screen of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    ChildIdentity,
    Guardians,
    Documents,
    ScheduleOptions,
    HealthNotes,
    EmergencyContact,
    /// Edit flow only.
    EnrollmentStatus,
}

impl Step {
    /// Title shown in the step header.
    pub fn title(self) -> &'static str {
        match self {
            Step::ChildIdentity => "Child information",
            Step::Guardians => "Parent information",
            Step::Documents => "Required documents",
            Step::ScheduleOptions => "Schedule options",
            Step::HealthNotes => "Health information",
            Step::EmergencyContact => "Emergency contact",
            Step::EnrollmentStatus => "Enrollment status",
        }
    }
}

const NEW_ENROLLMENT_STEPS: &[Step] = &[
    Step::ChildIdentity,
    Step::Guardians,
    Step::Documents,
    Step::ScheduleOptions,
    Step::HealthNotes,
    Step::EmergencyContact,
];

const EDIT_EXISTING_STEPS: &[Step] = &[
    Step::ChildIdentity,
    Step::Guardians,
    Step::Documents,
    Step::ScheduleOptions,
    Step::HealthNotes,
    Step::EmergencyContact,
    Step::EnrollmentStatus,
];

/// Which variant of the wizard a session runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardFlow {
    /// Six steps, fresh record.
    NewEnrollment,
    /// Seven steps, record pre-populated from the directory.
    EditExisting,
}

impl WizardFlow {
    /// Ordered steps of this flow. Renderers iterate this slice instead of
    /// assuming a count.
    pub fn steps(self) -> &'static [Step] {
        match self {
            WizardFlow::NewEnrollment => NEW_ENROLLMENT_STEPS,
            WizardFlow::EditExisting => EDIT_EXISTING_STEPS,
        }
    }
}

/// Result of an `advance` attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// The gate was open; `step` is the step now shown (unchanged when the
    /// session was already on the final step).
    Advanced { step: Step },
    /// The gate refused; `missing` lists the empty required-field labels.
    /// Session state is unchanged.
    Refused { missing: Vec<&'static str> },
}

/// Proof of a sink-accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReceipt {
    pub child_id: ChildId,
    pub enrolled_on: NaiveDate,
}

/// Failure of a `submit` attempt. All variants leave the session intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    /// `submit` was called somewhere other than the final step.
    NotAtFinalStep { current: Step },
    /// Final-step validation refused; mirrors `AdvanceOutcome::Refused`.
    Refused { missing: Vec<&'static str> },
    /// The sink rejected the record; `reason` is its message verbatim.
    Rejected { reason: String },
}

impl Display for WizardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAtFinalStep { current } => {
                write!(f, "submit is only available on the final step, not `{}`", current.title())
            }
            Self::Refused { missing } => {
                write!(f, "required fields are missing: {}", missing.join(", "))
            }
            Self::Rejected { reason } => write!(f, "enrollment rejected: {reason}"),
        }
    }
}

impl Error for WizardError {}

/// One user's pass through the wizard.
///
/// Owns its form store exclusively; there is no shared mutable session
/// state. Dropping the session discards the in-progress record (cancel).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardSession {
    flow: WizardFlow,
    step_index: usize,
    store: FormStateStore,
}

impl WizardSession {
    /// Opens a six-step session over an empty record.
    pub fn new_enrollment() -> Self {
        Self {
            flow: WizardFlow::NewEnrollment,
            step_index: 0,
            store: FormStateStore::new(),
        }
    }

    /// Opens a six-step session anchored to an explicit date.
    pub fn new_enrollment_on(today: NaiveDate) -> Self {
        Self {
            flow: WizardFlow::NewEnrollment,
            step_index: 0,
            store: FormStateStore::opened_on(today),
        }
    }

    /// Opens a seven-step edit session pre-populated from a stored record.
    ///
    /// Derived fields are refreshed against `today` on open.
    pub fn edit(record: EnrollmentRecord, today: NaiveDate) -> Self {
        Self {
            flow: WizardFlow::EditExisting,
            step_index: 0,
            store: FormStateStore::from_record(record, today),
        }
    }

    pub fn flow(&self) -> WizardFlow {
        self.flow
    }

    /// Ordered steps of this session's flow.
    pub fn steps(&self) -> &'static [Step] {
        self.flow.steps()
    }

    /// Current step.
    pub fn current_step(&self) -> Step {
        self.steps()[self.step_index]
    }

    /// 1-based position for "Step N of M" headers.
    pub fn step_number(&self) -> usize {
        self.step_index + 1
    }

    pub fn step_count(&self) -> usize {
        self.steps().len()
    }

    pub fn record(&self) -> &EnrollmentRecord {
        self.store.record()
    }

    /// Applies a field mutation to the underlying store.
    pub fn apply(&mut self, command: FieldCommand) {
        self.store.apply(command);
    }

    /// Validates the current step and moves forward when the gate is open.
    ///
    /// Saturates on the final step: a passing validation there reports
    /// `Advanced` without moving.
    pub fn advance(&mut self) -> AdvanceOutcome {
        let missing = missing_required_fields(self.current_step(), self.store.record());
        if !missing.is_empty() {
            return AdvanceOutcome::Refused { missing };
        }

        if self.step_index + 1 < self.steps().len() {
            self.step_index += 1;
        }
        AdvanceOutcome::Advanced {
            step: self.current_step(),
        }
    }

    /// Moves one step back, saturating at the first step. Never validates.
    pub fn retreat(&mut self) -> Step {
        self.step_index = self.step_index.saturating_sub(1);
        self.current_step()
    }

    /// Hands the completed record to `sink`.
    ///
    /// # Contract
    /// - Only callable on the final step; re-validates that step first.
    /// - On acceptance, resets the store, returns to the first step and
    ///   yields a receipt.
    /// - On refusal or rejection, the step index and record are untouched so
    ///   the user can correct and retry; the sink's reason is passed through
    ///   verbatim.
    pub fn submit<S>(&mut self, sink: &mut S) -> Result<SubmitReceipt, WizardError>
    where
        S: EnrollmentSink + ?Sized,
    {
        if self.step_index + 1 != self.steps().len() {
            return Err(WizardError::NotAtFinalStep {
                current: self.current_step(),
            });
        }

        let missing = missing_required_fields(self.current_step(), self.store.record());
        if !missing.is_empty() {
            return Err(WizardError::Refused { missing });
        }

        match sink.accept(self.store.record()) {
            Ok(child_id) => {
                info!("event=enrollment_submitted module=core status=ok child_id={child_id}");
                let enrolled_on = self.store.today();
                self.store.reset();
                self.step_index = 0;
                Ok(SubmitReceipt {
                    child_id,
                    enrolled_on,
                })
            }
            Err(rejection) => {
                warn!(
                    "event=enrollment_rejected module=core status=error reason={}",
                    rejection.reason
                );
                Err(WizardError::Rejected {
                    reason: rejection.reason,
                })
            }
        }
    }
}
