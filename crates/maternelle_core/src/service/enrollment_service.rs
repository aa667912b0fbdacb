//! Enrollment session factory and submission wiring.
//!
//! # Responsibility
//! - Open new-enrollment and edit sessions against a child directory.
//! - Route session submissions into the directory-backed sink.
//!
//! # Invariants
//! - An edit session never opens over a missing record; the lookup failure
//!   is reported before any step exists.

use crate::repo::child_repo::{
    ChildDirectory, ChildId, DirectoryEnrollmentSink, DirectoryError,
};
use crate::wizard::session::{SubmitReceipt, WizardError, WizardSession};
use chrono::{Local, NaiveDate};
use log::info;

/// Facade opening wizard sessions over one directory.
pub struct EnrollmentService<'d, D: ChildDirectory> {
    directory: &'d mut D,
}

impl<'d, D: ChildDirectory> EnrollmentService<'d, D> {
    pub fn new(directory: &'d mut D) -> Self {
        Self { directory }
    }

    /// Opens a fresh six-step session anchored to the local date.
    pub fn begin_enrollment(&self) -> WizardSession {
        self.begin_enrollment_on(Local::now().date_naive())
    }

    /// Opens a fresh six-step session anchored to an explicit date.
    pub fn begin_enrollment_on(&self, today: NaiveDate) -> WizardSession {
        info!("event=wizard_opened module=core status=ok flow=new_enrollment");
        WizardSession::new_enrollment_on(today)
    }

    /// Opens a seven-step edit session for a stored child.
    ///
    /// # Errors
    /// Returns `DirectoryError::NotFound` when the id is unknown; no session
    /// is created in that case.
    pub fn begin_edit(&self, id: ChildId) -> Result<WizardSession, DirectoryError> {
        self.begin_edit_on(id, Local::now().date_naive())
    }

    /// Edit-session variant with an explicit anchor date.
    pub fn begin_edit_on(
        &self,
        id: ChildId,
        today: NaiveDate,
    ) -> Result<WizardSession, DirectoryError> {
        let stored = self
            .directory
            .get_child(id)?
            .ok_or(DirectoryError::NotFound(id))?;
        info!("event=wizard_opened module=core status=ok flow=edit_existing child_id={id}");
        Ok(WizardSession::edit(stored.record, today))
    }

    /// Submits a session into this service's directory.
    ///
    /// Acceptance enrolls the record as a new directory entry and resets the
    /// session; any failure leaves both session and directory untouched.
    pub fn submit_session(
        &mut self,
        session: &mut WizardSession,
    ) -> Result<SubmitReceipt, WizardError> {
        let mut sink = DirectoryEnrollmentSink::new(&mut *self.directory);
        session.submit(&mut sink)
    }
}
