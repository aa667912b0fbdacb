use maternelle_core::{
    AdvanceOutcome, ChildDirectory, ChildId, DirectoryEnrollmentSink, DirectoryError,
    EmergencyField, EnrollmentRecord, EnrollmentService, EnrollmentSink, FieldCommand, Gender,
    GuardianField, GuardianRole, InMemoryChildDirectory, Step, SubmitRejection, WizardError,
    WizardFlow, WizardSession,
};
use chrono::NaiveDate;
use uuid::Uuid;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 27).expect("valid date")
}

fn fill_required_fields(session: &mut WizardSession, date_of_birth: &str) {
    session.apply(FieldCommand::SetChildName("Emma Martin".to_string()));
    session.apply(FieldCommand::SetDateOfBirth(date_of_birth.to_string()));
    session.apply(FieldCommand::SetGender(Some(Gender::Girl)));
    session.apply(FieldCommand::SetGuardianField(
        GuardianRole::Father,
        GuardianField::Name,
        "Paul Martin".to_string(),
    ));
    session.apply(FieldCommand::SetGuardianField(
        GuardianRole::Father,
        GuardianField::Phone,
        "06 11 22 33 44".to_string(),
    ));
    session.apply(FieldCommand::SetGuardianField(
        GuardianRole::Mother,
        GuardianField::Name,
        "Sophie Martin".to_string(),
    ));
    session.apply(FieldCommand::SetGuardianField(
        GuardianRole::Mother,
        GuardianField::Phone,
        "06 12 34 56 78".to_string(),
    ));
    session.apply(FieldCommand::SetEmergencyField(
        EmergencyField::Name,
        "Jean Martin".to_string(),
    ));
    session.apply(FieldCommand::SetEmergencyField(
        EmergencyField::Phone,
        "06 99 88 77 66".to_string(),
    ));
}

/// Sink that refuses every record with a fixed reason.
struct RejectingSink {
    reason: &'static str,
}

impl EnrollmentSink for RejectingSink {
    fn accept(&mut self, _record: &EnrollmentRecord) -> Result<ChildId, SubmitRejection> {
        Err(SubmitRejection::new(self.reason))
    }
}

#[test]
fn advance_at_step_one_reports_exactly_the_empty_fields() {
    let mut session = WizardSession::new_enrollment_on(today());

    let outcome = session.advance();
    assert_eq!(
        outcome,
        AdvanceOutcome::Refused {
            missing: vec!["child.name", "child.date_of_birth", "child.gender"]
        }
    );
    assert_eq!(session.step_number(), 1);

    session.apply(FieldCommand::SetChildName("Emma Martin".to_string()));
    session.apply(FieldCommand::SetGender(Some(Gender::Girl)));
    let outcome = session.advance();
    assert_eq!(
        outcome,
        AdvanceOutcome::Refused {
            missing: vec!["child.date_of_birth"]
        }
    );

    session.apply(FieldCommand::SetDateOfBirth("2022-03-15".to_string()));
    assert_eq!(
        session.advance(),
        AdvanceOutcome::Advanced {
            step: Step::Guardians
        }
    );
    assert_eq!(session.step_number(), 2);
}

#[test]
fn retreat_never_validates_and_saturates_at_step_one() {
    let mut session = WizardSession::new_enrollment_on(today());

    // Step 1, nothing filled: retreating is a no-op, not an error.
    assert_eq!(session.retreat(), Step::ChildIdentity);
    assert_eq!(session.step_number(), 1);

    session.apply(FieldCommand::SetChildName("Emma Martin".to_string()));
    session.apply(FieldCommand::SetDateOfBirth("2022-03-15".to_string()));
    session.apply(FieldCommand::SetGender(Some(Gender::Girl)));
    session.advance();
    assert_eq!(session.step_number(), 2);

    // Clearing a step-1 required field must not block going back.
    session.apply(FieldCommand::SetChildName(String::new()));
    assert_eq!(session.retreat(), Step::ChildIdentity);
    assert_eq!(session.step_number(), 1);
}

#[test]
fn guardians_step_refusal_names_the_missing_phone_and_retry_succeeds() {
    let mut session = WizardSession::new_enrollment_on(today());
    fill_required_fields(&mut session, "2022-03-15");
    session.apply(FieldCommand::SetGuardianField(
        GuardianRole::Mother,
        GuardianField::Phone,
        String::new(),
    ));

    session.advance();
    assert_eq!(session.current_step(), Step::Guardians);

    let outcome = session.advance();
    assert_eq!(
        outcome,
        AdvanceOutcome::Refused {
            missing: vec!["mother.phone"]
        }
    );
    assert_eq!(session.step_number(), 2);

    session.apply(FieldCommand::SetGuardianField(
        GuardianRole::Mother,
        GuardianField::Phone,
        "06 12 34 56 78".to_string(),
    ));
    assert_eq!(
        session.advance(),
        AdvanceOutcome::Advanced {
            step: Step::Documents
        }
    );
}

#[test]
fn full_enrollment_hands_off_untouched_checklists_and_resets() {
    let mut directory = InMemoryChildDirectory::new();
    let mut session = WizardSession::new_enrollment_on(today());

    // Born exactly four years before today.
    fill_required_fields(&mut session, "2022-08-27");
    assert_eq!(session.record().child.age, "4y 0m");
    assert_eq!(
        session.record().child.level.map(|level| level.label()),
        Some("MS")
    );

    for expected in 2..=6 {
        let outcome = session.advance();
        assert!(
            matches!(outcome, AdvanceOutcome::Advanced { .. }),
            "boundary before step {expected} should open"
        );
        assert_eq!(session.step_number(), expected);
    }

    let receipt = {
        let mut sink = DirectoryEnrollmentSink::new(&mut directory);
        session.submit(&mut sink).expect("submission should be accepted")
    };
    assert_eq!(receipt.enrolled_on, today());

    let stored = directory
        .get_child(receipt.child_id)
        .expect("lookup cannot fail")
        .expect("accepted child should be stored");
    assert_eq!(stored.record.child.name, "Emma Martin");
    assert!(stored.record.documents.is_empty_selection());
    assert!(stored.record.schedule.is_empty_selection());

    // Acceptance resets the session for the next family.
    assert_eq!(session.step_number(), 1);
    assert_eq!(session.record(), &EnrollmentRecord::empty());
}

#[test]
fn submit_is_refused_before_the_final_step() {
    let mut directory = InMemoryChildDirectory::new();
    let mut session = WizardSession::new_enrollment_on(today());
    fill_required_fields(&mut session, "2022-03-15");

    let mut sink = DirectoryEnrollmentSink::new(&mut directory);
    let err = session.submit(&mut sink).expect_err("not on the final step");
    assert_eq!(
        err,
        WizardError::NotAtFinalStep {
            current: Step::ChildIdentity
        }
    );
    assert!(directory.is_empty());
}

#[test]
fn sink_rejection_preserves_state_and_surfaces_the_reason_verbatim() {
    let mut session = WizardSession::new_enrollment_on(today());
    fill_required_fields(&mut session, "2022-03-15");
    for _ in 0..5 {
        session.advance();
    }
    assert_eq!(session.step_number(), 6);

    let mut rejecting = RejectingSink {
        reason: "registry temporarily unavailable",
    };
    let err = session
        .submit(&mut rejecting)
        .expect_err("sink rejects everything");
    assert_eq!(
        err,
        WizardError::Rejected {
            reason: "registry temporarily unavailable".to_string()
        }
    );

    // Entered data and position survive for a retry.
    assert_eq!(session.step_number(), 6);
    assert_eq!(session.record().child.name, "Emma Martin");

    let mut directory = InMemoryChildDirectory::new();
    let mut sink = DirectoryEnrollmentSink::new(&mut directory);
    session.submit(&mut sink).expect("retry should be accepted");
    assert_eq!(directory.len(), 1);
}

#[test]
fn advance_saturates_on_the_final_step() {
    let mut session = WizardSession::new_enrollment_on(today());
    fill_required_fields(&mut session, "2022-03-15");
    for _ in 0..5 {
        session.advance();
    }
    assert_eq!(session.step_number(), 6);

    assert_eq!(
        session.advance(),
        AdvanceOutcome::Advanced {
            step: Step::EmergencyContact
        }
    );
    assert_eq!(session.step_number(), 6);
}

#[test]
fn edit_flow_has_seven_steps_and_prepopulates_the_record() {
    let mut directory = InMemoryChildDirectory::with_seed_roster(today());
    let first_id = directory
        .list_children()
        .expect("listing cannot fail")
        .first()
        .expect("seed roster is not empty")
        .id;

    let enrollment = EnrollmentService::new(&mut directory);
    let session = enrollment
        .begin_edit_on(first_id, today())
        .expect("seeded child should open");

    assert_eq!(session.flow(), WizardFlow::EditExisting);
    assert_eq!(session.step_count(), 7);
    assert_eq!(session.steps().last(), Some(&Step::EnrollmentStatus));
    assert_eq!(session.record().child.name, "Emma Thompson");
    assert_eq!(session.record().child.age, "4y 0m");
}

#[test]
fn edit_flow_refuses_to_open_for_an_unknown_child() {
    let mut directory = InMemoryChildDirectory::with_seed_roster(today());
    let unknown = Uuid::new_v4();

    let enrollment = EnrollmentService::new(&mut directory);
    let err = enrollment
        .begin_edit_on(unknown, today())
        .expect_err("unknown id must not open a session");
    assert_eq!(err, DirectoryError::NotFound(unknown));
}

#[test]
fn service_submission_enrolls_into_the_shared_directory() {
    let mut directory = InMemoryChildDirectory::new();
    let mut enrollment = EnrollmentService::new(&mut directory);
    let mut session = enrollment.begin_enrollment_on(today());

    fill_required_fields(&mut session, "2023-02-10");
    for _ in 0..5 {
        session.advance();
    }

    let receipt = enrollment
        .submit_session(&mut session)
        .expect("submission should be accepted");

    assert_eq!(directory.len(), 1);
    let stored = directory
        .get_child(receipt.child_id)
        .expect("lookup cannot fail")
        .expect("child should be stored");
    assert_eq!(
        stored.record.child.level.map(|level| level.label()),
        Some("PS")
    );
}
