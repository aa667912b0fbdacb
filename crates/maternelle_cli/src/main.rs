//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `maternelle_core` linkage with a deterministic scripted demo.
//! - Seed the demo roster, run one full enrollment, print the result.

use chrono::{Datelike, Local};
use maternelle_core::{
    AdvanceOutcome, ChecklistKind, DocumentKind, EmergencyField, EnrollmentService, FieldCommand,
    Gender, GuardianField, GuardianRole, InMemoryChildDirectory, RosterService,
};

fn main() {
    println!("maternelle_core version={}", maternelle_core::core_version());

    let today = Local::now().date_naive();
    let mut directory = InMemoryChildDirectory::with_seed_roster(today);

    let mut enrollment = EnrollmentService::new(&mut directory);
    let mut session = enrollment.begin_enrollment_on(today);

    session.apply(FieldCommand::SetChildName("Lucas Dubois".to_string()));
    session.apply(FieldCommand::SetDateOfBirth(
        today
            .with_year(today.year() - 3)
            .unwrap_or(today)
            .format("%Y-%m-%d")
            .to_string(),
    ));
    session.apply(FieldCommand::SetGender(Some(Gender::Boy)));
    session.apply(FieldCommand::SetGuardianField(
        GuardianRole::Father,
        GuardianField::Name,
        "Pierre Dubois".to_string(),
    ));
    session.apply(FieldCommand::SetGuardianField(
        GuardianRole::Father,
        GuardianField::Phone,
        "06 98 76 54 32".to_string(),
    ));
    session.apply(FieldCommand::SetGuardianField(
        GuardianRole::Mother,
        GuardianField::Name,
        "Marie Dubois".to_string(),
    ));
    session.apply(FieldCommand::SetGuardianField(
        GuardianRole::Mother,
        GuardianField::Phone,
        "06 12 34 56 78".to_string(),
    ));
    session.apply(FieldCommand::SetEmergencyField(
        EmergencyField::Name,
        "Claire Dubois".to_string(),
    ));
    session.apply(FieldCommand::SetEmergencyField(
        EmergencyField::Phone,
        "06 11 22 33 44".to_string(),
    ));

    while session.step_number() < session.step_count() {
        match session.advance() {
            AdvanceOutcome::Advanced { step } => {
                println!(
                    "step {}/{}: {}",
                    session.step_number(),
                    session.step_count(),
                    step.title()
                );
            }
            AdvanceOutcome::Refused { missing } => {
                eprintln!("enrollment blocked, missing: {}", missing.join(", "));
                return;
            }
        }
    }

    match enrollment.submit_session(&mut session) {
        Ok(receipt) => println!(
            "enrolled child_id={} on {}",
            receipt.child_id, receipt.enrolled_on
        ),
        Err(err) => {
            eprintln!("enrollment failed: {err}");
            return;
        }
    }

    let roster = RosterService::new(&directory);
    match roster.list() {
        Ok(entries) => {
            println!("roster ({} children):", entries.len());
            for entry in entries {
                println!(
                    "  {:<16} {:>6} {:<3} mother={} father={}",
                    entry.name,
                    entry.age,
                    entry.level.map(|level| level.label()).unwrap_or("-"),
                    entry.mother_name,
                    entry.father_name
                );
            }
        }
        Err(err) => eprintln!("roster listing failed: {err}"),
    }

    println!("document kinds tracked per child:");
    for kind in DocumentKind::ALL {
        println!("  - {}", kind.label());
    }
}
