//! Per-step required-field rules.
//!
//! # Responsibility
//! - Declare which fields each wizard step requires.
//! - Report the exact labels of missing fields for inline display.
//!
//! # Invariants
//! - Checklist and free-text steps require nothing; they are informational.
//! - Labels are stable identifiers (`section.field`), safe to match on.

use crate::model::record::EnrollmentRecord;
use crate::wizard::session::Step;

/// Collects the labels of required fields the record leaves empty at `step`.
///
/// An empty result means the step gate is open. Labels name the section and
/// field (`mother.phone`), in the order the form presents them.
pub fn missing_required_fields(step: Step, record: &EnrollmentRecord) -> Vec<&'static str> {
    let mut missing = Vec::new();

    match step {
        Step::ChildIdentity => {
            push_if_blank(&mut missing, "child.name", &record.child.name);
            push_if_blank(
                &mut missing,
                "child.date_of_birth",
                &record.child.date_of_birth,
            );
            if record.child.gender.is_none() {
                missing.push("child.gender");
            }
        }
        Step::Guardians => {
            push_if_blank(&mut missing, "father.name", &record.father.name);
            push_if_blank(&mut missing, "father.phone", &record.father.phone);
            push_if_blank(&mut missing, "mother.name", &record.mother.name);
            push_if_blank(&mut missing, "mother.phone", &record.mother.phone);
        }
        Step::EmergencyContact => {
            push_if_blank(&mut missing, "emergency.name", &record.emergency.name);
            push_if_blank(&mut missing, "emergency.phone", &record.emergency.phone);
        }
        // Checklists are informational and health notes are free text; the
        // enrollment-status step carries defaults already.
        Step::Documents | Step::ScheduleOptions | Step::HealthNotes | Step::EnrollmentStatus => {}
    }

    missing
}

fn push_if_blank(missing: &mut Vec<&'static str>, label: &'static str, value: &str) {
    if value.trim().is_empty() {
        missing.push(label);
    }
}

#[cfg(test)]
mod tests {
    use super::missing_required_fields;
    use crate::model::record::{EnrollmentRecord, Gender};
    use crate::wizard::session::Step;

    #[test]
    fn child_identity_reports_exactly_the_empty_fields() {
        let mut record = EnrollmentRecord::empty();
        assert_eq!(
            missing_required_fields(Step::ChildIdentity, &record),
            vec!["child.name", "child.date_of_birth", "child.gender"]
        );

        record.child.name = "Emma Martin".to_string();
        record.child.gender = Some(Gender::Girl);
        assert_eq!(
            missing_required_fields(Step::ChildIdentity, &record),
            vec!["child.date_of_birth"]
        );

        record.child.date_of_birth = "2022-03-15".to_string();
        assert!(missing_required_fields(Step::ChildIdentity, &record).is_empty());
    }

    #[test]
    fn whitespace_only_values_count_as_missing() {
        let mut record = EnrollmentRecord::empty();
        record.emergency.name = "   ".to_string();
        record.emergency.phone = "06 11 22 33 44".to_string();

        assert_eq!(
            missing_required_fields(Step::EmergencyContact, &record),
            vec!["emergency.name"]
        );
    }

    #[test]
    fn informational_steps_require_nothing() {
        let record = EnrollmentRecord::empty();
        for step in [
            Step::Documents,
            Step::ScheduleOptions,
            Step::HealthNotes,
            Step::EnrollmentStatus,
        ] {
            assert!(missing_required_fields(step, &record).is_empty());
        }
    }

    #[test]
    fn guardians_step_names_each_missing_guardian_field() {
        let mut record = EnrollmentRecord::empty();
        record.father.name = "John Thompson".to_string();
        record.father.phone = "(555) 987-6543".to_string();
        record.mother.name = "Sarah Thompson".to_string();

        assert_eq!(
            missing_required_fields(Step::Guardians, &record),
            vec!["mother.phone"]
        );
    }
}
