//! Enrollment record model.
//!
//! # Responsibility
//! - Define the canonical record built step by step by the wizard.
//! - Provide the empty-record baseline used by `reset` and new sessions.
//!
//! # Invariants
//! - `child.age` and `child.level` hold derived values only; the form layer
//!   recomputes them whenever `child.date_of_birth` changes.
//! - A record carries no identity; ids exist only on directory entries.

use crate::model::checklist::{Checklist, DocumentKind, ScheduleKind};
use serde::{Deserialize, Serialize};

/// Pedagogical age group, derived solely from the child's age in years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    /// Toute petite section, age 2.
    Tps,
    /// Petite section, age 3.
    Ps,
    /// Moyenne section, age 4.
    Ms,
    /// Grande section, age 5.
    Gs,
}

impl Level {
    /// Every level, youngest first.
    pub const ALL: [Level; 4] = [Level::Tps, Level::Ps, Level::Ms, Level::Gs];

    /// Maps completed years of age to a level.
    ///
    /// Ages outside 2..=5 have no level; the school does not take younger
    /// children and older ones move on to primary school.
    pub fn from_age_years(years: i32) -> Option<Level> {
        match years {
            2 => Some(Level::Tps),
            3 => Some(Level::Ps),
            4 => Some(Level::Ms),
            5 => Some(Level::Gs),
            _ => None,
        }
    }

    /// Short display label used in lists and profiles.
    pub fn label(self) -> &'static str {
        match self {
            Level::Tps => "TPS",
            Level::Ps => "PS",
            Level::Ms => "MS",
            Level::Gs => "GS",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Boy,
    Girl,
}

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Gender::Boy => "Boy",
            Gender::Girl => "Girl",
        }
    }
}

/// Administrative state of an accepted enrollment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrollmentStatus {
    Active,
    Inactive,
    #[default]
    Pending,
}

impl EnrollmentStatus {
    pub fn label(self) -> &'static str {
        match self {
            EnrollmentStatus::Active => "Active",
            EnrollmentStatus::Inactive => "Inactive",
            EnrollmentStatus::Pending => "Pending",
        }
    }
}

/// Which guardian sub-record a mutation addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardianRole {
    Father,
    Mother,
}

impl GuardianRole {
    pub fn label(self) -> &'static str {
        match self {
            GuardianRole::Father => "father",
            GuardianRole::Mother => "mother",
        }
    }
}

/// Child identity section.
///
/// `date_of_birth` keeps the raw text the form field holds (ISO `YYYY-MM-DD`
/// when well-formed); derivation parses it and leaves `age`/`level` empty
/// when it cannot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChildIdentity {
    pub name: String,
    pub date_of_birth: String,
    /// Derived display, e.g. `"4y 3m"`. Empty when underivable.
    pub age: String,
    /// Derived group. `None` when the age has no level.
    pub level: Option<Level>,
    pub gender: Option<Gender>,
}

/// Parent/guardian sub-record. Father and mother share this shape.
///
/// `email`, `occupation` and `address` are optional-by-emptiness; only name
/// and phone are ever required by the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Guardian {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub occupation: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HealthNotes {
    pub allergies: String,
    pub medications: String,
    pub dietary_restrictions: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
    pub relationship: String,
}

/// Enrollment administration section, edited only in the edit flow.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EnrollmentInfo {
    pub start_date: String,
    pub status: EnrollmentStatus,
}

/// The whole record built across the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentRecord {
    pub child: ChildIdentity,
    pub father: Guardian,
    pub mother: Guardian,
    pub documents: Checklist<DocumentKind>,
    pub schedule: Checklist<ScheduleKind>,
    pub health: HealthNotes,
    pub emergency: EmergencyContact,
    pub enrollment: EnrollmentInfo,
}

impl EnrollmentRecord {
    /// Creates the empty baseline record every fresh session starts from.
    pub fn empty() -> Self {
        Self {
            child: ChildIdentity::default(),
            father: Guardian::default(),
            mother: Guardian::default(),
            documents: Checklist::new(),
            schedule: Checklist::new(),
            health: HealthNotes::default(),
            emergency: EmergencyContact::default(),
            enrollment: EnrollmentInfo::default(),
        }
    }

    /// Borrows one guardian sub-record by role.
    pub fn guardian(&self, role: GuardianRole) -> &Guardian {
        match role {
            GuardianRole::Father => &self.father,
            GuardianRole::Mother => &self.mother,
        }
    }

    /// Mutably borrows one guardian sub-record by role.
    pub fn guardian_mut(&mut self, role: GuardianRole) -> &mut Guardian {
        match role {
            GuardianRole::Father => &mut self.father,
            GuardianRole::Mother => &mut self.mother,
        }
    }
}

impl Default for EnrollmentRecord {
    fn default() -> Self {
        Self::empty()
    }
}
