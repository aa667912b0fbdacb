//! Child directory contracts and in-memory implementation.
//!
//! # Responsibility
//! - Provide the record-source and record-sink traits the wizard depends on.
//! - Ship an in-memory directory seeded with the demo roster.
//!
//! # Invariants
//! - Directory order is insertion order; listing never reorders.
//! - Inserting an existing id is rejected, never silently overwritten.

use crate::form::derive::age_and_level;
use crate::model::checklist::{DocumentKind, ScheduleKind};
use crate::model::record::{
    EnrollmentRecord, EnrollmentStatus, Gender, GuardianRole,
};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier assigned to a child once the directory accepts it.
pub type ChildId = Uuid;

pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Daily presence marker shown on the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    Absent,
}

/// One directory entry: an accepted record plus its identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredChild {
    pub id: ChildId,
    pub record: EnrollmentRecord,
    pub attendance: AttendanceStatus,
}

/// Directory-level error for lookups and mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    NotFound(ChildId),
    DuplicateId(ChildId),
}

impl Display for DirectoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "child not found: {id}"),
            Self::DuplicateId(id) => write!(f, "child id already present: {id}"),
        }
    }
}

impl Error for DirectoryError {}

/// Record source and roster storage contract.
pub trait ChildDirectory {
    fn insert_child(&mut self, child: StoredChild) -> DirectoryResult<ChildId>;
    fn get_child(&self, id: ChildId) -> DirectoryResult<Option<StoredChild>>;
    fn list_children(&self) -> DirectoryResult<Vec<StoredChild>>;
    fn remove_child(&mut self, id: ChildId) -> DirectoryResult<()>;
}

/// Rejection reason returned by a record sink, surfaced verbatim to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRejection {
    pub reason: String,
}

impl SubmitRejection {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Display for SubmitRejection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason)
    }
}

impl Error for SubmitRejection {}

/// Record sink contract: accepts a completed record and assigns identity.
pub trait EnrollmentSink {
    fn accept(&mut self, record: &EnrollmentRecord) -> Result<ChildId, SubmitRejection>;
}

/// Sink that enrolls accepted records into a child directory.
pub struct DirectoryEnrollmentSink<'d, D: ChildDirectory> {
    directory: &'d mut D,
}

impl<'d, D: ChildDirectory> DirectoryEnrollmentSink<'d, D> {
    pub fn new(directory: &'d mut D) -> Self {
        Self { directory }
    }
}

impl<D: ChildDirectory> EnrollmentSink for DirectoryEnrollmentSink<'_, D> {
    fn accept(&mut self, record: &EnrollmentRecord) -> Result<ChildId, SubmitRejection> {
        let child = StoredChild {
            id: Uuid::new_v4(),
            record: record.clone(),
            attendance: AttendanceStatus::Present,
        };
        self.directory
            .insert_child(child)
            .map_err(|err| SubmitRejection::new(err.to_string()))
    }
}

/// In-memory directory standing in for real record storage.
///
/// Keeps insertion order so listings are deterministic.
#[derive(Debug, Clone, Default)]
pub struct InMemoryChildDirectory {
    children: Vec<StoredChild>,
}

impl InMemoryChildDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory pre-loaded with the demo roster.
    ///
    /// Birth dates are placed relative to `today` so every seeded child
    /// lands in its intended level regardless of the calendar date.
    pub fn with_seed_roster(today: NaiveDate) -> Self {
        let mut directory = Self::new();
        for seed in seed_roster(today) {
            // Seed ids are freshly generated; duplicates cannot occur here.
            let _ = directory.insert_child(seed);
        }
        directory
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl ChildDirectory for InMemoryChildDirectory {
    fn insert_child(&mut self, child: StoredChild) -> DirectoryResult<ChildId> {
        if self.children.iter().any(|existing| existing.id == child.id) {
            return Err(DirectoryError::DuplicateId(child.id));
        }
        let id = child.id;
        self.children.push(child);
        Ok(id)
    }

    fn get_child(&self, id: ChildId) -> DirectoryResult<Option<StoredChild>> {
        Ok(self
            .children
            .iter()
            .find(|child| child.id == id)
            .cloned())
    }

    fn list_children(&self) -> DirectoryResult<Vec<StoredChild>> {
        Ok(self.children.clone())
    }

    fn remove_child(&mut self, id: ChildId) -> DirectoryResult<()> {
        let before = self.children.len();
        self.children.retain(|child| child.id != id);
        if self.children.len() == before {
            return Err(DirectoryError::NotFound(id));
        }
        Ok(())
    }
}

struct SeedChild {
    name: &'static str,
    age_years: i32,
    gender: Gender,
    mother: (&'static str, &'static str),
    father: (&'static str, &'static str),
    attendance: AttendanceStatus,
    documents: &'static [DocumentKind],
    schedule: &'static [ScheduleKind],
}

const SEED_CHILDREN: &[SeedChild] = &[
    SeedChild {
        name: "Emma Thompson",
        age_years: 4,
        gender: Gender::Girl,
        mother: ("Sarah Thompson", "(555) 123-4567"),
        father: ("John Thompson", "(555) 987-6543"),
        attendance: AttendanceStatus::Present,
        documents: &[
            DocumentKind::CinFather,
            DocumentKind::CinMother,
            DocumentKind::Vaccination,
            DocumentKind::SignedRules,
        ],
        schedule: &[ScheduleKind::Morning, ScheduleKind::Wednesday],
    },
    SeedChild {
        name: "Liam Johnson",
        age_years: 5,
        gender: Gender::Boy,
        mother: ("Emily Johnson", "(555) 234-5678"),
        father: ("Michael Johnson", "(555) 876-5432"),
        attendance: AttendanceStatus::Present,
        documents: &[DocumentKind::CinFather, DocumentKind::BirthCert],
        schedule: &[ScheduleKind::Lunch, ScheduleKind::Afternoon],
    },
    SeedChild {
        name: "Sophia Davis",
        age_years: 3,
        gender: Gender::Girl,
        mother: ("Jessica Davis", "(555) 345-6789"),
        father: ("Robert Davis", "(555) 765-4321"),
        attendance: AttendanceStatus::Absent,
        documents: &[
            DocumentKind::CinMother,
            DocumentKind::Vaccination,
            DocumentKind::BirthCert,
            DocumentKind::SignedRules,
        ],
        schedule: &[ScheduleKind::Morning, ScheduleKind::Afternoon],
    },
    SeedChild {
        name: "Noah Wilson",
        age_years: 4,
        gender: Gender::Boy,
        mother: ("Lisa Wilson", "(555) 456-7890"),
        father: ("David Wilson", "(555) 654-3210"),
        attendance: AttendanceStatus::Present,
        documents: &[DocumentKind::CinFather, DocumentKind::CinMother],
        schedule: &[ScheduleKind::Wednesday],
    },
    SeedChild {
        name: "Olivia Brown",
        age_years: 2,
        gender: Gender::Girl,
        mother: ("Amanda Brown", "(555) 567-8901"),
        father: ("James Brown", "(555) 543-2109"),
        attendance: AttendanceStatus::Present,
        documents: &[
            DocumentKind::Vaccination,
            DocumentKind::BirthCert,
            DocumentKind::SignedRules,
        ],
        schedule: &[ScheduleKind::Lunch],
    },
];

fn seed_roster(today: NaiveDate) -> Vec<StoredChild> {
    SEED_CHILDREN
        .iter()
        .map(|seed| StoredChild {
            id: Uuid::new_v4(),
            record: seed_record(seed, today),
            attendance: seed.attendance,
        })
        .collect()
}

fn seed_record(seed: &SeedChild, today: NaiveDate) -> EnrollmentRecord {
    let mut record = EnrollmentRecord::empty();
    record.child.name = seed.name.to_string();
    record.child.gender = Some(seed.gender);
    record.child.date_of_birth = birth_date_years_ago(today, seed.age_years)
        .format("%Y-%m-%d")
        .to_string();

    let projection = age_and_level(&record.child.date_of_birth, today);
    record.child.age = projection.age;
    record.child.level = projection.level;

    let (mother_name, mother_phone) = seed.mother;
    let mother = record.guardian_mut(GuardianRole::Mother);
    mother.name = mother_name.to_string();
    mother.phone = mother_phone.to_string();

    let (father_name, father_phone) = seed.father;
    let father = record.guardian_mut(GuardianRole::Father);
    father.name = father_name.to_string();
    father.phone = father_phone.to_string();

    for &kind in seed.documents {
        record.documents.set(kind, true);
    }
    for &kind in seed.schedule {
        record.schedule.set(kind, true);
    }

    record.enrollment.status = EnrollmentStatus::Active;
    record.enrollment.start_date = today.format("%Y-%m-%d").to_string();
    record
}

/// Same calendar day `years` ago, clamped to day 28 when that day does not
/// exist in the target month (Feb 29 birthdays).
fn birth_date_years_ago(today: NaiveDate, years: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(today.year() - years, today.month(), today.day())
        .or_else(|| NaiveDate::from_ymd_opt(today.year() - years, today.month(), 28))
        .expect("day 28 exists in every month")
}
