//! Fixed-key boolean checklists.
//!
//! # Responsibility
//! - Define the document and schedule key sets as closed enums.
//! - Provide one order-preserving flag container for both sections.
//!
//! # Invariants
//! - Entry order always matches the kind's `ALL` declaration order.
//! - Setting one flag never touches any other key or the sibling section.

use serde::{Deserialize, Serialize};

/// Closed key set usable as a checklist section.
///
/// `ALL` is the configuration surface: consumers iterate it instead of
/// hard-coding key counts or membership.
pub trait ChecklistKind: Copy + Eq + 'static {
    /// Every key of this section, in display order.
    const ALL: &'static [Self];

    /// Human-readable label for rendering.
    fn label(self) -> &'static str;
}

/// Documents a family must provide during enrollment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Father's identity card.
    CinFather,
    /// Mother's identity card.
    CinMother,
    /// Vaccination booklet.
    Vaccination,
    /// Identity photos of the child.
    Photos,
    /// Birth certificate.
    BirthCert,
    /// Signed school rules.
    SignedRules,
}

impl ChecklistKind for DocumentKind {
    const ALL: &'static [Self] = &[
        Self::CinFather,
        Self::CinMother,
        Self::Vaccination,
        Self::Photos,
        Self::BirthCert,
        Self::SignedRules,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::CinFather => "Father's ID card",
            Self::CinMother => "Mother's ID card",
            Self::Vaccination => "Vaccination record",
            Self::Photos => "Identity photos",
            Self::BirthCert => "Birth certificate",
            Self::SignedRules => "Signed rules",
        }
    }
}

/// Optional care slots a family can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleKind {
    Morning,
    Lunch,
    Wednesday,
    Afternoon,
}

impl ChecklistKind for ScheduleKind {
    const ALL: &'static [Self] = &[Self::Morning, Self::Lunch, Self::Wednesday, Self::Afternoon];

    fn label(self) -> &'static str {
        match self {
            Self::Morning => "Morning care",
            Self::Lunch => "Lunch care",
            Self::Wednesday => "Wednesday care",
            Self::Afternoon => "Afternoon care",
        }
    }
}

/// One keyed flag inside a checklist section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistEntry<K: ChecklistKind> {
    pub kind: K,
    pub checked: bool,
}

/// Order-preserving flag container over a closed key set.
///
/// Constructed exhaustively from `K::ALL`; keys are never added or removed
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checklist<K: ChecklistKind> {
    entries: Vec<ChecklistEntry<K>>,
}

impl<K: ChecklistKind> Checklist<K> {
    /// Creates a checklist with every key unchecked.
    pub fn new() -> Self {
        Self {
            entries: K::ALL
                .iter()
                .map(|&kind| ChecklistEntry {
                    kind,
                    checked: false,
                })
                .collect(),
        }
    }

    /// Sets exactly one key's flag; all other keys keep their value.
    pub fn set(&mut self, kind: K, checked: bool) {
        for entry in &mut self.entries {
            if entry.kind == kind {
                entry.checked = checked;
            }
        }
    }

    /// Returns the flag for one key.
    pub fn is_checked(&self, kind: K) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.kind == kind && entry.checked)
    }

    /// Iterates entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ChecklistEntry<K>> {
        self.entries.iter()
    }

    /// Returns every checked key, in declaration order.
    pub fn checked_kinds(&self) -> Vec<K> {
        self.entries
            .iter()
            .filter(|entry| entry.checked)
            .map(|entry| entry.kind)
            .collect()
    }

    /// Returns whether no key is checked.
    pub fn is_empty_selection(&self) -> bool {
        self.entries.iter().all(|entry| !entry.checked)
    }

    /// Returns whether every key is checked.
    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(|entry| entry.checked)
    }
}

impl<K: ChecklistKind> Default for Checklist<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{Checklist, ChecklistKind, DocumentKind, ScheduleKind};

    #[test]
    fn new_checklist_covers_all_keys_in_order() {
        let documents: Checklist<DocumentKind> = Checklist::new();
        let kinds: Vec<DocumentKind> = documents.iter().map(|entry| entry.kind).collect();
        assert_eq!(kinds.as_slice(), DocumentKind::ALL);
        assert!(documents.is_empty_selection());
    }

    #[test]
    fn set_touches_exactly_one_key() {
        let mut schedule: Checklist<ScheduleKind> = Checklist::new();
        schedule.set(ScheduleKind::Wednesday, true);

        assert!(schedule.is_checked(ScheduleKind::Wednesday));
        for &kind in ScheduleKind::ALL {
            if kind != ScheduleKind::Wednesday {
                assert!(!schedule.is_checked(kind), "{} should stay unchecked", kind.label());
            }
        }
    }

    #[test]
    fn complete_requires_every_key() {
        let mut documents: Checklist<DocumentKind> = Checklist::new();
        for &kind in DocumentKind::ALL {
            documents.set(kind, true);
        }
        assert!(documents.is_complete());

        documents.set(DocumentKind::Photos, false);
        assert!(!documents.is_complete());
        assert_eq!(documents.checked_kinds().len(), DocumentKind::ALL.len() - 1);
    }
}
