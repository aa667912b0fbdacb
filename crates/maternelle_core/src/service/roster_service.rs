//! Roster listing, search and statistics.
//!
//! # Responsibility
//! - Project directory entries into the summaries the children list shows.
//! - Filter by child or guardian name, case-insensitively.
//! - Aggregate the stat-card counters.
//!
//! # Invariants
//! - Listing order is deterministic: child name, case-insensitive.
//! - Search with an empty term is the full listing.

use crate::model::record::{GuardianRole, Level};
use crate::repo::child_repo::{AttendanceStatus, ChildDirectory, ChildId, DirectoryResult, StoredChild};
use regex::RegexBuilder;

/// One row of the children list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub id: ChildId,
    pub name: String,
    pub age: String,
    pub level: Option<Level>,
    pub mother_name: String,
    pub mother_phone: String,
    pub father_name: String,
    pub father_phone: String,
    pub attendance: AttendanceStatus,
}

/// Counters backing the roster stat cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterStats {
    pub total: usize,
    /// One counter per level, in `Level::ALL` order.
    pub level_counts: Vec<(Level, usize)>,
    pub present: usize,
    /// Children whose document checklist is not fully checked.
    pub incomplete_documents: usize,
}

/// Read-side facade over a child directory.
pub struct RosterService<'d, D: ChildDirectory> {
    directory: &'d D,
}

impl<'d, D: ChildDirectory> RosterService<'d, D> {
    pub fn new(directory: &'d D) -> Self {
        Self { directory }
    }

    /// Lists every child, sorted by name.
    pub fn list(&self) -> DirectoryResult<Vec<RosterEntry>> {
        let mut entries: Vec<RosterEntry> = self
            .directory
            .list_children()?
            .iter()
            .map(summarize)
            .collect();
        entries.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(entries)
    }

    /// Lists children whose name, or either guardian's name, contains `term`
    /// (case-insensitive). An empty or whitespace-only term lists everyone.
    pub fn search(&self, term: &str) -> DirectoryResult<Vec<RosterEntry>> {
        let trimmed = term.trim();
        if trimmed.is_empty() {
            return self.list();
        }

        // Escaped literal, so the pattern is always valid.
        let matcher = RegexBuilder::new(&regex::escape(trimmed))
            .case_insensitive(true)
            .build()
            .expect("escaped search term is a valid pattern");

        let mut entries: Vec<RosterEntry> = self
            .directory
            .list_children()?
            .iter()
            .filter(|child| {
                matcher.is_match(&child.record.child.name)
                    || matcher.is_match(&child.record.guardian(GuardianRole::Mother).name)
                    || matcher.is_match(&child.record.guardian(GuardianRole::Father).name)
            })
            .map(summarize)
            .collect();
        entries.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(entries)
    }

    /// Computes the stat-card counters over the whole roster.
    pub fn stats(&self) -> DirectoryResult<RosterStats> {
        let children = self.directory.list_children()?;

        let level_counts = Level::ALL
            .iter()
            .map(|&level| {
                let count = children
                    .iter()
                    .filter(|child| child.record.child.level == Some(level))
                    .count();
                (level, count)
            })
            .collect();

        Ok(RosterStats {
            total: children.len(),
            level_counts,
            present: children
                .iter()
                .filter(|child| child.attendance == AttendanceStatus::Present)
                .count(),
            incomplete_documents: children
                .iter()
                .filter(|child| !child.record.documents.is_complete())
                .count(),
        })
    }
}

fn summarize(child: &StoredChild) -> RosterEntry {
    let mother = child.record.guardian(GuardianRole::Mother);
    let father = child.record.guardian(GuardianRole::Father);
    RosterEntry {
        id: child.id,
        name: child.record.child.name.clone(),
        age: child.record.child.age.clone(),
        level: child.record.child.level,
        mother_name: mother.name.clone(),
        mother_phone: mother.phone.clone(),
        father_name: father.name.clone(),
        father_phone: father.phone.clone(),
        attendance: child.attendance,
    }
}
