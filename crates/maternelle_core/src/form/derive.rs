//! Derived age and level computation.
//!
//! # Responsibility
//! - Project a birth date onto a display age and a pedagogical level.
//!
//! # Invariants
//! - Pure: same `(date_of_birth, today)` input always yields the same
//!   projection; no clock access happens here.
//! - Underivable input yields the empty projection, never an error and never
//!   a half-filled one.

use crate::model::record::Level;
use chrono::{Datelike, NaiveDate};

/// Derived projection of a birth date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeProjection {
    /// Display age, e.g. `"4y 3m"`. Empty when underivable.
    pub age: String,
    /// Level for the completed-years age, if one exists.
    pub level: Option<Level>,
}

impl AgeProjection {
    /// Projection used for unparsable or impossible birth dates.
    pub fn empty() -> Self {
        Self {
            age: String::new(),
            level: None,
        }
    }
}

/// Parses the raw form value of a birth date field.
///
/// Accepts ISO `YYYY-MM-DD` with surrounding whitespace tolerated.
pub fn parse_birth_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Computes display age and level from a raw birth date value.
///
/// Age is completed years: the year difference, minus one when today's
/// month/day falls before the birth month/day. The months component is
/// `(today.month + 12 - birth.month) mod 12` — a calendar-month difference
/// that deliberately ignores day-of-month. Callers rely on this exact
/// formula; do not switch it to a day-based remainder.
///
/// Unparsable values and birth dates in the future yield the empty
/// projection.
pub fn age_and_level(date_of_birth: &str, today: NaiveDate) -> AgeProjection {
    let Some(birth) = parse_birth_date(date_of_birth) else {
        return AgeProjection::empty();
    };

    let mut years = today.year() - birth.year();
    let month_diff = today.month() as i32 - birth.month() as i32;
    if month_diff < 0 || (month_diff == 0 && today.day() < birth.day()) {
        years -= 1;
    }
    if years < 0 {
        return AgeProjection::empty();
    }

    let months = (today.month() as i32 + 12 - birth.month() as i32) % 12;

    AgeProjection {
        age: format!("{years}y {months}m"),
        level: Level::from_age_years(years),
    }
}
