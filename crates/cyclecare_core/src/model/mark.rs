//! Calendar mark model consumed by the calendar renderer.
//!
//! # Responsibility
//! - Define the derived per-date annotation and its category precedence.
//!
//! # Invariants
//! - At most one category per date.
//! - A date is never overwritten by a lower-precedence category:
//!   `PeriodActual > PeriodPredicted > Ovulation > Fertile`.
//! - Marks are derived data and are never deserialized back into core.

use crate::config::palette::{style_for, StyleHint};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Date-keyed mark mapping, ordered by date.
///
/// Serializes as a JSON object keyed by ISO `YYYY-MM-DD`.
pub type MarkMap = BTreeMap<NaiveDate, DateMark>;

/// Category of one calendar mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkCategory {
    /// Day covered by a recorded period.
    PeriodActual,
    /// Day inside a predicted future period.
    PeriodPredicted,
    /// Predicted ovulation day.
    Ovulation,
    /// Day inside the predicted fertile window.
    Fertile,
}

impl MarkCategory {
    /// Precedence rank; higher wins when two categories land on one date.
    pub fn precedence(self) -> u8 {
        match self {
            Self::PeriodActual => 4,
            Self::PeriodPredicted => 3,
            Self::Ovulation => 2,
            Self::Fertile => 1,
        }
    }

    /// Stable wire string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PeriodActual => "period_actual",
            Self::PeriodPredicted => "period_predicted",
            Self::Ovulation => "ovulation",
            Self::Fertile => "fertile",
        }
    }
}

/// One calendar-date annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateMark {
    pub category: MarkCategory,
    pub style_hint: StyleHint,
}

impl DateMark {
    /// Builds a mark carrying the palette style for `category`.
    pub fn new(category: MarkCategory) -> Self {
        Self {
            category,
            style_hint: style_for(category),
        }
    }
}

/// Writes `category` at `date` unless an equal or higher category already
/// holds it. Returns whether the date was written.
///
/// This is rank-based, not first-writer-wins: a higher category replaces a
/// lower one already on the date. The two rules only disagree for cycles of
/// four days or less, where one cycle's fertile window overlaps the next
/// predicted period; there the period wins.
pub fn claim_date(marks: &mut MarkMap, date: NaiveDate, category: MarkCategory) -> bool {
    match marks.get(&date) {
        Some(existing) if existing.category.precedence() >= category.precedence() => false,
        _ => {
            marks.insert(date, DateMark::new(category));
            true
        }
    }
}

/// Counts marks of one category.
pub fn count_category(marks: &MarkMap, category: MarkCategory) -> usize {
    marks
        .values()
        .filter(|mark| mark.category == category)
        .count()
}
