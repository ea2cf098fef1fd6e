//! Calendar mark computation.
//!
//! Marks are rebuilt from scratch on every call. Actual records are written
//! first, then each predicted cycle contributes its period window, ovulation
//! day and fertile window through `claim_date`, which enforces category
//! precedence regardless of write order.

use super::{ensure_cycles_ahead, shift_days, PredictResult, FERTILE_WINDOW_RADIUS_DAYS};
use crate::model::cycle::{CycleProfile, PeriodRecord};
use crate::model::mark::{claim_date, count_category, MarkCategory, MarkMap};
use chrono::NaiveDate;
use log::debug;
use std::time::Instant;

/// Dates of one predicted future cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredictedCycle {
    /// 1-based distance from the anchor cycle.
    pub index: u32,
    pub period_start: NaiveDate,
    /// Inclusive.
    pub period_end: NaiveDate,
    pub ovulation: NaiveDate,
    pub fertile_start: NaiveDate,
    /// Inclusive.
    pub fertile_end: NaiveDate,
}

/// Predicts `cycles_ahead` cycles following the period that started at
/// `anchor`.
///
/// Ovulation is the cycle midpoint (`cycle_length_days / 2`, truncated), the
/// fertile window spans two days either side of it.
pub fn predict_cycles(
    profile: &CycleProfile,
    anchor: NaiveDate,
    cycles_ahead: u32,
) -> PredictResult<Vec<PredictedCycle>> {
    ensure_cycles_ahead(cycles_ahead)?;
    profile.validate()?;
    let cycle_len = i64::from(profile.cycle_length_days);
    let period_len = i64::from(profile.period_length_days);

    (1..=cycles_ahead)
        .map(|index| {
            let period_start = shift_days(anchor, i64::from(index) * cycle_len)?;
            let ovulation = shift_days(period_start, cycle_len / 2)?;
            Ok(PredictedCycle {
                index,
                period_start,
                period_end: shift_days(period_start, period_len - 1)?,
                ovulation,
                fertile_start: shift_days(ovulation, -FERTILE_WINDOW_RADIUS_DAYS)?,
                fertile_end: shift_days(ovulation, FERTILE_WINDOW_RADIUS_DAYS)?,
            })
        })
        .collect()
}

/// Computes the complete mark mapping for a profile and its records.
///
/// - Without a profile only actual records are marked.
/// - Predictions are anchored on the latest record start date.
/// - `cycles_ahead == 0` marks actual records only.
///
/// # Errors
/// - `PredictError::InvalidProfile` when the profile or any record violates
///   its length invariants. No marks are produced in that case.
/// - `PredictError::DateOutOfRange` when a window leaves the calendar range.
/// - `PredictError::TooManyCycles` when `cycles_ahead` exceeds
///   `MAX_CYCLES_AHEAD`, even without a profile.
pub fn compute_marks(
    profile: Option<&CycleProfile>,
    records: &[PeriodRecord],
    cycles_ahead: u32,
) -> PredictResult<MarkMap> {
    let started_at = Instant::now();

    ensure_cycles_ahead(cycles_ahead)?;
    if let Some(profile) = profile {
        profile.validate()?;
    }
    for record in records {
        record.validate()?;
    }

    let mut marks = MarkMap::new();
    for record in records {
        let last_day = shift_days(record.start_date, i64::from(record.duration_days) - 1)?;
        claim_range(
            &mut marks,
            record.start_date,
            last_day,
            MarkCategory::PeriodActual,
        );
    }

    let anchor = records.iter().map(|record| record.start_date).max();
    if let (Some(profile), Some(anchor)) = (profile, anchor) {
        for cycle in predict_cycles(profile, anchor, cycles_ahead)? {
            claim_range(
                &mut marks,
                cycle.period_start,
                cycle.period_end,
                MarkCategory::PeriodPredicted,
            );
            claim_date(&mut marks, cycle.ovulation, MarkCategory::Ovulation);
            claim_range(
                &mut marks,
                cycle.fertile_start,
                cycle.fertile_end,
                MarkCategory::Fertile,
            );
        }
    }

    debug!(
        "event=marks_computed module=predict status=ok records={} cycles_ahead={} actual={} predicted={} marks={} duration_us={}",
        records.len(),
        cycles_ahead,
        count_category(&marks, MarkCategory::PeriodActual),
        count_category(&marks, MarkCategory::PeriodPredicted),
        marks.len(),
        started_at.elapsed().as_micros()
    );

    Ok(marks)
}

fn claim_range(marks: &mut MarkMap, first: NaiveDate, last: NaiveDate, category: MarkCategory) {
    for date in first.iter_days().take_while(|date| *date <= last) {
        claim_date(marks, date, category);
    }
}
