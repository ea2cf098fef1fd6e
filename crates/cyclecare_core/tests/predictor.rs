use chrono::NaiveDate;
use cyclecare_core::config::MAX_CYCLES_AHEAD;
use cyclecare_core::model::mark::count_category;
use cyclecare_core::{
    compute_marks, CycleGoal, CycleProfile, MarkCategory, PeriodRecord, PredictError,
    ProfileValidationError,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn profile(cycle: i32, period: i32) -> CycleProfile {
    CycleProfile::new(date(2024, 1, 1), cycle, period, CycleGoal::General).unwrap()
}

fn record(start: NaiveDate, duration: i32) -> PeriodRecord {
    PeriodRecord::new(start, duration).unwrap()
}

#[test]
fn standard_cycle_places_ovulation_and_fertile_window() {
    let profile = profile(28, 5);
    let records = vec![record(date(2024, 1, 1), 5)];

    let marks = compute_marks(Some(&profile), &records, 1).unwrap();

    for day in 29..=31 {
        assert_eq!(marks[&date(2024, 1, day)].category, MarkCategory::PeriodPredicted);
    }
    for day in 1..=2 {
        assert_eq!(marks[&date(2024, 2, day)].category, MarkCategory::PeriodPredicted);
    }
    assert_eq!(marks[&date(2024, 2, 12)].category, MarkCategory::Ovulation);
    for day in [10, 11, 13, 14] {
        assert_eq!(marks[&date(2024, 2, day)].category, MarkCategory::Fertile);
    }
    assert!(!marks.contains_key(&date(2024, 2, 9)));
    assert!(!marks.contains_key(&date(2024, 2, 15)));
}

#[test]
fn actual_records_are_marked_inclusively() {
    let records = vec![record(date(2024, 1, 30), 4)];
    let marks = compute_marks(None, &records, 3).unwrap();

    let dates: Vec<NaiveDate> = marks.keys().copied().collect();
    assert_eq!(
        dates,
        vec![date(2024, 1, 30), date(2024, 1, 31), date(2024, 2, 1), date(2024, 2, 2)]
    );
    assert!(marks
        .values()
        .all(|mark| mark.category == MarkCategory::PeriodActual));
}

#[test]
fn predicted_count_is_cycles_times_period_length() {
    let profile = profile(30, 6);
    let records = vec![record(date(2024, 1, 1), 6)];

    let marks = compute_marks(Some(&profile), &records, 4).unwrap();
    assert_eq!(count_category(&marks, MarkCategory::PeriodPredicted), 4 * 6);
    assert_eq!(count_category(&marks, MarkCategory::Ovulation), 4);
    assert_eq!(count_category(&marks, MarkCategory::Fertile), 4 * 4);
}

#[test]
fn latest_record_anchors_predictions() {
    let profile = profile(28, 5);
    let records = vec![record(date(2024, 1, 27), 5), record(date(2024, 1, 1), 5)];

    let marks = compute_marks(Some(&profile), &records, 1).unwrap();

    for day in 27..=31 {
        assert_eq!(marks[&date(2024, 1, day)].category, MarkCategory::PeriodActual);
    }
    // 2024-01-27 + 28 days.
    assert_eq!(marks[&date(2024, 2, 24)].category, MarkCategory::PeriodPredicted);
    assert_eq!(marks[&date(2024, 2, 28)].category, MarkCategory::PeriodPredicted);
    assert_eq!(count_category(&marks, MarkCategory::PeriodPredicted), 5);
}

#[test]
fn overlapping_actual_dates_reduce_predicted_count() {
    let profile = profile(28, 5);
    // A long actual record reaching into the first predicted window.
    let records = vec![record(date(2024, 1, 1), 5), record(date(2023, 12, 31), 31)];

    let marks = compute_marks(Some(&profile), &records, 2).unwrap();

    // Anchor stays 2024-01-01 (latest start). Window 2024-01-29..=2024-02-02
    // collides with actual 2024-01-29..=2024-01-30.
    assert_eq!(marks[&date(2024, 1, 29)].category, MarkCategory::PeriodActual);
    assert_eq!(marks[&date(2024, 1, 30)].category, MarkCategory::PeriodActual);
    assert_eq!(count_category(&marks, MarkCategory::PeriodPredicted), 2 * 5 - 2);
}

#[test]
fn zero_cycles_ahead_marks_records_only() {
    let profile = profile(28, 5);
    let records = vec![record(date(2024, 1, 1), 5)];

    let marks = compute_marks(Some(&profile), &records, 0).unwrap();
    assert_eq!(marks.len(), 5);
    assert_eq!(count_category(&marks, MarkCategory::PeriodActual), 5);
}

#[test]
fn profile_without_records_predicts_nothing() {
    let profile = profile(28, 5);
    assert!(compute_marks(Some(&profile), &[], 3).unwrap().is_empty());
    assert!(compute_marks(None, &[], 3).unwrap().is_empty());
}

#[test]
fn compute_is_idempotent() {
    let profile = profile(26, 4);
    let records = vec![record(date(2024, 3, 5), 4), record(date(2024, 3, 31), 5)];

    let first = compute_marks(Some(&profile), &records, 3).unwrap();
    let second = compute_marks(Some(&profile), &records, 3).unwrap();
    assert_eq!(first, second);
}

#[test]
fn non_positive_lengths_are_rejected_without_marks() {
    let records = vec![record(date(2024, 1, 1), 5)];

    let mut zero_cycle = profile(28, 5);
    zero_cycle.cycle_length_days = 0;
    assert_eq!(
        compute_marks(Some(&zero_cycle), &records, 3).unwrap_err(),
        PredictError::InvalidProfile(ProfileValidationError::NonPositiveCycleLength(0))
    );

    let mut zero_period = profile(28, 5);
    zero_period.period_length_days = 0;
    assert_eq!(
        compute_marks(Some(&zero_period), &records, 0).unwrap_err(),
        PredictError::InvalidProfile(ProfileValidationError::NonPositivePeriodLength(0))
    );

    assert_eq!(
        CycleProfile::new(date(2024, 1, 1), -28, 5, CycleGoal::General).unwrap_err(),
        ProfileValidationError::NonPositiveCycleLength(-28)
    );
}

#[test]
fn invalid_record_is_rejected() {
    let mut bad = record(date(2024, 1, 1), 5);
    bad.duration_days = 0;
    assert_eq!(
        compute_marks(None, &[bad], 0).unwrap_err(),
        PredictError::InvalidProfile(ProfileValidationError::NonPositiveRecordDuration(0))
    );
}

#[test]
fn predicted_period_outranks_previous_fertile_window() {
    // Very short cycle: cycle 1 fertile window (start+2±2) reaches the start
    // of cycle 2. Precedence keeps the predicted period there.
    let profile = CycleProfile::new(date(2024, 1, 1), 4, 1, CycleGoal::General).unwrap();
    let records = vec![record(date(2024, 1, 1), 1)];

    let marks = compute_marks(Some(&profile), &records, 2).unwrap();
    assert_eq!(marks[&date(2024, 1, 9)].category, MarkCategory::PeriodPredicted);
    assert_eq!(count_category(&marks, MarkCategory::PeriodPredicted), 2);
}

#[test]
fn date_overflow_is_reported() {
    let profile = CycleProfile::new(NaiveDate::MAX, 28, 5, CycleGoal::General).unwrap();
    let records = vec![record(NaiveDate::MAX, 1)];

    let err = compute_marks(Some(&profile), &records, 1).unwrap_err();
    assert!(matches!(err, PredictError::DateOutOfRange { .. }));
}

#[test]
fn horizon_above_cap_is_rejected_without_marks() {
    let profile = profile(28, 5);
    let records = vec![record(date(2024, 1, 1), 5)];

    let marks = compute_marks(Some(&profile), &records, MAX_CYCLES_AHEAD).unwrap();
    assert_eq!(
        count_category(&marks, MarkCategory::PeriodPredicted),
        MAX_CYCLES_AHEAD as usize * 5
    );

    for cycles_ahead in [MAX_CYCLES_AHEAD + 1, 2_000_000, u32::MAX] {
        let err = compute_marks(Some(&profile), &records, cycles_ahead).unwrap_err();
        assert_eq!(
            err,
            PredictError::TooManyCycles {
                requested: cycles_ahead,
                max: MAX_CYCLES_AHEAD
            }
        );
    }
    // Checked before records are considered.
    assert!(compute_marks(None, &[], MAX_CYCLES_AHEAD + 1).is_err());
}

#[test]
fn marks_serialize_keyed_by_iso_date() {
    let profile = profile(28, 5);
    let records = vec![record(date(2024, 1, 1), 1)];
    let marks = compute_marks(Some(&profile), &records, 1).unwrap();

    let json = serde_json::to_value(&marks).unwrap();
    assert_eq!(json["2024-01-01"]["category"], "period_actual");
    assert_eq!(json["2024-01-29"]["category"], "period_predicted");
    assert_eq!(json["2024-01-29"]["style_hint"]["opacity_percent"], 50);
    assert_eq!(json["2024-02-12"]["category"], "ovulation");
    assert_eq!(json["2024-02-12"]["style_hint"]["color"], "#7c3aed");
}
