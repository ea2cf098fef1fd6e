use chrono::NaiveDate;
use cyclecare_core::gamification::catalog::{HEALTH_CHECK_XP, PERIOD_RECORD_XP, VACCINATION_XP};
use cyclecare_core::health::{DoseOutcome, VaccineKind};
use cyclecare_core::{
    CalendarConfig, CycleForm, GamificationStore, MarkCategory, ServiceError, StatusLabel,
    TrackingService, XpLedger, XpSource,
};

#[derive(Default)]
struct RecordingLedger {
    awards: Vec<(XpSource, u32)>,
}

impl XpLedger for RecordingLedger {
    fn award(&mut self, source: XpSource, amount: u32, _description: &str) {
        self.awards.push((source, amount));
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn form(date: &str, cycle: &str, period: &str) -> CycleForm {
    CycleForm {
        last_period_start: date.to_string(),
        cycle_length_days: cycle.to_string(),
        period_length_days: period.to_string(),
        goal: String::new(),
    }
}

fn service() -> TrackingService<RecordingLedger> {
    TrackingService::new(CalendarConfig::default(), RecordingLedger::default())
}

#[test]
fn submit_form_records_period_and_predicts_three_cycles() {
    let mut service = service();

    let marks = service.submit_form(&form("2024-01-01", "28", "5")).unwrap();

    assert_eq!(service.records().len(), 1);
    assert_eq!(service.records()[0].duration_days, 5);
    assert_eq!(marks[&date(2024, 1, 1)].category, MarkCategory::PeriodActual);
    let predicted = marks
        .values()
        .filter(|mark| mark.category == MarkCategory::PeriodPredicted)
        .count();
    assert_eq!(predicted, 3 * 5);
    assert_eq!(
        service.ledger().awards,
        vec![(XpSource::PeriodRecord, PERIOD_RECORD_XP)]
    );
}

#[test]
fn rejected_submission_changes_nothing() {
    let mut service = service();
    service.submit_form(&form("2024-01-01", "28", "5")).unwrap();
    let marks_before = service.marks();

    let err = service.submit_form(&form("2024-02-01", "abc", "5")).unwrap_err();
    assert!(matches!(err, ServiceError::Input(_)));
    let err = service.submit_form(&form("2024-02-01", "28", "0")).unwrap_err();
    assert!(matches!(err, ServiceError::Input(_)));

    assert_eq!(service.records().len(), 1);
    assert_eq!(*service.marks(), *marks_before);
    assert_eq!(service.ledger().awards.len(), 1);
}

#[test]
fn snapshots_are_not_mutated_by_later_changes() {
    let mut service = service();
    service.submit_form(&form("2024-01-01", "28", "5")).unwrap();
    let first = service.marks();
    let first_len = first.len();

    service.add_record(date(2024, 1, 30), None).unwrap();

    assert_eq!(first.len(), first_len);
    assert!(!std::sync::Arc::ptr_eq(&first, &service.marks()));
    assert_eq!(
        service.marks()[&date(2024, 2, 3)].category,
        MarkCategory::PeriodActual
    );
}

#[test]
fn add_record_without_profile_uses_default_duration() {
    let mut service = service();
    service.add_record(date(2024, 5, 1), None).unwrap();

    let marks = service.marks();
    assert_eq!(marks.len(), 5);
    assert!(marks
        .values()
        .all(|mark| mark.category == MarkCategory::PeriodActual));
    assert!(service.ledger().awards.is_empty());
}

#[test]
fn add_record_rejects_non_positive_duration() {
    let mut service = service();
    let err = service.add_record(date(2024, 5, 1), Some(0)).unwrap_err();
    assert!(matches!(err, ServiceError::Input(_)));
    assert!(service.records().is_empty());
}

#[test]
fn records_stay_sorted_by_start_date() {
    let mut service = service();
    service.add_record(date(2024, 3, 1), Some(4)).unwrap();
    service.add_record(date(2024, 1, 1), Some(4)).unwrap();
    service.add_record(date(2024, 2, 1), Some(4)).unwrap();

    let starts: Vec<NaiveDate> = service.records().iter().map(|r| r.start_date).collect();
    assert_eq!(starts, vec![date(2024, 1, 1), date(2024, 2, 1), date(2024, 3, 1)]);
}

#[test]
fn zero_cycles_ahead_config_marks_records_only() {
    let config = CalendarConfig {
        cycles_ahead: 0,
        ..CalendarConfig::default()
    };
    let mut service = TrackingService::new(config, RecordingLedger::default());
    let marks = service.submit_form(&form("2024-01-01", "28", "5")).unwrap();
    assert_eq!(marks.len(), 5);
}

#[test]
fn status_follows_profile_summary() {
    let mut service = service();
    assert_eq!(service.status(date(2024, 1, 27)).unwrap(), None);

    service.submit_form(&form("2024-01-01", "28", "5")).unwrap();
    assert_eq!(
        service.status(date(2024, 1, 27)).unwrap(),
        Some(StatusLabel::PeriodApproaching { days: 2 })
    );
    assert_eq!(
        service.status(date(2024, 1, 5)).unwrap(),
        Some(StatusLabel::StablePhase)
    );
}

#[test]
fn quick_actions_and_vaccinations_award_xp() {
    let mut service = service();
    service.health_check();
    assert_eq!(
        service.record_vaccination_dose(VaccineKind::Flu),
        DoseOutcome::SeriesCompleted
    );
    assert_eq!(
        service.record_vaccination_dose(VaccineKind::Flu),
        DoseOutcome::AlreadyComplete
    );

    assert_eq!(
        service.ledger().awards,
        vec![
            (XpSource::HealthCheck, HEALTH_CHECK_XP),
            (XpSource::Vaccination, VACCINATION_XP),
        ]
    );

    service.reset_vaccination(VaccineKind::Flu);
    assert_eq!(service.vaccinations().progress(VaccineKind::Flu).doses, 0);
}

#[test]
fn manual_dose_edit_clamps_and_awards_no_xp() {
    let mut service = service();
    service.record_vaccination_dose(VaccineKind::Hpv);
    service.record_vaccination_dose(VaccineKind::Hpv);

    let progress = service.set_vaccination_doses(VaccineKind::Hpv, 1);
    assert_eq!(progress.doses, 1);
    assert!(!progress.is_completed());

    let progress = service.set_vaccination_doses(VaccineKind::Hpv, 10);
    assert_eq!(progress.doses, 3);
    assert!(progress.is_completed());
    assert_eq!(service.vaccinations().progress(VaccineKind::Hpv).doses, 3);

    // Only the two recorded doses earned XP.
    assert_eq!(service.ledger().awards.len(), 2);
}

#[test]
fn vaccination_award_uses_display_name() {
    let mut service = TrackingService::new(CalendarConfig::default(), GamificationStore::default());
    service.record_vaccination_dose(VaccineKind::Flu);

    let state = service.ledger().state();
    assert_eq!(state.xp_history[0].description, "독감 백신 접종 완료");
}

#[test]
fn gamification_store_accumulates_service_awards() {
    let mut service = TrackingService::new(CalendarConfig::default(), GamificationStore::default());
    service.submit_form(&form("2024-01-01", "28", "5")).unwrap();
    service.record_today();

    let state = service.ledger().state();
    assert_eq!(state.user.total_xp, 15);
    assert_eq!(state.xp_history.len(), 2);
    assert_eq!(state.xp_history[0].source, XpSource::SymptomRecord);
    assert_eq!(state.xp_history[1].source, XpSource::PeriodRecord);
}
