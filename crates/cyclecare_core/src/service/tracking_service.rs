//! Cycle tracking use-case service.
//!
//! # Responsibility
//! - Own the caller's profile and period records for one session.
//! - Recompute calendar marks on every input change.
//! - Notify the XP ledger for rewarded user actions.
//!
//! # Invariants
//! - Profile, records and marks are replaced as whole snapshots; a snapshot
//!   handed out earlier is never mutated.
//! - A failed submission leaves every snapshot unchanged and awards no XP.
//! - Records stay ordered by `start_date`.

use crate::config::CalendarConfig;
use crate::gamification::catalog::{
    HEALTH_CHECK_XP, PERIOD_RECORD_XP, SYMPTOM_RECORD_XP, VACCINATION_XP,
};
use crate::gamification::{XpLedger, XpSource};
use crate::health::vaccination::{DoseOutcome, DoseProgress, VaccinationChecklist, VaccineKind};
use crate::input::{CycleForm, InputError};
use crate::model::cycle::{CycleProfile, PeriodRecord, RecordId};
use crate::model::mark::MarkMap;
use crate::predict::{compute_marks, summarize_cycle, CycleSummary, PredictError, StatusLabel};
use chrono::NaiveDate;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors from tracking service operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Form input failed parsing or validation.
    Input(InputError),
    /// Profile or records could not be turned into marks.
    Predict(PredictError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input(err) => write!(f, "{err}"),
            Self::Predict(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Input(err) => Some(err),
            Self::Predict(err) => Some(err),
        }
    }
}

impl From<InputError> for ServiceError {
    fn from(value: InputError) -> Self {
        Self::Input(value)
    }
}

impl From<PredictError> for ServiceError {
    fn from(value: PredictError) -> Self {
        Self::Predict(value)
    }
}

/// Session state behind the calendar tab.
pub struct TrackingService<L: XpLedger> {
    config: CalendarConfig,
    profile: Option<Arc<CycleProfile>>,
    records: Arc<Vec<PeriodRecord>>,
    marks: Arc<MarkMap>,
    vaccinations: VaccinationChecklist,
    ledger: L,
}

impl<L: XpLedger> TrackingService<L> {
    /// Creates an empty session.
    pub fn new(config: CalendarConfig, ledger: L) -> Self {
        Self {
            config,
            profile: None,
            records: Arc::new(Vec::new()),
            marks: Arc::new(MarkMap::new()),
            vaccinations: VaccinationChecklist::new(),
            ledger,
        }
    }

    /// Parses and submits the cycle entry form.
    ///
    /// # Contract
    /// - Replaces the profile wholesale.
    /// - Appends a record starting at `last_period_start` with the profile's
    ///   period length.
    /// - Awards `period_record` XP once marks were recomputed successfully.
    pub fn submit_form(&mut self, form: &CycleForm) -> ServiceResult<Arc<MarkMap>> {
        let profile = match form.into_profile() {
            Ok(profile) => profile,
            Err(err) => {
                warn!(
                    "event=profile_submit module=service status=rejected error_code=invalid_input"
                );
                return Err(err.into());
            }
        };
        self.submit_profile(profile)
    }

    /// Submits an already validated profile. Same contract as `submit_form`.
    pub fn submit_profile(&mut self, profile: CycleProfile) -> ServiceResult<Arc<MarkMap>> {
        let record = PeriodRecord::from_profile(&profile).map_err(InputError::from)?;
        let records = with_record(&self.records, record);

        let marks = match compute_marks(Some(&profile), &records, self.config.cycles_ahead) {
            Ok(marks) => Arc::new(marks),
            Err(err) => {
                warn!(
                    "event=profile_submit module=service status=rejected error_code=predict_failed"
                );
                return Err(err.into());
            }
        };

        self.profile = Some(Arc::new(profile));
        self.records = Arc::new(records);
        self.marks = Arc::clone(&marks);
        info!(
            "event=profile_submit module=service status=ok records={} marks={}",
            self.records.len(),
            self.marks.len()
        );

        self.ledger
            .award(XpSource::PeriodRecord, PERIOD_RECORD_XP, "생리 기록 완료");
        Ok(marks)
    }

    /// Adds one period record and recomputes marks.
    ///
    /// `duration_days` defaults to the profile's period length, or to the
    /// configured default when no profile exists yet.
    pub fn add_record(
        &mut self,
        start_date: NaiveDate,
        duration_days: Option<i32>,
    ) -> ServiceResult<RecordId> {
        let duration = duration_days.unwrap_or_else(|| {
            self.profile
                .as_ref()
                .map_or(self.config.default_period_length_days, |profile| {
                    profile.period_length_days
                })
        });
        let record = PeriodRecord::new(start_date, duration).map_err(InputError::from)?;
        let record_id = record.id;
        let records = with_record(&self.records, record);

        let marks = compute_marks(self.profile.as_deref(), &records, self.config.cycles_ahead)?;
        self.records = Arc::new(records);
        self.marks = Arc::new(marks);
        info!(
            "event=record_add module=service status=ok records={} marks={}",
            self.records.len(),
            self.marks.len()
        );
        Ok(record_id)
    }

    /// Dashboard "record today" quick action.
    pub fn record_today(&mut self) {
        self.ledger
            .award(XpSource::SymptomRecord, SYMPTOM_RECORD_XP, "오늘 기록 완료");
    }

    /// Dashboard "health check" quick action.
    pub fn health_check(&mut self) {
        self.ledger
            .award(XpSource::HealthCheck, HEALTH_CHECK_XP, "건강 체크 완료");
    }

    /// Records one vaccine dose; awards XP only when a dose was added.
    pub fn record_vaccination_dose(&mut self, kind: VaccineKind) -> DoseOutcome {
        let outcome = self.vaccinations.complete_dose(kind);
        if outcome != DoseOutcome::AlreadyComplete {
            let description = format!("{} 접종 완료", kind.display_name());
            self.ledger
                .award(XpSource::Vaccination, VACCINATION_XP, &description);
        }
        outcome
    }

    /// Corrects the dose count by hand (the `-1` edit button). Clamped to the
    /// series total; awards no XP.
    pub fn set_vaccination_doses(&mut self, kind: VaccineKind, doses: u32) -> DoseProgress {
        let progress = self.vaccinations.set_doses(kind, doses);
        info!(
            "event=vaccination_edit module=service status=ok kind={} completed={}",
            kind.as_str(),
            progress.is_completed()
        );
        progress
    }

    /// Resets one vaccine series to zero doses.
    pub fn reset_vaccination(&mut self, kind: VaccineKind) {
        self.vaccinations.reset(kind);
    }

    /// Current mark snapshot.
    pub fn marks(&self) -> Arc<MarkMap> {
        Arc::clone(&self.marks)
    }

    pub fn profile(&self) -> Option<Arc<CycleProfile>> {
        self.profile.clone()
    }

    pub fn records(&self) -> Arc<Vec<PeriodRecord>> {
        Arc::clone(&self.records)
    }

    pub fn vaccinations(&self) -> &VaccinationChecklist {
        &self.vaccinations
    }

    pub fn config(&self) -> CalendarConfig {
        self.config
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Next period, ovulation and fertile window for the current profile.
    pub fn summary(&self) -> ServiceResult<Option<CycleSummary>> {
        match self.profile.as_deref() {
            Some(profile) => Ok(Some(summarize_cycle(profile)?)),
            None => Ok(None),
        }
    }

    /// Dashboard status for `today`; `None` until a profile exists.
    pub fn status(&self, today: NaiveDate) -> ServiceResult<Option<StatusLabel>> {
        Ok(self.summary()?.map(|summary| summary.status(today)))
    }
}

fn with_record(records: &[PeriodRecord], record: PeriodRecord) -> Vec<PeriodRecord> {
    let mut next = Vec::with_capacity(records.len() + 1);
    next.extend_from_slice(records);
    next.push(record);
    next.sort_by_key(|record| record.start_date);
    next
}
