//! Cycle profile and period record model.
//!
//! # Responsibility
//! - Define the user-entered cycle parameters and recorded period instances.
//! - Validate length invariants before any date arithmetic runs.
//!
//! # Invariants
//! - `cycle_length_days` and `period_length_days` are positive.
//! - `period_length_days <= cycle_length_days`.
//! - A record `duration_days` is positive and its `id` is never nil.
//! - Deserialization runs the same validation as construction.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of one period record.
///
/// Generated as UUID v7 so ids sort by creation time.
pub type RecordId = Uuid;

/// Tracking goal chosen on the input form.
///
/// Carried for display only; prediction math ignores it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleGoal {
    /// General health tracking.
    #[default]
    General,
    /// Trying to conceive.
    Pregnancy,
    /// Avoiding pregnancy.
    Contraception,
}

impl CycleGoal {
    /// Stable wire string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Pregnancy => "pregnancy",
            Self::Contraception => "contraception",
        }
    }

    /// Parses a wire string (case-insensitive, surrounding whitespace ignored).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "general" => Some(Self::General),
            "pregnancy" => Some(Self::Pregnancy),
            "contraception" => Some(Self::Contraception),
            _ => None,
        }
    }
}

/// Validation failures for profile and record invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileValidationError {
    NonPositiveCycleLength(i32),
    NonPositivePeriodLength(i32),
    PeriodLongerThanCycle { period: i32, cycle: i32 },
    NonPositiveRecordDuration(i32),
    NilRecordId,
}

impl Display for ProfileValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveCycleLength(value) => {
                write!(f, "cycle_length_days must be positive, got {value}")
            }
            Self::NonPositivePeriodLength(value) => {
                write!(f, "period_length_days must be positive, got {value}")
            }
            Self::PeriodLongerThanCycle { period, cycle } => write!(
                f,
                "period_length_days ({period}) must be <= cycle_length_days ({cycle})"
            ),
            Self::NonPositiveRecordDuration(value) => {
                write!(f, "duration_days must be positive, got {value}")
            }
            Self::NilRecordId => write!(f, "record id must not be nil"),
        }
    }
}

impl Error for ProfileValidationError {}

/// User-entered cycle parameters.
///
/// Immutable once submitted; re-entry replaces the whole profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CycleProfileWire")]
pub struct CycleProfile {
    /// First day of the most recent period. Calendar date, no time of day.
    pub last_period_start: NaiveDate,
    /// Days from one period start to the next.
    pub cycle_length_days: i32,
    /// Days of bleeding per cycle.
    pub period_length_days: i32,
    /// Display-only goal.
    pub goal: CycleGoal,
}

impl CycleProfile {
    /// Builds a validated profile.
    pub fn new(
        last_period_start: NaiveDate,
        cycle_length_days: i32,
        period_length_days: i32,
        goal: CycleGoal,
    ) -> Result<Self, ProfileValidationError> {
        let profile = Self {
            last_period_start,
            cycle_length_days,
            period_length_days,
            goal,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Checks length invariants.
    ///
    /// Fields are public, so callers that mutate a profile in place must
    /// re-run this before handing it to the predictor.
    pub fn validate(&self) -> Result<(), ProfileValidationError> {
        if self.cycle_length_days <= 0 {
            return Err(ProfileValidationError::NonPositiveCycleLength(
                self.cycle_length_days,
            ));
        }
        if self.period_length_days <= 0 {
            return Err(ProfileValidationError::NonPositivePeriodLength(
                self.period_length_days,
            ));
        }
        if self.period_length_days > self.cycle_length_days {
            return Err(ProfileValidationError::PeriodLongerThanCycle {
                period: self.period_length_days,
                cycle: self.cycle_length_days,
            });
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct CycleProfileWire {
    last_period_start: NaiveDate,
    cycle_length_days: i32,
    period_length_days: i32,
    #[serde(default)]
    goal: CycleGoal,
}

impl TryFrom<CycleProfileWire> for CycleProfile {
    type Error = ProfileValidationError;

    fn try_from(value: CycleProfileWire) -> Result<Self, Self::Error> {
        Self::new(
            value.last_period_start,
            value.cycle_length_days,
            value.period_length_days,
            value.goal,
        )
    }
}

/// One recorded (or user-entered) period instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PeriodRecordWire")]
pub struct PeriodRecord {
    pub id: RecordId,
    pub start_date: NaiveDate,
    pub duration_days: i32,
}

impl PeriodRecord {
    /// Creates a record with a fresh time-ordered id.
    pub fn new(start_date: NaiveDate, duration_days: i32) -> Result<Self, ProfileValidationError> {
        Self::with_id(Uuid::now_v7(), start_date, duration_days)
    }

    /// Creates a record with a caller-provided id.
    ///
    /// Used by import paths where identity already exists.
    pub fn with_id(
        id: RecordId,
        start_date: NaiveDate,
        duration_days: i32,
    ) -> Result<Self, ProfileValidationError> {
        let record = Self {
            id,
            start_date,
            duration_days,
        };
        record.validate()?;
        Ok(record)
    }

    /// Record for the period that opens `profile`, with the profile's length
    /// as duration.
    pub fn from_profile(profile: &CycleProfile) -> Result<Self, ProfileValidationError> {
        Self::new(profile.last_period_start, profile.period_length_days)
    }

    pub fn validate(&self) -> Result<(), ProfileValidationError> {
        if self.id.is_nil() {
            return Err(ProfileValidationError::NilRecordId);
        }
        if self.duration_days <= 0 {
            return Err(ProfileValidationError::NonPositiveRecordDuration(
                self.duration_days,
            ));
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct PeriodRecordWire {
    id: RecordId,
    start_date: NaiveDate,
    duration_days: i32,
}

impl TryFrom<PeriodRecordWire> for PeriodRecord {
    type Error = ProfileValidationError;

    fn try_from(value: PeriodRecordWire) -> Result<Self, Self::Error> {
        Self::with_id(value.id, value.start_date, value.duration_days)
    }
}
