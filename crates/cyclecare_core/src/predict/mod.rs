//! Cycle-date prediction.
//!
//! # Responsibility
//! - Turn a profile plus recorded periods into calendar marks.
//! - Derive dashboard status and countdowns from predicted dates.
//!
//! # Invariants
//! - Pure and synchronous: identical inputs give identical outputs.
//! - All arithmetic is whole-day addition on calendar dates.
//! - Invalid input aborts before any mark is produced.

use crate::config::MAX_CYCLES_AHEAD;
use crate::model::cycle::ProfileValidationError;
use chrono::{Days, NaiveDate};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod marks;
pub mod status;
pub mod summary;

/// Half-width of the fertile window around ovulation, in days.
pub const FERTILE_WINDOW_RADIUS_DAYS: i64 = 2;

pub type PredictResult<T> = Result<T, PredictError>;

/// Prediction failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredictError {
    InvalidProfile(ProfileValidationError),
    /// Date arithmetic left the representable calendar range.
    DateOutOfRange { base: NaiveDate, offset_days: i64 },
    /// Requested prediction horizon exceeds `MAX_CYCLES_AHEAD`.
    TooManyCycles { requested: u32, max: u32 },
}

impl Display for PredictError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidProfile(err) => write!(f, "invalid profile: {err}"),
            Self::DateOutOfRange { base, offset_days } => write!(
                f,
                "date {base} shifted by {offset_days} day(s) is out of range"
            ),
            Self::TooManyCycles { requested, max } => {
                write!(f, "cycles_ahead must be <= {max}, got {requested}")
            }
        }
    }
}

impl Error for PredictError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidProfile(err) => Some(err),
            Self::DateOutOfRange { .. } | Self::TooManyCycles { .. } => None,
        }
    }
}

impl From<ProfileValidationError> for PredictError {
    fn from(value: ProfileValidationError) -> Self {
        Self::InvalidProfile(value)
    }
}

/// Adds a signed number of calendar days.
pub fn shift_days(base: NaiveDate, offset_days: i64) -> PredictResult<NaiveDate> {
    let shifted = if offset_days >= 0 {
        base.checked_add_days(Days::new(offset_days.unsigned_abs()))
    } else {
        base.checked_sub_days(Days::new(offset_days.unsigned_abs()))
    };
    shifted.ok_or(PredictError::DateOutOfRange { base, offset_days })
}

/// Rejects horizons above `MAX_CYCLES_AHEAD`.
pub fn ensure_cycles_ahead(cycles_ahead: u32) -> PredictResult<()> {
    if cycles_ahead > MAX_CYCLES_AHEAD {
        return Err(PredictError::TooManyCycles {
            requested: cycles_ahead,
            max: MAX_CYCLES_AHEAD,
        });
    }
    Ok(())
}

pub use marks::{compute_marks, predict_cycles, PredictedCycle};
pub use status::{classify_status, days_until, Countdown, StatusLabel};
pub use summary::{summarize_cycle, CycleSummary};

#[cfg(test)]
mod tests {
    use super::{shift_days, PredictError};
    use chrono::NaiveDate;

    #[test]
    fn shift_crosses_month_and_leap_day() {
        let base = NaiveDate::from_ymd_opt(2024, 2, 27).unwrap();
        assert_eq!(
            shift_days(base, 3).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert_eq!(
            shift_days(base, -27).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
        );
    }

    #[test]
    fn shift_past_calendar_end_is_an_error() {
        let err = shift_days(NaiveDate::MAX, 1).unwrap_err();
        assert!(matches!(err, PredictError::DateOutOfRange { offset_days: 1, .. }));
    }
}
