//! Input boundary between the entry form and the predictor.
//!
//! # Responsibility
//! - Convert raw form strings into validated domain values.
//! - Reject malformed input before it reaches prediction code.
//!
//! # Invariants
//! - Malformed numbers are errors, never coerced to zero.
//! - Dates carry no time of day once parsed.

use crate::model::cycle::ProfileValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod form;

pub use form::{parse_calendar_date, parse_day_count, CycleForm};

/// Input boundary failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    InvalidDate(String),
    InvalidNumber { field: &'static str, value: String },
    InvalidGoal(String),
    InvalidProfile(ProfileValidationError),
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(value) => {
                write!(f, "invalid date `{value}`; expected YYYY-MM-DD")
            }
            Self::InvalidNumber { field, value } => {
                write!(f, "{field} must be a whole number, got `{value}`")
            }
            Self::InvalidGoal(value) => write!(
                f,
                "unsupported goal `{value}`; expected general|pregnancy|contraception"
            ),
            Self::InvalidProfile(err) => write!(f, "{err}"),
        }
    }
}

impl Error for InputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidProfile(err) => Some(err),
            Self::InvalidDate(_) | Self::InvalidNumber { .. } | Self::InvalidGoal(_) => None,
        }
    }
}

impl From<ProfileValidationError> for InputError {
    fn from(value: ProfileValidationError) -> Self {
        Self::InvalidProfile(value)
    }
}
