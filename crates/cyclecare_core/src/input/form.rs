//! Entry form parsing.

use super::InputError;
use crate::model::cycle::{CycleGoal, CycleProfile};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

// Date part, then an optional ISO-8601 time and offset as produced by the
// mobile date picker. Only the date part is kept.
static CALENDAR_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(\d{4})-(\d{2})-(\d{2})(?:[T ]\d{2}:\d{2}(?::\d{2}(?:\.\d{1,9})?)?(?:Z|[+-]\d{2}:?\d{2})?)?$",
    )
    .expect("valid calendar date regex")
});

const MAX_INPUT_ECHO_CHARS: usize = 32;

/// Parses a calendar date, discarding any time-of-day component.
///
/// Accepts `YYYY-MM-DD` and ISO-8601 date-times such as
/// `2024-01-01T00:00:00.000Z`.
///
/// # Errors
/// - `InputError::InvalidDate` for any other shape or for impossible dates
///   such as `2024-02-30`.
pub fn parse_calendar_date(raw: &str) -> Result<NaiveDate, InputError> {
    let trimmed = raw.trim();
    let invalid = || InputError::InvalidDate(echo(trimmed));

    let captures = CALENDAR_DATE_RE.captures(trimmed).ok_or_else(invalid)?;
    let year = captures[1].parse::<i32>().map_err(|_| invalid())?;
    let month = captures[2].parse::<u32>().map_err(|_| invalid())?;
    let day = captures[3].parse::<u32>().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Parses a signed whole-day count for `field`.
///
/// Sign is kept so that non-positive values surface as profile validation
/// errors rather than parse errors.
pub fn parse_day_count(field: &'static str, raw: &str) -> Result<i32, InputError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<i32>()
        .map_err(|_| InputError::InvalidNumber {
            field,
            value: echo(trimmed),
        })
}

/// Raw values as typed into the cycle entry form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleForm {
    pub last_period_start: String,
    pub cycle_length_days: String,
    pub period_length_days: String,
    /// Empty means `general`.
    pub goal: String,
}

impl CycleForm {
    /// Validates the form into a profile.
    pub fn into_profile(&self) -> Result<CycleProfile, InputError> {
        let last_period_start = parse_calendar_date(&self.last_period_start)?;
        let cycle_length_days = parse_day_count("cycle_length_days", &self.cycle_length_days)?;
        let period_length_days = parse_day_count("period_length_days", &self.period_length_days)?;
        let goal = if self.goal.trim().is_empty() {
            CycleGoal::default()
        } else {
            CycleGoal::parse(&self.goal).ok_or_else(|| InputError::InvalidGoal(echo(&self.goal)))?
        };

        Ok(CycleProfile::new(
            last_period_start,
            cycle_length_days,
            period_length_days,
            goal,
        )?)
    }
}

fn echo(value: &str) -> String {
    let mut truncated = value.chars().take(MAX_INPUT_ECHO_CHARS).collect::<String>();
    if value.chars().count() > MAX_INPUT_ECHO_CHARS {
        truncated.push_str("...");
    }
    truncated
}
