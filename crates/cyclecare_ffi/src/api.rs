//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Accept raw form strings and return flat response envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Failures are reported through `ok = false` plus `message`, never by
//!   partially filled data.
//! - Dates cross the boundary as ISO `YYYY-MM-DD` strings.

use chrono::{Local, NaiveDate};
use cyclecare_core::config::MAX_CYCLES_AHEAD;
use cyclecare_core::{
    compute_marks, core_version as core_version_inner, init_logging as init_logging_inner,
    parse_calendar_date, ping as ping_inner, summarize_cycle, CalendarConfig, Countdown,
    CycleForm, CycleProfile, MarkMap, PeriodRecord,
};
use log::warn;

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Reconfiguration attempts with different level or directory return error.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One calendar cell annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMarkItem {
    /// ISO `YYYY-MM-DD`.
    pub date: String,
    /// `period_actual|period_predicted|ovulation|fertile`.
    pub category: String,
    /// `#RRGGBB` or `#RRGGBBAA` background.
    pub color: String,
    pub text_color: String,
}

/// Response envelope for calendar mark computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarResponse {
    pub ok: bool,
    /// Marks ordered by date; empty on failure.
    pub marks: Vec<CalendarMarkItem>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl CalendarResponse {
    fn success(marks: &MarkMap) -> Self {
        Self {
            ok: true,
            marks: marks
                .iter()
                .map(|(date, mark)| CalendarMarkItem {
                    date: date.to_string(),
                    category: mark.category.as_str().to_string(),
                    color: mark.style_hint.css_color(),
                    text_color: mark.style_hint.text_color.to_string(),
                })
                .collect(),
            message: format!("{} marks", marks.len()),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            marks: Vec::new(),
            message: message.into(),
        }
    }
}

/// Dashboard summary envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleStatusResponse {
    pub ok: bool,
    /// `in_period|period_approaching|fertile_window|stable_phase`; empty on
    /// failure.
    pub status_code: String,
    pub status_text: String,
    pub next_period: String,
    pub ovulation: String,
    pub fertile_start: String,
    pub fertile_end: String,
    /// Signed days from today to the next period.
    pub days_until_period: i64,
    /// `D-3`, `D-DAY` or `D+2`.
    pub period_d_day: String,
    pub message: String,
}

impl CycleStatusResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            status_code: String::new(),
            status_text: String::new(),
            next_period: String::new(),
            ovulation: String::new(),
            fertile_start: String::new(),
            fertile_end: String::new(),
            days_until_period: 0,
            period_d_day: String::new(),
            message: message.into(),
        }
    }
}

/// Computes calendar marks from the entry form.
///
/// Input semantics:
/// - Form fields are passed as typed; numbers are parsed strictly.
/// - `goal`: `general|pregnancy|contraception`, empty means `general`.
/// - `cycles_ahead`: `None` uses `CYCLECARE_CYCLES_AHEAD` or the default;
///   values above `MAX_CYCLES_AHEAD` are rejected.
///
/// # FFI contract
/// - Sync call, pure computation.
/// - Never panics; invalid input returns `ok = false` with no marks.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_marks(
    last_period_start: String,
    cycle_length_days: String,
    period_length_days: String,
    goal: String,
    cycles_ahead: Option<u32>,
) -> CalendarResponse {
    let form = CycleForm {
        last_period_start,
        cycle_length_days,
        period_length_days,
        goal,
    };
    let profile = match form.into_profile() {
        Ok(profile) => profile,
        Err(err) => {
            warn!("event=calendar_marks module=ffi status=rejected error_code=invalid_input");
            return CalendarResponse::failure(format!("calendar_marks failed: {err}"));
        }
    };
    let cycles_ahead = cycles_ahead.unwrap_or_else(|| CalendarConfig::from_env().cycles_ahead);
    if cycles_ahead > MAX_CYCLES_AHEAD {
        warn!(
            "event=calendar_marks module=ffi status=rejected error_code=cycles_ahead_out_of_range"
        );
        return CalendarResponse::failure(format!(
            "calendar_marks failed: cycles_ahead must be <= {MAX_CYCLES_AHEAD}, got {cycles_ahead}"
        ));
    }

    match marks_for_profile(&profile, cycles_ahead) {
        Ok(marks) => CalendarResponse::success(&marks),
        Err(message) => CalendarResponse::failure(format!("calendar_marks failed: {message}")),
    }
}

/// Computes the dashboard status for the entry form.
///
/// `today` is an ISO date; `None` or empty uses the device's local date.
///
/// # FFI contract
/// - Sync call, pure computation.
/// - Never panics; invalid input returns `ok = false`.
#[flutter_rust_bridge::frb(sync)]
pub fn cycle_status(
    last_period_start: String,
    cycle_length_days: String,
    period_length_days: String,
    today: Option<String>,
) -> CycleStatusResponse {
    let form = CycleForm {
        last_period_start,
        cycle_length_days,
        period_length_days,
        goal: String::new(),
    };
    let profile = match form.into_profile() {
        Ok(profile) => profile,
        Err(err) => return CycleStatusResponse::failure(format!("cycle_status failed: {err}")),
    };
    let today = match resolve_today(today.as_deref()) {
        Ok(today) => today,
        Err(message) => {
            return CycleStatusResponse::failure(format!("cycle_status failed: {message}"))
        }
    };
    let summary = match summarize_cycle(&profile) {
        Ok(summary) => summary,
        Err(err) => return CycleStatusResponse::failure(format!("cycle_status failed: {err}")),
    };

    let status = summary.status(today);
    let countdown = summary.period_countdown(today);
    CycleStatusResponse {
        ok: true,
        status_code: status.code().to_string(),
        status_text: status.to_string(),
        next_period: summary.next_period.to_string(),
        ovulation: summary.ovulation.to_string(),
        fertile_start: summary.fertile_start.to_string(),
        fertile_end: summary.fertile_end.to_string(),
        days_until_period: signed_days(countdown),
        period_d_day: countdown.d_day_label(),
        message: "ok".to_string(),
    }
}

fn marks_for_profile(profile: &CycleProfile, cycles_ahead: u32) -> Result<MarkMap, String> {
    let record = PeriodRecord::from_profile(profile).map_err(|err| err.to_string())?;
    compute_marks(Some(profile), &[record], cycles_ahead).map_err(|err| err.to_string())
}

fn resolve_today(raw: Option<&str>) -> Result<NaiveDate, String> {
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => parse_calendar_date(value).map_err(|err| err.to_string()),
        None => Ok(Local::now().date_naive()),
    }
}

fn signed_days(countdown: Countdown) -> i64 {
    match countdown {
        Countdown::Upcoming { days } => days,
        Countdown::Today => 0,
        Countdown::Passed { days } => -days,
    }
}
