//! Core domain logic for CycleCare.
//! This crate is the single source of truth for cycle prediction and
//! tracking invariants.

pub mod config;
pub mod gamification;
pub mod health;
pub mod input;
pub mod logging;
pub mod model;
pub mod predict;
pub mod service;

pub use config::CalendarConfig;
pub use gamification::{GamificationAction, GamificationState, GamificationStore, XpLedger, XpSource};
pub use input::{parse_calendar_date, parse_day_count, CycleForm, InputError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::cycle::{CycleGoal, CycleProfile, PeriodRecord, ProfileValidationError, RecordId};
pub use model::mark::{DateMark, MarkCategory, MarkMap};
pub use predict::{
    classify_status, compute_marks, days_until, summarize_cycle, Countdown, CycleSummary,
    PredictError, PredictResult, StatusLabel,
};
pub use service::tracking_service::{ServiceError, ServiceResult, TrackingService};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
