//! Core configuration.
//!
//! # Responsibility
//! - Hold calendar prediction settings with deterministic defaults.
//! - Resolve environment overrides without failing on bad values.
//!
//! # Invariants
//! - Invalid overrides fall back to defaults and are logged, never fatal.

use log::warn;

pub mod palette;

/// Environment variable overriding the number of predicted cycles.
pub const CYCLES_AHEAD_ENV: &str = "CYCLECARE_CYCLES_AHEAD";
/// Cycles predicted ahead of the latest record.
pub const DEFAULT_CYCLES_AHEAD: u32 = 3;
/// Upper bound accepted from overrides.
pub const MAX_CYCLES_AHEAD: u32 = 24;
/// Form default for the cycle length field.
pub const DEFAULT_CYCLE_LENGTH_DAYS: i32 = 28;
/// Form default for the period length field, also used for records added
/// before any profile exists.
pub const DEFAULT_PERIOD_LENGTH_DAYS: i32 = 5;

/// Settings for mark computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarConfig {
    pub cycles_ahead: u32,
    pub default_period_length_days: i32,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            cycles_ahead: DEFAULT_CYCLES_AHEAD,
            default_period_length_days: DEFAULT_PERIOD_LENGTH_DAYS,
        }
    }
}

impl CalendarConfig {
    /// Defaults with `CYCLECARE_CYCLES_AHEAD` applied when set.
    pub fn from_env() -> Self {
        let raw = std::env::var(CYCLES_AHEAD_ENV).ok();
        Self::with_cycles_ahead_override(raw.as_deref())
    }

    /// Defaults with an optional raw `cycles_ahead` override.
    ///
    /// Empty, non-numeric or out-of-range values keep the default.
    pub fn with_cycles_ahead_override(raw: Option<&str>) -> Self {
        let mut config = Self::default();
        let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
            return config;
        };
        match raw.parse::<u32>() {
            Ok(value) if value <= MAX_CYCLES_AHEAD => config.cycles_ahead = value,
            _ => {
                warn!(
                    "event=config_override module=config status=ignored key={} reason=invalid_value",
                    CYCLES_AHEAD_ENV
                );
            }
        }
        config
    }
}
