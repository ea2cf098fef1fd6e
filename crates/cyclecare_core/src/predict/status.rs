//! Dashboard status and countdown labels.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// A period starting within this many days counts as approaching.
pub const APPROACHING_THRESHOLD_DAYS: i64 = 3;
/// Distance from ovulation, in days, still treated as fertile.
pub const FERTILE_STATUS_RADIUS_DAYS: i64 = 2;

/// Whole days from `today` to `target`; negative when `target` has passed.
pub fn days_until(today: NaiveDate, target: NaiveDate) -> i64 {
    target.signed_duration_since(today).num_days()
}

/// Current phase label shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StatusLabel {
    InPeriod,
    PeriodApproaching { days: i64 },
    FertileWindow,
    StablePhase,
}

impl StatusLabel {
    /// Stable wire code.
    pub fn code(self) -> &'static str {
        match self {
            Self::InPeriod => "in_period",
            Self::PeriodApproaching { .. } => "period_approaching",
            Self::FertileWindow => "fertile_window",
            Self::StablePhase => "stable_phase",
        }
    }
}

impl Display for StatusLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InPeriod => write!(f, "in period"),
            Self::PeriodApproaching { days } => write!(f, "period expected in {days} day(s)"),
            Self::FertileWindow => write!(f, "fertile window"),
            Self::StablePhase => write!(f, "stable phase"),
        }
    }
}

/// Classifies `today` against the next period and ovulation dates.
///
/// Rules are checked in order: period started or due today, period within
/// three days, ovulation within two days either way, otherwise stable.
pub fn classify_status(today: NaiveDate, next_period: NaiveDate, ovulation: NaiveDate) -> StatusLabel {
    let period_in = days_until(today, next_period);
    if period_in <= 0 {
        return StatusLabel::InPeriod;
    }
    if period_in <= APPROACHING_THRESHOLD_DAYS {
        return StatusLabel::PeriodApproaching { days: period_in };
    }
    if days_until(today, ovulation).abs() <= FERTILE_STATUS_RADIUS_DAYS {
        return StatusLabel::FertileWindow;
    }
    StatusLabel::StablePhase
}

/// Relative position of a target date, for "D-3" style labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Countdown {
    Upcoming { days: i64 },
    Today,
    Passed { days: i64 },
}

impl Countdown {
    pub fn between(today: NaiveDate, target: NaiveDate) -> Self {
        match days_until(today, target) {
            0 => Self::Today,
            days if days > 0 => Self::Upcoming { days },
            days => Self::Passed { days: -days },
        }
    }

    /// `D-3`, `D-DAY` or `D+2`.
    pub fn d_day_label(self) -> String {
        match self {
            Self::Upcoming { days } => format!("D-{days}"),
            Self::Today => "D-DAY".to_string(),
            Self::Passed { days } => format!("D+{days}"),
        }
    }

    /// Whether the target is today or already behind.
    pub fn has_arrived(self) -> bool {
        !matches!(self, Self::Upcoming { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::{classify_status, days_until, Countdown, StatusLabel};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn days_until_is_signed() {
        assert_eq!(days_until(date(2024, 2, 10), date(2024, 2, 12)), 2);
        assert_eq!(days_until(date(2024, 2, 12), date(2024, 2, 10)), -2);
        assert_eq!(days_until(date(2024, 2, 28), date(2024, 3, 1)), 2);
    }

    #[test]
    fn two_days_before_period_is_approaching() {
        let status = classify_status(date(2024, 2, 10), date(2024, 2, 12), date(2024, 1, 29));
        assert_eq!(status, StatusLabel::PeriodApproaching { days: 2 });
        assert_eq!(status.code(), "period_approaching");
    }

    #[test]
    fn period_due_today_or_overdue_is_in_period() {
        assert_eq!(
            classify_status(date(2024, 2, 12), date(2024, 2, 12), date(2024, 1, 29)),
            StatusLabel::InPeriod
        );
        assert_eq!(
            classify_status(date(2024, 2, 14), date(2024, 2, 12), date(2024, 1, 29)),
            StatusLabel::InPeriod
        );
    }

    #[test]
    fn period_rules_win_over_fertile_rule() {
        // Ovulation is also within two days, but the approaching rule is checked first.
        let status = classify_status(date(2024, 2, 10), date(2024, 2, 13), date(2024, 2, 11));
        assert_eq!(status, StatusLabel::PeriodApproaching { days: 3 });
    }

    #[test]
    fn fertile_window_is_symmetric_around_ovulation() {
        let next_period = date(2024, 3, 1);
        let ovulation = date(2024, 2, 15);
        for today in [date(2024, 2, 13), date(2024, 2, 15), date(2024, 2, 17)] {
            assert_eq!(
                classify_status(today, next_period, ovulation),
                StatusLabel::FertileWindow
            );
        }
        assert_eq!(
            classify_status(date(2024, 2, 18), next_period, ovulation),
            StatusLabel::StablePhase
        );
        assert_eq!(
            classify_status(date(2024, 2, 12), next_period, ovulation),
            StatusLabel::StablePhase
        );
    }

    #[test]
    fn countdown_labels() {
        let today = date(2024, 2, 10);
        assert_eq!(Countdown::between(today, date(2024, 2, 13)).d_day_label(), "D-3");
        assert_eq!(Countdown::between(today, today).d_day_label(), "D-DAY");
        let passed = Countdown::between(today, date(2024, 2, 8));
        assert_eq!(passed, Countdown::Passed { days: 2 });
        assert_eq!(passed.d_day_label(), "D+2");
        assert!(passed.has_arrived());
    }
}
