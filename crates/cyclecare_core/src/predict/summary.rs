//! Single-cycle summary for the dashboard card.
//!
//! Unlike `compute_marks`, which anchors on the latest record, the summary is
//! anchored on the profile's own `last_period_start`.

use super::status::{classify_status, Countdown, StatusLabel};
use super::{shift_days, PredictResult, FERTILE_WINDOW_RADIUS_DAYS};
use crate::model::cycle::CycleProfile;
use chrono::NaiveDate;
use serde::Serialize;

/// Next key dates for one profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CycleSummary {
    pub next_period: NaiveDate,
    pub ovulation: NaiveDate,
    pub fertile_start: NaiveDate,
    pub fertile_end: NaiveDate,
}

impl CycleSummary {
    pub fn status(&self, today: NaiveDate) -> StatusLabel {
        classify_status(today, self.next_period, self.ovulation)
    }

    pub fn period_countdown(&self, today: NaiveDate) -> Countdown {
        Countdown::between(today, self.next_period)
    }

    pub fn ovulation_countdown(&self, today: NaiveDate) -> Countdown {
        Countdown::between(today, self.ovulation)
    }
}

/// Computes next period, ovulation and fertile window from a profile.
pub fn summarize_cycle(profile: &CycleProfile) -> PredictResult<CycleSummary> {
    profile.validate()?;
    let cycle_len = i64::from(profile.cycle_length_days);
    let ovulation = shift_days(profile.last_period_start, cycle_len / 2)?;
    Ok(CycleSummary {
        next_period: shift_days(profile.last_period_start, cycle_len)?,
        ovulation,
        fertile_start: shift_days(ovulation, -FERTILE_WINDOW_RADIUS_DAYS)?,
        fertile_end: shift_days(ovulation, FERTILE_WINDOW_RADIUS_DAYS)?,
    })
}

#[cfg(test)]
mod tests {
    use super::summarize_cycle;
    use crate::model::cycle::{CycleGoal, CycleProfile};
    use crate::predict::status::{Countdown, StatusLabel};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn summary_for_standard_cycle() {
        let profile = CycleProfile::new(date(2024, 1, 1), 28, 5, CycleGoal::Pregnancy).unwrap();
        let summary = summarize_cycle(&profile).unwrap();

        assert_eq!(summary.next_period, date(2024, 1, 29));
        assert_eq!(summary.ovulation, date(2024, 1, 15));
        assert_eq!(summary.fertile_start, date(2024, 1, 13));
        assert_eq!(summary.fertile_end, date(2024, 1, 17));
    }

    #[test]
    fn summary_status_and_countdowns() {
        let profile = CycleProfile::new(date(2024, 1, 1), 28, 5, CycleGoal::General).unwrap();
        let summary = summarize_cycle(&profile).unwrap();
        let today = date(2024, 1, 16);

        assert_eq!(summary.status(today), StatusLabel::FertileWindow);
        assert_eq!(summary.period_countdown(today), Countdown::Upcoming { days: 13 });
        assert_eq!(summary.ovulation_countdown(today), Countdown::Passed { days: 1 });
    }
}
