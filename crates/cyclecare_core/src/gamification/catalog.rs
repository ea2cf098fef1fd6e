//! Static gamification tables: XP awards, levels, badges, missions.
//!
//! These tables are read-only configuration; `GamificationState::initial`
//! copies them into owned state.

use super::state::{Achievement, Badge, DailyMission, MissionKind, WeeklyChallenge};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Where an XP award came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum XpSource {
    PeriodRecord,
    SymptomRecord,
    HealthCheck,
    Vaccination,
    Streak,
    Mission,
    Challenge,
}

impl XpSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PeriodRecord => "period_record",
            Self::SymptomRecord => "symptom_record",
            Self::HealthCheck => "health_check",
            Self::Vaccination => "vaccination",
            Self::Streak => "streak",
            Self::Mission => "mission",
            Self::Challenge => "challenge",
        }
    }

    /// Fixed award for user actions. Missions and challenges carry their own
    /// reward and return `None`.
    pub fn fixed_award(self) -> Option<u32> {
        match self {
            Self::PeriodRecord => Some(PERIOD_RECORD_XP),
            Self::SymptomRecord => Some(SYMPTOM_RECORD_XP),
            Self::HealthCheck => Some(HEALTH_CHECK_XP),
            Self::Vaccination => Some(VACCINATION_XP),
            Self::Streak => Some(STREAK_XP),
            Self::Mission | Self::Challenge => None,
        }
    }
}

pub const PERIOD_RECORD_XP: u32 = 10;
pub const SYMPTOM_RECORD_XP: u32 = 5;
pub const HEALTH_CHECK_XP: u32 = 15;
pub const VACCINATION_XP: u32 = 20;
pub const STREAK_XP: u32 = 25;

/// One row of the level table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelDef {
    pub level: u32,
    pub name: &'static str,
    pub xp_required: u32,
    pub color: &'static str,
}

/// Level thresholds in ascending `xp_required` order.
pub const LEVELS: &[LevelDef] = &[
    LevelDef {
        level: 1,
        name: "주기 관리 입문자",
        xp_required: 0,
        color: "#9ca3af",
    },
    LevelDef {
        level: 2,
        name: "건강 관심자",
        xp_required: 100,
        color: "#8b5cf6",
    },
    LevelDef {
        level: 3,
        name: "주기 챌린저",
        xp_required: 250,
        color: "#6366f1",
    },
    LevelDef {
        level: 4,
        name: "웰니스 마스터",
        xp_required: 500,
        color: "#52C41A",
    },
    LevelDef {
        level: 5,
        name: "건강 전문가",
        xp_required: 1000,
        color: "#5b21b6",
    },
];

/// Level whose XP band contains `total_xp`.
pub fn level_for_xp(total_xp: u32) -> Option<&'static LevelDef> {
    LEVELS.iter().enumerate().find_map(|(index, def)| {
        let next_required = LEVELS.get(index + 1).map(|next| next.xp_required);
        let below_next = next_required.map_or(true, |required| total_xp < required);
        (total_xp >= def.xp_required && below_next).then_some(def)
    })
}

pub fn level_def(level: u32) -> Option<&'static LevelDef> {
    LEVELS.iter().find(|def| def.level == level)
}

/// Progress through the current level band, for the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelProgress {
    pub level: u32,
    pub xp_into_level: u32,
    /// `None` at the top level.
    pub xp_span: Option<u32>,
    /// `0..=100`; 100 at the top level.
    pub percent: u8,
}

pub fn level_progress(total_xp: u32) -> LevelProgress {
    let Some(current) = level_for_xp(total_xp) else {
        return LevelProgress {
            level: 1,
            xp_into_level: total_xp,
            xp_span: None,
            percent: 0,
        };
    };
    let xp_into_level = total_xp - current.xp_required;
    match level_def(current.level + 1) {
        Some(next) => {
            let span = next.xp_required - current.xp_required;
            let percent = (u64::from(xp_into_level) * 100 / u64::from(span.max(1))) as u8;
            LevelProgress {
                level: current.level,
                xp_into_level,
                xp_span: Some(span),
                percent,
            }
        }
        None => LevelProgress {
            level: current.level,
            xp_into_level,
            xp_span: None,
            percent: 100,
        },
    }
}

pub const BADGE_FIRST_RECORD: &str = "first_record";
pub const BADGE_STREAK_7: &str = "streak_7";
pub const BADGE_STREAK_30: &str = "streak_30";
pub const BADGE_VACCINATION: &str = "vaccination";
pub const BADGE_HEALTH_MASTER: &str = "health_master";

pub(crate) fn default_badges() -> Vec<Badge> {
    [
        (BADGE_FIRST_RECORD, "첫 기록", "첫 번째 생리 기록", "🎉"),
        (BADGE_STREAK_7, "꾸준함", "7일 연속 기록", "🔥"),
        (BADGE_STREAK_30, "기록왕", "30일 연속 기록", "👑"),
        (BADGE_VACCINATION, "예방 완료", "모든 접종 완료", "💉"),
        (BADGE_HEALTH_MASTER, "건강 마스터", "레벨 5 달성", "🏆"),
    ]
    .into_iter()
    .map(|(id, name, description, icon)| Badge {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        is_earned: false,
        earned_at: None,
    })
    .collect()
}

pub(crate) fn default_achievements() -> Vec<Achievement> {
    [
        ("record_10", "기록의 시작", "10번의 생리 기록", 50, 10),
        ("record_50", "꾸준한 관리자", "50번의 생리 기록", 100, 50),
        ("health_check_10", "건강 관심자", "10번의 건강 체크", 75, 10),
    ]
    .into_iter()
    .map(|(id, title, description, xp_reward, max_progress)| Achievement {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        xp_reward,
        badge_reward: None,
        is_completed: false,
        completed_at: None,
        progress: 0,
        max_progress,
    })
    .collect()
}

pub(crate) fn default_daily_missions() -> Vec<DailyMission> {
    vec![
        DailyMission {
            id: "daily_record".to_string(),
            title: "오늘 기록하기".to_string(),
            description: "오늘의 생리 상태를 기록하세요".to_string(),
            xp_reward: 10,
            is_completed: false,
            completed_at: None,
            kind: MissionKind::Record,
        },
        DailyMission {
            id: "daily_health".to_string(),
            title: "건강 체크".to_string(),
            description: "오늘의 컨디션을 체크하세요".to_string(),
            xp_reward: 15,
            is_completed: false,
            completed_at: None,
            kind: MissionKind::Health,
        },
    ]
}

pub(crate) fn default_weekly_challenges(now: DateTime<Utc>) -> Vec<WeeklyChallenge> {
    vec![WeeklyChallenge {
        id: "weekly_streak".to_string(),
        title: "일주일 연속 기록".to_string(),
        description: "7일 연속으로 기록하세요".to_string(),
        xp_reward: 100,
        badge_reward: Some(BADGE_STREAK_7.to_string()),
        is_completed: false,
        completed_at: None,
        progress: 0,
        max_progress: 7,
        start_date: now,
        end_date: now + Duration::days(7),
    }]
}
