//! Gamification state shapes.

use super::catalog::{
    default_achievements, default_badges, default_daily_missions, default_weekly_challenges,
    XpSource,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_USER_ID: &str = "1";
pub const DEFAULT_USER_NAME: &str = "사용자";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub level: u32,
    /// Accumulated XP; not reset on level change.
    pub current_xp: u32,
    pub total_xp: u32,
    pub join_date: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub is_earned: bool,
    pub earned_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub xp_reward: u32,
    pub badge_reward: Option<String>,
    pub is_completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub progress: u32,
    pub max_progress: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionKind {
    Record,
    Health,
    Vaccination,
    Streak,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyMission {
    pub id: String,
    pub title: String,
    pub description: String,
    pub xp_reward: u32,
    pub is_completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    pub kind: MissionKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyChallenge {
    pub id: String,
    pub title: String,
    pub description: String,
    pub xp_reward: u32,
    pub badge_reward: Option<String>,
    pub is_completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub progress: u32,
    pub max_progress: u32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

/// One XP history row, newest first in `GamificationState::xp_history`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpEntry {
    /// Sequential within one state lineage.
    pub id: u64,
    pub user_id: String,
    pub amount: u32,
    pub source: XpSource,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamificationState {
    pub user: UserProfile,
    pub badges: Vec<Badge>,
    pub achievements: Vec<Achievement>,
    pub daily_missions: Vec<DailyMission>,
    pub weekly_challenges: Vec<WeeklyChallenge>,
    pub xp_history: Vec<XpEntry>,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub next_entry_seq: u64,
}

impl GamificationState {
    /// Fresh level-1 state seeded from the catalog.
    pub fn initial(now: DateTime<Utc>) -> Self {
        Self {
            user: UserProfile {
                id: DEFAULT_USER_ID.to_string(),
                name: DEFAULT_USER_NAME.to_string(),
                level: 1,
                current_xp: 0,
                total_xp: 0,
                join_date: now,
                last_active: now,
            },
            badges: default_badges(),
            achievements: default_achievements(),
            daily_missions: default_daily_missions(),
            weekly_challenges: default_weekly_challenges(now),
            xp_history: Vec::new(),
            current_streak: 0,
            longest_streak: 0,
            next_entry_seq: 1,
        }
    }

    pub fn badge(&self, id: &str) -> Option<&Badge> {
        self.badges.iter().find(|badge| badge.id == id)
    }

    pub fn earned_badge_count(&self) -> usize {
        self.badges.iter().filter(|badge| badge.is_earned).count()
    }

    pub fn mission(&self, id: &str) -> Option<&DailyMission> {
        self.daily_missions.iter().find(|mission| mission.id == id)
    }
}
