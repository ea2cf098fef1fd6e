//! Pure gamification state machine.
//!
//! # Invariants
//! - `reduce` never mutates its input; it returns a new state.
//! - Unknown badge/achievement/mission/challenge ids leave state unchanged.
//! - Completion timestamps are set once and kept on repeated completion.

use super::catalog::{level_for_xp, XpSource};
use super::state::{GamificationState, XpEntry};
use chrono::{DateTime, Utc};

/// Finite set of gamification transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GamificationAction {
    AddXp {
        amount: u32,
        source: XpSource,
        description: String,
    },
    LevelUp {
        new_level: u32,
    },
    EarnBadge {
        badge_id: String,
    },
    CompleteAchievement {
        achievement_id: String,
    },
    CompleteMission {
        mission_id: String,
    },
    CompleteChallenge {
        challenge_id: String,
    },
    UpdateStreak {
        current: u32,
        longest: u32,
    },
    LoadData(Box<GamificationState>),
}

/// Applies one action at wall-clock `now`.
pub fn reduce(
    state: &GamificationState,
    action: GamificationAction,
    now: DateTime<Utc>,
) -> GamificationState {
    let mut next = state.clone();
    match action {
        GamificationAction::AddXp {
            amount,
            source,
            description,
        } => {
            next.user.current_xp = next.user.current_xp.saturating_add(amount);
            next.user.total_xp = next.user.total_xp.saturating_add(amount);
            if let Some(def) = level_for_xp(next.user.total_xp) {
                next.user.level = def.level;
            }
            next.xp_history.insert(
                0,
                XpEntry {
                    id: next.next_entry_seq,
                    user_id: next.user.id.clone(),
                    amount,
                    source,
                    description,
                    timestamp: now,
                },
            );
            next.next_entry_seq += 1;
        }
        GamificationAction::LevelUp { new_level } => {
            next.user.level = new_level;
        }
        GamificationAction::EarnBadge { badge_id } => {
            if let Some(badge) = next.badges.iter_mut().find(|badge| badge.id == badge_id) {
                if !badge.is_earned {
                    badge.is_earned = true;
                    badge.earned_at = Some(now);
                }
            }
        }
        GamificationAction::CompleteAchievement { achievement_id } => {
            if let Some(item) = next
                .achievements
                .iter_mut()
                .find(|item| item.id == achievement_id)
            {
                if !item.is_completed {
                    item.is_completed = true;
                    item.completed_at = Some(now);
                }
            }
        }
        GamificationAction::CompleteMission { mission_id } => {
            if let Some(item) = next
                .daily_missions
                .iter_mut()
                .find(|item| item.id == mission_id)
            {
                if !item.is_completed {
                    item.is_completed = true;
                    item.completed_at = Some(now);
                }
            }
        }
        GamificationAction::CompleteChallenge { challenge_id } => {
            if let Some(item) = next
                .weekly_challenges
                .iter_mut()
                .find(|item| item.id == challenge_id)
            {
                if !item.is_completed {
                    item.is_completed = true;
                    item.completed_at = Some(now);
                }
            }
        }
        GamificationAction::UpdateStreak { current, longest } => {
            next.current_streak = current;
            next.longest_streak = longest;
        }
        GamificationAction::LoadData(loaded) => return *loaded,
    }
    next
}
