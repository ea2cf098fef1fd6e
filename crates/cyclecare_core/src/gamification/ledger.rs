//! XP ledger seam and the default in-process store.
//!
//! # Responsibility
//! - Let core use cases award XP without owning gamification state.
//! - Apply reducer transitions to a copy-on-write state snapshot.

use super::catalog::XpSource;
use super::reducer::{reduce, GamificationAction};
use super::state::GamificationState;
use chrono::Utc;
use log::info;
use std::sync::Arc;

/// Collaborator notified when a user action earns XP.
pub trait XpLedger {
    fn award(&mut self, source: XpSource, amount: u32, description: &str);
}

/// Holds the current gamification state and dispatches actions to `reduce`.
#[derive(Debug, Clone)]
pub struct GamificationStore {
    state: Arc<GamificationState>,
}

impl Default for GamificationStore {
    fn default() -> Self {
        Self::new(GamificationState::initial(Utc::now()))
    }
}

impl GamificationStore {
    pub fn new(state: GamificationState) -> Self {
        Self {
            state: Arc::new(state),
        }
    }

    /// Current immutable snapshot.
    pub fn state(&self) -> Arc<GamificationState> {
        Arc::clone(&self.state)
    }

    /// Applies one action and swaps in the resulting state.
    pub fn dispatch(&mut self, action: GamificationAction) {
        let previous_level = self.state.user.level;
        let next = reduce(&self.state, action, Utc::now());
        if next.user.level != previous_level {
            info!(
                "event=level_changed module=gamification status=ok from={} to={}",
                previous_level, next.user.level
            );
        }
        self.state = Arc::new(next);
    }

    pub fn add_xp(&mut self, amount: u32, source: XpSource, description: impl Into<String>) {
        self.dispatch(GamificationAction::AddXp {
            amount,
            source,
            description: description.into(),
        });
    }

    pub fn earn_badge(&mut self, badge_id: impl Into<String>) {
        self.dispatch(GamificationAction::EarnBadge {
            badge_id: badge_id.into(),
        });
    }

    pub fn complete_achievement(&mut self, achievement_id: impl Into<String>) {
        self.dispatch(GamificationAction::CompleteAchievement {
            achievement_id: achievement_id.into(),
        });
    }

    pub fn complete_mission(&mut self, mission_id: impl Into<String>) {
        self.dispatch(GamificationAction::CompleteMission {
            mission_id: mission_id.into(),
        });
    }

    pub fn complete_challenge(&mut self, challenge_id: impl Into<String>) {
        self.dispatch(GamificationAction::CompleteChallenge {
            challenge_id: challenge_id.into(),
        });
    }

    pub fn update_streak(&mut self, current: u32, longest: u32) {
        self.dispatch(GamificationAction::UpdateStreak { current, longest });
    }
}

impl XpLedger for GamificationStore {
    fn award(&mut self, source: XpSource, amount: u32, description: &str) {
        self.add_xp(amount, source, description);
        info!(
            "event=xp_awarded module=gamification status=ok source={} amount={} total_xp={}",
            source.as_str(),
            amount,
            self.state.user.total_xp
        );
    }
}
