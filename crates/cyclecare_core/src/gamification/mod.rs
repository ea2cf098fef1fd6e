//! Gamification layer: XP, levels, badges, missions and challenges.
//!
//! # Responsibility
//! - Model gamification as an explicit state machine.
//! - Expose a ledger trait so core use cases can award XP.
//!
//! # Invariants
//! - Transitions go through `reducer::reduce` only.
//! - Static tables in `catalog` are never written at runtime.

pub mod catalog;
pub mod ledger;
pub mod reducer;
pub mod state;

pub use catalog::{level_for_xp, level_progress, LevelDef, LevelProgress, XpSource, LEVELS};
pub use ledger::{GamificationStore, XpLedger};
pub use reducer::{reduce, GamificationAction};
pub use state::GamificationState;
