//! Health content and checklists shown on the health and supplies tabs.

pub mod supplies;
pub mod tips;
pub mod vaccination;

pub use supplies::{SupplyChecklist, SupplyError, SUPPLY_CATALOG};
pub use tips::{phase_tips, CyclePhase, PhaseTips};
pub use vaccination::{DoseOutcome, DoseProgress, VaccinationChecklist, VaccineKind};
