//! Vaccination dose checklist.
//!
//! # Invariants
//! - `doses` never exceeds the series total.
//! - A series is completed exactly when `doses >= total_doses`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VaccineKind {
    Hpv,
    Gardasil,
    CervicalCancer,
    Mmr,
    HepatitisB,
    HepatitisA,
    Flu,
    Tdap,
}

impl VaccineKind {
    pub const ALL: [Self; 8] = [
        Self::Hpv,
        Self::Gardasil,
        Self::CervicalCancer,
        Self::Mmr,
        Self::HepatitisB,
        Self::HepatitisA,
        Self::Flu,
        Self::Tdap,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hpv => "hpv",
            Self::Gardasil => "gardasil",
            Self::CervicalCancer => "cervical_cancer",
            Self::Mmr => "mmr",
            Self::HepatitisB => "hepatitis_b",
            Self::HepatitisA => "hepatitis_a",
            Self::Flu => "flu",
            Self::Tdap => "tdap",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
    }

    /// Doses in a full series.
    pub fn total_doses(self) -> u32 {
        match self {
            Self::Hpv | Self::Gardasil | Self::HepatitisB => 3,
            Self::CervicalCancer | Self::Mmr | Self::HepatitisA => 2,
            Self::Flu | Self::Tdap => 1,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Hpv => "HPV 백신",
            Self::Gardasil => "HPV 4가 백신",
            Self::CervicalCancer => "자궁경부암 백신",
            Self::Mmr => "MMR 백신",
            Self::HepatitisB => "B형 간염 백신",
            Self::HepatitisA => "A형 간염 백신",
            Self::Flu => "독감 백신",
            Self::Tdap => "Tdap 백신",
        }
    }
}

/// Progress of one vaccine series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoseProgress {
    pub doses: u32,
    pub total_doses: u32,
}

impl DoseProgress {
    pub fn is_completed(&self) -> bool {
        self.doses >= self.total_doses
    }
}

/// Outcome of recording one dose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoseOutcome {
    Recorded { doses: u32, total_doses: u32 },
    /// This dose finished the series.
    SeriesCompleted,
    /// Series was already complete; nothing changed.
    AlreadyComplete,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaccinationChecklist {
    entries: BTreeMap<VaccineKind, DoseProgress>,
}

impl Default for VaccinationChecklist {
    fn default() -> Self {
        let entries = VaccineKind::ALL
            .into_iter()
            .map(|kind| {
                (
                    kind,
                    DoseProgress {
                        doses: 0,
                        total_doses: kind.total_doses(),
                    },
                )
            })
            .collect();
        Self { entries }
    }
}

impl VaccinationChecklist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn progress(&self, kind: VaccineKind) -> DoseProgress {
        self.entries.get(&kind).copied().unwrap_or(DoseProgress {
            doses: 0,
            total_doses: kind.total_doses(),
        })
    }

    /// Records one more dose, capped at the series total.
    pub fn complete_dose(&mut self, kind: VaccineKind) -> DoseOutcome {
        let entry = self.entry_mut(kind);
        if entry.is_completed() {
            return DoseOutcome::AlreadyComplete;
        }
        entry.doses += 1;
        if entry.is_completed() {
            DoseOutcome::SeriesCompleted
        } else {
            DoseOutcome::Recorded {
                doses: entry.doses,
                total_doses: entry.total_doses,
            }
        }
    }

    pub fn reset(&mut self, kind: VaccineKind) {
        self.entry_mut(kind).doses = 0;
    }

    /// Sets the dose count directly, clamped to the series total.
    pub fn set_doses(&mut self, kind: VaccineKind, doses: u32) -> DoseProgress {
        let entry = self.entry_mut(kind);
        entry.doses = doses.min(entry.total_doses);
        *entry
    }

    pub fn all_completed(&self) -> bool {
        self.entries.values().all(DoseProgress::is_completed)
    }

    pub fn completed_count(&self) -> usize {
        self.entries
            .values()
            .filter(|progress| progress.is_completed())
            .count()
    }

    fn entry_mut(&mut self, kind: VaccineKind) -> &mut DoseProgress {
        self.entries.entry(kind).or_insert(DoseProgress {
            doses: 0,
            total_doses: kind.total_doses(),
        })
    }
}
