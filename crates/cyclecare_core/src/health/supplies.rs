//! Period supplies checklist.

use serde::Serialize;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SupplyItem {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SupplyCategory {
    pub name: &'static str,
    pub color: &'static str,
    pub items: &'static [SupplyItem],
}

pub const SUPPLY_CATALOG: &[SupplyCategory] = &[
    SupplyCategory {
        name: "생리용품",
        color: "#8b5cf6",
        items: &[
            SupplyItem { id: 1, name: "생리대 (일반형)", description: "낮 시간 사용" },
            SupplyItem { id: 2, name: "생리대 (야간형)", description: "밤 시간 및 많은 날" },
            SupplyItem { id: 3, name: "탐폰", description: "수영이나 운동시 편리" },
            SupplyItem { id: 4, name: "생리컵", description: "친환경적이고 경제적" },
            SupplyItem { id: 5, name: "팬티라이너", description: "생리 전후 사용" },
        ],
    },
    SupplyCategory {
        name: "건강 관리",
        color: "#6366f1",
        items: &[
            SupplyItem { id: 6, name: "진통제", description: "생리통 완화용" },
            SupplyItem { id: 7, name: "철분 보충제", description: "빈혈 예방" },
            SupplyItem { id: 8, name: "마그네슘", description: "근육 경련 완화" },
            SupplyItem { id: 9, name: "비타민 B6", description: "PMS 증상 완화" },
        ],
    },
    SupplyCategory {
        name: "편의용품",
        color: "#5b21b6",
        items: &[
            SupplyItem { id: 10, name: "핫팩", description: "복부 및 허리 찜질용" },
            SupplyItem { id: 11, name: "편안한 속옷", description: "면 소재 권장" },
            SupplyItem { id: 12, name: "수분 보충", description: "따뜻한 차나 물" },
            SupplyItem { id: 13, name: "다크 초콜릿", description: "기분 개선 및 마그네슘 공급" },
        ],
    },
    SupplyCategory {
        name: "차/음료",
        color: "#52C41A",
        items: &[
            SupplyItem { id: 14, name: "캐모마일 차", description: "진정 및 수면 도움" },
            SupplyItem { id: 15, name: "생강차", description: "메스꺼움 완화" },
            SupplyItem { id: 16, name: "라즈베리 잎 차", description: "자궁 건강 지원" },
            SupplyItem { id: 17, name: "따뜻한 물", description: "탈수 방지" },
        ],
    },
];

pub fn find_supply(id: u32) -> Option<&'static SupplyItem> {
    SUPPLY_CATALOG
        .iter()
        .flat_map(|category| category.items.iter())
        .find(|item| item.id == id)
}

pub fn total_supply_count() -> usize {
    SUPPLY_CATALOG.iter().map(|category| category.items.len()).sum()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SupplyError {
    UnknownItem(u32),
}

impl Display for SupplyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownItem(id) => write!(f, "supply item not found: {id}"),
        }
    }
}

impl Error for SupplyError {}

/// Checked state of the supplies catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SupplyChecklist {
    checked: BTreeSet<u32>,
}

impl SupplyChecklist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips one item and returns its new checked state.
    pub fn toggle(&mut self, id: u32) -> Result<bool, SupplyError> {
        if find_supply(id).is_none() {
            return Err(SupplyError::UnknownItem(id));
        }
        if self.checked.remove(&id) {
            Ok(false)
        } else {
            self.checked.insert(id);
            Ok(true)
        }
    }

    pub fn is_checked(&self, id: u32) -> bool {
        self.checked.contains(&id)
    }

    pub fn checked_count(&self) -> usize {
        self.checked.len()
    }
}
