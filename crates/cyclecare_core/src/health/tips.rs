//! Static health tips per cycle phase.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CyclePhase {
    Period,
    Fertile,
    Ovulation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhaseTips {
    pub title: &'static str,
    pub color: &'static str,
    pub tips: &'static [&'static str],
    pub symptoms: &'static [&'static str],
}

const PERIOD_TIPS: PhaseTips = PhaseTips {
    title: "생리 기간",
    color: "#FFB6C1",
    tips: &[
        "충분한 수분 섭취로 체내 독소를 배출하세요",
        "따뜻한 찜질팩으로 복부 통증을 완화하세요",
        "가벼운 요가나 스트레칭으로 몸의 긴장을 풀어주세요",
        "철분이 풍부한 음식을 섭취하세요",
        "충분한 휴식과 수면을 취하세요",
    ],
    symptoms: &["복부 통증", "요통", "피로감", "기분 변화", "부종"],
};

const FERTILE_TIPS: PhaseTips = PhaseTips {
    title: "가임기",
    color: "#E6E6FA",
    tips: &[
        "균형 잡힌 영양소 섭취로 몸 컨디션을 최적화하세요",
        "규칙적인 운동으로 혈액 순환을 개선하세요",
        "스트레스 관리에 더욱 신경 쓰세요",
        "충분한 엽산 섭취를 권장합니다",
        "금연과 금주로 건강한 생활을 유지하세요",
    ],
    symptoms: &["기초체온 상승", "분비물 증가", "에너지 증가", "집중력 향상"],
};

const OVULATION_TIPS: PhaseTips = PhaseTips {
    title: "배란일",
    color: "#FFE4B5",
    tips: &[
        "기초체온이 약간 상승할 수 있습니다",
        "가임력이 가장 높은 시기입니다",
        "몸의 변화를 세심하게 관찰해보세요",
        "충분한 수분 섭취가 중요합니다",
        "과도한 운동은 피하고 적절한 휴식을 취하세요",
    ],
    symptoms: &["한쪽 난소 통증", "분비물 변화", "기초체온 상승", "성욕 증가"],
};

pub fn phase_tips(phase: CyclePhase) -> &'static PhaseTips {
    match phase {
        CyclePhase::Period => &PERIOD_TIPS,
        CyclePhase::Fertile => &FERTILE_TIPS,
        CyclePhase::Ovulation => &OVULATION_TIPS,
    }
}
