//! Static calendar palette.
//!
//! Process-wide constants, never written after compile time. The core only
//! exposes categorical style tokens; rendering stays in the UI.

use crate::model::mark::MarkCategory;
use serde::Serialize;

/// Main period color (violet 400).
pub const PERIOD_COLOR: &str = "#8b5cf6";
/// Fertile window color (violet 300).
pub const FERTILE_COLOR: &str = "#a78bfa";
/// Ovulation day color (violet 600).
pub const OVULATION_COLOR: &str = "#7c3aed";
/// Text color drawn on top of every mark.
pub const MARK_TEXT_COLOR: &str = "#FFFFFF";

const OPAQUE: u8 = 100;
const PREDICTED_OPACITY: u8 = 50;

/// Presentational hint attached to a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StyleHint {
    /// `#rrggbb` base color.
    pub color: &'static str,
    /// Opacity in percent, `0..=100`.
    pub opacity_percent: u8,
    pub text_color: &'static str,
}

impl StyleHint {
    /// `#rrggbb` when opaque, otherwise `#rrggbbaa`.
    pub fn css_color(&self) -> String {
        if self.opacity_percent >= OPAQUE {
            return self.color.to_string();
        }
        let alpha = (u32::from(self.opacity_percent) * 255 + 50) / 100;
        format!("{}{:02x}", self.color, alpha)
    }
}

/// Returns the palette entry for one mark category.
pub fn style_for(category: MarkCategory) -> StyleHint {
    let (color, opacity_percent) = match category {
        MarkCategory::PeriodActual => (PERIOD_COLOR, OPAQUE),
        MarkCategory::PeriodPredicted => (PERIOD_COLOR, PREDICTED_OPACITY),
        MarkCategory::Ovulation => (OVULATION_COLOR, OPAQUE),
        MarkCategory::Fertile => (FERTILE_COLOR, OPAQUE),
    };
    StyleHint {
        color,
        opacity_percent,
        text_color: MARK_TEXT_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::{style_for, PERIOD_COLOR};
    use crate::model::mark::MarkCategory;

    #[test]
    fn predicted_period_is_half_transparent_period_color() {
        let hint = style_for(MarkCategory::PeriodPredicted);
        assert_eq!(hint.color, PERIOD_COLOR);
        assert_eq!(hint.css_color(), "#8b5cf680");
    }

    #[test]
    fn opaque_colors_have_no_alpha_suffix() {
        assert_eq!(style_for(MarkCategory::Ovulation).css_color(), "#7c3aed");
    }
}
