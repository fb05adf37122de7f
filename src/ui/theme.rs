//! Tone helpers so every result surface colours a recommendation the same way.

use crate::domain::{EstimateResult, NoteSeverity, Recommendation};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Good,
    Caution,
    Alert,
    /// Cost per square foot is undefined, so no recommendation applies.
    Neutral,
}

impl Tone {
    pub fn for_result(result: &EstimateResult) -> Self {
        if !result.has_defined_cost_per_sqft() {
            return Tone::Neutral;
        }
        match result.recommendation {
            Recommendation::Economical => Tone::Good,
            Recommendation::Negotiate => Tone::Caution,
            Recommendation::HighCost => Tone::Alert,
        }
    }
}

// ============================================
// RESULT STYLES
// ============================================

pub fn badge_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Good => "badge badge-good",
        Tone::Caution => "badge badge-caution",
        Tone::Alert => "badge badge-alert",
        Tone::Neutral => "badge badge-neutral",
    }
}

pub fn kpi_value_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Good => "kpi-value text-good",
        Tone::Caution => "kpi-value text-caution",
        Tone::Alert => "kpi-value text-alert",
        Tone::Neutral => "kpi-value",
    }
}

pub fn note_class(severity: NoteSeverity) -> &'static str {
    match severity {
        NoteSeverity::Blocking => "note note-blocking",
        NoteSeverity::Warning => "note note-warning",
        NoteSeverity::Info => "note note-info",
    }
}

pub fn note_icon(severity: NoteSeverity) -> &'static str {
    match severity {
        NoteSeverity::Blocking => "⛔",
        NoteSeverity::Warning => "⚠️",
        NoteSeverity::Info => "ℹ️",
    }
}

// ============================================
// NAVIGATION
// ============================================

pub fn nav_button(active: bool) -> &'static str {
    if active {
        "nav-button nav-button-active"
    } else {
        "nav-button"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{compute, InputParameters, ParamField};

    #[test]
    fn tone_follows_recommendation() {
        let result = compute(&InputParameters::default());
        assert_eq!(Tone::for_result(&result), Tone::Caution);

        let cheap = compute(&InputParameters::default().with(ParamField::LandPrice, 0.0));
        assert_eq!(Tone::for_result(&cheap), Tone::Good);
    }

    #[test]
    fn undefined_cost_per_sqft_is_neutral() {
        let result = compute(&InputParameters::default().with(ParamField::Sqft, 0.0));
        assert_eq!(Tone::for_result(&result), Tone::Neutral);
    }

    #[test]
    fn negative_sqft_is_neutral_not_economical() {
        let params = InputParameters::default().with(ParamField::Sqft, -100.0);
        let result = compute(&params);
        assert_eq!(result.recommendation, Recommendation::Economical);
        assert_eq!(Tone::for_result(&result), Tone::Neutral);
        assert_eq!(badge_class(Tone::for_result(&result)), "badge badge-neutral");
    }
}
