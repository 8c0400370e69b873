//! The five wizard steps.

use serde::{Deserialize, Serialize};

/// A step in the ad-composition wizard.
///
/// Steps form a strictly linear sequence. [`WizardStep::Script`] is the
/// initial step and [`WizardStep::Preview`] is terminal: there is no
/// transition out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Script entry.
    Script,
    /// Voice selection.
    Voice,
    /// Background-track selection.
    Track,
    /// Mixing options.
    Mixing,
    /// Preview and finalization.
    Preview,
}

impl WizardStep {
    /// Returns the 1-based step number shown in the progress indicator.
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Script => 1,
            WizardStep::Voice => 2,
            WizardStep::Track => 3,
            WizardStep::Mixing => 4,
            WizardStep::Preview => 5,
        }
    }

    /// Looks up a step by its 1-based number.
    pub fn from_number(number: u8) -> Option<WizardStep> {
        match number {
            1 => Some(WizardStep::Script),
            2 => Some(WizardStep::Voice),
            3 => Some(WizardStep::Track),
            4 => Some(WizardStep::Mixing),
            5 => Some(WizardStep::Preview),
            _ => None,
        }
    }

    /// The step after this one, or `None` at the terminal step.
    pub fn next(&self) -> Option<WizardStep> {
        WizardStep::from_number(self.number() + 1)
    }

    /// The step before this one, or `None` at the initial step.
    pub fn prev(&self) -> Option<WizardStep> {
        match self.number() {
            1 => None,
            n => WizardStep::from_number(n - 1),
        }
    }

    /// Returns the step title as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            WizardStep::Script => "script",
            WizardStep::Voice => "voice",
            WizardStep::Track => "track",
            WizardStep::Mixing => "mixing",
            WizardStep::Preview => "preview",
        }
    }

    /// Returns all steps in wizard order.
    pub fn all() -> &'static [WizardStep] {
        &[
            WizardStep::Script,
            WizardStep::Voice,
            WizardStep::Track,
            WizardStep::Mixing,
            WizardStep::Preview,
        ]
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_numbers_round_trip() {
        for step in WizardStep::all() {
            assert_eq!(WizardStep::from_number(step.number()), Some(*step));
        }
        assert_eq!(WizardStep::from_number(0), None);
        assert_eq!(WizardStep::from_number(6), None);
    }

    #[test]
    fn test_linear_order() {
        assert_eq!(WizardStep::Script.next(), Some(WizardStep::Voice));
        assert_eq!(WizardStep::Mixing.next(), Some(WizardStep::Preview));
        assert_eq!(WizardStep::Preview.next(), None);
        assert_eq!(WizardStep::Script.prev(), None);
        assert_eq!(WizardStep::Preview.prev(), Some(WizardStep::Mixing));
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&WizardStep::Preview).unwrap();
        assert_eq!(json, "\"preview\"");
    }
}
