//! Draft validation logic.
//!
//! Three layers, all pure:
//!
//! - [`can_advance`]: the per-step gate controlling forward navigation
//! - [`save_field_errors`]: the two required-at-save fields, as flags the
//!   finalization surface renders inline
//! - [`validate_draft`]: full coded validation of a draft, including
//!   catalog membership when catalogs are supplied

use crate::catalog::{TrackCatalog, VoiceCatalog};
use crate::draft::{DraftAd, MAX_SCRIPT_CHARS};
use crate::error::{
    ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};
use crate::step::WizardStep;

/// Script lengths at or above this fraction of the cap draw a warning.
const SCRIPT_CAP_WARNING_FRACTION: f64 = 0.9;

/// Decides whether the wizard may advance past a step.
///
/// Referentially transparent: same draft, same answer, no side effects.
/// [`WizardStep::Preview`] is terminal, so its gate never opens.
pub fn can_advance(step: WizardStep, draft: &DraftAd) -> bool {
    match step {
        WizardStep::Script => !draft.script.trim().is_empty(),
        WizardStep::Voice => draft.selected_voice_id.is_some(),
        WizardStep::Track => draft.selected_track_id.is_some(),
        WizardStep::Mixing => true,
        WizardStep::Preview => false,
    }
}

/// Per-field save validation flags.
///
/// A flag is `true` when that field is *invalid*, matching how the
/// finalization surface highlights fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaveFieldErrors {
    /// No advertiser selected.
    pub advertiser: bool,
    /// Ad name empty after trimming.
    pub ad_name: bool,
}

impl SaveFieldErrors {
    /// True when both required fields are valid and the save may proceed.
    pub fn is_ok(&self) -> bool {
        !self.advertiser && !self.ad_name
    }
}

/// Validates the two fields required at save time.
pub fn save_field_errors(draft: &DraftAd) -> SaveFieldErrors {
    SaveFieldErrors {
        advertiser: draft.advertiser.is_none(),
        ad_name: draft.ad_name.trim().is_empty(),
    }
}

/// Validates a complete draft, without catalog membership checks.
pub fn validate_draft(draft: &DraftAd) -> ValidationResult {
    let mut result = ValidationResult::success();

    validate_script(draft, &mut result);
    validate_selections(draft, &mut result);
    validate_mix(draft, &mut result);
    validate_library_fields(draft, &mut result);

    result
}

/// Validates a complete draft, including that the selected voice and track
/// exist in the supplied catalogs.
pub fn validate_draft_against_catalogs(
    draft: &DraftAd,
    voices: &dyn VoiceCatalog,
    tracks: &dyn TrackCatalog,
) -> ValidationResult {
    let mut result = validate_draft(draft);

    if let Some(ref voice_id) = draft.selected_voice_id {
        if voices.voice(voice_id).is_none() {
            result.add_error(ValidationError::with_field(
                ErrorCode::UnknownVoice,
                format!("voice '{}' is not in the catalog", voice_id),
                "selected_voice_id",
            ));
        }
    }
    if let Some(ref track_id) = draft.selected_track_id {
        if tracks.track(track_id).is_none() {
            result.add_error(ValidationError::with_field(
                ErrorCode::UnknownTrack,
                format!("track '{}' is not in the catalog", track_id),
                "selected_track_id",
            ));
        }
    }

    result
}

fn validate_script(draft: &DraftAd, result: &mut ValidationResult) {
    let chars = draft.script_chars();

    if draft.script.trim().is_empty() {
        result.add_error(ValidationError::with_field(
            ErrorCode::EmptyScript,
            "script must not be empty",
            "script",
        ));
        return;
    }

    if chars > MAX_SCRIPT_CHARS {
        result.add_error(ValidationError::with_field(
            ErrorCode::ScriptTooLong,
            format!(
                "script is {} characters, the cap is {}",
                chars, MAX_SCRIPT_CHARS
            ),
            "script",
        ));
    } else if chars as f64 >= MAX_SCRIPT_CHARS as f64 * SCRIPT_CAP_WARNING_FRACTION {
        result.add_warning(ValidationWarning::with_field(
            WarningCode::ScriptNearCap,
            format!(
                "script is {} of {} characters",
                chars, MAX_SCRIPT_CHARS
            ),
            "script",
        ));
    }

    // Anything shorter than the minimum spot still renders as a 15s spot.
    if draft.estimated_duration_secs() == 15 && chars < 15 {
        result.add_warning(ValidationWarning::with_field(
            WarningCode::ScriptBelowMinimumSpot,
            "script is shorter than the minimum 15-second spot",
            "script",
        ));
    }
}

fn validate_selections(draft: &DraftAd, result: &mut ValidationResult) {
    if draft.selected_voice_id.is_none() {
        result.add_error(ValidationError::with_field(
            ErrorCode::NoVoiceSelected,
            "a voice must be selected",
            "selected_voice_id",
        ));
    }
    if draft.selected_track_id.is_none() {
        result.add_error(ValidationError::with_field(
            ErrorCode::NoTrackSelected,
            "a background track must be selected",
            "selected_track_id",
        ));
    }
}

fn validate_mix(draft: &DraftAd, result: &mut ValidationResult) {
    // Drafts built through apply() are always in range; this catches
    // records constructed directly or deserialized from elsewhere.
    if !draft.mix.in_range() {
        result.add_error(ValidationError::with_field(
            ErrorCode::MixKnobOutOfRange,
            "one or more mix knobs are outside their valid range",
            "mix",
        ));
    }
}

fn validate_library_fields(draft: &DraftAd, result: &mut ValidationResult) {
    let fields = save_field_errors(draft);
    if fields.advertiser {
        result.add_error(ValidationError::with_field(
            ErrorCode::MissingAdvertiser,
            "an advertiser must be selected",
            "advertiser",
        ));
    }
    if fields.ad_name {
        result.add_error(ValidationError::with_field(
            ErrorCode::EmptyAdName,
            "the ad needs a name",
            "ad_name",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin::{BuiltinTrackCatalog, BuiltinVoiceCatalog};
    use crate::draft::{Advertiser, DraftPatch, MixSettings};
    use pretty_assertions::assert_eq;

    fn make_complete_draft() -> DraftAd {
        let mut draft = DraftAd::new();
        draft.apply(
            DraftPatch::default()
                .script("Visit Acme today and save twenty percent on everything.")
                .voice("voice1")
                .track("track1")
                .advertiser(Advertiser::Acme)
                .ad_name("Spring sale"),
        );
        draft
    }

    #[test]
    fn test_gate_per_step() {
        let mut draft = DraftAd::new();
        assert!(!can_advance(WizardStep::Script, &draft));
        assert!(!can_advance(WizardStep::Voice, &draft));
        assert!(!can_advance(WizardStep::Track, &draft));
        assert!(can_advance(WizardStep::Mixing, &draft));
        assert!(!can_advance(WizardStep::Preview, &draft));

        draft.apply(DraftPatch::default().script("Buy now!"));
        assert!(can_advance(WizardStep::Script, &draft));

        draft.apply(DraftPatch::default().voice("voice2"));
        assert!(can_advance(WizardStep::Voice, &draft));

        draft.apply(DraftPatch::default().track("track5"));
        assert!(can_advance(WizardStep::Track, &draft));

        // Preview stays closed even with a finished draft.
        assert!(!can_advance(WizardStep::Preview, &make_complete_draft()));
    }

    #[test]
    fn test_gate_ignores_whitespace_script() {
        let mut draft = DraftAd::new();
        draft.apply(DraftPatch::default().script("   \n\t "));
        assert!(!can_advance(WizardStep::Script, &draft));
    }

    #[test]
    fn test_gate_is_idempotent() {
        let draft = make_complete_draft();
        for step in WizardStep::all() {
            assert_eq!(can_advance(*step, &draft), can_advance(*step, &draft));
        }
    }

    #[test]
    fn test_save_field_errors() {
        let mut draft = make_complete_draft();
        assert_eq!(save_field_errors(&draft), SaveFieldErrors::default());
        assert!(save_field_errors(&draft).is_ok());

        draft.advertiser = None;
        let errors = save_field_errors(&draft);
        assert!(errors.advertiser);
        assert!(!errors.ad_name);
        assert!(!errors.is_ok());

        draft.apply(DraftPatch::default().ad_name("   "));
        let errors = save_field_errors(&draft);
        assert!(errors.advertiser);
        assert!(errors.ad_name);
    }

    #[test]
    fn test_validate_complete_draft() {
        let result = validate_draft(&make_complete_draft());
        assert!(result.is_ok(), "errors: {:?}", result.errors);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validate_empty_draft() {
        let result = validate_draft(&DraftAd::new());
        assert!(!result.is_ok());
        assert!(result.has_error(ErrorCode::EmptyScript));
        assert!(result.has_error(ErrorCode::NoVoiceSelected));
        assert!(result.has_error(ErrorCode::NoTrackSelected));
        assert!(result.has_error(ErrorCode::MissingAdvertiser));
        assert!(result.has_error(ErrorCode::EmptyAdName));
    }

    #[test]
    fn test_script_near_cap_warns() {
        let mut draft = make_complete_draft();
        draft.apply(DraftPatch::default().script("x".repeat(460)));
        let result = validate_draft(&draft);
        assert!(result.is_ok());
        assert!(result
            .warnings
            .iter()
            .any(|w| w.code == WarningCode::ScriptNearCap));
    }

    #[test]
    fn test_script_over_cap_rejected() {
        // apply() truncates, so build the record directly.
        let mut draft = make_complete_draft();
        draft.script = "x".repeat(501);
        let result = validate_draft(&draft);
        assert!(result.has_error(ErrorCode::ScriptTooLong));
    }

    #[test]
    fn test_out_of_range_mix_rejected() {
        let mut draft = make_complete_draft();
        draft.mix = MixSettings {
            bed_volume_pct: 500,
            ..MixSettings::default()
        };
        let result = validate_draft(&draft);
        assert!(result.has_error(ErrorCode::MixKnobOutOfRange));
    }

    #[test]
    fn test_catalog_membership() {
        let voices = BuiltinVoiceCatalog::new();
        let tracks = BuiltinTrackCatalog::new();

        let draft = make_complete_draft();
        let result = validate_draft_against_catalogs(&draft, &voices, &tracks);
        assert!(result.is_ok(), "errors: {:?}", result.errors);

        let mut draft = make_complete_draft();
        draft.apply(DraftPatch::default().voice("voice99").track("track99"));
        let result = validate_draft_against_catalogs(&draft, &voices, &tracks);
        assert!(result.has_error(ErrorCode::UnknownVoice));
        assert!(result.has_error(ErrorCode::UnknownTrack));
    }
}
