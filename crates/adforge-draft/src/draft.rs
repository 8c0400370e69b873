//! The draft ad record and its update types.

use serde::{Deserialize, Serialize};

/// Maximum script length in characters.
pub const MAX_SCRIPT_CHARS: usize = 500;

/// Approximate spoken characters per second, used for duration estimates.
const CHARS_PER_SECOND: usize = 15;

/// Minimum billable spot length in seconds.
const MIN_SPOT_SECONDS: u32 = 15;

/// Advertisers available in the creative library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Advertiser {
    /// Acme Corporation.
    Acme,
    /// Globex Industries.
    Globex,
    /// Initech Technologies.
    Initech,
    /// Umbrella Corp.
    Umbrella,
}

impl Advertiser {
    /// Returns the advertiser id as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Advertiser::Acme => "acme",
            Advertiser::Globex => "globex",
            Advertiser::Initech => "initech",
            Advertiser::Umbrella => "umbrella",
        }
    }

    /// Returns the display name shown in the advertiser picker.
    pub fn display_name(&self) -> &'static str {
        match self {
            Advertiser::Acme => "Acme Corporation",
            Advertiser::Globex => "Globex Industries",
            Advertiser::Initech => "Initech Technologies",
            Advertiser::Umbrella => "Umbrella Corp",
        }
    }

    /// Returns all advertisers.
    pub fn all() -> &'static [Advertiser] {
        &[
            Advertiser::Acme,
            Advertiser::Globex,
            Advertiser::Initech,
            Advertiser::Umbrella,
        ]
    }
}

impl std::fmt::Display for Advertiser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Advertiser {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "acme" => Ok(Advertiser::Acme),
            "globex" => Ok(Advertiser::Globex),
            "initech" => Ok(Advertiser::Initech),
            "umbrella" => Ok(Advertiser::Umbrella),
            _ => Err(format!("unknown advertiser: {}", s)),
        }
    }
}

/// Mixing knobs for the voice/bed blend.
///
/// Each knob is independent and clamped to its own range; there are no
/// cross-field invariants. These are inputs to a downstream mixing backend
/// and carry no signal processing of their own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MixSettings {
    /// Delay before the voice starts after the bed begins, in ms (0-2000).
    pub voice_delay_ms: u32,
    /// Extra spacing before and after the voice, in ms (0-1000).
    pub voice_hug_ms: u32,
    /// Background-track volume, in percent (0-100).
    pub bed_volume_pct: u32,
    /// Delay before the bed starts, in ms (0-2000).
    pub bed_delay_ms: u32,
    /// Voice/bed balance, in percent (0-100, higher = more voice).
    pub mix_ratio_pct: u32,
    /// Fade-in at the start, in seconds (0.0-5.0).
    pub fade_in_secs: f64,
    /// Fade-out at the end, in seconds (0.0-5.0).
    pub fade_out_secs: f64,
    /// Ducking transition length while voice is present, in ms (0-1000).
    pub ducking_ms: u32,
}

impl MixSettings {
    /// Valid range for `voice_delay_ms`.
    pub const VOICE_DELAY_RANGE_MS: (u32, u32) = (0, 2000);
    /// Valid range for `voice_hug_ms`.
    pub const VOICE_HUG_RANGE_MS: (u32, u32) = (0, 1000);
    /// Valid range for `bed_volume_pct`.
    pub const BED_VOLUME_RANGE_PCT: (u32, u32) = (0, 100);
    /// Valid range for `bed_delay_ms`.
    pub const BED_DELAY_RANGE_MS: (u32, u32) = (0, 2000);
    /// Valid range for `mix_ratio_pct`.
    pub const MIX_RATIO_RANGE_PCT: (u32, u32) = (0, 100);
    /// Valid range for `fade_in_secs` and `fade_out_secs`.
    pub const FADE_RANGE_SECS: (f64, f64) = (0.0, 5.0);
    /// Valid range for `ducking_ms`.
    pub const DUCKING_RANGE_MS: (u32, u32) = (0, 1000);

    /// Returns a copy with every knob clamped to its valid range.
    pub fn clamped(&self) -> Self {
        let (fade_lo, fade_hi) = Self::FADE_RANGE_SECS;
        Self {
            voice_delay_ms: clamp_u32(self.voice_delay_ms, Self::VOICE_DELAY_RANGE_MS),
            voice_hug_ms: clamp_u32(self.voice_hug_ms, Self::VOICE_HUG_RANGE_MS),
            bed_volume_pct: clamp_u32(self.bed_volume_pct, Self::BED_VOLUME_RANGE_PCT),
            bed_delay_ms: clamp_u32(self.bed_delay_ms, Self::BED_DELAY_RANGE_MS),
            mix_ratio_pct: clamp_u32(self.mix_ratio_pct, Self::MIX_RATIO_RANGE_PCT),
            fade_in_secs: self.fade_in_secs.clamp(fade_lo, fade_hi),
            fade_out_secs: self.fade_out_secs.clamp(fade_lo, fade_hi),
            ducking_ms: clamp_u32(self.ducking_ms, Self::DUCKING_RANGE_MS),
        }
    }

    /// Returns true if every knob is already within its valid range.
    pub fn in_range(&self) -> bool {
        *self == self.clamped()
    }
}

impl Default for MixSettings {
    fn default() -> Self {
        Self {
            voice_delay_ms: 0,
            voice_hug_ms: 200,
            bed_volume_pct: 50,
            bed_delay_ms: 0,
            mix_ratio_pct: 70,
            fade_in_secs: 0.5,
            fade_out_secs: 0.5,
            ducking_ms: 300,
        }
    }
}

fn clamp_u32(value: u32, (lo, hi): (u32, u32)) -> u32 {
    value.clamp(lo, hi)
}

/// The in-progress, unsaved ad composition.
///
/// Every wizard step reads and writes this one record. Navigation never
/// resets any field; only an explicit [`DraftAd::apply`] changes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DraftAd {
    /// The ad copy, at most [`MAX_SCRIPT_CHARS`] characters.
    pub script: String,

    /// Reference into the voice catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_voice_id: Option<String>,

    /// Reference into the track catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_track_id: Option<String>,

    /// Mixing knobs.
    pub mix: MixSettings,

    /// Advertiser the finished ad is filed under. Required at save time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advertiser: Option<Advertiser>,

    /// Name of the ad in the creative library. Required at save time.
    pub ad_name: String,
}

impl DraftAd {
    /// Creates an empty draft with default mix settings.
    pub fn new() -> Self {
        Self {
            script: String::new(),
            selected_voice_id: None,
            selected_track_id: None,
            mix: MixSettings::default(),
            advertiser: None,
            ad_name: String::new(),
        }
    }

    /// Shallow-merges a patch into the draft.
    ///
    /// Fields absent from the patch are left untouched. The script is
    /// truncated to [`MAX_SCRIPT_CHARS`] and every mix knob is clamped to
    /// its range, so a direct caller cannot smuggle in values the edit
    /// surfaces would have refused.
    pub fn apply(&mut self, patch: DraftPatch) {
        if let Some(script) = patch.script {
            self.script = truncate_chars(script, MAX_SCRIPT_CHARS);
        }
        if let Some(voice_id) = patch.selected_voice_id {
            self.selected_voice_id = voice_id;
        }
        if let Some(track_id) = patch.selected_track_id {
            self.selected_track_id = track_id;
        }
        if let Some(mix) = patch.mix {
            self.mix = mix.clamped();
        }
        if let Some(advertiser) = patch.advertiser {
            self.advertiser = advertiser;
        }
        if let Some(ad_name) = patch.ad_name {
            self.ad_name = ad_name;
        }
    }

    /// Number of characters in the script.
    pub fn script_chars(&self) -> usize {
        self.script.chars().count()
    }

    /// Estimated spot length in seconds, from script length at roughly
    /// fifteen characters per second, floored at the minimum spot length.
    pub fn estimated_duration_secs(&self) -> u32 {
        let spoken = self.script_chars().div_ceil(CHARS_PER_SECOND) as u32;
        spoken.max(MIN_SPOT_SECONDS)
    }

    /// Parses a draft from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the draft to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Default for DraftAd {
    fn default() -> Self {
        Self::new()
    }
}

/// A partial update to a [`DraftAd`].
///
/// Outer `Option`s mark which fields the patch touches. For the two
/// selection fields the inner `Option` is the new value, so a patch can
/// both set and clear a selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DraftPatch {
    /// New script text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    /// New voice selection (or `Some(None)` to clear it).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_voice_id: Option<Option<String>>,
    /// New track selection (or `Some(None)` to clear it).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_track_id: Option<Option<String>>,
    /// New mix settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mix: Option<MixSettings>,
    /// New advertiser selection (or `Some(None)` to clear it).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advertiser: Option<Option<Advertiser>>,
    /// New ad name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_name: Option<String>,
}

impl DraftPatch {
    /// Sets the script text.
    pub fn script(mut self, script: impl Into<String>) -> Self {
        self.script = Some(script.into());
        self
    }

    /// Selects a voice.
    pub fn voice(mut self, voice_id: impl Into<String>) -> Self {
        self.selected_voice_id = Some(Some(voice_id.into()));
        self
    }

    /// Selects a background track.
    pub fn track(mut self, track_id: impl Into<String>) -> Self {
        self.selected_track_id = Some(Some(track_id.into()));
        self
    }

    /// Replaces the mix settings.
    pub fn mix(mut self, mix: MixSettings) -> Self {
        self.mix = Some(mix);
        self
    }

    /// Selects an advertiser.
    pub fn advertiser(mut self, advertiser: Advertiser) -> Self {
        self.advertiser = Some(Some(advertiser));
        self
    }

    /// Sets the ad name.
    pub fn ad_name(mut self, ad_name: impl Into<String>) -> Self {
        self.ad_name = Some(ad_name.into());
        self
    }
}

fn truncate_chars(s: String, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((byte_index, _)) => s[..byte_index].to_string(),
        None => s,
    }
}
