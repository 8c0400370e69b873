//! Voice and track catalog contracts.
//!
//! Catalogs are owned by external collaborators; the wizard only needs
//! lookup-by-id and filtered listing. Both are modeled as injectable
//! provider traits so production can back them with a service and tests
//! can use the built-in demo data in [`builtin`].

pub mod builtin;

use serde::{Deserialize, Serialize};

/// Voice gender, as presented in the catalog filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male voice.
    Male,
    /// Female voice.
    Female,
}

impl Gender {
    /// Returns the gender as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A synthesized voice available for the ad read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Voice {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Gender.
    pub gender: Gender,
    /// Accent (e.g., "American", "Parisian").
    pub accent: String,
    /// Spoken language.
    pub language: String,
    /// Short marketing description.
    pub description: String,
    /// Recently added to the catalog.
    pub is_new: bool,
    /// Part of the premium tier.
    pub is_premium: bool,
}

/// A background music track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Track {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Track length in seconds.
    pub duration_seconds: u32,
    /// Mood/style tags.
    pub tags: Vec<String>,
    /// Part of the premium tier.
    pub is_premium: bool,
}

/// Shelves (tabs) in the voice picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoiceShelf {
    /// Premium-tier voices.
    Premium,
    /// Recently added voices.
    New,
    /// Voices the user bookmarked. Bookmarks live outside the catalog, so
    /// a plain catalog provider serves this shelf empty.
    Bookmarked,
    /// Custom cloned voices. Same story as bookmarks.
    Custom,
}

impl VoiceShelf {
    /// Whether a catalog voice belongs on this shelf.
    pub fn contains(&self, voice: &Voice) -> bool {
        match self {
            VoiceShelf::Premium => voice.is_premium,
            VoiceShelf::New => voice.is_new,
            VoiceShelf::Bookmarked | VoiceShelf::Custom => false,
        }
    }
}

/// Facet filter for listing voices.
///
/// `None` facets match everything, so `VoiceFilter::default()` lists the
/// whole catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VoiceFilter {
    /// Restrict to one shelf.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shelf: Option<VoiceShelf>,
    /// Restrict to one gender.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Restrict to one language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl VoiceFilter {
    /// Whether a voice passes every set facet.
    pub fn matches(&self, voice: &Voice) -> bool {
        if let Some(shelf) = self.shelf {
            if !shelf.contains(voice) {
                return false;
            }
        }
        if let Some(gender) = self.gender {
            if voice.gender != gender {
                return false;
            }
        }
        if let Some(ref language) = self.language {
            if &voice.language != language {
                return false;
            }
        }
        true
    }
}

/// Facet filter for listing tracks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrackFilter {
    /// Restrict to the premium tier (or explicitly to the free tier).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium: Option<bool>,
    /// Require a tag (case-sensitive, as tags are curated).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl TrackFilter {
    /// Whether a track passes every set facet.
    pub fn matches(&self, track: &Track) -> bool {
        if let Some(premium) = self.premium {
            if track.is_premium != premium {
                return false;
            }
        }
        if let Some(ref tag) = self.tag {
            if !track.tags.iter().any(|t| t == tag) {
                return false;
            }
        }
        true
    }
}

/// Read-only provider of the voice catalog.
pub trait VoiceCatalog: Send + Sync {
    /// All voices, in catalog order.
    fn voices(&self) -> &[Voice];

    /// Looks up a voice by id.
    fn voice(&self, id: &str) -> Option<&Voice> {
        self.voices().iter().find(|v| v.id == id)
    }

    /// Lists voices passing the filter, in catalog order.
    fn filter(&self, filter: &VoiceFilter) -> Vec<&Voice> {
        self.voices().iter().filter(|v| filter.matches(v)).collect()
    }

    /// Distinct languages, in catalog order. Feeds the language facet.
    fn languages(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for voice in self.voices() {
            if !seen.contains(&voice.language.as_str()) {
                seen.push(voice.language.as_str());
            }
        }
        seen
    }

    /// Distinct genders, in catalog order. Feeds the gender facet.
    fn genders(&self) -> Vec<Gender> {
        let mut seen = Vec::new();
        for voice in self.voices() {
            if !seen.contains(&voice.gender) {
                seen.push(voice.gender);
            }
        }
        seen
    }
}

/// Read-only provider of the track catalog.
pub trait TrackCatalog: Send + Sync {
    /// All tracks, in catalog order.
    fn tracks(&self) -> &[Track];

    /// Looks up a track by id.
    fn track(&self, id: &str) -> Option<&Track> {
        self.tracks().iter().find(|t| t.id == id)
    }

    /// Lists tracks passing the filter, in catalog order.
    fn filter(&self, filter: &TrackFilter) -> Vec<&Track> {
        self.tracks().iter().filter(|t| filter.matches(t)).collect()
    }
}
