//! Built-in demo catalogs.
//!
//! Default providers for environments without a real catalog service:
//! tests, demos, and local development.

use super::{Gender, Track, TrackCatalog, Voice, VoiceCatalog};

/// Voice catalog backed by the built-in demo data.
#[derive(Debug, Clone)]
pub struct BuiltinVoiceCatalog {
    voices: Vec<Voice>,
}

impl BuiltinVoiceCatalog {
    /// Creates the catalog with its ten demo voices.
    pub fn new() -> Self {
        Self {
            voices: demo_voices(),
        }
    }
}

impl Default for BuiltinVoiceCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl VoiceCatalog for BuiltinVoiceCatalog {
    fn voices(&self) -> &[Voice] {
        &self.voices
    }
}

/// Track catalog backed by the built-in demo data.
#[derive(Debug, Clone)]
pub struct BuiltinTrackCatalog {
    tracks: Vec<Track>,
}

impl BuiltinTrackCatalog {
    /// Creates the catalog with its five demo tracks.
    pub fn new() -> Self {
        Self {
            tracks: demo_tracks(),
        }
    }
}

impl Default for BuiltinTrackCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackCatalog for BuiltinTrackCatalog {
    fn tracks(&self) -> &[Track] {
        &self.tracks
    }
}

fn voice(
    id: &str,
    name: &str,
    gender: Gender,
    accent: &str,
    language: &str,
    description: &str,
    is_new: bool,
    is_premium: bool,
) -> Voice {
    Voice {
        id: id.to_string(),
        name: name.to_string(),
        gender,
        accent: accent.to_string(),
        language: language.to_string(),
        description: description.to_string(),
        is_new,
        is_premium,
    }
}

fn demo_voices() -> Vec<Voice> {
    vec![
        voice(
            "voice1",
            "Michael",
            Gender::Male,
            "American",
            "English",
            "Deep, authoritative voice ideal for corporate messaging",
            false,
            true,
        ),
        voice(
            "voice2",
            "Sarah",
            Gender::Female,
            "American",
            "English",
            "Warm, friendly voice perfect for approachable brands",
            true,
            true,
        ),
        voice(
            "voice3",
            "James",
            Gender::Male,
            "British",
            "English",
            "Sophisticated, refined voice with excellent articulation",
            false,
            true,
        ),
        voice(
            "voice4",
            "Emma",
            Gender::Female,
            "British",
            "English",
            "Clear, professional voice with excellent pacing",
            true,
            false,
        ),
        voice(
            "voice5",
            "David",
            Gender::Male,
            "Australian",
            "English",
            "Casual, relatable voice with natural inflection",
            true,
            false,
        ),
        voice(
            "voice6",
            "Sophia",
            Gender::Female,
            "Australian",
            "English",
            "Energetic, upbeat voice ideal for promotional content",
            false,
            false,
        ),
        voice(
            "voice7",
            "Carlos",
            Gender::Male,
            "Latin American",
            "Spanish",
            "Warm, engaging voice with perfect Spanish pronunciation",
            true,
            true,
        ),
        voice(
            "voice8",
            "Marie",
            Gender::Female,
            "Parisian",
            "French",
            "Elegant, sophisticated voice with authentic French accent",
            false,
            true,
        ),
        voice(
            "voice9",
            "Hans",
            Gender::Male,
            "Standard",
            "German",
            "Clear, authoritative voice with precise diction",
            false,
            false,
        ),
        voice(
            "voice10",
            "Yuki",
            Gender::Female,
            "Tokyo",
            "Japanese",
            "Polite, professional voice with natural intonation",
            true,
            false,
        ),
    ]
}

fn track(
    id: &str,
    name: &str,
    description: &str,
    duration_seconds: u32,
    tags: &[&str],
    is_premium: bool,
) -> Track {
    Track {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        duration_seconds,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        is_premium,
    }
}

fn demo_tracks() -> Vec<Track> {
    vec![
        track(
            "track1",
            "Corporate Success",
            "Uplifting corporate track with modern elements",
            120,
            &["Corporate", "Uplifting", "Professional"],
            true,
        ),
        track(
            "track2",
            "Inspiring Journey",
            "Emotional piano-driven composition with strings",
            90,
            &["Emotional", "Inspiring", "Cinematic"],
            true,
        ),
        track(
            "track3",
            "Tech Innovation",
            "Modern electronic track with a forward-thinking feel",
            60,
            &["Technology", "Modern", "Dynamic"],
            true,
        ),
        track(
            "track4",
            "Gentle Acoustic",
            "Warm acoustic guitar with subtle percussion",
            180,
            &["Acoustic", "Warm", "Relaxed"],
            false,
        ),
        track(
            "track5",
            "Urban Energy",
            "Upbeat urban track with contemporary rhythm",
            75,
            &["Urban", "Energetic", "Contemporary"],
            false,
        ),
    ]
}
