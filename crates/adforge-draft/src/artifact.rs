//! Handles to rendered preview assets.

use serde::{Deserialize, Serialize};

/// An opaque reference to a generated preview asset.
///
/// The wizard never inspects the asset itself; it only hands the reference
/// to playback and save collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArtifactRef {
    /// URL or path of the rendered asset.
    pub url: String,
    /// Estimated playback length in seconds.
    pub estimated_duration_secs: u32,
}

impl ArtifactRef {
    /// Creates a new artifact reference.
    pub fn new(url: impl Into<String>, estimated_duration_secs: u32) -> Self {
        Self {
            url: url.into(),
            estimated_duration_secs,
        }
    }
}

/// Identifier for one render request within a session.
///
/// Requests are numbered monotonically; completions carry the id of the
/// request that produced them so stale responses can be discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RequestId(pub u64);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "request#{}", self.0)
    }
}
