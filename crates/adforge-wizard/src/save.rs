//! Finalization and the save seam.
//!
//! Saving has two halves: a pure gate ([`finalize`]) that turns wizard
//! state into a [`FinalizedAd`] once everything required is present, and
//! the [`SaveTarget`] trait behind which the creative library lives. The
//! library itself is an external collaborator; this crate ships only an
//! in-memory implementation for tests and demos.

use std::sync::Mutex;

use adforge_draft::{save_field_errors, ArtifactRef, DraftAd, SaveFieldErrors};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::WizardState;

/// A draft paired with its rendered preview, ready to be saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FinalizedAd {
    /// The completed draft.
    pub draft: DraftAd,
    /// The preview artifact generated from it.
    pub artifact: ArtifactRef,
}

/// Identifier assigned to a saved ad by the save target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SavedAdId(pub String);

impl std::fmt::Display for SavedAdId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Why a wizard state cannot be finalized yet.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FinalizeError {
    /// No preview has been generated (or the last one failed).
    #[error("generate a preview before saving")]
    NoPreview,

    /// One or both required library fields are invalid.
    #[error("required save fields are missing")]
    MissingFields(SaveFieldErrors),
}

/// Errors from the save target.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SaveError {
    /// The target rejected the ad.
    #[error("save target rejected the ad: {message}")]
    Rejected {
        /// Target-reported reason.
        message: String,
    },

    /// The target could not be reached.
    #[error("save target unavailable: {message}")]
    Unavailable {
        /// Transport-level reason.
        message: String,
    },
}

/// Gates finalization on the save validator and a ready preview.
///
/// Pure. Field errors are reported through
/// [`FinalizeError::MissingFields`] in the same invalid-is-`true` shape
/// the finalization surface renders inline.
pub fn finalize(state: &WizardState) -> Result<FinalizedAd, FinalizeError> {
    let fields = save_field_errors(&state.draft);
    if !fields.is_ok() {
        return Err(FinalizeError::MissingFields(fields));
    }

    let artifact = state
        .preview
        .artifact()
        .ok_or(FinalizeError::NoPreview)?
        .clone();

    Ok(FinalizedAd {
        draft: state.draft.clone(),
        artifact,
    })
}

/// The persistence seam: accepts a finalized ad, returns its library id.
#[async_trait::async_trait]
pub trait SaveTarget: Send + Sync {
    /// Saves a finalized ad.
    async fn save(&self, ad: FinalizedAd) -> Result<SavedAdId, SaveError>;
}

/// In-memory save target.
pub struct MemoryLibrary {
    ads: Mutex<Vec<(SavedAdId, FinalizedAd)>>,
}

impl MemoryLibrary {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self {
            ads: Mutex::new(Vec::new()),
        }
    }

    /// Number of saved ads.
    pub fn len(&self) -> usize {
        self.ads.lock().expect("library mutex poisoned").len()
    }

    /// True if nothing has been saved.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Looks up a saved ad by id.
    pub fn get(&self, id: &SavedAdId) -> Option<FinalizedAd> {
        self.ads
            .lock()
            .expect("library mutex poisoned")
            .iter()
            .find(|(saved_id, _)| saved_id == id)
            .map(|(_, ad)| ad.clone())
    }
}

impl Default for MemoryLibrary {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl SaveTarget for MemoryLibrary {
    async fn save(&self, ad: FinalizedAd) -> Result<SavedAdId, SaveError> {
        let mut ads = self.ads.lock().expect("library mutex poisoned");
        let id = SavedAdId(format!("ad-{}", ads.len() + 1));
        log::debug!("saved '{}' as {}", ad.draft.ad_name, id);
        ads.push((id.clone(), ad));
        Ok(id)
    }
}
