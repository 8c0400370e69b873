//! The wizard store: state, actions, and the pure reducer.

use adforge_draft::{
    can_advance, ArtifactRef, DraftAd, DraftPatch, RequestId, WizardStep,
};
use serde::{Deserialize, Serialize};

/// Where the preview stands within the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum PreviewState {
    /// No render requested yet (or the preview was cleared).
    Idle,
    /// A render is in flight.
    Pending {
        /// The outstanding request.
        request: RequestId,
    },
    /// The most recent render finished.
    Ready {
        /// The request that produced the artifact.
        request: RequestId,
        /// Handle to the rendered preview.
        artifact: ArtifactRef,
    },
    /// The most recent render failed.
    Failed {
        /// The request that failed.
        request: RequestId,
        /// Human-readable reason, surfaced to the user.
        reason: String,
    },
}

impl PreviewState {
    /// The artifact, if the preview is ready.
    pub fn artifact(&self) -> Option<&ArtifactRef> {
        match self {
            PreviewState::Ready { artifact, .. } => Some(artifact),
            _ => None,
        }
    }

    /// True while a render is in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self, PreviewState::Pending { .. })
    }
}

/// The complete wizard state.
///
/// Created at session start with defaults, mutated only through
/// [`reduce`], and discarded with the session. Nothing is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardState {
    /// The current step.
    pub step: WizardStep,
    /// The shared draft every step reads and writes.
    pub draft: DraftAd,
    /// Preview progress.
    pub preview: PreviewState,
}

impl WizardState {
    /// Initial state: first step, empty draft, no preview.
    pub fn new() -> Self {
        Self {
            step: WizardStep::Script,
            draft: DraftAd::new(),
            preview: PreviewState::Idle,
        }
    }

    /// Whether the gate for the current step is open.
    pub fn can_advance(&self) -> bool {
        can_advance(self.step, &self.draft)
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

/// An event the reducer folds into the state.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Merge a patch into the draft.
    Update(DraftPatch),
    /// Move one step forward, if the current gate allows it.
    Advance,
    /// Move one step back.
    Retreat,
    /// A render was started for the given request.
    PreviewStarted(RequestId),
    /// A render finished. Discarded unless `request` is still current.
    PreviewCompleted {
        /// The originating request.
        request: RequestId,
        /// The rendered preview.
        artifact: ArtifactRef,
    },
    /// A render failed. Discarded unless `request` is still current.
    PreviewFailed {
        /// The originating request.
        request: RequestId,
        /// Why it failed.
        reason: String,
    },
    /// Drop the preview.
    ClearPreview,
}

/// Folds an action into a state, returning the next state.
///
/// Pure: no I/O, no clocks, no randomness. Gated or out-of-range
/// navigation and stale preview completions leave the state unchanged
/// rather than erroring; the UI expresses those as disabled controls.
pub fn reduce(state: &WizardState, action: Action) -> WizardState {
    let mut next = state.clone();

    match action {
        Action::Update(patch) => {
            next.draft.apply(patch);
        }
        Action::Advance => {
            if state.can_advance() {
                if let Some(step) = state.step.next() {
                    next.step = step;
                }
            }
        }
        Action::Retreat => {
            if let Some(step) = state.step.prev() {
                next.step = step;
            }
        }
        Action::PreviewStarted(request) => {
            next.preview = PreviewState::Pending { request };
        }
        Action::PreviewCompleted { request, artifact } => {
            if is_current(&state.preview, request) {
                next.preview = PreviewState::Ready { request, artifact };
            }
        }
        Action::PreviewFailed { request, reason } => {
            if is_current(&state.preview, request) {
                next.preview = PreviewState::Failed { request, reason };
            }
        }
        Action::ClearPreview => {
            next.preview = PreviewState::Idle;
        }
    }

    next
}

/// The stale-response guard: a completion only lands if its request is the
/// one still pending.
fn is_current(preview: &PreviewState, request: RequestId) -> bool {
    matches!(preview, PreviewState::Pending { request: pending } if *pending == request)
}
