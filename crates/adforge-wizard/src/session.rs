//! Mutable session facade over the wizard store.

use adforge_draft::{ArtifactRef, DraftAd, DraftPatch, RequestId, WizardStep};
use adforge_render::{RenderError, RenderResult, Renderer};
use tokio_util::sync::CancellationToken;

use crate::store::{reduce, Action, PreviewState, WizardState};

/// One user's pass through the wizard.
///
/// Owns a [`WizardState`] and applies actions through the reducer, so the
/// facade adds no semantics of its own: everything it does is expressible
/// (and tested) as a sequence of [`Action`]s. It also numbers render
/// requests, which gives the store's stale-response guard its ids.
pub struct WizardSession {
    state: WizardState,
    next_request: u64,
}

impl WizardSession {
    /// Starts a fresh session at the script step.
    pub fn new() -> Self {
        Self {
            state: WizardState::new(),
            next_request: 0,
        }
    }

    /// The full current state.
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// The current step.
    pub fn step(&self) -> WizardStep {
        self.state.step
    }

    /// The draft under composition.
    pub fn draft(&self) -> &DraftAd {
        &self.state.draft
    }

    /// Preview progress.
    pub fn preview(&self) -> &PreviewState {
        &self.state.preview
    }

    /// Whether the gate for the current step is open.
    pub fn can_advance(&self) -> bool {
        self.state.can_advance()
    }

    /// Applies an action to the session state.
    pub fn dispatch(&mut self, action: Action) {
        self.state = reduce(&self.state, action);
    }

    /// Merges a patch into the draft.
    pub fn update(&mut self, patch: DraftPatch) {
        self.dispatch(Action::Update(patch));
    }

    /// Tries to move one step forward. Returns whether the step changed.
    pub fn advance(&mut self) -> bool {
        let before = self.state.step;
        self.dispatch(Action::Advance);
        let moved = self.state.step != before;
        if moved {
            log::debug!("wizard advanced: {} -> {}", before, self.state.step);
        }
        moved
    }

    /// Tries to move one step back. Returns whether the step changed.
    pub fn retreat(&mut self) -> bool {
        let before = self.state.step;
        self.dispatch(Action::Retreat);
        let moved = self.state.step != before;
        if moved {
            log::debug!("wizard retreated: {} -> {}", before, self.state.step);
        }
        moved
    }

    /// Renders a preview of the current draft through `renderer`.
    ///
    /// At most one generation may be outstanding per session; a call while
    /// one is pending fails with [`RenderError::Busy`] without touching
    /// the renderer. The completion is folded into the state only if its
    /// request is still the current one, so a caller that races several
    /// sessions against one renderer cannot end up showing a stale
    /// preview.
    pub async fn generate_preview(
        &mut self,
        renderer: &dyn Renderer,
        cancel: CancellationToken,
    ) -> RenderResult<ArtifactRef> {
        if self.state.preview.is_pending() {
            return Err(RenderError::Busy);
        }

        let request = self.allocate_request();
        self.dispatch(Action::PreviewStarted(request));
        log::debug!("preview generation started: {}", request);

        let draft = self.state.draft.clone();
        match renderer.render(&draft, cancel).await {
            Ok(artifact) => {
                self.dispatch(Action::PreviewCompleted {
                    request,
                    artifact: artifact.clone(),
                });
                log::debug!("preview generation finished: {}", request);
                Ok(artifact)
            }
            Err(err) => {
                self.dispatch(Action::PreviewFailed {
                    request,
                    reason: err.to_string(),
                });
                log::debug!("preview generation failed: {}: {}", request, err);
                Err(err)
            }
        }
    }

    fn allocate_request(&mut self) -> RequestId {
        self.next_request += 1;
        RequestId(self.next_request)
    }
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adforge_render::MockRenderer;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn make_ready_session() -> WizardSession {
        let mut session = WizardSession::new();
        session.update(
            DraftPatch::default()
                .script("Buy now!")
                .voice("voice1")
                .track("track1"),
        );
        session
    }

    #[test]
    fn test_walk_forward_and_back() {
        let mut session = make_ready_session();
        assert!(session.advance());
        assert!(session.advance());
        assert!(session.advance());
        assert!(session.advance());
        assert_eq!(session.step(), WizardStep::Preview);
        assert!(!session.advance());

        assert!(session.retreat());
        assert_eq!(session.step(), WizardStep::Mixing);
    }

    #[test]
    fn test_blocked_advance_reports_no_move() {
        let mut session = WizardSession::new();
        assert!(!session.advance());
        assert_eq!(session.step(), WizardStep::Script);
        assert!(!session.retreat());
    }

    #[tokio::test]
    async fn test_generate_preview_updates_state() {
        let mut session = make_ready_session();
        let renderer = MockRenderer::with_delay(Duration::from_millis(10));

        let artifact = session
            .generate_preview(&renderer, CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(session.preview().artifact(), Some(&artifact));
    }

    #[tokio::test]
    async fn test_generate_preview_failure_is_recorded() {
        let mut session = WizardSession::new();
        let renderer = MockRenderer::with_delay(Duration::from_millis(10));

        // Empty draft: renderer refuses.
        let err = session
            .generate_preview(&renderer, CancellationToken::new())
            .await
            .unwrap_err();
        assert_eq!(err, RenderError::IncompleteDraft { field: "script" });
        assert!(matches!(session.preview(), PreviewState::Failed { .. }));

        // The session stays usable: fix the draft, retry.
        session.update(
            DraftPatch::default()
                .script("Buy now!")
                .voice("voice1")
                .track("track1"),
        );
        assert!(session
            .generate_preview(&renderer, CancellationToken::new())
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_request_ids_are_monotonic() {
        let mut session = make_ready_session();
        let renderer = MockRenderer::with_delay(Duration::from_millis(1));

        session
            .generate_preview(&renderer, CancellationToken::new())
            .await
            .unwrap();
        let first = match session.preview() {
            PreviewState::Ready { request, .. } => *request,
            other => panic!("unexpected preview state: {:?}", other),
        };

        session
            .generate_preview(&renderer, CancellationToken::new())
            .await
            .unwrap();
        let second = match session.preview() {
            PreviewState::Ready { request, .. } => *request,
            other => panic!("unexpected preview state: {:?}", other),
        };
        assert!(second > first);
    }
}
