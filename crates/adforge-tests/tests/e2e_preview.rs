//! End-to-End Preview Generation Tests
//!
//! Exercises the render seam from the session's point of view: mock
//! rendering, busy rejection, cancellation, failure, and recovery.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p adforge-tests --test e2e_preview
//! ```

use std::sync::Arc;
use std::time::Duration;

use adforge_render::{MockRenderer, RenderError};
use adforge_tests::{init_logging, FlakyRenderer, InstantRenderer, ReadyDraft};
use adforge_wizard::{PreviewState, WizardSession};
use pretty_assertions::assert_eq;
use tokio_util::sync::CancellationToken;

fn make_ready_session() -> WizardSession {
    let mut session = WizardSession::new();
    let draft = ReadyDraft::renderable();
    session.update(adforge_draft::DraftPatch {
        script: Some(draft.script.clone()),
        selected_voice_id: Some(draft.selected_voice_id.clone()),
        selected_track_id: Some(draft.selected_track_id.clone()),
        ..Default::default()
    });
    session
}

/// The mock renderer resolves after its delay with the placeholder asset.
#[tokio::test]
async fn test_mock_preview_resolves() {
    init_logging();
    let mut session = make_ready_session();
    let renderer = MockRenderer::with_delay(Duration::from_millis(20));

    let artifact = session
        .generate_preview(&renderer, CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(artifact.url, "/placeholder.svg?height=80&width=400");
    // 55-char script: ceil(55 / 15) = 4, floored to the 15s minimum spot.
    assert_eq!(artifact.estimated_duration_secs, 15);
    assert_eq!(session.preview().artifact(), Some(&artifact));
}

/// A renderer shared by two sessions accepts only one render at a time.
#[tokio::test]
async fn test_shared_renderer_rejects_concurrent_render() {
    init_logging();
    let renderer = Arc::new(MockRenderer::with_delay(Duration::from_millis(200)));

    let slow = {
        let renderer = Arc::clone(&renderer);
        let mut session = make_ready_session();
        tokio::spawn(async move {
            session
                .generate_preview(renderer.as_ref(), CancellationToken::new())
                .await
        })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;

    let mut other = make_ready_session();
    let second = other
        .generate_preview(renderer.as_ref(), CancellationToken::new())
        .await;
    assert_eq!(second.unwrap_err(), RenderError::Busy);

    // The loser's session records the failure and can retry after the
    // backend frees up.
    assert!(matches!(other.preview(), PreviewState::Failed { .. }));
    assert!(slow.await.unwrap().is_ok());
    assert!(other
        .generate_preview(renderer.as_ref(), CancellationToken::new())
        .await
        .is_ok());
}

/// Cancelling a pending render surfaces as a cancellation, not a hang.
#[tokio::test]
async fn test_cancelled_preview() {
    init_logging();
    let mut session = make_ready_session();
    let renderer = MockRenderer::with_delay(Duration::from_secs(60));
    let cancel = CancellationToken::new();

    let pending = session.generate_preview(&renderer, cancel.clone());
    cancel.cancel();
    assert_eq!(pending.await.unwrap_err(), RenderError::Cancelled);
    assert!(matches!(session.preview(), PreviewState::Failed { .. }));
}

/// Backend failures are explicit, recoverable, and leave the session
/// usable for a retry.
#[tokio::test]
async fn test_failure_then_retry() {
    init_logging();
    let mut session = make_ready_session();
    let renderer = FlakyRenderer::new(1);

    let err = session
        .generate_preview(&renderer, CancellationToken::new())
        .await
        .unwrap_err();
    assert_eq!(err, RenderError::backend("synthesis farm unavailable"));
    assert!(err.is_retryable());

    let artifact = session
        .generate_preview(&renderer, CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(artifact.url, "/previews/recovered.wav");
}

/// Regenerating replaces the previous preview with a fresh artifact.
#[tokio::test]
async fn test_regenerate_replaces_preview() {
    init_logging();
    let mut session = make_ready_session();
    let renderer = InstantRenderer::new();

    let first = session
        .generate_preview(&renderer, CancellationToken::new())
        .await
        .unwrap();
    let second = session
        .generate_preview(&renderer, CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(renderer.calls(), 2);
    assert_ne!(first.url, second.url);
    assert_eq!(session.preview().artifact(), Some(&second));
}

/// Incomplete drafts are refused before any delay is spent.
#[tokio::test]
async fn test_incomplete_draft_refused() {
    init_logging();
    let mut session = WizardSession::new();
    let renderer = MockRenderer::with_delay(Duration::from_secs(60));

    let err = session
        .generate_preview(&renderer, CancellationToken::new())
        .await
        .unwrap_err();
    assert_eq!(err, RenderError::IncompleteDraft { field: "script" });
    assert!(!err.is_retryable());
}
