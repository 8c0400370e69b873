//! End-to-End Save Tests
//!
//! Exercises finalization gating and the save-target seam: field
//! validation, the preview requirement, and a full compose-and-save run.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p adforge-tests --test e2e_save
//! ```

use std::time::Duration;

use adforge_draft::{save_field_errors, Advertiser, DraftPatch};
use adforge_render::MockRenderer;
use adforge_tests::{init_logging, ReadyDraft};
use adforge_wizard::{
    finalize, FinalizeError, MemoryLibrary, SaveTarget, WizardSession, WizardStep,
};
use pretty_assertions::assert_eq;
use tokio_util::sync::CancellationToken;

/// The whole journey: compose, preview, finalize, save, look it up.
#[tokio::test]
async fn test_compose_preview_save() {
    init_logging();
    let mut session = WizardSession::new();

    session.update(
        DraftPatch::default()
            .script("Visit Acme today and save twenty percent on everything.")
            .voice("voice1")
            .track("track1"),
    );
    while session.advance() {}
    assert_eq!(session.step(), WizardStep::Preview);

    // Saving before a preview exists is blocked even with valid fields.
    session.update(ReadyDraft::library_fields());
    assert_eq!(finalize(session.state()), Err(FinalizeError::NoPreview));

    let renderer = MockRenderer::with_delay(Duration::from_millis(10));
    session
        .generate_preview(&renderer, CancellationToken::new())
        .await
        .unwrap();

    let ad = finalize(session.state()).unwrap();
    assert_eq!(ad.draft.advertiser, Some(Advertiser::Acme));

    let library = MemoryLibrary::new();
    let id = library.save(ad.clone()).await.unwrap();
    assert_eq!(library.get(&id), Some(ad));
    assert_eq!(library.len(), 1);
}

/// Field flags match the validator contract: `true` means invalid.
#[tokio::test]
async fn test_save_blocked_on_missing_fields() {
    init_logging();
    let mut session = WizardSession::new();
    let draft = ReadyDraft::renderable();
    session.update(DraftPatch {
        script: Some(draft.script),
        selected_voice_id: Some(draft.selected_voice_id),
        selected_track_id: Some(draft.selected_track_id),
        ad_name: Some("My Ad".to_string()),
        ..Default::default()
    });

    let renderer = MockRenderer::with_delay(Duration::from_millis(10));
    session
        .generate_preview(&renderer, CancellationToken::new())
        .await
        .unwrap();

    // Advertiser unset, name present.
    let fields = save_field_errors(session.draft());
    assert!(fields.advertiser);
    assert!(!fields.ad_name);

    match finalize(session.state()) {
        Err(FinalizeError::MissingFields(flags)) => assert_eq!(flags, fields),
        other => panic!("unexpected result: {:?}", other),
    }

    // Fixing the field unblocks the save.
    session.update(DraftPatch::default().advertiser(Advertiser::Umbrella));
    assert!(finalize(session.state()).is_ok());
}

/// A whitespace-only ad name does not count as filled in.
#[tokio::test]
async fn test_whitespace_ad_name_rejected() {
    init_logging();
    let mut session = WizardSession::new();
    let draft = ReadyDraft::renderable();
    session.update(DraftPatch {
        script: Some(draft.script),
        selected_voice_id: Some(draft.selected_voice_id),
        selected_track_id: Some(draft.selected_track_id),
        ..Default::default()
    });
    session.update(
        DraftPatch::default()
            .advertiser(Advertiser::Globex)
            .ad_name("   "),
    );

    let renderer = MockRenderer::with_delay(Duration::from_millis(10));
    session
        .generate_preview(&renderer, CancellationToken::new())
        .await
        .unwrap();

    match finalize(session.state()) {
        Err(FinalizeError::MissingFields(flags)) => {
            assert!(!flags.advertiser);
            assert!(flags.ad_name);
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

/// Saved ads carry the artifact the user actually previewed.
#[tokio::test]
async fn test_saved_ad_carries_previewed_artifact() {
    init_logging();
    let mut session = WizardSession::new();
    let draft = ReadyDraft::renderable();
    session.update(DraftPatch {
        script: Some(draft.script),
        selected_voice_id: Some(draft.selected_voice_id),
        selected_track_id: Some(draft.selected_track_id),
        ..Default::default()
    });
    session.update(ReadyDraft::library_fields());

    let renderer = MockRenderer::with_delay(Duration::from_millis(10));
    let artifact = session
        .generate_preview(&renderer, CancellationToken::new())
        .await
        .unwrap();

    let ad = finalize(session.state()).unwrap();
    assert_eq!(ad.artifact, artifact);
}
