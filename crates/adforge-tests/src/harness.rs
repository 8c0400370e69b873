//! Shared fixtures and test doubles.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Once;

use adforge_draft::{Advertiser, ArtifactRef, DraftAd, DraftPatch};
use adforge_render::{RenderError, RenderResult, Renderer};
use tokio_util::sync::CancellationToken;

static INIT_LOGGING: Once = Once::new();

/// Initializes env_logger once for the whole test binary.
pub fn init_logging() {
    INIT_LOGGING.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Canned drafts for the flows under test.
pub struct ReadyDraft;

impl ReadyDraft {
    /// A draft that passes every step gate but has no library fields.
    pub fn renderable() -> DraftAd {
        let mut draft = DraftAd::new();
        draft.apply(
            DraftPatch::default()
                .script("Visit Acme today and save twenty percent on everything.")
                .voice("voice1")
                .track("track1"),
        );
        draft
    }

    /// The patch that makes [`ReadyDraft::renderable`] saveable too.
    pub fn library_fields() -> DraftPatch {
        DraftPatch::default()
            .advertiser(Advertiser::Acme)
            .ad_name("Spring sale")
    }
}

/// Renderer that resolves immediately, counting calls.
pub struct InstantRenderer {
    calls: AtomicUsize,
}

impl InstantRenderer {
    /// Creates the renderer.
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of renders performed.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Acquire)
    }
}

impl Default for InstantRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Renderer for InstantRenderer {
    async fn render(
        &self,
        draft: &DraftAd,
        _cancel: CancellationToken,
    ) -> RenderResult<ArtifactRef> {
        let call = self.calls.fetch_add(1, Ordering::AcqRel) + 1;
        Ok(ArtifactRef::new(
            format!("/previews/{}.wav", call),
            draft.estimated_duration_secs(),
        ))
    }
}

/// Renderer that fails a configured number of times before succeeding.
pub struct FlakyRenderer {
    failures_left: AtomicUsize,
}

impl FlakyRenderer {
    /// Fails the first `failures` renders with a backend error.
    pub fn new(failures: usize) -> Self {
        Self {
            failures_left: AtomicUsize::new(failures),
        }
    }
}

#[async_trait::async_trait]
impl Renderer for FlakyRenderer {
    async fn render(
        &self,
        draft: &DraftAd,
        _cancel: CancellationToken,
    ) -> RenderResult<ArtifactRef> {
        let left = self.failures_left.load(Ordering::Acquire);
        if left > 0 {
            self.failures_left.store(left - 1, Ordering::Release);
            return Err(RenderError::backend("synthesis farm unavailable"));
        }
        Ok(ArtifactRef::new(
            "/previews/recovered.wav",
            draft.estimated_duration_secs(),
        ))
    }
}
