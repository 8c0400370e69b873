//! Mock rendering backend.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use adforge_draft::{ArtifactRef, DraftAd};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::error::{RenderError, RenderResult};
use crate::renderer::Renderer;

/// Configuration for [`MockRenderer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MockRendererConfig {
    /// Simulated render latency in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    /// URL of the placeholder asset every render resolves to.
    #[serde(default = "default_artifact_url")]
    pub artifact_url: String,
}

fn default_delay_ms() -> u64 {
    1500
}

fn default_artifact_url() -> String {
    "/placeholder.svg?height=80&width=400".to_string()
}

impl Default for MockRendererConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            artifact_url: default_artifact_url(),
        }
    }
}

/// A renderer that fakes the synthesis+mixing backend.
///
/// Checks that the draft is renderable, sleeps for the configured delay,
/// and resolves to the configured placeholder artifact. No audio is
/// produced anywhere.
pub struct MockRenderer {
    config: MockRendererConfig,
    in_flight: AtomicBool,
}

impl MockRenderer {
    /// Creates a mock renderer with the given configuration.
    pub fn new(config: MockRendererConfig) -> Self {
        Self {
            config,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Creates a mock renderer with the given latency.
    pub fn with_delay(delay: Duration) -> Self {
        Self::new(MockRendererConfig {
            delay_ms: delay.as_millis() as u64,
            ..MockRendererConfig::default()
        })
    }

    fn check_renderable(draft: &DraftAd) -> RenderResult<()> {
        if draft.script.trim().is_empty() {
            return Err(RenderError::IncompleteDraft { field: "script" });
        }
        if draft.selected_voice_id.is_none() {
            return Err(RenderError::IncompleteDraft {
                field: "selected_voice_id",
            });
        }
        if draft.selected_track_id.is_none() {
            return Err(RenderError::IncompleteDraft {
                field: "selected_track_id",
            });
        }
        Ok(())
    }
}

impl Default for MockRenderer {
    fn default() -> Self {
        Self::new(MockRendererConfig::default())
    }
}

/// Clears the in-flight flag even if the render future is dropped mid-way.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[async_trait::async_trait]
impl Renderer for MockRenderer {
    async fn render(
        &self,
        draft: &DraftAd,
        cancel: CancellationToken,
    ) -> RenderResult<ArtifactRef> {
        Self::check_renderable(draft)?;

        if self.in_flight.swap(true, Ordering::AcqRel) {
            return Err(RenderError::Busy);
        }
        let _guard = InFlightGuard(&self.in_flight);

        log::debug!(
            "mock render started: {} chars, voice {:?}, track {:?}",
            draft.script_chars(),
            draft.selected_voice_id,
            draft.selected_track_id
        );

        tokio::select! {
            _ = cancel.cancelled() => {
                log::debug!("mock render cancelled");
                Err(RenderError::Cancelled)
            }
            _ = tokio::time::sleep(Duration::from_millis(self.config.delay_ms)) => {
                let artifact = ArtifactRef::new(
                    self.config.artifact_url.clone(),
                    draft.estimated_duration_secs(),
                );
                log::debug!("mock render finished: {}", artifact.url);
                Ok(artifact)
            }
        }
    }
}
