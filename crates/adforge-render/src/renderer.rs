//! The renderer contract.

use adforge_draft::{ArtifactRef, DraftAd};
use tokio_util::sync::CancellationToken;

use crate::error::RenderResult;

/// Trait every rendering backend must implement.
///
/// A backend takes a read-only snapshot of the draft and produces an
/// [`ArtifactRef`] to the rendered preview. Implementations must:
///
/// - honor the `cancel` token and resolve to [`RenderError::Cancelled`]
///   promptly once it fires
/// - accept at most one outstanding render, answering [`RenderError::Busy`]
///   to concurrent calls
/// - report failures as explicit errors rather than hanging or panicking
///
/// [`RenderError::Cancelled`]: crate::RenderError::Cancelled
/// [`RenderError::Busy`]: crate::RenderError::Busy
#[async_trait::async_trait]
pub trait Renderer: Send + Sync {
    /// Renders a preview of the draft.
    async fn render(&self, draft: &DraftAd, cancel: CancellationToken)
        -> RenderResult<ArtifactRef>;
}
