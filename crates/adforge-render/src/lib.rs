//! AdForge Render Seam
//!
//! This crate defines the contract between the composition wizard and the
//! rendering backend that turns a finished draft into a playable preview,
//! plus a mock backend for environments without real synthesis.
//!
//! # Overview
//!
//! The wizard never talks to a synthesis or mixing engine directly. It
//! holds a [`Renderer`] and asks it to render the current draft:
//!
//! - rendering is asynchronous and cancellable via a `CancellationToken`
//! - failures are explicit [`RenderError`] values, never silent
//! - a backend accepts at most one outstanding render; concurrent calls
//!   fail fast with [`RenderError::Busy`]
//!
//! [`MockRenderer`] simulates the real thing: it checks that the draft is
//! renderable, waits a configurable delay, and resolves to a static
//! placeholder [`ArtifactRef`]. Swapping in a real backend changes no
//! wizard code.
//!
//! # Example
//!
//! ```no_run
//! use adforge_draft::{DraftAd, DraftPatch};
//! use adforge_render::{MockRenderer, Renderer};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn demo() -> Result<(), adforge_render::RenderError> {
//! let mut draft = DraftAd::new();
//! draft.apply(
//!     DraftPatch::default()
//!         .script("Buy now!")
//!         .voice("voice1")
//!         .track("track1"),
//! );
//!
//! let renderer = MockRenderer::default();
//! let artifact = renderer.render(&draft, CancellationToken::new()).await?;
//! println!("preview at {}", artifact.url);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod mock;
pub mod renderer;

// Re-export main types at crate root
pub use adforge_draft::ArtifactRef;
pub use error::{RenderError, RenderResult};
pub use mock::{MockRenderer, MockRendererConfig};
pub use renderer::Renderer;
