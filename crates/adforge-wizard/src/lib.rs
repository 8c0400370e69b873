//! AdForge Composition Wizard
//!
//! The state machine behind the five-step ad-composition flow: script,
//! voice, track, mixing, preview. This crate owns *what the wizard does*;
//! it renders nothing and talks to collaborators only through traits.
//!
//! # Overview
//!
//! State lives in a [`WizardState`] value and changes only through the
//! pure reducer [`reduce`], so every transition is deterministic and
//! testable without a UI:
//!
//! - navigation is strictly linear; forward moves are gated per step by
//!   `adforge_draft::can_advance`, backward moves are always allowed
//!   except from the first step
//! - draft edits are [`DraftPatch`] merges; navigation never touches the
//!   draft
//! - preview generation is tracked per request id, and completions from
//!   superseded requests are discarded
//!
//! [`WizardSession`] wraps the store for callers that want a mutable
//! facade, and drives a [`Renderer`] for preview generation. [`save`]
//! holds the finalization gate and the [`SaveTarget`] persistence seam.
//!
//! # Example
//!
//! ```
//! use adforge_draft::DraftPatch;
//! use adforge_wizard::{WizardSession, WizardStep};
//!
//! let mut session = WizardSession::new();
//! assert!(!session.advance()); // empty script, gate closed
//!
//! session.update(DraftPatch::default().script("Buy now!"));
//! assert!(session.advance());
//! assert_eq!(session.step(), WizardStep::Voice);
//! ```
//!
//! [`Renderer`]: adforge_render::Renderer
//! [`SaveTarget`]: save::SaveTarget

pub mod save;
pub mod session;
pub mod store;

// Re-export commonly used types at the crate root
pub use adforge_draft::{DraftAd, DraftPatch, WizardStep};
pub use save::{finalize, FinalizeError, FinalizedAd, MemoryLibrary, SaveError, SaveTarget, SavedAdId};
pub use session::WizardSession;
pub use store::{reduce, Action, PreviewState, WizardState};
