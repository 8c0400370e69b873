//! AdForge Canonical Draft Library
//!
//! This crate provides the types, validation, and catalog contracts for an
//! in-progress audio advertisement ("draft"). A draft is composed over a
//! five-step wizard: script entry, voice selection, background-track
//! selection, mixing options, and preview/finalization.
//!
//! # Overview
//!
//! The draft is the single record every wizard step reads and writes:
//!
//! - **Script**: the ad copy, capped at [`MAX_SCRIPT_CHARS`] characters
//! - **Voice / track**: references into externally owned catalogs
//! - **Mix settings**: eight independent, range-clamped numeric knobs
//! - **Library fields**: advertiser and ad name, required at save time
//!
//! Updates go through [`DraftAd::apply`], which shallow-merges a
//! [`DraftPatch`] and enforces every range centrally, so out-of-band values
//! cannot enter the record regardless of what the edit surface clamped.
//!
//! # Example
//!
//! ```
//! use adforge_draft::{DraftAd, DraftPatch, WizardStep};
//! use adforge_draft::validation::{can_advance, save_field_errors};
//!
//! let mut draft = DraftAd::new();
//! assert!(!can_advance(WizardStep::Script, &draft));
//!
//! draft.apply(DraftPatch::default().script("Buy now!"));
//! assert!(can_advance(WizardStep::Script, &draft));
//!
//! let errors = save_field_errors(&draft);
//! assert!(errors.advertiser && errors.ad_name);
//! ```
//!
//! # Modules
//!
//! - [`artifact`]: opaque handles to rendered preview assets
//! - [`catalog`]: voice/track types and injectable provider traits
//! - [`draft`]: the draft record, patch type, and mix settings
//! - [`error`]: coded validation errors and warnings
//! - [`step`]: the five wizard steps
//! - [`validation`]: step gates, save validation, full draft validation

pub mod artifact;
pub mod catalog;
pub mod draft;
pub mod error;
pub mod step;
pub mod validation;

// Re-export commonly used types at the crate root
pub use artifact::{ArtifactRef, RequestId};
pub use catalog::builtin::{BuiltinTrackCatalog, BuiltinVoiceCatalog};
pub use catalog::{
    Gender, Track, TrackCatalog, TrackFilter, Voice, VoiceCatalog, VoiceFilter, VoiceShelf,
};
pub use draft::{Advertiser, DraftAd, DraftPatch, MixSettings, MAX_SCRIPT_CHARS};
pub use error::{
    DraftError, ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};
pub use step::WizardStep;
pub use validation::{
    can_advance, save_field_errors, validate_draft, validate_draft_against_catalogs,
    SaveFieldErrors,
};
