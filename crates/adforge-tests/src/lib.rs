//! AdForge End-to-End Test Infrastructure
//!
//! Integration tests for the wizard's user-visible flows:
//!
//! - Flow: walking the five steps forward and back under the gates
//! - Preview: generating, re-generating, cancelling, and failing renders
//! - Save: finalization gating and the save target seam
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p adforge-tests
//! ```

pub mod harness;

pub use harness::{init_logging, FlakyRenderer, InstantRenderer, ReadyDraft};
