//! Error types for the render seam.

use thiserror::Error;

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while rendering a preview.
///
/// None of these are fatal to the session: the caller surfaces the error
/// and the user can edit the draft or retry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
    /// The draft is missing a field the renderer needs.
    #[error("draft is not renderable: missing {field}")]
    IncompleteDraft {
        /// The first missing field.
        field: &'static str,
    },

    /// A render is already in flight on this backend.
    #[error("a render is already in progress")]
    Busy,

    /// The caller cancelled the render.
    #[error("render was cancelled")]
    Cancelled,

    /// The backend did not answer in time.
    #[error("render timed out after {after_ms} ms")]
    TimedOut {
        /// How long the caller waited.
        after_ms: u64,
    },

    /// The backend failed.
    #[error("render backend failed: {message}")]
    Backend {
        /// Backend-reported reason.
        message: String,
    },
}

impl RenderError {
    /// Creates a backend failure from any displayable reason.
    pub fn backend(message: impl Into<String>) -> Self {
        RenderError::Backend {
            message: message.into(),
        }
    }

    /// True for errors the user can fix by retrying as-is.
    pub fn is_retryable(&self) -> bool {
        match self {
            RenderError::IncompleteDraft { .. } => false,
            RenderError::Busy
            | RenderError::Cancelled
            | RenderError::TimedOut { .. }
            | RenderError::Backend { .. } => true,
        }
    }
}
