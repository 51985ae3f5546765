//! Error types of the reconciliation core.

use thiserror::Error;

pub use crate::core::source::SourceError;

/// Invalid user choice during an interactive filtering step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError
{
    #[error("tag index {index} is out of range (expected 0..{len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("rating range is inverted: minimum {min} exceeds maximum {max}")]
    InvalidRange { min: u32, max: u32 },

    #[error("cannot parse rating range {input:?}: {reason}")]
    MalformedRange { input: String, reason: String },
}

#[derive(Debug, Error)]
pub enum UpsolveError
{
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// The tag-choice callback gave up (e.g. the prompt reached end of input).
    #[error("tag choice aborted")]
    ChoiceAborted(#[source] Box<dyn std::error::Error + Send + Sync>),
}
