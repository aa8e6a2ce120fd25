//! Error types for scribe modules using thiserror.

use thiserror::Error;

/// Errors from diff collection.
#[derive(Error, Debug)]
pub enum DiffError {
    #[error("Failed to open repository: {0}")]
    OpenRepository(#[source] git2::Error),

    #[error("Failed to collect diff: {0}")]
    Unavailable(#[source] git2::Error),
}

/// Errors from the local inference endpoint.
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Inference endpoint unreachable: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Unexpected reply from inference endpoint: {0}")]
    Protocol(String),
}

/// A failed draft attempt, rolled up from the pipeline stages.
///
/// The caller falls back to an empty draft and manual entry; the tool never
/// terminates because the optional LLM assist failed.
#[derive(Error, Debug)]
pub enum DraftError {
    #[error("Diff collection failed: {0}")]
    Diff(#[from] DiffError),

    #[error("Inference failed: {0}")]
    Llm(#[from] LlmError),
}
