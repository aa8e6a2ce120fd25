//! scribe - A CLI tool that drafts Conventional Commit messages from the working tree.
//!
//! # Overview
//!
//! scribe summarizes each changed file's diff with a local LLM, synthesizes the
//! summaries into a structured commit draft over a multi-turn conversation, and
//! hands the draft to an interactive form for confirmation before rendering the
//! final Conventional Commit message.

pub mod clipboard;
pub mod commit;
pub mod editor;
pub mod error;
pub mod git;
pub mod llm;
pub mod pipeline;

// Re-export commonly used types
pub use commit::{CommitMessage, CommitType, DecodeOutcome};
pub use error::{DiffError, DraftError, LlmError};
pub use git::{DiffSource, WorkingTree};
pub use llm::{ChatMessage, LlmClient, LlmConfig, Role};
