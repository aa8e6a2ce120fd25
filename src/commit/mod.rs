//! Commit message model and Conventional Commit rendering.

pub mod message;

pub use message::{CommitMessage, CommitType, DecodeOutcome, decode_draft};
