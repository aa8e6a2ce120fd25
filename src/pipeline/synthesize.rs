//! Multi-turn synthesis of diff summaries into a commit draft.

use tracing::warn;

use crate::commit::{CommitMessage, DecodeOutcome, decode_draft};
use crate::error::LlmError;
use crate::llm::{ChatMessage, LlmClient, LlmConfig};
use crate::pipeline::prompt::{COMMIT_GENERATION_PROMPT, summary_turn};

/// Synthesize summaries into a structured commit draft.
///
/// Runs one conversation on a fresh client: a system turn with the fixed
/// generation prompt, one user turn per summary in original order, then a
/// final "done" turn whose reply is decoded as the draft. A reply that is not
/// commit JSON degrades to an empty draft rather than an error; the form
/// afterwards lets the user recover.
///
/// Callers are responsible for skipping synthesis when there are no summaries.
pub async fn synthesize_draft(
    summaries: &[String],
    config: &LlmConfig,
) -> Result<CommitMessage, LlmError> {
    let mut client = LlmClient::new(config.clone())?;

    client
        .chat(ChatMessage::system(COMMIT_GENERATION_PROMPT))
        .await?;

    for (idx, summary) in summaries.iter().enumerate() {
        client.chat(ChatMessage::user(summary_turn(idx, summary))).await?;
    }

    let reply = client.chat(ChatMessage::user("done")).await?;

    let (draft, outcome) = decode_draft(&reply.content);
    if outcome == DecodeOutcome::Fallback {
        warn!("Model reply was not commit JSON; starting from an empty draft");
    }

    Ok(draft)
}
