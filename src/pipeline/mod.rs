//! The drafting pipeline: summarize each changed file, then synthesize the
//! summaries into a commit draft.

pub mod prompt;
pub mod summarize;
pub mod synthesize;

use crate::commit::CommitMessage;
use crate::error::DraftError;
use crate::git::DiffSource;
use crate::llm::LlmConfig;

pub use summarize::summarize_changes;
pub use synthesize::synthesize_draft;

/// Build a commit draft for the interactive form.
///
/// With `use_llm` disabled, or with a clean working tree, this returns an
/// empty draft without contacting the model. Any stage failure propagates as
/// [`DraftError`]; callers fall back to an empty draft and manual entry
/// instead of aborting.
pub async fn build_draft(
    source: &dyn DiffSource,
    config: &LlmConfig,
    use_llm: bool,
) -> Result<CommitMessage, DraftError> {
    if !use_llm {
        return Ok(CommitMessage::default());
    }

    let summaries = summarize_changes(source, config).await?;
    if summaries.is_empty() {
        return Ok(CommitMessage::default());
    }

    Ok(synthesize_draft(&summaries, config).await?)
}
