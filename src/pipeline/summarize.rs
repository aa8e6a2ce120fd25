//! Per-file diff summarization.

use tracing::debug;

use crate::error::DraftError;
use crate::git::DiffSource;
use crate::llm::{LlmClient, LlmConfig};
use crate::pipeline::prompt::summary_prompt;

/// Summarize every changed file's diff, in the order the files were reported.
///
/// Returns an empty vector without contacting the model when nothing changed.
/// Any diff or endpoint failure aborts the whole stage; partial summaries are
/// discarded, not returned. Summaries are independent, so each one uses a
/// fresh client with no shared history.
pub async fn summarize_changes(
    source: &dyn DiffSource,
    config: &LlmConfig,
) -> Result<Vec<String>, DraftError> {
    let files = source.changed_files()?;
    if files.is_empty() {
        return Ok(Vec::new());
    }

    let mut summaries = Vec::with_capacity(files.len());
    for path in &files {
        let diff = source.diff_for(path)?;
        debug!("Summarizing {path} ({} diff chars)", diff.len());

        let client = LlmClient::new(config.clone())?;
        let summary = client.generate(&summary_prompt(&diff)).await?;
        summaries.push(summary);
    }

    Ok(summaries)
}
