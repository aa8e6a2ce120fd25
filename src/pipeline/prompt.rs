//! Fixed prompt text for the drafting pipeline.

/// Instructional preamble prepended to each per-file diff.
pub(crate) const DIFF_SUMMARY_PROMPT: &str = "\
You are reviewing the unified diff of a single file from a git working tree. \
Describe what changed in one or two plain sentences, in present tense. \
Mention added, deleted, or renamed files explicitly. \
Reply with the summary only: no code, no markdown, no preamble.";

/// System prompt for the multi-turn commit synthesis conversation.
pub(crate) const COMMIT_GENERATION_PROMPT: &str = r#"You are drafting a git commit message following the Conventional Commits specification.

The user will send file-change summaries one at a time, each wrapped in triple quotes and numbered in the order the files changed. Treat later summaries as additional context refining the earlier ones. Do not produce the commit message until the user sends the single word "done".

When the user sends "done", reply with ONLY a JSON object, no markdown and no explanation:
{"type": "feat", "description": "add login endpoint", "scope": "auth", "body": "", "breaking_change": ""}

Rules:
- "type" is one of: build, ci, docs, feat, fix, perf, refactor, style, test
- "description" is one imperative sentence, lowercase, no trailing period
- "scope" names the module most affected, or "" when no single module stands out
- "body" explains why the change was made; "" for trivial changes
- "breaking_change" describes any backwards-incompatible change; "" when there is none"#;

/// Wrap a file diff with the summarization preamble.
pub fn summary_prompt(diff: &str) -> String {
    format!("\"\"\"\n{DIFF_SUMMARY_PROMPT}\n\n{diff}\n\"\"\"")
}

/// Wrap one summary as a numbered conversation turn.
pub fn summary_turn(index: usize, summary: &str) -> String {
    format!("\"\"\"\nSummary {}:\n{}\n\"\"\"", index + 1, summary)
}
