//! scribe - CLI entry point.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use scribe::clipboard::copy_to_clipboard;
use scribe::commit::CommitMessage;
use scribe::editor::edit_draft;
use scribe::error::DraftError;
use scribe::git::WorkingTree;
use scribe::llm::LlmConfig;
use scribe::pipeline::build_draft;

/// Draft a Conventional Commit message from your working tree.
#[derive(Parser, Debug)]
#[command(name = "scribe")]
#[command(about = "Draft Conventional Commit messages from your working tree using a local LLM")]
#[command(version)]
struct Cli {
    /// Skip the LLM draft and go straight to manual entry
    #[arg(long)]
    no_ai: bool,

    /// Base URL of the local inference endpoint
    #[arg(long, default_value = "http://localhost:11434")]
    endpoint: String,

    /// Model identifier to request from the endpoint
    #[arg(long, default_value = "llama3.1")]
    model: String,

    /// Timeout in seconds for each inference call
    #[arg(long, default_value_t = 120)]
    timeout: u64,

    /// Repository to draft from (defaults to the current directory)
    #[arg(short = 'C', long, default_value = ".")]
    repo: PathBuf,

    /// Print the message without copying it to the clipboard
    #[arg(long)]
    no_copy: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    let config = LlmConfig {
        base_url: cli.endpoint,
        model: cli.model,
        timeout: Duration::from_secs(cli.timeout),
    };

    // A failed draft is never fatal: fall back to an empty draft and let the
    // user fill the form manually.
    let draft = if cli.no_ai {
        CommitMessage::default()
    } else {
        match draft_from_repo(&cli.repo, &config).await {
            Ok(draft) => draft,
            Err(e) => {
                warn!("Draft generation failed, falling back to manual entry: {e}");
                CommitMessage::default()
            }
        }
    };

    let message = edit_draft(draft).context("Commit form aborted")?;
    let rendered = message.render();

    println!("{rendered}");

    if !cli.no_copy {
        match copy_to_clipboard(&rendered).await {
            Ok(true) => println!("\nCommit message copied to clipboard ✔"),
            Ok(false) => {}
            Err(e) => warn!("Clipboard copy failed: {e}"),
        }
    }

    Ok(())
}

/// Open the repository and run the drafting pipeline against it.
async fn draft_from_repo(repo: &Path, config: &LlmConfig) -> Result<CommitMessage, DraftError> {
    let source = WorkingTree::open(repo)?;
    build_draft(&source, config, true).await
}
