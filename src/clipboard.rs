//! Hands the rendered message to the system clipboard.
//!
//! There is no portable clipboard API on the platforms scribe targets, so the
//! text is piped into whichever well-known clipboard tool is on the PATH.

use std::process::Stdio;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

/// Clipboard writers by platform, in probe order.
const CLIPBOARD_TOOLS: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("clip.exe", &[]),
];

/// Copy `text` to the clipboard via the first available tool.
///
/// Returns `Ok(false)` when no tool is installed or the tool exits non-zero;
/// the caller already printed the text, so a missing clipboard is not fatal.
pub async fn copy_to_clipboard(text: &str) -> std::io::Result<bool> {
    let Some((tool, args)) = CLIPBOARD_TOOLS
        .iter()
        .find(|(tool, _)| which::which(tool).is_ok())
    else {
        debug!("No clipboard tool found on PATH; skipping copy");
        return Ok(false);
    };

    debug!("Copying commit message via {tool}");
    let mut child = Command::new(tool)
        .args(*args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes()).await?;
    }

    let status = child.wait().await?;
    Ok(status.success())
}
