//! Interactive commit form.
//!
//! Presents the (possibly prefilled) draft fields for confirmation and edit.
//! The description is the only required field; everything else may stay empty.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Editor, Input, Select};

use crate::commit::{CommitMessage, CommitType};

/// Walk the user through the draft fields and return the confirmed message.
///
/// Returns an error when the session is aborted; the caller decides whether
/// that ends the run.
pub fn edit_draft(mut draft: CommitMessage) -> Result<CommitMessage, dialoguer::Error> {
    let theme = ColorfulTheme::default();

    let labels: Vec<String> = CommitType::ALL
        .iter()
        .map(|ty| format!("{:>8}: {}", ty.as_str(), ty.describe()))
        .collect();
    let selected = Select::with_theme(&theme)
        .with_prompt("Commit type")
        .items(&labels)
        .default(draft.kind as usize)
        .interact()?;
    draft.kind = CommitType::ALL[selected];

    draft.description = Input::<String>::with_theme(&theme)
        .with_prompt("Description")
        .with_initial_text(draft.description.as_str())
        .validate_with(|input: &String| {
            let candidate = CommitMessage {
                description: input.clone(),
                ..CommitMessage::default()
            };
            if candidate.is_submit_ready() {
                Ok(())
            } else {
                Err("a commit description is required")
            }
        })
        .interact_text()?;

    draft.scope = Input::<String>::with_theme(&theme)
        .with_prompt("Scope (optional)")
        .with_initial_text(draft.scope.as_str())
        .allow_empty(true)
        .interact_text()?;

    let edit_body = Confirm::with_theme(&theme)
        .with_prompt("Edit the body in $EDITOR?")
        .default(!draft.body.is_empty())
        .interact()?;
    if edit_body {
        // None means the user closed the editor without saving; keep the draft body.
        if let Some(body) = Editor::new().edit(&draft.body)? {
            draft.body = body.trim_end().to_string();
        }
    }

    draft.breaking_change = Input::<String>::with_theme(&theme)
        .with_prompt("Breaking change (optional)")
        .with_initial_text(draft.breaking_change.as_str())
        .allow_empty(true)
        .interact_text()?;

    Ok(draft)
}
