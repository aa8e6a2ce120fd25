//! JSON extraction from LLM replies.
//!
//! Models often wrap JSON in markdown fences or surround it with
//! conversational text. Extraction handles both, with brace matching that
//! respects string literals.

/// Extract a JSON object from an LLM reply.
///
/// Tries, in order: a ```` ```json ```` fenced block, a bare fenced block
/// whose content starts with `{`, then balanced-brace extraction from the
/// surrounding text. Returns the trimmed input unchanged when nothing
/// parseable is found, so callers decide how to degrade.
pub fn extract_json(reply: &str) -> String {
    let trimmed = reply.trim();

    if let Some(inner) = fenced_block(trimmed, "```json") {
        return inner.to_string();
    }

    if let Some(inner) = fenced_block(trimmed, "```") {
        if inner.starts_with('{') {
            return inner.to_string();
        }
    }

    for (start, _) in trimmed.match_indices('{') {
        if let Some(candidate) = balanced_object(&trimmed[start..]) {
            if serde_json::from_str::<serde_json::Value>(candidate).is_ok() {
                return candidate.to_string();
            }
        }
    }

    trimmed.to_string()
}

/// The trimmed content of the first fenced block opened by `fence`.
fn fenced_block<'a>(text: &'a str, fence: &str) -> Option<&'a str> {
    let start = text.find(fence)? + fence.len();
    let end = text[start..].find("```")?;
    Some(text[start..start + end].trim())
}

/// The prefix of `text` covering one balanced `{...}` object.
///
/// Tracks brace depth while skipping braces inside JSON string literals,
/// including escaped quotes.
fn balanced_object(text: &str) -> Option<&str> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (idx, ch) in text.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }

        match ch {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(&text[..=idx]);
                }
            }
            _ => {}
        }
    }

    None
}
