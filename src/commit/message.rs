//! The commit message model and its Conventional Commit rendering.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::llm::extract_json;

/// The closed set of Conventional Commit types, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommitType {
    #[default]
    Build,
    Ci,
    Docs,
    Feat,
    Fix,
    Perf,
    Refactor,
    Style,
    Test,
}

impl CommitType {
    /// All types in display order. Index matches the enum discriminant.
    pub const ALL: [CommitType; 9] = [
        CommitType::Build,
        CommitType::Ci,
        CommitType::Docs,
        CommitType::Feat,
        CommitType::Fix,
        CommitType::Perf,
        CommitType::Refactor,
        CommitType::Style,
        CommitType::Test,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Build => "build",
            CommitType::Ci => "ci",
            CommitType::Docs => "docs",
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Perf => "perf",
            CommitType::Refactor => "refactor",
            CommitType::Style => "style",
            CommitType::Test => "test",
        }
    }

    /// Short description shown next to the type in the commit form.
    pub fn describe(&self) -> &'static str {
        match self {
            CommitType::Build => "changes that affect the build system or external dependencies",
            CommitType::Ci => "changes to CI configuration or scripts",
            CommitType::Docs => "documentation-only changes",
            CommitType::Feat => "a new feature",
            CommitType::Fix => "a bug fix",
            CommitType::Perf => "changes that improve performance",
            CommitType::Refactor => "changes that neither fix a bug nor add a feature",
            CommitType::Style => "changes that do not affect the meaning of code",
            CommitType::Test => "changes that add missing tests or correct existing tests",
        }
    }

    /// Map a type name to its variant.
    ///
    /// Unrecognized names fall back to the default variant rather than failing:
    /// the names come from best-effort LLM output.
    pub fn from_name(name: &str) -> CommitType {
        CommitType::ALL
            .iter()
            .find(|ty| ty.as_str() == name)
            .copied()
            .unwrap_or_default()
    }
}

impl std::fmt::Display for CommitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CommitType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CommitType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(CommitType::from_name(&name))
    }
}

/// A commit message in the Conventional Commit shape.
///
/// Optional fields are empty strings. The struct doubles as the wire shape the
/// synthesis stage asks the model to emit, so decoding is permissive: missing
/// fields default to empty and unknown type names map to the default type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitMessage {
    #[serde(rename = "type", alias = "Type")]
    pub kind: CommitType,
    #[serde(alias = "Description")]
    pub description: String,
    #[serde(alias = "Scope")]
    pub scope: String,
    #[serde(alias = "Body")]
    pub body: String,
    #[serde(
        rename = "breaking_change",
        alias = "BreakingChange",
        alias = "breakingChange"
    )]
    pub breaking_change: String,
}

impl CommitMessage {
    /// Render the message as Conventional Commit text.
    ///
    /// Produces:
    /// ```text
    /// type(scope)!: description
    ///
    /// Body text.
    ///
    /// BREAKING CHANGES: what broke
    /// ```
    /// The `!` marker appears exactly when `breaking_change` is non-empty.
    /// Rendering is a pure function of the fields and performs no validation;
    /// an empty description yields a malformed but non-crashing string.
    pub fn render(&self) -> String {
        let mut subject = String::new();
        subject.push_str(self.kind.as_str());
        if !self.scope.is_empty() {
            subject.push_str(&format!("({})", self.scope));
        }
        if !self.breaking_change.is_empty() {
            subject.push('!');
        }
        subject.push_str(&format!(": {}", self.description));

        let mut parts = vec![subject];
        if !self.body.is_empty() {
            parts.push(self.body.clone());
        }
        if !self.breaking_change.is_empty() {
            parts.push(format!("BREAKING CHANGES: {}", self.breaking_change));
        }

        parts.join("\n\n")
    }

    /// Whether the message is complete enough to hand off.
    ///
    /// The interactive form enforces this at input time; `render` does not.
    pub fn is_submit_ready(&self) -> bool {
        !self.description.trim().is_empty()
    }
}

/// Whether a draft reply decoded cleanly or degraded to the empty draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeOutcome {
    Parsed,
    Fallback,
}

/// Leniently decode an LLM reply into a commit draft.
///
/// LLM output is untrusted: a malformed or non-JSON reply degrades to an empty
/// draft with a `Fallback` outcome instead of an error, since the interactive
/// form afterwards lets the user recover.
pub fn decode_draft(reply: &str) -> (CommitMessage, DecodeOutcome) {
    let json = extract_json(reply);
    match serde_json::from_str::<CommitMessage>(&json) {
        Ok(draft) => (draft, DecodeOutcome::Parsed),
        Err(e) => {
            debug!("Could not decode draft reply as commit JSON: {e}");
            debug!("Raw reply: {reply}");
            (CommitMessage::default(), DecodeOutcome::Fallback)
        }
    }
}
