//! Diff collection from the working tree using git2.

use std::path::Path;

use git2::{Diff, DiffFormat, DiffOptions, ErrorCode, Repository, Tree};

use crate::error::DiffError;

/// Maximum characters of patch text collected per file.
const MAX_DIFF_LENGTH: usize = 30_000;

/// Source of changed files and per-file diff text.
///
/// The abstraction allows mocking diff collection in tests.
#[cfg_attr(test, mockall::automock)]
pub trait DiffSource {
    /// List the paths changed in the working tree. An empty list is valid.
    fn changed_files(&self) -> Result<Vec<String>, DiffError>;

    /// The unified diff text for a single changed path.
    fn diff_for(&self, path: &str) -> Result<String, DiffError>;
}

/// Diff source backed by a real repository's working tree.
///
/// Changes are the union of staged (`HEAD` tree to index) and unstaged plus
/// untracked (index to workdir) deltas, the same pending set `git add -A`
/// would pick up.
pub struct WorkingTree {
    repo: Repository,
}

impl WorkingTree {
    pub fn open(path: &Path) -> Result<Self, DiffError> {
        let repo = Repository::open(path).map_err(DiffError::OpenRepository)?;
        Ok(Self { repo })
    }

    /// Resolve the HEAD tree, distinguishing empty-repo errors from real failures.
    ///
    /// Returns `Ok(None)` for repos with no commits (unborn branch / not found).
    fn head_tree(&self) -> Result<Option<Tree<'_>>, DiffError> {
        let head_ref = match self.repo.head() {
            Ok(r) => r,
            Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
                return Ok(None);
            }
            Err(e) => return Err(DiffError::Unavailable(e)),
        };

        let tree = head_ref.peel_to_tree().map_err(DiffError::Unavailable)?;
        Ok(Some(tree))
    }
}

impl DiffSource for WorkingTree {
    fn changed_files(&self) -> Result<Vec<String>, DiffError> {
        let head_tree = self.head_tree()?;

        let staged = self
            .repo
            .diff_tree_to_index(head_tree.as_ref(), None, None)
            .map_err(DiffError::Unavailable)?;

        let mut opts = DiffOptions::new();
        opts.include_untracked(true).recurse_untracked_dirs(true);
        let unstaged = self
            .repo
            .diff_index_to_workdir(None, Some(&mut opts))
            .map_err(DiffError::Unavailable)?;

        let mut paths = Vec::new();
        collect_paths(&staged, &mut paths);
        collect_paths(&unstaged, &mut paths);

        paths.sort();
        paths.dedup();
        Ok(paths)
    }

    fn diff_for(&self, path: &str) -> Result<String, DiffError> {
        let head_tree = self.head_tree()?;

        let mut staged_opts = DiffOptions::new();
        staged_opts.pathspec(path);
        let staged = self
            .repo
            .diff_tree_to_index(head_tree.as_ref(), None, Some(&mut staged_opts))
            .map_err(DiffError::Unavailable)?;

        let mut unstaged_opts = DiffOptions::new();
        unstaged_opts
            .include_untracked(true)
            .recurse_untracked_dirs(true)
            .show_untracked_content(true)
            .pathspec(path);
        let unstaged = self
            .repo
            .diff_index_to_workdir(None, Some(&mut unstaged_opts))
            .map_err(DiffError::Unavailable)?;

        let mut text = String::new();
        let mut truncated = false;
        append_patch_text(&staged, &mut text, &mut truncated)?;
        if !truncated {
            append_patch_text(&unstaged, &mut text, &mut truncated)?;
        }
        Ok(text)
    }
}

/// Collect changed paths from a diff's deltas.
fn collect_paths(diff: &Diff<'_>, paths: &mut Vec<String>) {
    for delta in diff.deltas() {
        let path = delta
            .new_file()
            .path()
            .or_else(|| delta.old_file().path());
        if let Some(path) = path {
            paths.push(path.to_string_lossy().to_string());
        }
    }
}

/// Append unified patch text from a diff, respecting the per-file cap.
///
/// Once a line would push the text past [`MAX_DIFF_LENGTH`] the diff is
/// marked truncated and no further lines are appended.
fn append_patch_text(
    diff: &Diff<'_>,
    text: &mut String,
    truncated: &mut bool,
) -> Result<(), DiffError> {
    diff.print(DiffFormat::Patch, |_delta, _hunk, line| {
        if *truncated {
            return true;
        }

        let content = std::str::from_utf8(line.content()).unwrap_or("");

        // Check if adding this line would exceed the limit
        if text.len() + content.len() + 2 > MAX_DIFF_LENGTH {
            *truncated = true;
            return true;
        }

        let origin = line.origin();
        if origin == '+' || origin == '-' || origin == ' ' {
            text.push(origin);
        }
        text.push_str(content);
        true
    })
    .map_err(DiffError::Unavailable)
}
