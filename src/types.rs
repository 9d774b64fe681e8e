//! Core types shared by both rewriting pipelines

use std::path::Path;

/// File name git uses for the commit message edit buffer
pub const COMMIT_EDITMSG: &str = "COMMIT_EDITMSG";

/// Prefix of the tracking trailer line
pub const COMMIT_ID_TRAILER: &str = "commit-id:";

/// Which editor buffer is being rewritten
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferKind {
    /// Interactive rebase todo list (`git-rebase-todo`)
    RebaseTodo,
    /// Commit message being edited (`COMMIT_EDITMSG`)
    CommitMessage,
}

impl BufferKind {
    /// Classify a buffer from its path
    pub fn from_path(path: &Path) -> Self {
        if path.to_string_lossy().ends_with(COMMIT_EDITMSG) {
            Self::CommitMessage
        } else {
            Self::RebaseTodo
        }
    }
}

/// Options for a reword run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewordOptions {
    /// PR number to stamp into commit titles
    pub pr_number: Option<u64>,
    /// Last commit (inclusive, by hash prefix) that still gets the PR number
    pub until_commit_hash: Option<String>,
}

impl RewordOptions {
    /// Build options from raw command line values
    ///
    /// A negative PR number is the "unset" sentinel and an empty hash means no
    /// stop boundary.
    pub fn from_raw(pr_number: i64, until_commit_hash: &str) -> Self {
        Self {
            pr_number: u64::try_from(pr_number).ok(),
            until_commit_hash: Some(until_commit_hash)
                .filter(|h| !h.is_empty())
                .map(ToString::to_string),
        }
    }
}

/// Outcome of scanning a commit message for its trailer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrailerDecision {
    /// Message has content but no `commit-id:` trailer
    pub missing_commit_id: bool,
    /// Title is the only non-comment line, so a separator must be synthesized
    pub missing_new_line: bool,
}
