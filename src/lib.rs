//! spr-reword - git editor hook for stacked PRs
//!
//! Rewrites the two editor buffers git hands out while a stack is being
//! updated:
//!
//! - **Rebase todo**: `pick` lines whose commits were never stamped (or that
//!   still need a PR number) are turned into `reword`
//! - **`COMMIT_EDITMSG`**: a `commit-id:` trailer is appended when missing and
//!   the title gets a `(#N)` PR suffix

pub mod buffer;
pub mod commit_msg;
pub mod error;
pub mod git;
pub mod identifier;
pub mod rebase;
pub mod types;

use crate::error::Result;
use crate::git::HistoryLookup;
use crate::identifier::IdentifierSource;
use crate::types::{BufferKind, RewordOptions};
use std::path::Path;
use tracing::debug;

/// Rewrite the editor buffer at `path` according to its kind
///
/// Commit message buffers are recognised by their file name; anything else is
/// treated as a rebase todo list.
pub fn reword_file(
    path: &Path,
    options: &RewordOptions,
    history: &dyn HistoryLookup,
    ids: &dyn IdentifierSource,
) -> Result<()> {
    let kind = BufferKind::from_path(path);
    debug!(path = %path.display(), ?kind, "rewording editor buffer");

    match kind {
        BufferKind::RebaseTodo => rebase::rewrite_todo_file(path, options, history),
        BufferKind::CommitMessage => commit_msg::annotate_file(path, options, ids),
    }
}
