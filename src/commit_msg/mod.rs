//! Commit message annotation
//!
//! Runs in two phases, each reading what the previous one persisted:
//! 1. Trailer - append `commit-id:<8 hex>` if the message has none
//! 2. PR title - stamp `(#N)` onto the title when a PR number is given

mod pr_title;
mod trailer;

pub use pr_title::{annotate_message, annotate_title, append_pr_number};
pub use trailer::{append_commit_id, scan_trailer, trailer_block};

use crate::error::Result;
use crate::identifier::IdentifierSource;
use crate::types::RewordOptions;
use std::path::Path;

/// Annotate the commit message file at `path`
pub fn annotate_file(
    path: &Path,
    options: &RewordOptions,
    ids: &dyn IdentifierSource,
) -> Result<()> {
    append_commit_id(path, ids)?;
    if let Some(pr_number) = options.pr_number {
        append_pr_number(path, pr_number)?;
    }
    Ok(())
}
