//! Reword command - rewrite one git editor buffer

use spr_reword::error::Result;
use spr_reword::git::GitCli;
use spr_reword::identifier::RandomIds;
use spr_reword::reword_file;
use spr_reword::types::RewordOptions;
use std::path::Path;
use tracing::info;

/// Run the reword command against the real git history and random ids
pub fn run_reword(path: &Path, pr_number: i64, until_commit_hash: &str) -> Result<()> {
    let options = RewordOptions::from_raw(pr_number, until_commit_hash);
    info!(
        path = %path.display(),
        pr_number = ?options.pr_number,
        until = ?options.until_commit_hash,
        "rewriting editor buffer"
    );

    reword_file(path, &options, &GitCli, &RandomIds)
}
