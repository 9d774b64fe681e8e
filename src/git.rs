//! Commit history lookups

use crate::error::{Error, Result};
use std::process::Command;
use tracing::debug;

/// Read access to historical commit messages
pub trait HistoryLookup {
    /// Full message (`%B`) of the commit identified by `hash`
    fn commit_message(&self, hash: &str) -> Result<String>;
}

/// History lookup backed by the `git` binary, run in the working directory
///
/// Git starts editors from the repository root, so no discovery is needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitCli;

impl GitCli {
    /// Run a git command and capture its stdout.
    fn run_output(args: &[&str]) -> Result<String> {
        let output = Command::new("git")
            .args(args)
            .output()
            .map_err(Error::GitExec)?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).to_string())
        } else {
            Err(Error::Git {
                command: args.join(" "),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}

impl HistoryLookup for GitCli {
    fn commit_message(&self, hash: &str) -> Result<String> {
        debug!(hash, "looking up commit message");
        Self::run_output(&["log", "--format=%B", "-n", "1", hash])
    }
}
