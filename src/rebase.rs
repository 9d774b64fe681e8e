//! Rebase todo rewriting
//!
//! Decides which `pick` lines of an interactive rebase todo list must become
//! `reword` so the commit message editor runs for them:
//!
//! 1. commits whose message has never been stamped with a `commit-id` trailer
//! 2. when a PR number is given, every commit up to and including the
//!    `--until-commit-hash` boundary
//!
//! Lines are bytes: subjects copied from non-UTF-8 commits pass through as is.

use crate::buffer;
use crate::error::Result;
use crate::git::HistoryLookup;
use crate::types::RewordOptions;
use std::path::Path;
use tracing::debug;

const PICK: &[u8] = b"pick ";
const REWORD: &[u8] = b"reword ";

/// Marker searched for in a commit's historical message
const COMMIT_ID_MARKER: &str = "commit-id";

/// A single line of the todo list, parsed on demand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RebaseLine<'a> {
    raw: &'a [u8],
}

impl<'a> RebaseLine<'a> {
    /// Wrap one todo line (without its terminator)
    pub const fn new(raw: &'a [u8]) -> Self {
        Self { raw }
    }

    /// `#`-prefixed lines are git's instructions, never commands
    pub fn is_comment(&self) -> bool {
        self.raw.starts_with(b"#")
    }

    /// Whether the line is a `pick <hash> ...` command
    pub fn is_pick(&self) -> bool {
        self.raw.starts_with(PICK)
    }

    fn tokens(&self) -> impl Iterator<Item = &'a [u8]> {
        self.raw
            .split(u8::is_ascii_whitespace)
            .filter(|token| !token.is_empty())
    }

    /// Leading action token (`pick`, `reword`, `exec`, ...)
    pub fn action(&self) -> Option<&'a [u8]> {
        self.tokens().next()
    }

    /// Second whitespace-separated token, the commit hash for commit actions
    pub fn hash(&self) -> Option<&'a [u8]> {
        self.tokens().nth(1)
    }

    /// Whether this line names the stop commit (by hash prefix)
    pub fn matches_stop_hash(&self, stop_hash: &str) -> bool {
        !self.is_comment()
            && self
                .hash()
                .is_some_and(|hash| hash.starts_with(stop_hash.as_bytes()))
    }

    /// The line with its leading `pick ` replaced by `reword `
    fn to_reword(self) -> Vec<u8> {
        match self.raw.strip_prefix(PICK) {
            Some(rest) => [REWORD, rest].concat(),
            None => self.raw.to_vec(),
        }
    }
}

/// Per-run boundary tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteState {
    commit_hash_passed: bool,
}

impl RewriteState {
    /// Whether the stop commit has been seen on an earlier line
    pub const fn commit_hash_passed(&self) -> bool {
        self.commit_hash_passed
    }

    /// Record `line`; once the stop commit is seen the state stays passed
    pub fn observe(&mut self, line: RebaseLine<'_>, stop_hash: Option<&str>) {
        if self.commit_hash_passed {
            return;
        }
        if let Some(stop) = stop_hash {
            if line.matches_stop_hash(stop) {
                debug!(stop, "passed stop commit");
                self.commit_hash_passed = true;
            }
        }
    }
}

fn should_reword(message: &str, options: &RewordOptions, state: RewriteState) -> bool {
    if !message.contains(COMMIT_ID_MARKER) {
        return true;
    }
    options.pr_number.is_some() && !state.commit_hash_passed()
}

/// Rewrite the todo list held in `lines`
///
/// Returned lines carry no terminators; non-`pick` lines come back unchanged.
pub fn rewrite_todo(
    lines: &[Vec<u8>],
    options: &RewordOptions,
    history: &dyn HistoryLookup,
) -> Result<Vec<Vec<u8>>> {
    let stop_hash = options.until_commit_hash.as_deref();
    let mut state = RewriteState::default();
    let mut out = Vec::with_capacity(lines.len());

    for raw in lines {
        let line = RebaseLine::new(raw);

        let rewritten = match line.hash().filter(|_| line.is_pick()) {
            Some(hash) => {
                let hash = String::from_utf8_lossy(hash);
                let message = history.commit_message(&hash)?;
                if should_reword(&message, options, state) {
                    debug!(%hash, "rewording commit");
                    line.to_reword()
                } else {
                    raw.clone()
                }
            }
            None => raw.clone(),
        };

        // The stop line's own decision above used the state from before it.
        state.observe(RebaseLine::new(&rewritten), stop_hash);
        out.push(rewritten);
    }

    Ok(out)
}

/// Rewrite the rebase todo file at `path` in place
pub fn rewrite_todo_file(
    path: &Path,
    options: &RewordOptions,
    history: &dyn HistoryLookup,
) -> Result<()> {
    let lines = buffer::read_lines(path)?;
    let rewritten = rewrite_todo(&lines, options, history)?;
    buffer::write_lines(path, &rewritten)
}
