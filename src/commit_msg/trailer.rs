//! `commit-id:` trailer detection and insertion

use crate::buffer;
use crate::error::Result;
use crate::identifier::{IdentifierSource, short_id};
use crate::types::{COMMIT_ID_TRAILER, TrailerDecision};
use std::path::Path;
use tracing::debug;

/// Scan a commit message and decide whether a trailer must be appended
///
/// Stops at the first existing trailer: a stamped message never gets a second
/// one.
pub fn scan_trailer<'a>(lines: impl IntoIterator<Item = &'a [u8]>) -> TrailerDecision {
    let mut line_count = 0usize;
    let mut non_empty_commit_message = false;

    for line in lines {
        let is_comment = line.starts_with(b"#");
        if !is_comment {
            line_count += 1;
            if !line.is_empty() {
                non_empty_commit_message = true;
            }
        }
        if line.starts_with(COMMIT_ID_TRAILER.as_bytes()) {
            return TrailerDecision::default();
        }
    }

    TrailerDecision {
        missing_commit_id: non_empty_commit_message,
        missing_new_line: line_count == 1,
    }
}

/// Text appended after a message lacking a trailer
pub fn trailer_block(decision: TrailerDecision, commit_id: &str) -> String {
    let mut block = String::new();
    if decision.missing_new_line {
        block.push('\n');
    }
    block.push('\n');
    block.push_str(COMMIT_ID_TRAILER);
    block.push_str(commit_id);
    block.push('\n');
    block
}

/// Append a fresh trailer to the message file at `path` if it lacks one
///
/// Returns whether anything was appended.
pub fn append_commit_id(path: &Path, ids: &dyn IdentifierSource) -> Result<bool> {
    let lines = buffer::read_lines(path)?;
    let decision = scan_trailer(lines.iter().map(Vec::as_slice));
    debug!(?decision, "scanned commit message");

    if !decision.missing_commit_id {
        return Ok(false);
    }
    let block = trailer_block(decision, &short_id(&ids.generate()));
    buffer::append(path, block.as_bytes())?;
    Ok(true)
}
