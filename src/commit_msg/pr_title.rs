//! PR number suffix on the commit title

use crate::buffer;
use crate::error::Result;
use regex::bytes::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

/// Regex for an existing PR reference: `(#123)`
static RE_PR_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(#[0-9]+\)").unwrap());

/// Replace any PR reference in `title` with `(#pr_number)` at the end
pub fn annotate_title(title: &[u8], pr_number: u64) -> Vec<u8> {
    let stripped = RE_PR_NUMBER.replace_all(title, &b""[..]);
    let mut annotated = stripped.trim_ascii().to_vec();
    annotated.extend_from_slice(format!(" (#{pr_number})").as_bytes());
    annotated
}

/// Annotate the first line of `message`, leaving every other byte as is
pub fn annotate_message(message: &[u8], pr_number: u64) -> Vec<u8> {
    match message.iter().position(|&b| b == b'\n') {
        Some(end) => {
            let mut annotated = annotate_title(&message[..end], pr_number);
            annotated.extend_from_slice(&message[end..]);
            annotated
        }
        None => annotate_title(message, pr_number),
    }
}

/// Rewrite the title of the message file at `path`
pub fn append_pr_number(path: &Path, pr_number: u64) -> Result<()> {
    let message = buffer::read_bytes(path)?;
    let annotated = annotate_message(&message, pr_number);
    let title = annotated.split(|&b| b == b'\n').next().unwrap_or_default();
    debug!(pr_number, title = %String::from_utf8_lossy(title), "annotated title");
    buffer::write_bytes(path, &annotated)
}
