//! Buffer fixtures

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Identifier whose short form is `FIXED_SHORT_ID`
pub const FIXED_ID: &str = "0123abcd-0000-4000-8000-000000000000";
pub const FIXED_SHORT_ID: &str = "0123abcd";

/// Comment block git appends below a fresh commit message
pub const EDITMSG_COMMENTS: &str = "\
# Please enter the commit message for your changes. Lines starting
# with '#' will be ignored, and an empty message aborts the commit.
#
# On branch feature
";

/// Scratch directory holding a single editor buffer
pub struct TempBuffer {
    _dir: TempDir,
    pub path: PathBuf,
}

impl TempBuffer {
    pub fn new(name: &str, contents: impl AsRef<[u8]>) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        fs::write(&path, contents).expect("write buffer");
        Self { _dir: dir, path }
    }

    /// A `COMMIT_EDITMSG` buffer
    pub fn commit_msg(contents: impl AsRef<[u8]>) -> Self {
        Self::new("COMMIT_EDITMSG", contents)
    }

    /// A `git-rebase-todo` buffer
    pub fn rebase_todo(contents: impl AsRef<[u8]>) -> Self {
        Self::new("git-rebase-todo", contents)
    }

    pub fn contents(&self) -> String {
        fs::read_to_string(&self.path).expect("read buffer")
    }

    pub fn bytes(&self) -> Vec<u8> {
        fs::read(&self.path).expect("read buffer")
    }
}

/// A commit message that already carries a trailer
pub fn stamped_message(title: &str) -> String {
    format!("{title}\n\ncommit-id:feedf00d\n")
}
