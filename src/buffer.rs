//! Editor buffer file I/O
//!
//! Buffers are handled as raw bytes: git writes commit messages in the
//! configured `i18n.commitEncoding`, which need not be UTF-8.
//!
//! Every helper opens, uses and drops its handle before returning, so a read
//! handle is never alive while the same file is being written.

use crate::error::{Error, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Split `bytes` into lines without their `\n` / `\r\n` terminators
///
/// A final terminator does not start an extra empty line.
pub fn split_lines(bytes: &[u8]) -> Vec<Vec<u8>> {
    if bytes.is_empty() {
        return Vec::new();
    }
    let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    body.split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line).to_vec())
        .collect()
}

/// Read a buffer into memory as lines, without their terminators
pub fn read_lines(path: &Path) -> Result<Vec<Vec<u8>>> {
    read_bytes(path).map(|bytes| split_lines(&bytes))
}

/// Truncate the buffer and write every line followed by a newline
pub fn write_lines(path: &Path, lines: &[Vec<u8>]) -> Result<()> {
    let mut out = Vec::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        out.extend_from_slice(line);
        out.push(b'\n');
    }
    write_bytes(path, &out)
}

/// Read the whole buffer verbatim
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| Error::io("read", path, e))
}

/// Truncate the buffer and replace it with `contents`
pub fn write_bytes(path: &Path, contents: &[u8]) -> Result<()> {
    fs::write(path, contents).map_err(|e| Error::io("write", path, e))
}

/// Append `bytes` to the end of an existing buffer
pub fn append(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|e| Error::io("append", path, e))?;
    file.write_all(bytes)
        .map_err(|e| Error::io("append", path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_split_lines_strips_terminators() {
        assert_eq!(
            split_lines(b"one\r\ntwo\nthree"),
            vec![b"one".to_vec(), b"two".to_vec(), b"three".to_vec()]
        );
    }

    #[test]
    fn test_split_lines_trailing_newline() {
        assert_eq!(split_lines(b"a\n"), vec![b"a".to_vec()]);
        assert_eq!(split_lines(b"a\n\n"), vec![b"a".to_vec(), Vec::new()]);
        assert_eq!(split_lines(b"\n"), vec![Vec::<u8>::new()]);
        assert!(split_lines(b"").is_empty());
    }

    #[test]
    fn test_read_lines_keeps_non_utf8_bytes() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), b"Caf\xe9 fix\nbody\n").unwrap();

        assert_eq!(
            read_lines(file.path()).unwrap(),
            vec![b"Caf\xe9 fix".to_vec(), b"body".to_vec()]
        );
    }

    #[test]
    fn test_write_lines_terminates_every_line() {
        let file = NamedTempFile::new().unwrap();
        write_lines(file.path(), &[b"a".to_vec(), b"b".to_vec()]).unwrap();

        assert_eq!(fs::read(file.path()).unwrap(), b"a\nb\n");
    }

    #[test]
    fn test_append_keeps_existing_bytes() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), b"title").unwrap();
        append(file.path(), b"\nmore\n").unwrap();

        assert_eq!(fs::read(file.path()).unwrap(), b"title\nmore\n");
    }

    #[test]
    fn test_read_missing_file_reports_path() {
        let err = read_lines(Path::new("/nonexistent/git-rebase-todo")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/git-rebase-todo"));
    }

    #[test]
    fn test_append_does_not_create_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("COMMIT_EDITMSG");

        assert!(append(&path, b"x").is_err());
        assert!(!path.exists());
    }
}
