//! Error types for spr-reword

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while rewriting an editor buffer
#[derive(Error, Debug)]
pub enum Error {
    /// Reading or writing the buffer failed
    #[error("{action} {path}: {source}")]
    Io {
        /// What was being attempted ("read", "write", "append")
        action: &'static str,
        /// The buffer file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The git binary could not be spawned
    #[error("failed to execute git: {0}")]
    GitExec(#[source] std::io::Error),

    /// A git command exited unsuccessfully
    #[error("git {command} failed: {stderr}")]
    Git {
        /// Arguments passed to git
        command: String,
        /// Captured standard error
        stderr: String,
    },
}

impl Error {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
