//! Error types for ModScope operations.
//!
//! Every error here is fatal: the run stops and nothing is rendered.
//! A focus module with no dependents is not an error.

use std::path::PathBuf;
use thiserror::Error;

use crate::parser::ParseError;

/// Result type for ModScope operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for ModScope operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Module graph text contained a malformed identity
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The module graph of a directory could not be produced
    #[error("cannot read module graph in {}: {reason}", .dir.display())]
    UnreadableSource {
        /// Directory the graph was requested for
        dir: PathBuf,
        /// What went wrong, including command stderr when available
        reason: String,
    },

    /// Scanning a directory tree for modules failed
    #[error("module discovery failed: {0}")]
    Discover(#[from] walkdir::Error),

    /// File system operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_is_transparent() {
        let err: Error = ParseError::MalformedIdentity {
            token: "a@b@c".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "malformed module identity \"a@b@c\": more than one '@'"
        );
    }

    #[test]
    fn test_unreadable_source_message() {
        let err = Error::UnreadableSource {
            dir: PathBuf::from("repos/app"),
            reason: "go mod graph exited with status 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "cannot read module graph in repos/app: go mod graph exited with status 1"
        );
    }
}
