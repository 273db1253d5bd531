//! `go mod graph` edge source.

use std::ffi::{OsStr, OsString};
use std::path::Path;
use std::process::Command;

use tracing::debug;

use super::EdgeSource;
use crate::error::{Error, Result};
use crate::parser::{parse_str, Relationship};

/// Runs `go mod graph` inside each project directory.
#[derive(Debug, Clone)]
pub struct GoModGraph {
    program: OsString,
}

impl Default for GoModGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl GoModGraph {
    /// Uses the `go` found on `PATH`.
    pub fn new() -> Self {
        Self::with_program("go")
    }

    /// Uses a specific `go` executable.
    pub fn with_program(program: impl AsRef<OsStr>) -> Self {
        Self {
            program: program.as_ref().to_os_string(),
        }
    }

    /// The executable that will be run.
    pub fn program(&self) -> &OsStr {
        &self.program
    }
}

impl EdgeSource for GoModGraph {
    fn load(&self, dir: &Path) -> Result<Vec<Relationship>> {
        debug!(dir = %dir.display(), "running go mod graph");

        let output = Command::new(&self.program)
            .args(["mod", "graph"])
            .current_dir(dir)
            .output()
            .map_err(|e| Error::UnreadableSource {
                dir: dir.to_path_buf(),
                reason: format!("failed to run {}: {}", self.program.to_string_lossy(), e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::UnreadableSource {
                dir: dir.to_path_buf(),
                reason: format!("go mod graph exited with {}: {}", output.status, stderr.trim()),
            });
        }

        let stdout = decode_stdout(dir, output.stdout)?;
        let relationships = parse_str(&stdout)?;
        debug!(
            dir = %dir.display(),
            relationships = relationships.len(),
            "parsed module graph"
        );
        Ok(relationships)
    }
}

/// Decodes command output, refusing invalid UTF-8 instead of patching it.
fn decode_stdout(dir: &Path, stdout: Vec<u8>) -> Result<String> {
    String::from_utf8(stdout).map_err(|e| Error::UnreadableSource {
        dir: dir.to_path_buf(),
        reason: format!("go mod graph output is not valid UTF-8: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_program_is_go() {
        assert_eq!(GoModGraph::default().program(), OsStr::new("go"));
        assert_eq!(
            GoModGraph::with_program("/opt/go/bin/go").program(),
            OsStr::new("/opt/go/bin/go")
        );
    }

    #[test]
    fn test_missing_program_is_unreadable_source() {
        let dir = tempfile::tempdir().unwrap();
        let source = GoModGraph::with_program("modscope-test-no-such-go-binary");

        let err = source.load(dir.path()).unwrap_err();
        match err {
            Error::UnreadableSource { dir: failed, reason } => {
                assert_eq!(failed, dir.path());
                assert!(reason.contains("modscope-test-no-such-go-binary"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_decode_stdout_accepts_utf8() {
        let decoded = decode_stdout(Path::new("repo"), b"app@v1 lib@v1\n".to_vec()).unwrap();
        assert_eq!(decoded, "app@v1 lib@v1\n");
    }

    #[test]
    fn test_decode_stdout_rejects_invalid_utf8() {
        let err = decode_stdout(Path::new("repo"), b"app@v1 lib@\xff\n".to_vec()).unwrap_err();
        match err {
            Error::UnreadableSource { dir, reason } => {
                assert_eq!(dir, Path::new("repo"));
                assert!(reason.contains("UTF-8"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_directory_is_unreadable_source() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");

        let err = GoModGraph::new().load(&missing).unwrap_err();
        assert!(matches!(err, Error::UnreadableSource { .. }));
    }
}
