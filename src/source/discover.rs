//! Discovery of Go module directories.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::error::Result;

/// File marking a Go module root.
const MODULE_FILE: &str = "go.mod";

/// Directory names the go tool never treats as part of a module tree.
const SKIPPED_DIRS: &[&str] = &["vendor", "testdata", "node_modules"];

/// Returns every directory under `root` (including `root`) that holds a
/// `go.mod`, sorted and without duplicates.
///
/// Hidden directories, directories starting with `_`, and the names in
/// [`SKIPPED_DIRS`] are not descended into.
///
/// # Errors
///
/// Fails if `root` or any directory below it cannot be read.
pub fn discover_modules(root: &Path) -> Result<Vec<PathBuf>> {
    let mut modules = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_skipped(entry));

    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() && entry.file_name() == MODULE_FILE {
            if let Some(dir) = entry.path().parent() {
                modules.push(dir.to_path_buf());
            }
        }
    }

    modules.sort();
    modules.dedup();
    debug!(root = %root.display(), found = modules.len(), "discovered modules");
    Ok(modules)
}

fn is_skipped(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.')
        || name.starts_with('_')
        || SKIPPED_DIRS.iter().any(|&skipped| name == skipped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "module example.com/x\n").unwrap();
    }

    #[test]
    fn test_discover_nested_modules() {
        let root = tempfile::tempdir().unwrap();
        touch(&root.path().join("go.mod"));
        touch(&root.path().join("repos/lotus/go.mod"));
        touch(&root.path().join("repos/go-ipfs/go.mod"));
        touch(&root.path().join("repos/go-ipfs/cmd/tool/go.mod"));
        fs::write(root.path().join("repos/README.md"), "not a module").unwrap();

        let found = discover_modules(root.path()).unwrap();
        assert_eq!(
            found,
            vec![
                root.path().to_path_buf(),
                root.path().join("repos/go-ipfs"),
                root.path().join("repos/go-ipfs/cmd/tool"),
                root.path().join("repos/lotus"),
            ]
        );
    }

    #[test]
    fn test_discover_skips_vendor_hidden_and_testdata() {
        let root = tempfile::tempdir().unwrap();
        touch(&root.path().join("app/go.mod"));
        touch(&root.path().join("app/vendor/example.com/dep/go.mod"));
        touch(&root.path().join("app/testdata/fixture/go.mod"));
        touch(&root.path().join(".git/modules/go.mod"));
        touch(&root.path().join("_scratch/go.mod"));

        let found = discover_modules(root.path()).unwrap();
        assert_eq!(found, vec![root.path().join("app")]);
    }

    #[test]
    fn test_discover_empty_tree() {
        let root = tempfile::tempdir().unwrap();
        assert!(discover_modules(root.path()).unwrap().is_empty());
    }

    #[test]
    fn test_discover_missing_root_fails() {
        let root = tempfile::tempdir().unwrap();
        let err = discover_modules(&root.path().join("missing")).unwrap_err();
        assert!(matches!(err, Error::Discover(_)));
        assert!(err.to_string().starts_with("module discovery failed"));
    }
}
