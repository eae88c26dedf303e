//! Input expansion
//!
//! Turns the paths given on the command line into a flat, deterministic list
//! of files. Suffix and exclusion filtering happen later, per file, in the
//! extractor.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{ExtractError, Result};

/// Expand files and directories into a flat file list
///
/// Inputs keep their command-line order; each directory contributes its
/// files sorted by path. A missing input is an error.
pub fn collect_files(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            collect_files_recursive(input, &mut files);
        } else if input.is_file() {
            files.push(input.clone());
        } else {
            return Err(ExtractError::FileNotFound {
                path: input.display().to_string(),
            });
        }
    }
    Ok(files)
}

/// Recursively collect every file under `dir`, in sorted order
pub fn collect_files_recursive(dir: &Path, files: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) => {
            warn!("{}: cannot read directory: {}", dir.display(), e);
            return;
        }
    };

    let mut paths: Vec<PathBuf> = entries.flatten().map(|entry| entry.path()).collect();
    paths.sort();

    for path in paths {
        if should_skip_path(&path) {
            continue;
        }

        if path.is_dir() {
            collect_files_recursive(&path, files);
        } else if path.is_file() {
            files.push(path);
        }
    }
}

/// Check if a path should be skipped during directory expansion.
///
/// Only version-control metadata is skipped; anything else is left to the
/// suffix list and the exclusion pattern.
pub fn should_skip_path(path: &Path) -> bool {
    matches!(
        path.file_name().and_then(|n| n.to_str()),
        Some(".git" | ".svn" | ".hg")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_skip_vcs() {
        assert!(should_skip_path(Path::new(".git")));
        assert!(should_skip_path(Path::new("repo/.svn")));
    }

    #[test]
    fn test_should_not_skip_sources() {
        assert!(!should_skip_path(Path::new("src")));
        assert!(!should_skip_path(Path::new("node_modules")));
        assert!(!should_skip_path(Path::new(".eslintrc.js")));
    }

    #[test]
    fn test_collect_files_sorted_and_recursive() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("b/nested")).unwrap();
        fs::create_dir_all(root.join(".git")).unwrap();
        fs::write(root.join("b/nested/z.js"), "").unwrap();
        fs::write(root.join("b/a.vue"), "").unwrap();
        fs::write(root.join("a.js"), "").unwrap();
        fs::write(root.join(".git/config"), "").unwrap();

        let files = collect_files(&[root.to_path_buf()]).unwrap();
        let rel: Vec<PathBuf> = files
            .iter()
            .map(|f| f.strip_prefix(root).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            rel,
            vec![
                PathBuf::from("a.js"),
                PathBuf::from("b/a.vue"),
                PathBuf::from("b/nested/z.js")
            ]
        );
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let temp = tempfile::tempdir().unwrap();
        let missing = temp.path().join("nope.js");
        assert!(matches!(
            collect_files(&[missing]),
            Err(ExtractError::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_inputs_keep_their_order() {
        let temp = tempfile::tempdir().unwrap();
        let a = temp.path().join("a.js");
        let b = temp.path().join("b.js");
        fs::write(&a, "").unwrap();
        fs::write(&b, "").unwrap();

        let files = collect_files(&[b.clone(), a.clone()]).unwrap();
        assert_eq!(files, vec![b, a]);
    }
}
