//! File walker over a Go module tree.
//!
//! Uses the `ignore` crate for gitignore-aware directory walking. Hidden
//! directories, test directories (`testdata`, `_*`), `*_test.go` files and
//! nested modules (directories with their own `go.mod`) are skipped.
//! `.docgenignore` files are honoured like `.gitignore`.

use ignore::WalkBuilder;
use std::path::Path;

use crate::gomod::GO_MOD;
use crate::test_files::{is_test_dir, is_test_file};

pub const IGNORE_FILE: &str = ".docgenignore";

/// Build a file walker over `root`.
///
/// When `skip_vendor` is set, `vendor/` directories are not descended into.
#[must_use]
pub fn build_walker(root: &Path, skip_vendor: bool) -> ignore::Walk {
    let mut builder = WalkBuilder::new(root);
    builder.add_custom_ignore_filename(IGNORE_FILE);
    builder.filter_entry(move |entry| {
        if entry.depth() == 0 {
            return true;
        }
        let file_name = entry.file_name().to_string_lossy();
        if entry.file_type().is_some_and(|ft| ft.is_dir()) {
            !(is_test_dir(&file_name)
                || (skip_vendor && file_name == "vendor")
                || entry.path().join(GO_MOD).is_file())
        } else {
            !is_test_file(&file_name)
        }
    });
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn walked(root: &Path, skip_vendor: bool) -> Vec<String> {
        let mut files: Vec<String> = build_walker(root, skip_vendor)
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_some_and(|ft| ft.is_file()))
            .filter_map(|e| {
                e.path()
                    .strip_prefix(root)
                    .ok()
                    .map(|p| p.to_string_lossy().replace('\\', "/"))
            })
            .collect();
        files.sort();
        files
    }

    #[test]
    fn skips_tests_hidden_and_nested_modules() {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path();
        for path in [
            "types.go",
            "types_test.go",
            "testdata/fixture.go",
            "_scratch/old.go",
            ".hidden/x.go",
            "tools/go.mod",
            "tools/tools.go",
            "vendor/example.com/dep/dep.go",
        ] {
            let full = root.join(path);
            fs::create_dir_all(full.parent().expect("parent")).expect("mkdir");
            fs::write(&full, "package x\n").expect("write");
        }

        assert_eq!(
            walked(root, false),
            vec![
                "types.go".to_string(),
                "vendor/example.com/dep/dep.go".to_string(),
            ]
        );
        assert_eq!(walked(root, true), vec!["types.go".to_string()]);
    }
}
