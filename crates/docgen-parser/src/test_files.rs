//! Go test file and directory detection for filtering during loading.

/// Directory names the Go toolchain never treats as packages of the module.
const SKIPPED_DIRS: &[&str] = &["testdata"];

/// Returns `true` if `dir_name` must not be loaded as a package.
///
/// ```
/// use docgen_parser::is_test_dir;
/// assert!(is_test_dir("testdata"));
/// assert!(is_test_dir("_scratch"));
/// assert!(!is_test_dir("internal"));
/// ```
#[must_use]
pub fn is_test_dir(dir_name: &str) -> bool {
    SKIPPED_DIRS.contains(&dir_name) || dir_name.starts_with('_')
}

/// Returns `true` for `*_test.go` files.
///
/// Comparison is case-insensitive for the file name.
///
/// ```
/// use docgen_parser::is_test_file;
/// assert!(is_test_file("widget_test.go"));
/// assert!(!is_test_file("widget.go"));
/// ```
#[must_use]
pub fn is_test_file(file_name: &str) -> bool {
    file_name.to_lowercase().ends_with("_test.go")
}
