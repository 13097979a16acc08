//! Fixed traversal rules for keepours.
//!
//! The candidate extensions and excluded directory names are not
//! user-configurable; they live here so the walker and its tests share one
//! definition.

/// File-name suffixes (with leading dot) of files that are scanned for
/// conflict markers. Matching is case-sensitive.
pub const CANDIDATE_EXTENSIONS: &[&str] = &[
    ".tsx", ".ts", ".js", ".jsx", ".json", ".xml", ".txt", ".html", ".css",
];

/// Directory names whose subtrees are never entered.
pub const EXCLUDED_DIRS: &[&str] = &[".git", "node_modules"];

/// Glob patterns equivalent to [`CANDIDATE_EXTENSIONS`], matched against a
/// bare file name.
pub fn candidate_globs() -> Vec<String> {
    CANDIDATE_EXTENSIONS
        .iter()
        .map(|ext| format!("*{}", ext))
        .collect()
}

/// Whether a directory with this name is pruned from the walk.
pub fn is_excluded_dir(name: &str) -> bool {
    EXCLUDED_DIRS.contains(&name)
}
