use std::path::Path;
use tempfile::TempDir;

/// A conflicted file whose resolved form is [`RESOLVED`].
pub(crate) const CONFLICTED: &str = "a\n<<<<<<< HEAD\nb\n=======\nc\n>>>>>>> branch\nd\n";

/// [`CONFLICTED`] with the ours side kept.
pub(crate) const RESOLVED: &str = "a\nb\nd\n";

/// Create a temporary tree from `(relative path, content)` pairs.
///
/// Parent directories are created as needed.
pub(crate) fn create_tree(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for (relative, content) in files {
        write_file(temp_dir.path(), relative, content.as_bytes());
    }
    temp_dir
}

pub(crate) fn write_file(root: &Path, relative: &str, content: &[u8]) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("failed to create {}: {}", parent.display(), e));
    }
    std::fs::write(&path, content)
        .unwrap_or_else(|e| panic!("failed to write {}: {}", path.display(), e));
}

pub(crate) fn read_file(root: &Path, relative: &str) -> String {
    std::fs::read_to_string(root.join(relative))
        .unwrap_or_else(|e| panic!("failed to read {}: {}", relative, e))
}
