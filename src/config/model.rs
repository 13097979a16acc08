//! Config struct definition.

use std::path::{Path, PathBuf};

/// Configuration for a keepours run.
///
/// The root directory is the only recognized option. It is supplied by the
/// caller (CLI argument or `KEEPOURS_ROOT`) and passed into the walker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory whose tree is scanned and rewritten.
    pub root_directory: PathBuf,
}

impl Config {
    /// Create a config rooted at `root_directory`.
    pub fn new(root_directory: impl Into<PathBuf>) -> Self {
        Self {
            root_directory: root_directory.into(),
        }
    }

    /// The configured root directory.
    pub fn root(&self) -> &Path {
        &self.root_directory
    }
}
