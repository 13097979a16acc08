//! Config validation.

use super::model::Config;
use crate::error::{KeepOursError, Result};

impl Config {
    /// Validate the config before a run.
    ///
    /// Validation rules:
    /// - `root_directory` must not be empty
    /// - `root_directory` must exist and be a directory
    pub fn validate(&self) -> Result<()> {
        let root = self.root();

        if root.as_os_str().is_empty() {
            return Err(KeepOursError::UserError(
                "config validation failed: root directory must not be empty".to_string(),
            ));
        }

        let metadata = std::fs::metadata(root).map_err(|e| {
            KeepOursError::UserError(format!(
                "root directory '{}' is not accessible: {}",
                root.display(),
                e
            ))
        })?;

        if !metadata.is_dir() {
            return Err(KeepOursError::UserError(format!(
                "root directory '{}' is not a directory",
                root.display()
            )));
        }

        Ok(())
    }
}
