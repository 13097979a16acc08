//! Candidate file and directory filtering.

use crate::config::types::{candidate_globs, is_excluded_dir};
use crate::error::{KeepOursError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::ffi::OsStr;
use std::path::Path;
use walkdir::DirEntry;

/// Compiled matcher for the file names the stripper should visit.
///
/// Build once per run.
#[derive(Debug, Clone)]
pub struct CandidateFilter {
    globs: GlobSet,
}

impl CandidateFilter {
    /// Compile the fixed candidate extension set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            globs: build_globset(&candidate_globs())?,
        })
    }

    /// Whether a bare file name ends in one of the candidate extensions.
    pub fn matches(&self, file_name: &OsStr) -> bool {
        self.globs.is_match(Path::new(file_name))
    }
}

/// Whether a walk entry is a directory subtree that must not be entered.
///
/// The root itself is never pruned, whatever its name.
pub fn is_pruned(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry.file_name().to_str().is_some_and(is_excluded_dir)
}

/// Build a GlobSet from a list of glob patterns.
fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();

    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| {
            KeepOursError::UserError(format!("invalid candidate glob '{}' - {}", pattern, e))
        })?;
        builder.add(glob);
    }

    builder
        .build()
        .map_err(|e| KeepOursError::UserError(format!("failed to compile candidate globs: {}", e)))
}
