//! Sequential tree walk that strips conflicts from every candidate file.

use crate::config::Config;
use crate::error::{KeepOursError, Result};
use crate::resolve::{ScanState, strip_file_outcome};
use std::path::PathBuf;
use walkdir::WalkDir;

use super::filter::{CandidateFilter, is_pruned};

/// A rewritten file whose last conflict block was never closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnterminatedBlock {
    /// The rewritten file.
    pub path: PathBuf,
    /// Region the scan was still inside at end of file.
    pub state: ScanState,
}

impl UnterminatedBlock {
    /// One-line description naming what happened to the trailing lines.
    pub fn describe(&self) -> String {
        format!(
            "{}: conflict block never closed; {}",
            self.path.display(),
            self.state.unterminated_effect().unwrap_or("no trailing lines affected")
        )
    }
}

/// What happened during one run over a tree.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Candidate files that were read and scanned.
    pub files_scanned: usize,
    /// Files rewritten because they contained conflicts, in visit order.
    pub modified: Vec<PathBuf>,
    /// Files rewritten whose last conflict block was never closed.
    pub unterminated: Vec<UnterminatedBlock>,
    /// Per-file failures, in visit order. These never abort the walk.
    pub failures: Vec<KeepOursError>,
    /// Entries the walker itself could not read (unreadable directories).
    pub walk_errors: usize,
}

impl RunSummary {
    /// One-line, human-readable description of the run.
    pub fn format_summary(&self) -> String {
        let mut msg = format!(
            "Resolved conflicts in {} of {} scanned file(s)",
            self.modified.len(),
            self.files_scanned
        );

        if !self.failures.is_empty() || self.walk_errors > 0 {
            msg.push_str(&format!(
                " ({} error(s))",
                self.failures.len() + self.walk_errors
            ));
        }

        msg
    }

    /// Multi-line warning listing files with unclosed conflict blocks, or
    /// `None` when every block was closed.
    pub fn format_unterminated(&self) -> Option<String> {
        if self.unterminated.is_empty() {
            return None;
        }

        let mut msg = format!(
            "Warning: {} file(s) had a conflict block without a closing marker. Review:",
            self.unterminated.len()
        );
        for block in &self.unterminated {
            msg.push_str(&format!("\n  {}", block.describe()));
        }

        Some(msg)
    }
}

/// Walk `config.root_directory` and resolve conflicts in every candidate file.
///
/// Files are processed one at a time, to completion, in directory-entry
/// order. Modified paths are printed to stdout and failures to stderr; a
/// failing file or unreadable directory is skipped and the walk continues.
///
/// # Returns
///
/// * `Ok(RunSummary)` - The walk ran to completion
/// * `Err(KeepOursError::UserError)` - The root directory is unusable
pub fn resolve_tree(config: &Config) -> Result<RunSummary> {
    config.validate()?;

    let filter = CandidateFilter::new()?;
    let mut summary = RunSummary::default();

    let entries = WalkDir::new(config.root())
        .into_iter()
        .filter_entry(|entry| {
            let pruned = is_pruned(entry);
            if pruned {
                tracing::debug!(path = %entry.path().display(), "skipping excluded directory");
            }
            !pruned
        });

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                eprintln!("{}", format_walk_error(&err));
                summary.walk_errors += 1;
                continue;
            }
        };

        if !entry.file_type().is_file() || !filter.matches(entry.file_name()) {
            continue;
        }

        let path = entry.into_path();
        summary.files_scanned += 1;

        match strip_file_outcome(&path) {
            Ok(outcome) if outcome.conflict_seen() => {
                println!("Resolving conflicts in: {}", path.display());
                tracing::debug!(
                    path = %path.display(),
                    conflicts = outcome.conflicts,
                    "rewrote file"
                );
                if let Some(state) = outcome.unterminated() {
                    let block = UnterminatedBlock {
                        path: path.clone(),
                        state,
                    };
                    tracing::warn!(state = ?state, "{}", block.describe());
                    summary.unterminated.push(block);
                }
                summary.modified.push(path);
            }
            Ok(_) => {}
            Err(err) => {
                eprintln!("{}", err.format_failure());
                tracing::debug!(path = ?err.path(), "file left unmodified");
                summary.failures.push(err);
            }
        }
    }

    Ok(summary)
}

/// Progress line for a directory entry the walker could not read.
fn format_walk_error(err: &walkdir::Error) -> String {
    match (err.path(), err.io_error()) {
        (Some(path), Some(cause)) => format!("Error processing {}: {}", path.display(), cause),
        (Some(path), None) => format!("Error processing {}: {}", path.display(), err),
        (None, _) => format!("Error: {}", err),
    }
}
