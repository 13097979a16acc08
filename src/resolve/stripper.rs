//! Core conflict stripping logic.

use crate::error::Result;
use crate::fs;
use std::path::Path;

use super::marker::ConflictMarker;
use super::state::ScanState;

/// Result of stripping conflict markers from a text buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripOutcome {
    /// The kept lines, concatenated with their original terminators.
    pub content: String,
    /// Number of start markers encountered.
    pub conflicts: usize,
    /// State the scan finished in.
    pub end_state: ScanState,
}

impl StripOutcome {
    /// Whether any conflict was seen, i.e. whether the file must be rewritten.
    pub fn conflict_seen(&self) -> bool {
        self.conflicts > 0
    }

    /// The region the scan was still inside at end of input, if a conflict
    /// block was left open.
    pub fn unterminated(&self) -> Option<ScanState> {
        (self.conflict_seen() && self.end_state != ScanState::Outside).then_some(self.end_state)
    }
}

/// Remove conflict markers from `text`, keeping the "ours" side.
///
/// Single forward pass over lines. Each line keeps its terminator (`\n` or
/// `\r\n`); a final line without a terminator is handled like any other.
pub fn strip_conflicts(text: &str) -> StripOutcome {
    let mut content = String::with_capacity(text.len());
    let mut state = ScanState::default();
    let mut conflicts = 0;

    for line in text.split_inclusive('\n') {
        if let Some(marker) = ConflictMarker::classify(line) {
            if marker == ConflictMarker::StartOurs {
                conflicts += 1;
            }
            state = state.on_marker(marker);
            continue;
        }

        if state.keeps_content() {
            content.push_str(line);
        }
    }

    StripOutcome {
        content,
        conflicts,
        end_state: state,
    }
}

/// Strip conflict markers from the file at `path`, in place.
///
/// The file is read fully first and only opened for writing when at least
/// one start marker was found.
///
/// # Returns
///
/// * `Ok(outcome)` - The scan result; `outcome.conflict_seen()` tells whether
///   the file was rewritten
/// * `Err(KeepOursError::FileAccess)` - Read or write failure
/// * `Err(KeepOursError::Decode)` - The file is not UTF-8; it is left untouched
pub fn strip_file_outcome<P: AsRef<Path>>(path: P) -> Result<StripOutcome> {
    let path = path.as_ref();
    let text = fs::read_text(path)?;
    let outcome = strip_conflicts(&text);

    if outcome.conflict_seen() {
        fs::overwrite(path, &outcome.content)?;
    }

    Ok(outcome)
}

/// Strip conflict markers from the file at `path`, in place.
///
/// Returns `true` if the file was modified.
pub fn strip_file<P: AsRef<Path>>(path: P) -> Result<bool> {
    strip_file_outcome(path).map(|outcome| outcome.conflict_seen())
}
