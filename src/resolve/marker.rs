//! Conflict marker recognition.

/// Start of the kept region, as written by git for the current branch.
pub const START_OURS: &str = "<<<<<<< HEAD";
/// Boundary between the kept and discarded regions.
pub const SEPARATOR: &str = "=======";
/// End of the discarded region; followed by the incoming label.
pub const END_THEIRS: &str = ">>>>>>>";

/// A conflict delimiter line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictMarker {
    /// `<<<<<<< HEAD`
    StartOurs,
    /// `=======`
    Separator,
    /// `>>>>>>> <label>`
    EndTheirs,
}

impl ConflictMarker {
    /// Classify a raw line.
    ///
    /// Matching is a case-sensitive prefix check anchored at column 0, so
    /// trailing text and line terminators are ignored while indented markers
    /// are not recognized. Markers are checked in start, separator, end order.
    pub fn classify(line: &str) -> Option<Self> {
        if line.starts_with(START_OURS) {
            Some(Self::StartOurs)
        } else if line.starts_with(SEPARATOR) {
            Some(Self::Separator)
        } else if line.starts_with(END_THEIRS) {
            Some(Self::EndTheirs)
        } else {
            None
        }
    }
}
