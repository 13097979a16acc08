//! Scan state for the conflict stripper.

use super::marker::ConflictMarker;

/// Where the scanner is relative to a conflict block.
///
/// Transitions:
///
/// | state      | StartOurs | Separator | EndTheirs |
/// |------------|-----------|-----------|-----------|
/// | `Outside`  | `InOurs`  | `InTheirs`| `Outside` |
/// | `InOurs`   | `InOurs`  | `InTheirs`| `InOurs`  |
/// | `InTheirs` | `InOurs`  | `InTheirs`| `Outside` |
///
/// `InOurs` is terminal when no separator follows the start marker: every
/// remaining line is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    /// Not inside any marked region.
    #[default]
    Outside,
    /// Between the start marker and the separator; lines are kept.
    InOurs,
    /// Between the separator and the end marker; lines are discarded.
    InTheirs,
}

impl ScanState {
    /// Apply a marker line.
    pub fn on_marker(self, marker: ConflictMarker) -> Self {
        match (self, marker) {
            (_, ConflictMarker::StartOurs) => Self::InOurs,
            (_, ConflictMarker::Separator) => Self::InTheirs,
            (Self::InTheirs, ConflictMarker::EndTheirs) => Self::Outside,
            // A stray end marker leaves the state alone.
            (state, ConflictMarker::EndTheirs) => state,
        }
    }

    /// Whether an ordinary line in this state is written back.
    pub fn keeps_content(self) -> bool {
        !matches!(self, Self::InTheirs)
    }

    /// What happened to the trailing lines when input ends in this state
    /// with a conflict block still open.
    pub fn unterminated_effect(self) -> Option<&'static str> {
        match self {
            Self::Outside => None,
            Self::InOurs => Some("every line after the start marker was kept"),
            Self::InTheirs => Some("every line after the separator was dropped"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::ConflictMarker::*;
    use super::ScanState::*;

    #[test]
    fn test_default_is_outside() {
        assert_eq!(ScanState::default(), Outside);
    }

    #[test]
    fn test_normal_block_cycle() {
        let state = Outside.on_marker(StartOurs);
        assert_eq!(state, InOurs);
        let state = state.on_marker(Separator);
        assert_eq!(state, InTheirs);
        let state = state.on_marker(EndTheirs);
        assert_eq!(state, Outside);
    }

    #[test]
    fn test_full_transition_table() {
        let cases = [
            (Outside, StartOurs, InOurs),
            (Outside, Separator, InTheirs),
            (Outside, EndTheirs, Outside),
            (InOurs, StartOurs, InOurs),
            (InOurs, Separator, InTheirs),
            (InOurs, EndTheirs, InOurs),
            (InTheirs, StartOurs, InOurs),
            (InTheirs, Separator, InTheirs),
            (InTheirs, EndTheirs, Outside),
        ];

        for (from, marker, to) in cases {
            assert_eq!(from.on_marker(marker), to, "{:?} + {:?}", from, marker);
        }
    }

    #[test]
    fn test_keeps_content() {
        assert!(Outside.keeps_content());
        assert!(InOurs.keeps_content());
        assert!(!InTheirs.keeps_content());
    }

    #[test]
    fn test_unterminated_effect_matches_state() {
        assert_eq!(Outside.unterminated_effect(), None);
        assert!(InOurs.unterminated_effect().unwrap().contains("kept"));
        assert!(InTheirs.unterminated_effect().unwrap().contains("dropped"));
    }
}
