//! Conflict stripper.
//!
//! Rewrites text containing git conflict blocks so that only the current
//! ("ours") side survives:
//!
//! ```text
//! <<<<<<< HEAD        dropped
//! kept line           kept
//! =======             dropped
//! incoming line       dropped
//! >>>>>>> feature     dropped
//! ```
//!
//! Recognition is a plain prefix match on each raw line; nothing else about
//! the file's format is understood. Malformed blocks never raise errors (see
//! [`ScanState`] for the unterminated case).

mod marker;
mod state;
mod stripper;


pub use marker::ConflictMarker;
pub use state::ScanState;
pub use stripper::{StripOutcome, strip_conflicts, strip_file, strip_file_outcome};
