//! Exit code constants for the keepours CLI.
//!
//! - 0: The traversal ran to completion (individual file failures included)
//! - 1: User error (missing or invalid root directory)
//!
//! Per-file failures never change the exit code; they are reported on stderr
//! and the walk continues.

/// The traversal ran to completion.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an unusable root directory.
pub const USER_ERROR: i32 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        assert_ne!(SUCCESS, USER_ERROR, "Exit codes must be distinct");
    }

    #[test]
    fn exit_codes_match_contract() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(USER_ERROR, 1);
    }
}
