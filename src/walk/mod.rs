//! Directory walker.
//!
//! Enumerates regular files under the configured root, skipping `.git` and
//! `node_modules` subtrees, and hands every file with a candidate extension
//! to the conflict stripper. Symlinks are not followed.

mod filter;
mod walker;


pub use filter::CandidateFilter;
pub use walker::{RunSummary, UnterminatedBlock, resolve_tree};
