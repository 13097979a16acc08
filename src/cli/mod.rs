//! CLI argument parsing for keepours.
//!
//! Uses clap derive macros for declarative argument definitions.
//! The run itself lives in the `commands` module.

use clap::Parser;
use std::path::PathBuf;

/// Keepours: resolve merge conflicts in a source tree by keeping the current side.
///
/// Every `.tsx .ts .js .jsx .json .xml .txt .html .css` file under ROOT
/// (outside `.git` and `node_modules`) that contains a `<<<<<<< HEAD`
/// conflict block is rewritten in place with only the HEAD side kept.
/// This is destructive: the incoming side is discarded without review.
#[derive(Parser, Debug)]
#[command(name = "keepours")]
#[command(author, version)]
pub struct Cli {
    /// Root directory to scan.
    #[arg(env = "KEEPOURS_ROOT", value_name = "ROOT")]
    pub root: PathBuf,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
