//! Command implementation for keepours.
//!
//! There is a single operation: build the config from the CLI, walk the
//! tree, and print a summary.

use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;
use crate::walk::resolve_tree;

/// Run keepours for the parsed command line.
///
/// Only an unusable root directory is returned as an error; per-file
/// failures are reported by the walker and counted in the summary.
pub fn run(cli: Cli) -> Result<()> {
    let config = Config::new(cli.root);
    tracing::debug!(root = %config.root().display(), "starting conflict resolution");

    let summary = resolve_tree(&config)?;

    println!("{}", summary.format_summary());
    if let Some(warning) = summary.format_unterminated() {
        eprintln!("{}", warning);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KeepOursError;
    use crate::test_support::{CONFLICTED, RESOLVED, create_tree, read_file};

    #[test]
    fn run_resolves_tree() {
        let tree = create_tree(&[("src/app.ts", CONFLICTED)]);
        let cli = Cli {
            root: tree.path().to_path_buf(),
        };

        run(cli).unwrap();

        assert_eq!(read_file(tree.path(), "src/app.ts"), RESOLVED);
    }

    #[test]
    fn run_rejects_missing_root() {
        let tree = create_tree(&[]);
        let cli = Cli {
            root: tree.path().join("missing"),
        };

        let err = run(cli).unwrap_err();
        assert!(matches!(err, KeepOursError::UserError(_)));
    }
}
