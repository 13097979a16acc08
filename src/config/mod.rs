//! Configuration for keepours.
//!
//! A run is configured by a single value, the root directory. The set of
//! candidate extensions and pruned directories is fixed and lives in
//! [`types`].

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::Config;
pub use types::{CANDIDATE_EXTENSIONS, EXCLUDED_DIRS};
