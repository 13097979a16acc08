//! Filesystem utilities for keepours.
//!
//! This module provides the whole-file read and in-place overwrite used by
//! the conflict stripper.

mod text;

pub use text::{overwrite, read_text};
