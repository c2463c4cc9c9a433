//! Core operations.
//!
//! The logic behind studiolink commands, separated from CLI argument parsing
//! and output rendering.

pub mod check;
pub mod collect;

pub use check::check;
pub use collect::collect_files;
