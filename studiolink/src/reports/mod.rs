//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod launch;
mod output;

pub use check::CheckReport;
pub use launch::LaunchReport;
pub use output::{Report, TerminalOutput};
