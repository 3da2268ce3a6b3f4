//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod analyze;
mod check;
mod generate;
mod output;

pub use analyze::AnalyzeReport;
pub use check::{CheckReport, ClassOverview};
pub use generate::{GenerateReport, GenerationResult};
pub use output::{Report, TerminalOutput};

#[cfg(test)]
pub(crate) use output::RecordingOutput;
