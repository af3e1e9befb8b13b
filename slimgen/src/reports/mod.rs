//! Report data structures for commands.
//!
//! Commands build reports, then render them to an [`Output`] target.

mod generate;
mod info;
mod output;
mod scope;

pub use generate::{GenerateReport, PreviewFile, PreviewReport, StageLine};
pub use info::InfoReport;
pub use output::{Report, TerminalOutput};
pub use scope::{ResolvedScope, ScopeReport};

#[cfg(test)]
pub(crate) use output::tests::Recorded;
