//! Pipeline stage trait.

use slimgen_core::ToolRunner;

use super::{RunContext, State};
use crate::Result;

/// How a stage finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// The stage had nothing to do for this run.
    Skipped(String),
}

impl Outcome {
    pub fn skipped(reason: impl Into<String>) -> Self {
        Self::Skipped(reason.into())
    }
}

/// A step of the run.
///
/// Stages execute in a fixed order. Each one reads and fills in the
/// [`RunContext`]; returning an error fails the run.
pub trait Stage: Send + Sync {
    /// The state the run is in while this stage executes.
    fn state(&self) -> State;

    /// A human-readable description of what this stage does.
    fn description(&self) -> &'static str;

    fn run(&self, ctx: &mut RunContext, tools: &dyn ToolRunner) -> Result<Outcome>;

    fn name(&self) -> &'static str {
        self.state().as_str()
    }
}
