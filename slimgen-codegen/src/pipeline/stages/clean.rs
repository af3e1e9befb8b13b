use std::{fs, io};

use slimgen_core::ToolRunner;

use crate::{
    Error, Result,
    pipeline::{Outcome, RunContext, Stage, State},
};

/// Removes the output directory when a clean run was requested.
pub struct CleanStage;

impl Stage for CleanStage {
    fn state(&self) -> State {
        State::CleanIfRequested
    }

    fn description(&self) -> &'static str {
        "Delete the existing output tree"
    }

    fn run(&self, ctx: &mut RunContext, _tools: &dyn ToolRunner) -> Result<Outcome> {
        if !ctx.options.clean {
            return Ok(Outcome::skipped("clean not requested"));
        }

        let dir = ctx.output_dir();
        match fs::remove_dir_all(dir) {
            Ok(()) => {
                tracing::info!(path = %dir.display(), "removed output directory");
                Ok(Outcome::Completed)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Ok(Outcome::skipped("output directory does not exist"))
            }
            Err(err) => Err(Error::io(dir, err)),
        }
    }
}
