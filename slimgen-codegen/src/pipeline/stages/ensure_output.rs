use std::fs;

use slimgen_core::ToolRunner;

use crate::{
    Error, Result,
    pipeline::{Outcome, RunContext, Stage, State},
};

/// Makes sure the output directory exists and may be generated into.
///
/// An existing empty directory is accepted. A non-empty one is only accepted
/// with `merge`, in which case merging is left to the generator.
pub struct EnsureOutputStage;

impl Stage for EnsureOutputStage {
    fn state(&self) -> State {
        State::EnsureOutputDir
    }

    fn description(&self) -> &'static str {
        "Create the output directory"
    }

    fn run(&self, ctx: &mut RunContext, _tools: &dyn ToolRunner) -> Result<Outcome> {
        let dir = ctx.output_dir();

        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|err| Error::io(dir, err))?;
            tracing::debug!(path = %dir.display(), "created output directory");
            return Ok(Outcome::Completed);
        }

        if !dir.is_dir() {
            return Err(Box::new(Error::Write {
                path: dir.to_path_buf(),
                message: "exists and is not a directory".to_string(),
            }));
        }

        let mut entries = fs::read_dir(dir).map_err(|err| Error::io(dir, err))?;
        if entries.next().is_none() {
            return Ok(Outcome::Completed);
        }

        if ctx.options.merge {
            tracing::warn!(path = %dir.display(), "generating into a non-empty directory");
            Ok(Outcome::Completed)
        } else {
            Err(Box::new(Error::OutputNotEmpty {
                path: dir.to_path_buf(),
            }))
        }
    }
}
