use slimgen_core::ToolRunner;

use super::write_artifact;
use crate::{
    ProjectFile, Result,
    pipeline::{Outcome, RunContext, Stage, State},
};

/// Writes the `.csproj` build descriptor.
pub struct DescriptorStage;

impl Stage for DescriptorStage {
    fn state(&self) -> State {
        State::SynthesizeDescriptor
    }

    fn description(&self) -> &'static str {
        "Write the package build descriptor"
    }

    fn run(&self, ctx: &mut RunContext, _tools: &dyn ToolRunner) -> Result<Outcome> {
        let file = ProjectFile::from_manifest(&ctx.manifest, &ctx.config);
        ctx.descriptor = Some(write_artifact(&file, ctx.config.output_dir())?);
        Ok(Outcome::Completed)
    }
}
