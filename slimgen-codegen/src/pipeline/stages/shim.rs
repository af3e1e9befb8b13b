use slimgen_core::ToolRunner;

use super::write_artifact;
use crate::{
    ClientShim, CompatibilitySpec, Result,
    pipeline::{Outcome, RunContext, Stage, State},
};

/// Writes the compatibility shim for the root client.
pub struct ShimStage;

impl Stage for ShimStage {
    fn state(&self) -> State {
        State::SynthesizeShim
    }

    fn description(&self) -> &'static str {
        "Write the root client compatibility shim"
    }

    fn run(&self, ctx: &mut RunContext, _tools: &dyn ToolRunner) -> Result<Outcome> {
        let contract = CompatibilitySpec::v1(&ctx.manifest.compat.surface);
        let file = ClientShim::from_config(&ctx.config, contract);
        ctx.shim = Some(write_artifact(&file, ctx.config.output_dir())?);
        Ok(Outcome::Completed)
    }
}
