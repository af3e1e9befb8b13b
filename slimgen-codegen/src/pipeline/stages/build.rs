use slimgen_core::{GeneratedFile, ToolRunner};

use crate::{
    ProjectBuild, ProjectFile, Result,
    pipeline::{Outcome, RunContext, Stage, State},
};

/// Compiles the generated package unless the run skips it.
pub struct BuildStage;

impl Stage for BuildStage {
    fn state(&self) -> State {
        State::BuildIfRequested
    }

    fn description(&self) -> &'static str {
        "Build the generated package"
    }

    fn run(&self, ctx: &mut RunContext, tools: &dyn ToolRunner) -> Result<Outcome> {
        if ctx.options.skip_build {
            return Ok(Outcome::skipped("build skipped by request"));
        }

        let project = match &ctx.descriptor {
            Some(path) => path.clone(),
            None => ProjectFile::from_manifest(&ctx.manifest, &ctx.config).path(ctx.output_dir()),
        };

        let artifact =
            ProjectBuild::locate(tools)?.run(tools, &project, ctx.manifest.assembly_name())?;
        tracing::info!(path = %artifact.path.display(), size = artifact.size, "built package");
        ctx.artifact = Some(artifact);
        Ok(Outcome::Completed)
    }
}
