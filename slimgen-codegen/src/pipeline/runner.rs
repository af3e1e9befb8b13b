//! Pipeline orchestrator.

use slimgen_core::ToolRunner;

use super::{
    Outcome, Plugin, RunContext, Stage, State,
    stages::{
        BuildStage, CleanStage, DescriptorStage, EnsureOutputStage, GenerateStage,
        ResolveScopeStage, ShimStage,
    },
};
use crate::Result;

/// Runs the generation stages in order, calling plugin hooks around each.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new().plugin(MyPlugin::new());
/// pipeline.run(&mut ctx, &SystemTools)?;
/// ```
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    /// Create a pipeline with the standard stages.
    pub fn new() -> Self {
        Self {
            stages: vec![
                Box::new(ResolveScopeStage),
                Box::new(CleanStage),
                Box::new(EnsureOutputStage),
                Box::new(GenerateStage),
                Box::new(DescriptorStage),
                Box::new(ShimStage),
                Box::new(BuildStage),
            ],
            plugins: Vec::new(),
        }
    }

    /// Add a plugin to receive stage lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    pub fn stages(&self) -> impl Iterator<Item = &dyn Stage> {
        self.stages.iter().map(|s| s.as_ref())
    }

    /// Run every stage against `ctx`.
    ///
    /// On success the context ends in [`State::Done`]. On the first error it
    /// ends in [`State::Failed`], plugins get `on_failed`, and the error is
    /// returned; later stages do not run.
    pub fn run(&self, ctx: &mut RunContext, tools: &dyn ToolRunner) -> Result<()> {
        for stage in &self.stages {
            let state = stage.state();
            if let Err(err) = self.run_stage(stage.as_ref(), ctx, tools) {
                tracing::error!(stage = %state, kind = err.kind(), "stage failed");
                ctx.state = State::Failed;
                for plugin in &self.plugins {
                    plugin.on_failed(state, &err, ctx);
                }
                return Err(err);
            }
        }

        ctx.state = State::Done;
        tracing::info!(output = %ctx.output_dir().display(), "run complete");
        Ok(())
    }

    fn run_stage(&self, stage: &dyn Stage, ctx: &mut RunContext, tools: &dyn ToolRunner) -> Result<()> {
        let state = stage.state();
        ctx.state = state;

        for plugin in &self.plugins {
            plugin.on_before_stage(state, ctx)?;
        }

        let _span = tracing::info_span!("stage", name = stage.name()).entered();
        tracing::debug!(description = stage.description(), "entering stage");

        match stage.run(ctx, tools)? {
            Outcome::Completed => tracing::debug!("stage completed"),
            Outcome::Skipped(reason) => {
                tracing::info!(reason = %reason, "stage skipped");
                ctx.skipped.push((state, reason));
            }
        }

        for plugin in &self.plugins {
            plugin.on_after_stage(state, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
