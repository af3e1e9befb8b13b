use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    time::SystemTime,
};

use slimgen_core::ToolRunner;
use slimgen_manifest::GenerationConfig;

use crate::{
    Error, GenerationInvoker, Result,
    pipeline::{Outcome, RunContext, Stage, State},
    scope::describe_patterns,
};

/// Runs the external generator into the output directory.
pub struct GenerateStage;

impl Stage for GenerateStage {
    fn state(&self) -> State {
        State::Generate
    }

    fn description(&self) -> &'static str {
        "Generate client sources for the allowlisted operations"
    }

    fn run(&self, ctx: &mut RunContext, tools: &dyn ToolRunner) -> Result<Outcome> {
        let invoker = GenerationInvoker::locate(tools)?;
        let spec = &ctx.manifest.spec;
        let existing = source_files(&ctx.config);
        let output = invoker.invoke(tools, &spec.source, &spec.include, &ctx.config)?;

        // The generator succeeds even when nothing matched; all it leaves
        // behind then is the root client. Files from earlier runs don't count.
        let sources = source_files(&ctx.config)
            .into_iter()
            .filter(|(path, modified)| existing.get(path) != Some(modified))
            .count();
        if sources == 0 {
            return Err(Box::new(Error::EmptyScope {
                patterns: describe_patterns(&spec.include),
            }));
        }

        tracing::info!(files = sources, "generator finished");
        ctx.generator = Some(output);
        Ok(Outcome::Completed)
    }
}

/// Source files in the tree besides the root client and the shim, with their
/// modification times. Build output under `bin/` and `obj/` is left out.
fn source_files(config: &GenerationConfig) -> HashMap<PathBuf, Option<SystemTime>> {
    let extension = config.language().extension();
    let root_client = config.root_client_file();
    let shim = format!("{}.Compat.{}", config.class_name(), extension);

    walkdir::WalkDir::new(config.output_dir())
        .into_iter()
        .filter_entry(|e| !(e.depth() == 1 && e.file_type().is_dir() && is_build_dir(e.path())))
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some(extension))
        .filter(|e| !is_named(e.path(), &root_client) && !is_named(e.path(), &shim))
        .map(|e| {
            let modified = e.metadata().ok().and_then(|m| m.modified().ok());
            (e.into_path(), modified)
        })
        .collect()
}

fn is_build_dir(path: &Path) -> bool {
    is_named(path, "bin") || is_named(path, "obj")
}

fn is_named(path: &Path, name: &str) -> bool {
    path.file_name().and_then(|s| s.to_str()) == Some(name)
}
