//! Generate operation - runs the pipeline, or previews it.

use std::{
    path::Path,
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

use slimgen_codegen::{
    ClientShim, CompatibilitySpec, GenerationInvoker, ProjectFile, Result,
    invoker::GENERATOR,
    pipeline::{Pipeline, Plugin, RunContext, RunOptions, State},
};
use slimgen_core::{GeneratedFile, ToolRunner};
use slimgen_manifest::Manifest;

use crate::reports::{GenerateReport, PreviewFile, PreviewReport, StageLine};

/// Execute the generate operation.
pub fn generate(
    manifest: Manifest,
    output: Option<&Path>,
    options: RunOptions,
    tools: &dyn ToolRunner,
) -> Result<GenerateReport> {
    let timings = Arc::new(Mutex::new(Vec::new()));
    let mut ctx = RunContext::from_manifest(manifest, output, options);

    Pipeline::new()
        .plugin(StageTimer {
            started: Mutex::new(None),
            finished: timings.clone(),
        })
        .run(&mut ctx, tools)?;

    let timings = timings.lock().map(|t| t.clone()).unwrap_or_default();
    let stages = timings
        .into_iter()
        .map(|(state, elapsed)| StageLine {
            name: state.as_str(),
            elapsed,
            skipped: ctx
                .skipped
                .iter()
                .find(|(s, _)| *s == state)
                .map(|(_, reason)| reason.clone()),
        })
        .collect();

    Ok(GenerateReport {
        output_dir: ctx.output_dir().to_path_buf(),
        scope: ctx.scope.as_ref().map(|s| (s.len(), s.total())),
        written: ctx.written().map(Path::to_path_buf).collect(),
        artifact: ctx.artifact.clone(),
        stages,
    })
}

/// Everything a run would do, computed without touching disk or tools.
pub fn preview(manifest: &Manifest, output: Option<&Path>) -> PreviewReport {
    let config = manifest.generation_config(output);
    let command = GenerationInvoker::new(GENERATOR).command(
        &manifest.spec.source,
        &manifest.spec.include,
        &config,
    );

    let descriptor = ProjectFile::from_manifest(manifest, &config);
    let shim = ClientShim::from_config(&config, CompatibilitySpec::v1(&manifest.compat.surface));

    let files = [
        preview_file(&descriptor, config.output_dir()),
        preview_file(&shim, config.output_dir()),
    ];

    PreviewReport {
        command: command.to_string(),
        files: files.into(),
    }
}

fn preview_file(file: &impl GeneratedFile, base: &Path) -> PreviewFile {
    PreviewFile {
        path: file.path(base).display().to_string(),
        content: file.contents(),
    }
}

/// Records how long each stage took.
struct StageTimer {
    started: Mutex<Option<Instant>>,
    finished: Arc<Mutex<Vec<(State, Duration)>>>,
}

impl Plugin for StageTimer {
    fn name(&self) -> &'static str {
        "stage-timer"
    }

    fn on_before_stage(&self, _stage: State, _ctx: &mut RunContext) -> Result<()> {
        if let Ok(mut started) = self.started.lock() {
            *started = Some(Instant::now());
        }
        Ok(())
    }

    fn on_after_stage(&self, stage: State, _ctx: &mut RunContext) -> Result<()> {
        let elapsed = self
            .started
            .lock()
            .ok()
            .and_then(|s| *s)
            .map(|start| start.elapsed())
            .unwrap_or_default();
        if let Ok(mut finished) = self.finished.lock() {
            finished.push((stage, elapsed));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_lists_artifacts() {
        let manifest = Manifest::default();
        let report = preview(&manifest, Some(Path::new("out")));

        assert!(report.command.starts_with("kiota generate --openapi https://"));
        assert!(report.command.contains("--include-path \"/me/**\""));
        assert!(report.command.contains("--output out"));

        let paths: Vec<_> = report.files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                Path::new("out").join("Microsoft.Graph.Slim.csproj").display().to_string(),
                Path::new("out").join("GraphServiceClient.Compat.cs").display().to_string(),
            ]
        );
    }
}
