//! Generate command report data structures.

use std::{path::PathBuf, time::Duration};

use slimgen_codegen::BuildArtifact;

use super::output::{Output, Report};

/// Report data from a completed run.
#[derive(Debug)]
pub struct GenerateReport {
    pub output_dir: PathBuf,
    /// Kept and total operation counts, when the scope was resolved up front.
    pub scope: Option<(usize, usize)>,
    /// Synthesized files.
    pub written: Vec<PathBuf>,
    pub artifact: Option<BuildArtifact>,
    pub stages: Vec<StageLine>,
}

/// One stage of the run as it finished.
#[derive(Debug)]
pub struct StageLine {
    pub name: &'static str,
    pub elapsed: Duration,
    /// Why the stage did nothing, if it skipped.
    pub skipped: Option<String>,
}

/// Report data from a dry run.
#[derive(Debug)]
pub struct PreviewReport {
    /// The generator command line that would run.
    pub command: String,
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        out.section("Stages");
        for stage in &self.stages {
            let line = match &stage.skipped {
                Some(reason) => format!("{:<22} skipped ({})", stage.name, reason),
                None => format!("{:<22} {} ms", stage.name, stage.elapsed.as_millis()),
            };
            out.list_item(&line);
        }
        out.newline();

        if let Some((kept, total)) = self.scope {
            out.key_value("Scope", &format!("{} of {} operations", kept, total));
        }
        out.key_value("Generated", &self.output_dir.display().to_string());
        for path in &self.written {
            out.added_item(&path.display().to_string());
        }

        if let Some(artifact) = &self.artifact {
            out.newline();
            out.key_value(
                "Built",
                &format!("{} ({} bytes)", artifact.path.display(), artifact.size),
            );
        }
    }
}

impl Report for PreviewReport {
    fn render(&self, out: &mut dyn Output) {
        out.divider("Generator command");
        out.preformatted(&self.command);

        for file in &self.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} files would be synthesized after generation",
            self.files.len()
        ));
    }
}
