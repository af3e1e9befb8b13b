//! Optional downstream build of the generated package.

use std::path::{Path, PathBuf};

use slimgen_core::{ToolCommand, ToolRunner};

use crate::{Error, Result};

const DOTNET: &str = "dotnet";

/// MSBuild configuration used for the package build.
pub const CONFIGURATION: &str = "Release";

/// The compiled assembly produced by a successful build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildArtifact {
    pub path: PathBuf,
    pub size: u64,
}

/// Builds a project file with `dotnet build`.
#[derive(Debug, Clone)]
pub struct ProjectBuild {
    program: PathBuf,
}

impl ProjectBuild {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn locate(tools: &dyn ToolRunner) -> Result<Self> {
        tools.locate(DOTNET).map(Self::new).ok_or_else(|| {
            Box::new(Error::ToolingUnavailable {
                tool: DOTNET.to_string(),
                diagnostics: format!("'{DOTNET}' was not found on PATH"),
            })
        })
    }

    pub fn command(&self, project: &Path) -> ToolCommand {
        ToolCommand::new(&self.program)
            .arg("build")
            .arg(project)
            .args(["-c", CONFIGURATION])
    }

    /// Build `project` and locate the `<assembly_name>.dll` it produced.
    pub fn run(
        &self,
        tools: &dyn ToolRunner,
        project: &Path,
        assembly_name: &str,
    ) -> Result<BuildArtifact> {
        let command = self.command(project);
        tracing::info!(command = %command, "building package");

        let output = tools.run(&command).map_err(|err| {
            Box::new(Error::ToolingUnavailable {
                tool: self.program.display().to_string(),
                diagnostics: err.to_string(),
            })
        })?;

        if !output.success {
            return Err(Box::new(Error::BuildFailure {
                diagnostics: output.diagnostics(),
            }));
        }

        let root = project.parent().unwrap_or(Path::new("."));
        find_artifact(root, assembly_name)
    }
}

/// First `bin/Release/**/<assembly_name>.dll` under `root`, in name order.
pub fn find_artifact(root: &Path, assembly_name: &str) -> Result<BuildArtifact> {
    let bin = root.join("bin").join(CONFIGURATION);
    let file_name = format!("{assembly_name}.dll");

    let found = walkdir::WalkDir::new(&bin)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .find(|e| e.file_type().is_file() && e.file_name().to_string_lossy() == file_name);

    let Some(entry) = found else {
        return Err(Box::new(Error::BuildFailure {
            diagnostics: format!(
                "build succeeded but '{}' was not found under '{}'",
                file_name,
                bin.display()
            ),
        }));
    };

    let size = entry
        .metadata()
        .map_err(|err| Error::io(entry.path(), err.into()))?
        .len();

    tracing::debug!(path = %entry.path().display(), size, "found build artifact");
    Ok(BuildArtifact {
        path: entry.into_path(),
        size,
    })
}
