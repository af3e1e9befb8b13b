//! Drives the external client generator.

use std::path::{Path, PathBuf};

use slimgen_core::{ToolCommand, ToolOutput, ToolRunner};
use slimgen_manifest::{GenerationConfig, PathAllowlist, SpecificationSource};

use crate::{Error, Result};

/// Executable name of the generator.
pub const GENERATOR: &str = "kiota";

/// Package the generator is installed from when it is missing.
pub const GENERATOR_PACKAGE: &str = "Microsoft.OpenApi.Kiota";

const DOTNET: &str = "dotnet";

/// What the generator printed on a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOutput {
    pub command: ToolCommand,
    pub log: String,
}

/// A located generator executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationInvoker {
    program: PathBuf,
}

impl GenerationInvoker {
    /// Use a known executable without searching for it.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Find the generator, installing it as a global dotnet tool if needed.
    pub fn locate(tools: &dyn ToolRunner) -> Result<Self> {
        if let Some(program) = find(tools) {
            tracing::debug!(program = %program.display(), "found generator");
            return Ok(Self::new(program));
        }

        tracing::info!(package = GENERATOR_PACKAGE, "generator not found, installing");
        let install = install(tools)?;

        match find(tools) {
            Some(program) => {
                tracing::info!(program = %program.display(), "installed generator");
                Ok(Self::new(program))
            }
            None => Err(Box::new(Error::ToolingUnavailable {
                tool: GENERATOR.to_string(),
                diagnostics: install.diagnostics(),
            })),
        }
    }

    /// The generator command line for one run. Same inputs, same arguments.
    pub fn command(
        &self,
        source: &SpecificationSource,
        allowlist: &PathAllowlist,
        config: &GenerationConfig,
    ) -> ToolCommand {
        let mut cmd = ToolCommand::new(&self.program)
            .arg("generate")
            .arg("--openapi")
            .arg(source.location());

        for pattern in allowlist {
            cmd = cmd.arg("--include-path").arg(pattern.as_str());
        }

        let flags = config.flags();
        cmd.arg("--language")
            .arg(config.language().generator_id())
            .arg("--class-name")
            .arg(config.class_name())
            .arg("--namespace-name")
            .arg(config.namespace())
            .arg("--output")
            .arg(config.output_dir())
            .args(flags.backing_store.then_some("--backing-store"))
            .args(
                flags
                    .exclude_backward_compatible
                    .then_some("--exclude-backward-compatible"),
            )
    }

    /// Run the generator to completion.
    pub fn invoke(
        &self,
        tools: &dyn ToolRunner,
        source: &SpecificationSource,
        allowlist: &PathAllowlist,
        config: &GenerationConfig,
    ) -> Result<GeneratorOutput> {
        let command = self.command(source, allowlist, config);
        tracing::info!(command = %command, "running generator");

        let output = tools.run(&command).map_err(|err| {
            Box::new(Error::ToolingUnavailable {
                tool: self.program.display().to_string(),
                diagnostics: err.to_string(),
            })
        })?;

        if !output.success {
            return Err(Box::new(Error::GenerationFailure {
                diagnostics: output.diagnostics(),
            }));
        }

        Ok(GeneratorOutput {
            command,
            log: output.stdout,
        })
    }
}

fn find(tools: &dyn ToolRunner) -> Option<PathBuf> {
    tools.locate(GENERATOR).or_else(|| {
        dirs::home_dir()
            .map(|home| home.join(".dotnet").join("tools").join(GENERATOR))
            .filter(|path| tools.is_executable(path))
    })
}

// A non-zero exit is not fatal here: dotnet also fails when the tool is
// already installed but not on PATH. The caller looks again either way.
fn install(tools: &dyn ToolRunner) -> Result<ToolOutput> {
    let dotnet = tools.locate(DOTNET).ok_or_else(|| {
        Box::new(Error::ToolingUnavailable {
            tool: GENERATOR.to_string(),
            diagnostics: format!("'{GENERATOR}' is not on PATH and '{DOTNET}' is not available to install it"),
        })
    })?;

    let command = ToolCommand::new(dotnet).args(["tool", "install", "--global", GENERATOR_PACKAGE]);
    tracing::debug!(command = %command, "installing generator");

    tools.run(&command).map_err(|err| {
        Box::new(Error::ToolingUnavailable {
            tool: DOTNET.to_string(),
            diagnostics: err.to_string(),
        })
    })
}
