use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for pipeline operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Failures that end a generation run.
///
/// None of these are retried; tool failures carry the tool's raw output.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("'{tool}' is not available\n{diagnostics}")]
    #[diagnostic(
        code(slimgen::tooling_unavailable),
        help("install it manually and make sure it is on PATH")
    )]
    ToolingUnavailable { tool: String, diagnostics: String },

    #[error("generator failed:\n{diagnostics}")]
    #[diagnostic(code(slimgen::generation_failure))]
    GenerationFailure { diagnostics: String },

    #[error("build failed:\n{diagnostics}")]
    #[diagnostic(code(slimgen::build_failure))]
    BuildFailure { diagnostics: String },

    #[error("no operation matches the allowlist ({patterns})")]
    #[diagnostic(
        code(slimgen::empty_scope),
        help("check the include patterns against the paths in the specification")
    )]
    EmptyScope { patterns: String },

    #[error("output directory '{}' is not empty", path.display())]
    #[diagnostic(
        code(slimgen::output_not_empty),
        help("pass --clean to regenerate from scratch, or --merge to let the generator merge")
    )]
    OutputNotEmpty { path: PathBuf },

    #[error("failed to read specification '{source_id}': {message}")]
    #[diagnostic(code(slimgen::specification))]
    Specification { source_id: String, message: String },

    #[error("I/O error on '{}'", path.display())]
    #[diagnostic(code(slimgen::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{}': {message}", path.display())]
    #[diagnostic(code(slimgen::write))]
    Write { path: PathBuf, message: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Self::Io {
            path: path.into(),
            source,
        })
    }

    /// Short machine-friendly name of the failure class.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ToolingUnavailable { .. } => "tooling-unavailable",
            Self::GenerationFailure { .. } => "generation-failure",
            Self::BuildFailure { .. } => "build-failure",
            Self::EmptyScope { .. } => "empty-scope",
            Self::OutputNotEmpty { .. } => "output-not-empty",
            Self::Specification { .. } => "specification",
            Self::Io { .. } | Self::Write { .. } => "io",
        }
    }
}
