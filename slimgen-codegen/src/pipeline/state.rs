use std::fmt;

/// Position of a run in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Init,
    ResolveScope,
    CleanIfRequested,
    EnsureOutputDir,
    Generate,
    SynthesizeDescriptor,
    SynthesizeShim,
    BuildIfRequested,
    Done,
    /// Absorbing: nothing runs after a failure.
    Failed,
}

impl State {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::ResolveScope => "resolve-scope",
            Self::CleanIfRequested => "clean",
            Self::EnsureOutputDir => "ensure-output-dir",
            Self::Generate => "generate",
            Self::SynthesizeDescriptor => "synthesize-descriptor",
            Self::SynthesizeShim => "synthesize-shim",
            Self::BuildIfRequested => "build",
            Self::Done => "done",
            Self::Failed => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }

    /// Process exit status for a terminal state.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Failed => 1,
            _ => 0,
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
