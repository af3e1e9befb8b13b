//! Run context passed through pipeline stages.

use std::path::{Path, PathBuf};

use slimgen_manifest::{GenerationConfig, Manifest};

use super::State;
use crate::{BuildArtifact, EffectiveScope, GeneratorOutput};

/// Switches for a single run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Delete the output directory before generating.
    pub clean: bool,
    /// Generate into a non-empty output directory without cleaning it.
    pub merge: bool,
    /// Stop after the shim is written.
    pub skip_build: bool,
    /// Download a remote specification to check the scope up front.
    pub fetch_spec: bool,
}

/// State of one run, filled in as stages complete.
#[derive(Debug)]
pub struct RunContext {
    pub manifest: Manifest,
    pub config: GenerationConfig,
    pub options: RunOptions,
    pub state: State,
    /// Operations kept by the allowlist, when the document was readable.
    pub scope: Option<EffectiveScope>,
    pub generator: Option<GeneratorOutput>,
    pub descriptor: Option<PathBuf>,
    pub shim: Option<PathBuf>,
    pub artifact: Option<BuildArtifact>,
    /// Stages that decided not to act, with the reason.
    pub skipped: Vec<(State, String)>,
}

impl RunContext {
    pub fn new(manifest: Manifest, config: GenerationConfig, options: RunOptions) -> Self {
        Self {
            manifest,
            config,
            options,
            state: State::Init,
            scope: None,
            generator: None,
            descriptor: None,
            shim: None,
            artifact: None,
            skipped: Vec::new(),
        }
    }

    /// Context for `manifest`, with `output` overriding the configured directory.
    pub fn from_manifest(manifest: Manifest, output: Option<&Path>, options: RunOptions) -> Self {
        let config = manifest.generation_config(output);
        Self::new(manifest, config, options)
    }

    pub fn output_dir(&self) -> &Path {
        self.config.output_dir()
    }

    pub fn was_skipped(&self, state: State) -> bool {
        self.skipped.iter().any(|(s, _)| *s == state)
    }

    /// Files written by the synthesizers, in write order.
    pub fn written(&self) -> impl Iterator<Item = &Path> {
        self.descriptor.iter().chain(&self.shim).map(PathBuf::as_path)
    }
}
