//! Per-invocation generation settings.

use std::path::{Path, PathBuf};

use crate::Language;

/// Boolean switches forwarded to the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureFlags {
    /// Generate models backed by a persisted backing store.
    pub backing_store: bool,
    /// Leave out the backward-compatible aliases the generator emits by default.
    pub exclude_backward_compatible: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            backing_store: true,
            exclude_backward_compatible: true,
        }
    }
}

/// Immutable generation settings: one instance per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    language: Language,
    class_name: String,
    namespace: String,
    output_dir: PathBuf,
    flags: FeatureFlags,
}

impl GenerationConfig {
    pub fn new(
        language: Language,
        class_name: impl Into<String>,
        namespace: impl Into<String>,
        output_dir: impl Into<PathBuf>,
        flags: FeatureFlags,
    ) -> Self {
        Self {
            language,
            class_name: class_name.into(),
            namespace: namespace.into(),
            output_dir: output_dir.into(),
            flags,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Root client type name (e.g. `GraphServiceClient`).
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Root namespace of the generated sources.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn flags(&self) -> FeatureFlags {
        self.flags
    }

    /// File name of the generator-emitted root client source.
    pub fn root_client_file(&self) -> String {
        format!("{}.{}", self.class_name, self.language.extension())
    }
}
