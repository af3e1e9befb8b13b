//! slimgen.toml: the declarative description of one scoped client.
//!
//! Every section is optional; missing values fall back to [`crate::defaults`].
//!
//! ```toml
//! [spec]
//! source = "openapi.yaml"
//! include = ["/me/**", "/users/{user-id}/messages/**"]
//!
//! [client]
//! class_name = "GraphServiceClient"
//! namespace = "Microsoft.Graph"
//! output = "generated"
//!
//! [package]
//! id = "Contoso.Graph.Mail"
//! version = "1.2.0"
//!
//! [[package.dependencies]]
//! name = "Microsoft.Kiota.Abstractions"
//! version = "[1.14.0, 2.0.0)"
//! ```

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;
use slimgen_core::Version;

use crate::{
    Error, FeatureFlags, GenerationConfig, Language, PathAllowlist, Result, SpecificationSource,
    defaults, error::SourceContext,
};

/// Root manifest for slimgen.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub spec: SpecConfig,
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub package: PackageConfig,
    #[serde(default)]
    pub compat: CompatConfig,
}

/// `[spec]`: what to read and which paths to keep.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpecConfig {
    #[serde(default = "default_source")]
    pub source: SpecificationSource,
    #[serde(default = "default_include")]
    pub include: PathAllowlist,
}

impl Default for SpecConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            include: default_include(),
        }
    }
}

/// `[client]`: root type identity and generator switches.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    #[serde(default)]
    pub language: Language,
    #[serde(default = "default_class_name")]
    pub class_name: String,
    #[serde(default = "default_namespace")]
    pub namespace: String,
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default = "default_true")]
    pub backing_store: bool,
    #[serde(default = "default_true")]
    pub exclude_backward_compatible: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            class_name: default_class_name(),
            namespace: default_namespace(),
            output: default_output(),
            backing_store: true,
            exclude_backward_compatible: true,
        }
    }
}

/// `[package]`: identity and dependency ranges written to the build descriptor.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackageConfig {
    #[serde(default = "default_package_id")]
    pub id: String,
    #[serde(default = "default_package_version")]
    pub version: Version,
    #[serde(default = "default_target_framework")]
    pub target_framework: String,
    /// Assembly name; defaults to the client namespace so callers bind to the same assembly.
    pub assembly_name: Option<String>,
    #[serde(default = "default_dependencies")]
    pub dependencies: Vec<Dependency>,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            id: default_package_id(),
            version: default_package_version(),
            target_framework: default_target_framework(),
            assembly_name: None,
            dependencies: default_dependencies(),
        }
    }
}

/// A support library and its allowed version range.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Dependency {
    pub name: String,
    pub version: String,
}

impl Dependency {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// `[compat]`: knobs of the compatibility shim that vary per client.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompatConfig {
    #[serde(default = "default_surface")]
    pub surface: String,
}

impl Default for CompatConfig {
    fn default() -> Self {
        Self {
            surface: default_surface(),
        }
    }
}

fn default_source() -> SpecificationSource {
    SpecificationSource::from(defaults::SPEC_URL)
}

fn default_include() -> PathAllowlist {
    PathAllowlist::parse(defaults::INCLUDE_PATHS).unwrap_or_default()
}

fn default_class_name() -> String {
    defaults::CLASS_NAME.to_string()
}

fn default_namespace() -> String {
    defaults::NAMESPACE.to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from(defaults::OUTPUT_DIR)
}

fn default_true() -> bool {
    true
}

fn default_package_id() -> String {
    defaults::PACKAGE_ID.to_string()
}

fn default_package_version() -> Version {
    defaults::PACKAGE_VERSION.parse().unwrap_or_default()
}

fn default_target_framework() -> String {
    defaults::TARGET_FRAMEWORK.to_string()
}

fn default_dependencies() -> Vec<Dependency> {
    defaults::DEPENDENCIES
        .iter()
        .map(|(name, version)| Dependency::new(*name, *version))
        .collect()
}

fn default_surface() -> String {
    defaults::TARGET_SURFACE.to_string()
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "slimgen.toml")
    }
}

impl Manifest {
    /// Parse a slimgen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Load from `path` when given, otherwise use the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Assembly name written to the descriptor.
    pub fn assembly_name(&self) -> &str {
        self.package
            .assembly_name
            .as_deref()
            .unwrap_or(&self.client.namespace)
    }

    /// Build the generation settings, optionally redirecting the output directory.
    pub fn generation_config(&self, output: Option<&Path>) -> GenerationConfig {
        GenerationConfig::new(
            self.client.language,
            &self.client.class_name,
            &self.client.namespace,
            output.unwrap_or(&self.client.output),
            FeatureFlags {
                backing_store: self.client.backing_store,
                exclude_backward_compatible: self.client.exclude_backward_compatible,
            },
        )
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, &source_ctx)?;
    Ok(manifest)
}

fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    if manifest.spec.include.is_empty() {
        return Err(ctx.validation_error(
            "include list is empty, nothing would be generated",
            "include",
        ));
    }

    let class_name = &manifest.client.class_name;
    if !is_identifier(class_name) {
        return Err(ctx.validation_error(
            format!("'{}' is not a valid type name", class_name),
            class_name,
        ));
    }

    let namespace = &manifest.client.namespace;
    if !namespace.split('.').all(is_identifier) {
        return Err(ctx.validation_error(
            format!("'{}' is not a valid namespace", namespace),
            namespace,
        ));
    }

    if manifest.package.id.trim().is_empty() {
        return Err(ctx.validation_error("package id must not be empty", "id"));
    }

    let mut seen = HashSet::new();
    for dep in &manifest.package.dependencies {
        if dep.version.trim().is_empty() {
            return Err(ctx.validation_error(
                format!("dependency '{}' has no version range", dep.name),
                &dep.name,
            ));
        }
        if !seen.insert(dep.name.as_str()) {
            return Err(ctx.validation_error(
                format!("dependency '{}' is listed twice", dep.name),
                &dep.name,
            ));
        }
    }

    if manifest.compat.surface.trim().is_empty() {
        return Err(ctx.validation_error("compat surface must not be empty", "surface"));
    }

    Ok(())
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
