//! slimgen.toml parsing, built-in defaults and the allowlist model.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod allowlist;
mod config;
pub mod defaults;
mod error;
mod language;
mod manifest;
mod source;

pub use allowlist::{PathAllowlist, PathPattern};
pub use config::{FeatureFlags, GenerationConfig};
pub use error::{Error, Result};
pub use language::Language;
pub use manifest::{
    ClientConfig, CompatConfig, Dependency, Manifest, PackageConfig, SpecConfig, parse_manifest,
};
pub use source::SpecificationSource;
