//! Core utilities and types for the slimgen scoped client generator.
//!
//! This crate provides the pieces shared by the manifest, the code
//! generation pipeline and the CLI: generated file handling, package
//! versions and the seam used to run external tools.

mod file;
mod tool;
mod version;

// File operations
pub use file::{FileRules, GeneratedFile, Overwrite, WriteResult};
// External tools
pub use tool::{SystemTools, ToolCommand, ToolOutput, ToolRunner};
pub use version::Version;
