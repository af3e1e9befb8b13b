//! Artifacts written into the generated tree after the generator runs.

mod client_shim;
mod project_file;

pub use client_shim::ClientShim;
pub use project_file::ProjectFile;
