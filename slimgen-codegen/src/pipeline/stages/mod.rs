//! The standard stages, in run order.

mod build;
mod clean;
mod descriptor;
mod ensure_output;
mod generate;
mod resolve_scope;
mod shim;

use std::path::{Path, PathBuf};

pub use build::BuildStage;
pub use clean::CleanStage;
pub use descriptor::DescriptorStage;
pub use ensure_output::EnsureOutputStage;
pub use generate::GenerateStage;
pub use resolve_scope::ResolveScopeStage;
pub use shim::ShimStage;
use slimgen_core::GeneratedFile;

use crate::{Error, Result};

/// Write a derived artifact into `base`, returning its path.
fn write_artifact(file: &impl GeneratedFile, base: &Path) -> Result<PathBuf> {
    let path = file.path(base);
    file.write(base).map_err(|err| {
        Box::new(Error::Write {
            path: path.clone(),
            message: format!("{err:#}"),
        })
    })?;
    tracing::info!(path = %path.display(), "wrote artifact");
    Ok(path)
}
