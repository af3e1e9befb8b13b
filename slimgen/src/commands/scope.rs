use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use slimgen_manifest::SpecificationSource;

use super::{UnwrapOrExit, load_manifest};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ScopeCommand {
    /// Path to slimgen.toml (defaults to ./slimgen.toml, then built-in settings)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Specification path or URL (overrides the configured source)
    #[arg(long)]
    pub spec: Option<String>,

    /// Download the specification when it is a URL
    #[arg(long)]
    pub fetch_spec: bool,
}

impl ScopeCommand {
    pub fn run(&self) -> Result<()> {
        let (manifest, _) = load_manifest(self.config.as_deref());
        let source = self
            .spec
            .as_deref()
            .map(SpecificationSource::from)
            .unwrap_or_else(|| manifest.spec.source.clone());

        let report = ops::scope(&manifest, &source, self.fetch_spec).unwrap_or_exit();
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
