use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::load_manifest;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InfoCommand {
    /// Path to slimgen.toml (defaults to ./slimgen.toml, then built-in settings)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl InfoCommand {
    pub fn run(&self) -> Result<()> {
        let (manifest, path) = load_manifest(self.config.as_deref());

        let report = ops::info(&manifest, path.as_deref());
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
