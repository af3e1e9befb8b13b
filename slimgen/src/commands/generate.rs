use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use slimgen_codegen::pipeline::RunOptions;
use slimgen_core::SystemTools;

use super::{UnwrapOrExit, load_manifest};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to slimgen.toml (defaults to ./slimgen.toml, then built-in settings)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output directory (overrides the configured one)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Delete the output directory before generating
    #[arg(long, conflicts_with = "merge")]
    pub clean: bool,

    /// Generate into a non-empty output directory without cleaning it
    #[arg(long)]
    pub merge: bool,

    /// Do not build the generated package
    #[arg(long)]
    pub skip_build: bool,

    /// Download a remote specification to check the allowlist before generating
    #[arg(long)]
    pub fetch_spec: bool,

    /// Preview the generator command and synthesized files without touching disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let (manifest, _) = load_manifest(self.config.as_deref());

        if self.dry_run {
            let report = ops::preview(&manifest, self.output.as_deref());
            report.render(&mut TerminalOutput::new());
            return Ok(());
        }

        let options = RunOptions {
            clean: self.clean,
            merge: self.merge,
            skip_build: self.skip_build,
            fetch_spec: self.fetch_spec,
        };

        let report =
            ops::generate(manifest, self.output.as_deref(), options, &SystemTools).unwrap_or_exit();
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
