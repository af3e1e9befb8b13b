mod completions;
mod generate;
mod info;
mod scope;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use info::InfoCommand;
use miette::Diagnostic;
use scope::ScopeCommand;
use slimgen_manifest::Manifest;

/// Config file picked up from the working directory when `--config` is absent.
const DEFAULT_CONFIG: &str = "slimgen.toml";

/// Extension trait for exiting on typed errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T, E> UnwrapOrExit<T> for std::result::Result<T, Box<E>>
where
    E: Diagnostic + Send + Sync + 'static,
{
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Load the manifest from `config`, or `./slimgen.toml` if present, or the
/// built-in defaults. Returns the file that was read, if any.
pub(crate) fn load_manifest(config: Option<&Path>) -> (Manifest, Option<PathBuf>) {
    let path = config.map(Path::to_path_buf).or_else(|| {
        let default = PathBuf::from(DEFAULT_CONFIG);
        default.is_file().then_some(default)
    });
    let manifest = Manifest::load(path.as_deref()).unwrap_or_exit();
    (manifest, path)
}

#[derive(Parser)]
#[command(name = "slimgen")]
#[command(version)]
#[command(about = "Generate a scoped API client that keeps the full library's public contract")]
pub(crate) struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Scope(cmd) => cmd.run(),
            Commands::Info(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the scoped client, its project file and compatibility shim
    Generate(GenerateCommand),

    /// List the operations the allowlist keeps
    Scope(ScopeCommand),

    /// Show the effective configuration
    Info(InfoCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
