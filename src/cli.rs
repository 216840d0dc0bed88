use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "glad-setup",
    version,
    about = "Prepare the vendored GLAD OpenGL loader layout"
)]
pub struct Cli {
    /// Base directory for the GLAD layout (default: external/glad).
    #[arg(long = "base", global = true)]
    pub base: Option<Utf8PathBuf>,
    #[arg(short = 'n', long = "dry-run", global = true)]
    pub dry_run: bool,
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the directory layout and print the manual follow-up steps.
    Setup,
    /// Report whether the layout and loader files are present.
    Status,
    /// Print the manual follow-up steps without touching the filesystem.
    Instructions,
}

/// Helper entry point so `main` can stay minimal.
pub fn parse() -> Cli {
    Cli::parse()
}
