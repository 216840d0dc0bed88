use anyhow::{Context, Result, anyhow};
use camino::Utf8PathBuf;

use crate::cli::{Cli, Command};
use crate::config::SetupConfig;
use crate::instructions;
use crate::layout::Layout;
use crate::status;

/// Dispatch the parsed CLI. The bare invocation defaults to `setup`.
pub fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("determining current directory")?;
    let cwd = Utf8PathBuf::from_path_buf(cwd)
        .map_err(|path| anyhow!("current directory is not valid UTF-8: {}", path.display()))?;
    let config = SetupConfig::discover(&cwd)?;

    let layout = Layout::new(resolve_base(cli.base.clone(), &config));

    match cli.command.unwrap_or(Command::Setup) {
        Command::Setup => setup(&layout, &config, cli.dry_run),
        Command::Status => {
            let state = status::detect(&layout);
            status::report(&layout, &state);
            Ok(())
        }
        Command::Instructions => {
            print!(
                "{}",
                instructions::render(&layout, config.api(), config.profile())
            );
            Ok(())
        }
    }
}

/// A `--base` flag wins over a config-supplied base, which wins over the
/// built-in default.
fn resolve_base(cli_base: Option<Utf8PathBuf>, config: &SetupConfig) -> Utf8PathBuf {
    cli_base.unwrap_or_else(|| config.base())
}

/// The bootstrap operation: ensure the layout, then print the manual steps.
fn setup(layout: &Layout, config: &SetupConfig, dry_run: bool) -> Result<()> {
    println!("Setting up GLAD...");

    if dry_run {
        for dir in layout.dirs() {
            println!("  would create {}", dir);
        }
    } else {
        layout.ensure()?;
        println!("GLAD directories created");
    }

    println!();
    print!(
        "{}",
        instructions::render(layout, config.api(), config.profile())
    );
    Ok(())
}
