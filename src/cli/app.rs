//! Main CLI application structure

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::output::Output;
use super::shell::Shell;
use crate::storage::{Config, TaskStore};

#[derive(Parser)]
#[command(name = "todo")]
#[command(author, version, about = "Interactive in-memory task list with JSON and CSV export")]
pub struct Cli {
    /// Enable verbose output for debugging
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Path to a TOML config file (defaults to the platform config directory)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory export files are written to (defaults to the working directory)
    #[arg(long, value_name = "DIR")]
    pub export_dir: Option<PathBuf>,

    /// Do not print the welcome banner
    #[arg(long)]
    pub no_banner: bool,
}

impl Cli {
    /// Merges command-line overrides into the loaded configuration
    pub fn apply(&self, config: &mut Config) {
        if let Some(dir) = &self.export_dir {
            config.export.directory = Some(dir.clone());
        }
        if self.no_banner {
            config.shell.banner = false;
        }
    }
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.verbose);

    output.verbose("Todo shell starting");

    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply(&mut config);
    output.verbose_ctx("config", &format!("{:?}", config));

    let store = TaskStore::with_export_options(config.export.to_options());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(store, stdin.lock(), stdout.lock(), output)
        .with_banner(config.shell.banner);

    shell.run()?;

    output.verbose_ctx(
        "exit",
        &format!("Session ended with {} task(s)", shell.store().len()),
    );
    Ok(())
}
