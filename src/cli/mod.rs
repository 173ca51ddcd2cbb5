//! Command-line interface module.

mod args;
pub mod check;
pub mod init;
pub mod show;

pub use args::{Cli, Commands, OutputFormat};

use crate::config::find_config_file;
use anyhow::{Result, anyhow};
use std::path::PathBuf;

/// Run the parsed command.
pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Check { files } => check::check_configs(cli, files),
        Commands::Show { format } => show::show_config(cli, *format),
        Commands::Init {
            dir,
            title,
            url,
            force,
        } => init::new_site(dir.as_deref(), title.as_deref(), url.as_deref(), *force).map(|_| ()),
    }
}

/// Find the config named by `--config`, searching upward from cwd.
pub fn locate_config(cli: &Cli) -> Result<PathBuf> {
    find_config_file(&cli.config).ok_or_else(|| {
        anyhow!(
            "Config file '{}' not found. Run 'docsite init' to create a new site.",
            cli.config.display()
        )
    })
}
