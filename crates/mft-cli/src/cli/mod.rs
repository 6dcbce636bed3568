//! CLI for the mft type-archive resolver.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use commands::{run_completions, run_plan, run_resolve};

/// Top-level CLI for the mft type-archive resolver.
#[derive(Debug, Parser)]
#[command(name = "mft")]
#[command(about = "mft: resolve federated remotes to type-archive URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve a host config into per-remote archive URLs.
    Resolve {
        /// Path to the host configuration TOML.
        config: PathBuf,

        /// Override the types folder name from the config file.
        #[arg(long, value_name = "NAME")]
        types_folder: Option<String>,

        /// Keep the extracted types folder instead of deleting it.
        #[arg(long)]
        keep_types_folder: bool,

        /// Print the resolved config as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the download plan handed to the fetch-and-extract step.
    Plan {
        /// Path to the host configuration TOML.
        config: PathBuf,

        /// Print the plan as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions for the mft binary.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Resolve {
                config,
                types_folder,
                keep_types_folder,
                json,
            } => run_resolve(&config, types_folder, keep_types_folder, json)?,
            CliCommand::Plan { config, json } => run_plan(&config, json)?,
            CliCommand::Completions { shell } => run_completions(shell, &mut Cli::command()),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
