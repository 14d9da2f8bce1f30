//! Command-line interface.

pub mod args;
pub mod completions;
pub mod dispatch;
pub mod k8s;
pub mod output;
pub mod pd;
pub mod tidb;
pub mod tikv;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::args::Session;
use crate::cli::k8s::K8sCommand;
use crate::cli::tidb::TidbCommand;
use crate::error::Result;

/// mdcli - shortcuts for kubectl, k9s and TiDB tooling.
#[derive(Parser, Debug)]
#[command(
    name = "mdcli",
    about = "Shortcuts for kubectl, k9s and TiDB tooling",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config.toml (default: ~/.config/mdcli/config.toml)
    #[arg(long, global = true, env = "MDCLI_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Kubernetes wrappers
    #[command(visible_alias = "k8s")]
    Kubernetes {
        #[command(subcommand)]
        command: K8sCommand,
    },

    /// TiDB on Kubernetes
    #[command(visible_aliases = ["ti", "db"])]
    Tidb {
        #[command(subcommand)]
        command: TidbCommand,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Execute a parsed command line.
pub fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Kubernetes { command } => {
            k8s::execute(&Session::load(cli.config.as_deref()), command)
        }
        Command::Tidb { command } => tidb::execute(&Session::load(cli.config.as_deref()), command),
        Command::Completions { shell } => completions::execute(shell),
    }
}
