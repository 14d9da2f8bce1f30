//! PD helpers.

use clap::{Args, Subcommand};

use crate::cli::output;
use crate::core::cluster;
use crate::error::{BuildError, Result};

#[derive(Subcommand, Debug)]
pub enum PdCommand {
    /// Convert between a PD TSO and a UTC timestamp
    Tso(TsoArgs),
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct TsoArgs {
    /// TSO to convert to a timestamp
    #[arg(long)]
    pub tso: Option<u64>,

    /// RFC 3339 timestamp to convert to a TSO
    #[arg(long, value_name = "TIME")]
    pub ts: Option<String>,
}

pub fn execute(command: PdCommand) -> Result<()> {
    match command {
        PdCommand::Tso(args) => tso(&args),
    }
}

fn tso(args: &TsoArgs) -> Result<()> {
    match (args.tso, args.ts.as_deref()) {
        (Some(tso), _) => output::result(cluster::tso_to_timestamp(tso)?),
        (None, Some(ts)) => output::result(cluster::timestamp_to_tso(ts)?),
        (None, None) => return Err(BuildError::MissingArgument("--tso or --ts").into()),
    }
    Ok(())
}
