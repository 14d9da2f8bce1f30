//! mdcli - shortcuts for kubectl, k9s and TiDB tooling.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use mdcli::cli::output;
use mdcli::cli::{execute, Cli};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env("MDCLI_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("mdcli=debug")
        } else {
            EnvFilter::new("mdcli=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli) {
        output::error(&e.to_string());
        if let Some(hint) = e.hint() {
            output::hint(hint);
        }
        std::process::exit(e.exit_code());
    }
}
