//! Terminal output helpers.
//!
//! Everything except a command's actual result goes to stderr so the wrapped
//! tools' stdout can be piped. Colors respect `NO_COLOR`.
//!
//! - Red: errors, prod commands
//! - Yellow: staging commands
//! - Magenta: test commands
//! - Cyan: hints

use std::io::{self, Write};

use console::style;

use crate::core::env::Environment;

fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Print an error message to stderr.
///
/// Example: `✗ context must be specified in strict mode`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red().for_stderr(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a hint to stderr.
///
/// Example: `→ re-run with --yes to skip the prompt`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!(
            "{} {}",
            style("→").cyan().for_stderr(),
            style(msg).cyan().for_stderr()
        );
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a command line to stderr, colored by the environment it targets.
pub fn command(env: Option<Environment>, line: &str) {
    if !colors_enabled() {
        eprintln!("{}", line);
        return;
    }
    let styled = style(line).for_stderr();
    let styled = match env {
        Some(Environment::Prod) => styled.red(),
        Some(Environment::Staging) => styled.yellow(),
        Some(Environment::Test) => styled.magenta(),
        None => styled,
    };
    eprintln!("{}", styled);
}

/// Print a command result to stdout.
pub fn result(value: impl std::fmt::Display) {
    println!("{}", value);
}

/// Print a value to stdout exactly as given, without a trailing newline.
pub fn raw(value: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(value.as_bytes())?;
    out.flush()
}
