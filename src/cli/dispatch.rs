//! Print, confirm, or run a built command.

use std::io::{self, IsTerminal};

use dialoguer::Confirm;
use tracing::debug;

use crate::cli::output;
use crate::core::builder::BuiltArgs;
use crate::core::constants;
use crate::core::process;
use crate::core::resolve::ResolvedTarget;
use crate::error::{Error, Result};

const CONFIRM_PROMPT: &str = "Do you want to execute the above command?";

/// How a built command should be handled.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mode {
    /// Only print the command.
    pub debug: bool,
    /// The operator already agreed to mutating commands.
    pub yes: bool,
}

/// Run kubectl with `built`, asking first when it needs confirmation.
///
/// # Errors
///
/// `Canceled` if the operator declines, `ConfirmationUnavailable` when a
/// prompt is needed but stdin is not a terminal, or the process error.
pub fn kubectl(target: &ResolvedTarget, built: &BuiltArgs, mode: Mode) -> Result<()> {
    let line = process::command_line(constants::KUBECTL, &built.args);

    if mode.debug {
        output::command(target.environment(), &line);
        return Ok(());
    }

    if built.needs_confirmation && !mode.yes {
        output::command(target.environment(), &line);
        confirm()?;
    }

    process::run(constants::KUBECTL, &built.args)?;
    Ok(())
}

/// Run k9s with `args`.
pub fn k9s(target: &ResolvedTarget, args: &[String], mode: Mode) -> Result<()> {
    if mode.debug {
        output::command(
            target.environment(),
            &process::command_line(constants::K9S, args),
        );
        return Ok(());
    }

    process::run(constants::K9S, args)?;
    Ok(())
}

/// Capture the output of a read-only kubectl query.
///
/// In debug mode the query is only printed and `None` is returned.
pub fn query(target: &ResolvedTarget, args: &[String], mode: Mode) -> Result<Option<String>> {
    if mode.debug {
        output::command(
            target.environment(),
            &process::command_line(constants::KUBECTL, args),
        );
        return Ok(None);
    }
    Ok(Some(process::capture(constants::KUBECTL, args)?))
}

fn confirm() -> Result<()> {
    if !io::stdin().is_terminal() {
        return Err(Error::ConfirmationUnavailable);
    }

    let accepted = Confirm::new()
        .with_prompt(CONFIRM_PROMPT)
        .default(false)
        .interact()?;

    if accepted {
        Ok(())
    } else {
        debug!("operator declined");
        Err(Error::Canceled)
    }
}
