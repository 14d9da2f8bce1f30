//! Running the wrapped tools.
//!
//! Children inherit the terminal. A non-zero exit is reported with the
//! child's own code so `main` can exit with it.

use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

use tracing::debug;

use crate::error::ProcessError;

/// Locate `program` on PATH.
pub fn locate(program: &str) -> Result<PathBuf, ProcessError> {
    which::which(program).map_err(|_| ProcessError::NotFound {
        program: program.to_string(),
    })
}

/// Run `program` with inherited stdio and wait for it.
///
/// # Errors
///
/// `NotFound` if the program is not on PATH, `Failed` with the exit code on
/// a non-zero exit, `Terminated` if it was killed by a signal.
pub fn run(program: &str, args: &[String]) -> Result<(), ProcessError> {
    let path = locate(program)?;
    let line = command_line(program, args);
    debug!(command = %line, "running");

    let status = Command::new(path)
        .args(args)
        .status()
        .map_err(|source| ProcessError::Spawn {
            program: program.to_string(),
            source,
        })?;

    check(program, status)
}

/// Run `program` and return its stdout; stderr goes to the terminal.
pub fn capture(program: &str, args: &[String]) -> Result<String, ProcessError> {
    let path = locate(program)?;
    let line = command_line(program, args);
    debug!(command = %line, "capturing");

    let output = Command::new(path)
        .args(args)
        .stdin(Stdio::null())
        .stderr(Stdio::inherit())
        .output()
        .map_err(|source| ProcessError::Spawn {
            program: program.to_string(),
            source,
        })?;

    check(program, output.status)?;
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Run a pipeline through `sh -c` and return its stdout.
pub fn capture_shell(script: &str) -> Result<String, ProcessError> {
    capture("sh", &["-c".to_string(), script.to_string()])
}

fn check(program: &str, status: ExitStatus) -> Result<(), ProcessError> {
    match status.code() {
        Some(0) => Ok(()),
        Some(code) => {
            debug!(program, code, "child exited non-zero");
            Err(ProcessError::Failed {
                program: program.to_string(),
                code,
            })
        }
        None => Err(ProcessError::Terminated {
            program: program.to_string(),
        }),
    }
}

/// Shell-like rendering of a command line for display.
pub fn command_line(program: &str, args: &[String]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(&quote(arg));
    }
    line
}

/// Quote `arg` for a POSIX shell unless it is made of plain characters.
pub fn quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:,@%+{}[]*".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}
