//! Interactive selection through an external fuzzy finder.
//!
//! The selector receives a shell command that prints candidates one per line
//! and returns the line the operator picked. Cancellation and failures both
//! surface as "no selection"; the resolver decides whether that is fatal.

use std::process::{Command, Stdio};

use tracing::debug;

use crate::core::{constants, process};

/// Something that can ask the operator to pick one line.
pub trait Selector {
    /// Run the selection over the output of `list_command`.
    ///
    /// Returns `None` when nothing was picked.
    fn select(&self, list_command: &str) -> Option<String>;
}

impl<S: Selector + ?Sized> Selector for &S {
    fn select(&self, list_command: &str) -> Option<String> {
        (**self).select(list_command)
    }
}

/// [`Selector`] backed by `fzf`.
#[derive(Debug, Clone, Default)]
pub struct FzfSelector;

impl Selector for FzfSelector {
    fn select(&self, list_command: &str) -> Option<String> {
        debug!(command = list_command, "starting fzf");

        let output = Command::new(constants::FZF)
            .args(["--ansi", "--no-preview"])
            .env(constants::FZF_DEFAULT_COMMAND, list_command)
            .stdin(Stdio::inherit())
            .stderr(Stdio::inherit())
            .output();

        match output {
            Ok(out) if out.status.success() => {
                let picked = String::from_utf8_lossy(&out.stdout).trim().to_string();
                if picked.is_empty() {
                    None
                } else {
                    Some(picked)
                }
            }
            Ok(out) => {
                debug!(status = ?out.status.code(), "fzf exited without a selection");
                None
            }
            Err(e) => {
                debug!(error = %e, "failed to start fzf");
                None
            }
        }
    }
}

/// Shell command listing kubeconfig contexts, optionally filtered.
pub fn context_list_command(pattern: &str) -> String {
    let base = format!("{} config get-contexts -o name", constants::KUBECTL);
    filtered(base, pattern)
}

/// Shell command listing namespaces of a context, optionally filtered.
pub fn namespace_list_command(context: &str, pattern: &str) -> String {
    let jsonpath = r#"-o jsonpath='{range .items[*]}{.metadata.name}{"\n"}{end}'"#;
    let base = if context.is_empty() {
        format!("{} get ns {}", constants::KUBECTL, jsonpath)
    } else {
        format!(
            "{} --context {} get ns {}",
            constants::KUBECTL,
            process::quote(context),
            jsonpath
        )
    };
    filtered(base, pattern)
}

fn filtered(base: String, pattern: &str) -> String {
    if pattern.is_empty() {
        base
    } else {
        format!("{} | grep -e \"{}\"", base, pattern)
    }
}
