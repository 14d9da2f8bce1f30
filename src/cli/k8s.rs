//! Generic kubectl and k9s wrappers.

use clap::Subcommand;

use crate::cli::args::{KubectlArgs, Session, TargetArgs};
use crate::cli::dispatch::{self, Mode};
use crate::core::resolve::Scope;
use crate::error::Result;

#[derive(Subcommand, Debug)]
pub enum K8sCommand {
    /// kubectl with context/namespace aliases and %placeholders
    #[command(visible_aliases = ["kc", "kctl"])]
    Kubectl {
        #[command(flatten)]
        target: TargetArgs,
        #[command(flatten)]
        kubectl: KubectlArgs,
        /// Arguments passed to kubectl
        #[arg(trailing_var_arg = true)]
        args: Vec<String>,
    },

    /// k9s with context/namespace aliases
    K9s {
        #[command(flatten)]
        target: TargetArgs,
        /// `RESOURCE` or `get RESOURCE` to open
        #[arg(trailing_var_arg = true)]
        args: Vec<String>,
    },
}

pub fn execute(session: &Session, command: K8sCommand) -> Result<()> {
    match command {
        K8sCommand::Kubectl {
            target,
            kubectl,
            args,
        } => run_kubectl(session, Scope::GENERIC, &target, &kubectl, &args),
        K8sCommand::K9s { target, args } => run_k9s(session, Scope::GENERIC, &target, &args),
    }
}

/// Resolve, build and dispatch a kubectl invocation.
pub(crate) fn run_kubectl(
    session: &Session,
    scope: Scope,
    target: &TargetArgs,
    kubectl: &KubectlArgs,
    args: &[String],
) -> Result<()> {
    let resolved = session.resolve(target, scope)?;
    let elevated = session.assume_elevated(&resolved, kubectl.assume_cluster_admin, scope);
    let built = session
        .builder(scope)
        .build_kubectl_args(&resolved, elevated, args);

    dispatch::kubectl(
        &resolved,
        &built,
        Mode {
            debug: target.debug,
            yes: kubectl.yes,
        },
    )
}

/// Resolve, build and dispatch a k9s invocation.
pub(crate) fn run_k9s(
    session: &Session,
    scope: Scope,
    target: &TargetArgs,
    args: &[String],
) -> Result<()> {
    let resolved = session.resolve(target, scope)?;
    let built = session.builder(scope).build_k9s_args(&resolved, args)?;

    dispatch::k9s(
        &resolved,
        &built,
        Mode {
            debug: target.debug,
            yes: false,
        },
    )
}
