//! TiDB commands.
//!
//! Every command here resolves its target with [`Scope::TIDB`]: context
//! inference from the namespace, `^m-tidb-`/`^tidb-` selector filters, and
//! the `%tc`, `%az` and `%app` placeholders.

use clap::Subcommand;

use crate::cli::args::{KubectlArgs, PodArgs, Session, TargetArgs};
use crate::cli::dispatch::{self, Mode};
use crate::cli::k8s::{run_k9s, run_kubectl};
use crate::cli::output;
use crate::cli::pd::{self, PdCommand};
use crate::cli::tikv::{self, TikvCommand};
use crate::core::cluster::{self, DmComponent, PodExec};
use crate::core::process;
use crate::core::resolve::{ResolvedTarget, Scope};
use crate::error::{BuildError, Result};

#[derive(Subcommand, Debug)]
pub enum TidbCommand {
    /// Print the TiDB root password
    #[command(visible_aliases = ["pass", "password"])]
    Secret {
        #[command(flatten)]
        target: TargetArgs,
    },

    /// kubectl for TiDB clusters
    #[command(visible_aliases = ["kc", "kctl", "tkc", "tkctl"])]
    Kubectl {
        #[command(flatten)]
        target: TargetArgs,
        #[command(flatten)]
        kubectl: KubectlArgs,
        /// Arguments passed to kubectl
        #[arg(trailing_var_arg = true)]
        args: Vec<String>,
    },

    /// k9s for TiDB clusters
    #[command(visible_alias = "tk9s")]
    K9s {
        #[command(flatten)]
        target: TargetArgs,
        /// `RESOURCE` or `get RESOURCE` to open
        #[arg(trailing_var_arg = true)]
        args: Vec<String>,
    },

    /// Run dmctl in a DM pod
    #[command(visible_alias = "tdmctl")]
    Dmctl {
        #[command(flatten)]
        target: TargetArgs,
        #[command(flatten)]
        kubectl: KubectlArgs,
        #[command(flatten)]
        pod: PodArgs,
        /// Start from a dm-worker pod instead of dm-master
        #[arg(short = 'w', long)]
        worker: bool,
        /// Arguments passed to dmctl
        #[arg(trailing_var_arg = true)]
        args: Vec<String>,
    },

    /// Open pd-ctl in a PD pod
    #[command(visible_alias = "tpdctl")]
    Pdctl {
        #[command(flatten)]
        target: TargetArgs,
        #[command(flatten)]
        kubectl: KubectlArgs,
        #[command(flatten)]
        pod: PodArgs,
    },

    /// Run `cdc cli` in a TiCDC pod
    #[command(name = "ticdc", visible_alias = "cdc")]
    Cdc {
        #[command(flatten)]
        target: TargetArgs,
        #[command(flatten)]
        kubectl: KubectlArgs,
        #[command(flatten)]
        pod: PodArgs,
        /// Arguments passed to `cdc cli`
        #[arg(trailing_var_arg = true)]
        args: Vec<String>,
    },

    /// PD helpers
    Pd {
        #[command(subcommand)]
        command: PdCommand,
    },

    /// TiKV store helpers
    #[command(visible_alias = "kv")]
    Tikv {
        #[command(subcommand)]
        command: TikvCommand,
    },
}

pub fn execute(session: &Session, command: TidbCommand) -> Result<()> {
    match command {
        TidbCommand::Secret { target } => secret(session, &target),
        TidbCommand::Kubectl {
            target,
            kubectl,
            args,
        } => run_kubectl(session, Scope::TIDB, &target, &kubectl, &args),
        TidbCommand::K9s { target, args } => run_k9s(session, Scope::TIDB, &target, &args),
        TidbCommand::Dmctl {
            target,
            kubectl,
            pod,
            worker,
            args,
        } => {
            let component = if worker {
                DmComponent::Worker
            } else {
                DmComponent::Master
            };
            run_in_pod(session, &target, &kubectl, |name| {
                cluster::dmctl(name, component, pod.pod, !pod.disable_tls, &args)
            })
        }
        TidbCommand::Pdctl {
            target,
            kubectl,
            pod,
        } => run_in_pod(session, &target, &kubectl, |name| {
            cluster::pdctl(name, pod.pod, !pod.disable_tls)
        }),
        TidbCommand::Cdc {
            target,
            kubectl,
            pod,
            args,
        } => run_in_pod(session, &target, &kubectl, |name| {
            cluster::cdc(name, pod.pod, !pod.disable_tls, &args)
        }),
        TidbCommand::Pd { command } => pd::execute(command),
        TidbCommand::Tikv { command } => tikv::execute(session, command),
    }
}

/// Resolve a single TiDB namespace; the pod tools and TiKV helpers never
/// span namespaces.
pub(crate) fn resolve_cluster(
    session: &Session,
    target: &TargetArgs,
) -> Result<(ResolvedTarget, String)> {
    let single = TargetArgs {
        all_namespaces: false,
        ..target.clone()
    };
    let resolved = session.resolve(&single, Scope::TIDB)?;
    let name = cluster::cluster_name(resolved.namespace());
    if name.is_empty() {
        return Err(BuildError::MissingArgument("namespace").into());
    }
    let name = name.to_string();
    Ok((resolved, name))
}

fn secret(session: &Session, target: &TargetArgs) -> Result<()> {
    let (resolved, _) = resolve_cluster(session, target)?;
    let script = cluster::secret_script(resolved.context(), resolved.namespace());
    if target.debug {
        output::command(resolved.environment(), &script);
        return Ok(());
    }

    let password = process::capture_shell(&script)?;
    output::raw(&password)?;
    Ok(())
}

fn run_in_pod(
    session: &Session,
    target: &TargetArgs,
    kubectl: &KubectlArgs,
    exec: impl FnOnce(&str) -> PodExec,
) -> Result<()> {
    let (resolved, name) = resolve_cluster(session, target)?;
    let exec = exec(&name);

    let elevated = session.assume_elevated(&resolved, kubectl.assume_cluster_admin, Scope::TIDB);
    let built = session
        .builder(Scope::TIDB)
        .build_kubectl_args(&resolved, elevated, &exec.kubectl_args());

    dispatch::kubectl(
        &resolved,
        &built,
        Mode {
            debug: target.debug,
            yes: kubectl.yes,
        },
    )
}
