//! Flags shared by the kubectl-style commands, and the per-invocation
//! session they are resolved against.

use std::path::Path;

use clap::{ArgAction, Args};

use crate::core::aliases::AliasTables;
use crate::core::builder::KubeBuilder;
use crate::core::config::Config;
use crate::core::env::Environment;
use crate::core::resolve::{Policy, ResolvedTarget, Resolver, Scope};
use crate::core::select::FzfSelector;
use crate::error::Result;

/// Which cluster and namespace to target.
#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// CONTEXT from kubeconfig to use (alias or full name)
    #[arg(short = 'c', long, visible_alias = "ctx", value_name = "CONTEXT")]
    pub context: Option<String>,

    /// NAMESPACE to use (alias, full name, or * for all)
    #[arg(short = 'n', long, visible_alias = "ns", value_name = "NAMESPACE")]
    pub namespace: Option<String>,

    /// Require an explicit context and namespace
    #[arg(
        short = 's',
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        default_value_t = true
    )]
    pub strict: bool,

    /// Select a missing context or namespace with fzf
    #[arg(
        short = 'i',
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        default_value_t = true
    )]
    pub interactive: bool,

    /// Print the command instead of running it
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Run across all namespaces
    #[arg(short = 'A', long)]
    pub all_namespaces: bool,
}

impl TargetArgs {
    pub fn policy(&self) -> Policy {
        Policy::new(self.interactive, self.strict)
    }

    fn context(&self) -> &str {
        self.context.as_deref().unwrap_or("")
    }

    fn namespace(&self) -> &str {
        self.namespace.as_deref().unwrap_or("")
    }
}

/// Flags for commands that run kubectl.
#[derive(Args, Debug, Clone, Default)]
pub struct KubectlArgs {
    /// Skip the confirmation prompt for mutating commands
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Run mutating commands as the elevated role
    #[arg(long, visible_alias = "cluster-admin")]
    pub assume_cluster_admin: bool,
}

/// Flags for the in-pod TiDB tools.
#[derive(Args, Debug, Clone, Default)]
pub struct PodArgs {
    /// Pod ordinal to connect to
    #[arg(short = 'p', long, default_value_t = 0)]
    pub pod: u32,

    /// Talk to the cluster without TLS
    #[arg(long, visible_alias = "tls")]
    pub disable_tls: bool,
}

/// Configuration and alias tables for one invocation.
pub struct Session {
    config: Config,
    aliases: AliasTables,
}

impl Session {
    pub fn new(config: Config, aliases: AliasTables) -> Self {
        Self { config, aliases }
    }

    /// Load the user config and the built-in alias tables.
    pub fn load(config_path: Option<&Path>) -> Self {
        Self::new(Config::load_or_default(config_path), AliasTables::builtin())
    }

    /// Resolve the target flags for one command family.
    pub fn resolve(&self, target: &TargetArgs, scope: Scope) -> Result<ResolvedTarget> {
        let resolver = Resolver::new(&self.aliases, FzfSelector);
        let resolved = resolver.resolve_target(
            target.context(),
            target.namespace(),
            target.all_namespaces,
            target.policy(),
            scope,
        )?;
        Ok(resolved)
    }

    /// Builder for a command family, using the configured elevated role.
    pub fn builder(&self, scope: Scope) -> KubeBuilder {
        let builder = if scope == Scope::TIDB {
            KubeBuilder::tidb()
        } else {
            KubeBuilder::default()
        };
        builder.with_elevated_role(self.config.elevated_role.clone())
    }

    /// Whether to request the elevated role.
    ///
    /// TiDB test clusters get it by default when the config enables it.
    /// `dev` contexts count as test for aliases but are never elevated.
    pub fn assume_elevated(&self, target: &ResolvedTarget, requested: bool, scope: Scope) -> bool {
        requested
            || (scope == Scope::TIDB
                && target.environment() == Some(Environment::Test)
                && target.context().contains(Environment::Test.tag())
                && self.config.enable_cluster_admin_for_test)
    }
}
