//! Argument vectors for kubectl and k9s.
//!
//! The builder is pure: placeholder expansion, target flags, resource
//! qualification and the elevated role are all decided from its inputs.

use tracing::debug;

use crate::core::command::{self, CommandTag};
use crate::core::constants;
use crate::core::resolve::ResolvedTarget;
use crate::core::substitute::SubstitutionSet;
use crate::error::BuildError;

/// A kubectl argument vector and what running it requires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltArgs {
    pub args: Vec<String>,
    /// The sub-command mutates state and should be confirmed first.
    pub needs_confirmation: bool,
    /// `--as=<role>` was appended.
    pub elevated: bool,
}

/// Builds argument vectors with a fixed substitution set.
#[derive(Debug)]
pub struct KubeBuilder {
    substitutions: SubstitutionSet,
    elevated_role: String,
}

impl Default for KubeBuilder {
    fn default() -> Self {
        Self::new(SubstitutionSet::builtin())
    }
}

impl KubeBuilder {
    pub fn new(substitutions: SubstitutionSet) -> Self {
        Self {
            substitutions,
            elevated_role: constants::DEFAULT_ELEVATED_ROLE.to_string(),
        }
    }

    /// Builder with the TiDB placeholders.
    pub fn tidb() -> Self {
        Self::new(SubstitutionSet::tidb())
    }

    /// Identity passed to `--as=`.
    pub fn with_elevated_role(mut self, role: impl Into<String>) -> Self {
        self.elevated_role = role.into();
        self
    }

    /// Build the kubectl argument vector for `raw`.
    ///
    /// Layout: target flags, the arguments up to the first `--` (with a
    /// `kind name` pair merged into `kind/name` for qualifiable commands),
    /// `--all-namespaces`, `--as=<role>`, the interactive shell for a bare
    /// `exec`, then `--` and everything after it verbatim.
    pub fn build_kubectl_args(
        &self,
        target: &ResolvedTarget,
        assume_elevated: bool,
        raw: &[String],
    ) -> BuiltArgs {
        let parsed = self
            .substitutions
            .substitute(raw, target.context(), target.namespace());

        let mut args = target_flags(target, "--namespace");

        let Some(sub) = parsed.first() else {
            return BuiltArgs {
                args,
                needs_confirmation: false,
                elevated: false,
            };
        };
        let sub = sub.as_str();

        let needs_confirmation = command::has_tag(sub, CommandTag::Confirmable);
        let elevated = assume_elevated && command::has_tag(sub, CommandTag::ElevationEligible);
        let qualified = command::has_tag(sub, CommandTag::ResourceQualifiable)
            && qualifies(parsed.get(1), parsed.get(2));

        let split = parsed
            .iter()
            .position(|arg| arg == "--")
            .unwrap_or(parsed.len());
        let (head, tail) = parsed.split_at(split);

        if qualified {
            args.push(head[0].clone());
            args.push(format!("{}/{}", head[1], head[2]));
            args.extend_from_slice(&head[3..]);
        } else {
            args.extend_from_slice(head);
        }

        if target.is_all_namespaces() {
            args.push("--all-namespaces".to_string());
        }

        if elevated {
            args.push(format!("--as={}", self.elevated_role));
        }

        let operands = if qualified { 3 } else { 2 };
        if sub == "exec" && tail.is_empty() && parsed.len() == operands {
            args.extend(constants::INTERACTIVE_SHELL.iter().map(|s| s.to_string()));
        }

        args.extend_from_slice(tail);

        debug!(?args, needs_confirmation, elevated, "built kubectl arguments");
        BuiltArgs {
            args,
            needs_confirmation,
            elevated,
        }
    }

    /// Build the k9s argument vector for `raw`.
    ///
    /// Accepts nothing (default resource view), `<resource>`, or
    /// `get <resource>`.
    ///
    /// # Errors
    ///
    /// `BuildError::TooManyArguments` for any other shape.
    pub fn build_k9s_args(
        &self,
        target: &ResolvedTarget,
        raw: &[String],
    ) -> Result<Vec<String>, BuildError> {
        let parsed = self
            .substitutions
            .substitute(raw, target.context(), target.namespace());

        let mut args = target_flags(target, "-n");

        let resource = match parsed.as_slice() {
            [] => constants::DEFAULT_K9S_RESOURCE,
            [resource] => resource.as_str(),
            [get, resource] if get == "get" => resource.as_str(),
            _ => return Err(BuildError::TooManyArguments(raw.join(" "))),
        };
        args.push("-c".to_string());
        args.push(resource.to_string());

        if target.is_all_namespaces() {
            args.push("--all-namespaces".to_string());
        }

        debug!(?args, "built k9s arguments");
        Ok(args)
    }
}

fn target_flags(target: &ResolvedTarget, namespace_flag: &str) -> Vec<String> {
    let mut args = Vec::new();
    if !target.context().is_empty() {
        args.push("--context".to_string());
        args.push(target.context().to_string());
    }
    if !target.namespace().is_empty() && !target.is_all_namespaces() {
        args.push(namespace_flag.to_string());
        args.push(target.namespace().to_string());
    }
    args
}

fn qualifies(kind: Option<&String>, name: Option<&String>) -> bool {
    match (kind, name) {
        (Some(kind), Some(name)) => {
            command::is_qualifiable_kind(kind)
                && name != "--"
                && !name.starts_with('-')
                && !name.contains('/')
        }
        _ => false,
    }
}
