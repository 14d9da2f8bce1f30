//! Context and namespace resolution.
//!
//! Turns what the operator typed (possibly nothing, possibly an alias) into
//! canonical kubeconfig context and namespace names. Unknown names pass
//! through untouched; empty names fall back to interactive selection, and in
//! strict mode an unresolved name is an error.

use tracing::debug;

use crate::core::aliases::AliasTables;
use crate::core::constants;
use crate::core::env::Environment;
use crate::core::select::{self, Selector};
use crate::core::types::{ContextName, NamespaceName};
use crate::error::ResolveError;

/// How hard the resolver tries, and how it fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    /// Prompt through the selector when a value is missing.
    pub interactive: bool,
    /// Fail instead of degrading to an empty value.
    pub strict: bool,
}

impl Policy {
    pub fn new(interactive: bool, strict: bool) -> Self {
        Self {
            interactive,
            strict,
        }
    }
}

/// Selector filters and inference rules for one command family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scope {
    pub context_pattern: &'static str,
    pub namespace_pattern: &'static str,
    /// Derive the context from an environment-specific namespace.
    pub infer_context: bool,
}

impl Scope {
    /// Plain kubectl/k9s: every context and namespace is a candidate.
    pub const GENERIC: Scope = Scope {
        context_pattern: "",
        namespace_pattern: "",
        infer_context: false,
    };

    /// TiDB clusters.
    pub const TIDB: Scope = Scope {
        context_pattern: constants::TIDB_CONTEXT_PATTERN,
        namespace_pattern: constants::TIDB_NAMESPACE_PATTERN,
        infer_context: true,
    };
}

/// The cluster and namespace a command will run against.
///
/// Selecting all namespaces always clears the namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedTarget {
    context: ContextName,
    namespace: NamespaceName,
    all_namespaces: bool,
}

impl ResolvedTarget {
    pub fn new(context: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            namespace: namespace.into(),
            all_namespaces: false,
        }
    }

    pub fn all_namespaces(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            namespace: String::new(),
            all_namespaces: true,
        }
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn is_all_namespaces(&self) -> bool {
        self.all_namespaces
    }

    pub fn environment(&self) -> Option<Environment> {
        Environment::from_context(&self.context)
    }
}

/// Resolves contexts and namespaces against a set of alias tables.
pub struct Resolver<'a, S> {
    aliases: &'a AliasTables,
    selector: S,
}

impl<'a, S: Selector> Resolver<'a, S> {
    pub fn new(aliases: &'a AliasTables, selector: S) -> Self {
        Self { aliases, selector }
    }

    /// Resolve a raw context string.
    ///
    /// A non-empty value is looked up as an alias and returned unchanged when
    /// unknown, regardless of `policy.strict`.
    ///
    /// # Errors
    ///
    /// In strict mode, `NoContextSelected` when interactive selection yields
    /// nothing and `ContextRequired` when no context could be determined.
    pub fn resolve_context(
        &self,
        raw: &str,
        policy: Policy,
        pattern: &str,
    ) -> Result<ContextName, ResolveError> {
        if !raw.is_empty() {
            return Ok(match self.aliases.context(raw) {
                Some(canonical) => {
                    debug!(alias = raw, context = canonical, "context alias");
                    canonical.to_string()
                }
                None => raw.to_string(),
            });
        }

        let mut context = String::new();
        if policy.interactive {
            match self.selector.select(&select::context_list_command(pattern)) {
                Some(picked) => context = picked,
                None if policy.strict => return Err(ResolveError::NoContextSelected),
                None => debug!("no context selected, continuing without one"),
            }
        }

        if policy.strict && context.is_empty() {
            return Err(ResolveError::ContextRequired);
        }

        Ok(context)
    }

    /// Resolve a raw namespace string within `context`.
    ///
    /// Returns the namespace and whether the command targets all namespaces.
    /// `all_namespaces` or a `*` namespace wins over everything else.
    ///
    /// # Errors
    ///
    /// In strict mode, `NoNamespaceSelected` when interactive selection yields
    /// nothing and `NamespaceRequired` when no namespace could be determined.
    pub fn resolve_namespace(
        &self,
        raw: &str,
        all_namespaces: bool,
        policy: Policy,
        context: &str,
        pattern: &str,
    ) -> Result<(NamespaceName, bool), ResolveError> {
        if all_namespaces || raw == "*" {
            return Ok((String::new(), true));
        }

        if !raw.is_empty() {
            return Ok((self.namespace_alias(context, raw), false));
        }

        let mut namespace = String::new();
        if policy.interactive {
            match self
                .selector
                .select(&select::namespace_list_command(context, pattern))
            {
                Some(picked) => namespace = picked,
                None if policy.strict => return Err(ResolveError::NoNamespaceSelected),
                None => debug!("no namespace selected, continuing without one"),
            }
        }

        if policy.strict && namespace.is_empty() {
            return Err(ResolveError::NamespaceRequired);
        }

        Ok((namespace, false))
    }

    /// Derive a context from an environment-specific namespace.
    ///
    /// A known global context alias always wins. Otherwise, when the namespace
    /// belongs to exactly one environment, `context` is read as that
    /// environment's short alias (`a`, `1e`, or empty for the default).
    /// Anything else is returned unchanged.
    pub fn infer_context_from_namespace(&self, context: &str, namespace: &str) -> ContextName {
        if !context.is_empty() {
            if let Some(canonical) = self.aliases.context(context) {
                return canonical.to_string();
            }
        }

        let Some(env) = self.aliases.namespace_env(namespace) else {
            return context.to_string();
        };

        match self.aliases.env_context(env, context) {
            Some(inferred) => {
                debug!(%env, namespace, context = inferred, "context inferred from namespace");
                inferred.to_string()
            }
            None => context.to_string(),
        }
    }

    /// Resolve both halves of a target for one command family.
    pub fn resolve_target(
        &self,
        context: &str,
        namespace: &str,
        all_namespaces: bool,
        policy: Policy,
        scope: Scope,
    ) -> Result<ResolvedTarget, ResolveError> {
        let context = if scope.infer_context {
            self.infer_context_from_namespace(context, namespace)
        } else {
            context.to_string()
        };

        let context = self.resolve_context(&context, policy, scope.context_pattern)?;
        let (namespace, all) = self.resolve_namespace(
            namespace,
            all_namespaces,
            policy,
            &context,
            scope.namespace_pattern,
        )?;

        Ok(if all {
            ResolvedTarget::all_namespaces(context)
        } else {
            ResolvedTarget::new(context, namespace)
        })
    }

    fn namespace_alias(&self, context: &str, raw: &str) -> NamespaceName {
        let Some(env) = Environment::from_context(context) else {
            return raw.to_string();
        };
        match self.aliases.namespace(env, raw) {
            Some(canonical) => {
                debug!(%env, alias = raw, namespace = canonical, "namespace alias");
                canonical.to_string()
            }
            None => raw.to_string(),
        }
    }
}
