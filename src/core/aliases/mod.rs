//! Context and namespace alias tables.
//!
//! Tables are plain immutable values built once at startup from literal data
//! (see [`builtin`]) and passed by reference to the resolver. Tests build
//! their own small tables with [`AliasTable::from_entries`].

mod builtin;

use std::collections::{BTreeMap, HashMap};

use crate::core::env::Environment;
use crate::core::types::{Alias, ContextName};

/// Normalize operator input for alias lookup: lower-case, hyphens removed.
pub fn normalize(raw: &str) -> Alias {
    raw.to_lowercase().replace('-', "")
}

/// A mapping from normalized alias to canonical name.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    entries: HashMap<Alias, String>,
}

impl AliasTable {
    /// Build a table from `(canonical, aliases)` pairs.
    ///
    /// When two canonical names claim the same alias, the one listed first
    /// keeps it.
    pub fn from_entries(entries: &[(&str, &[&str])]) -> Self {
        let mut table = HashMap::new();
        for (canonical, aliases) in entries {
            for alias in aliases.iter() {
                table
                    .entry(normalize(alias))
                    .or_insert_with(|| canonical.to_string());
            }
        }
        Self { entries: table }
    }

    /// Look up the canonical name for raw operator input.
    pub fn get(&self, raw: &str) -> Option<&str> {
        self.entries.get(&normalize(raw)).map(String::as_str)
    }

    /// Whether `raw` is a known alias.
    pub fn contains_alias(&self, raw: &str) -> bool {
        self.entries.contains_key(&normalize(raw))
    }

    /// Whether `name` is one of the canonical names in this table.
    pub fn contains_canonical(&self, name: &str) -> bool {
        self.entries.values().any(|v| v == name)
    }
}

/// Short per-environment context aliases (`a`, `1e`, ...) plus the context
/// an empty alias stands for.
#[derive(Debug, Clone)]
pub struct EnvContexts {
    pub default: ContextName,
    pub aliases: AliasTable,
}

/// Every alias table the resolver consults.
#[derive(Debug, Clone, Default)]
pub struct AliasTables {
    contexts: AliasTable,
    env_contexts: BTreeMap<Environment, EnvContexts>,
    namespaces: BTreeMap<Environment, AliasTable>,
}

impl AliasTables {
    pub fn new(
        contexts: AliasTable,
        env_contexts: BTreeMap<Environment, EnvContexts>,
        namespaces: BTreeMap<Environment, AliasTable>,
    ) -> Self {
        Self {
            contexts,
            env_contexts,
            namespaces,
        }
    }

    /// The tables compiled into the binary.
    pub fn builtin() -> Self {
        builtin::tables()
    }

    /// Canonical context for a global context alias.
    pub fn context(&self, raw: &str) -> Option<&str> {
        self.contexts.get(raw)
    }

    /// Canonical namespace for an alias, scoped to one environment.
    pub fn namespace(&self, env: Environment, raw: &str) -> Option<&str> {
        self.namespaces.get(&env).and_then(|t| t.get(raw))
    }

    /// Context for a short alias within an environment.
    ///
    /// An empty alias selects the environment's default context.
    pub fn env_context(&self, env: Environment, raw: &str) -> Option<&str> {
        let contexts = self.env_contexts.get(&env)?;
        if raw.is_empty() {
            Some(contexts.default.as_str())
        } else {
            contexts.aliases.get(raw)
        }
    }

    /// The single environment a namespace (alias or canonical name) belongs to.
    ///
    /// Returns `None` when the namespace is unknown or shared between
    /// environments, since then it says nothing about the target cluster.
    pub fn namespace_env(&self, raw: &str) -> Option<Environment> {
        if raw.is_empty() {
            return None;
        }
        unique(
            self.namespaces
                .iter()
                .filter(|(_, t)| t.contains_alias(raw))
                .map(|(env, _)| *env),
        )
        .or_else(|| {
            unique(
                self.namespaces
                    .iter()
                    .filter(|(_, t)| t.contains_canonical(raw))
                    .map(|(env, _)| *env),
            )
        })
    }
}

fn unique(mut envs: impl Iterator<Item = Environment>) -> Option<Environment> {
    let first = envs.next()?;
    match envs.next() {
        Some(_) => None,
        None => Some(first),
    }
}
