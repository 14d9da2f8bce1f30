//! `%placeholder` expansion inside raw argument lists.
//!
//! Each [`Substitution`] pairs a set of alias tokens with a [`Generate`]
//! implementation. Substitutions run in registration order, so the first one
//! claiming a token wins; callers add their own with
//! [`SubstitutionSet::with_extensions`], which appends after the built-ins.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::core::constants;
use crate::error::SubstitutionError;

/// Produces the replacement text for a placeholder.
pub trait Generate: Send + Sync {
    fn generate(&self, context: &str, namespace: &str) -> Result<String, SubstitutionError>;
}

impl<F> Generate for F
where
    F: Fn(&str, &str) -> Result<String, SubstitutionError> + Send + Sync,
{
    fn generate(&self, context: &str, namespace: &str) -> Result<String, SubstitutionError> {
        self(context, namespace)
    }
}

/// Alias tokens plus the generator that expands them.
pub struct Substitution {
    aliases: Vec<String>,
    generator: Box<dyn Generate>,
}

impl Substitution {
    pub fn new(aliases: &[&str], generator: impl Generate + 'static) -> Self {
        Self {
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            generator: Box::new(generator),
        }
    }
}

impl fmt::Debug for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Substitution")
            .field("aliases", &self.aliases)
            .finish_non_exhaustive()
    }
}

/// An ordered list of substitutions.
#[derive(Debug)]
pub struct SubstitutionSet {
    substitutions: Vec<Substitution>,
}

impl SubstitutionSet {
    /// `%ctx`/`%c` and `%ns`/`%n`.
    pub fn builtin() -> Self {
        Self {
            substitutions: vec![
                Substitution::new(&["ctx", "c"], context),
                Substitution::new(&["ns", "n"], namespace),
            ],
        }
    }

    /// Built-ins followed by `extensions`, in order.
    pub fn with_extensions(extensions: impl IntoIterator<Item = Substitution>) -> Self {
        let mut set = Self::builtin();
        set.substitutions.extend(extensions);
        set
    }

    /// Built-ins plus the TiDB placeholders `%tc`/`%t`, `%az`/`%z` and
    /// `%app`/`%ap`.
    pub fn tidb() -> Self {
        Self::with_extensions([
            Substitution::new(&["tc", "t"], tidb_cluster),
            Substitution::new(&["az", "z"], availability_zone),
            Substitution::new(&["app", "ap"], app_name),
        ])
    }

    /// Expand placeholders in every argument.
    ///
    /// The result always has the same length as `args`. A generator that
    /// fails leaves its placeholders as typed.
    pub fn substitute(&self, args: &[String], context: &str, namespace: &str) -> Vec<String> {
        args.iter()
            .map(|arg| self.substitute_one(arg, context, namespace))
            .collect()
    }

    fn substitute_one(&self, arg: &str, context: &str, namespace: &str) -> String {
        let mut out = arg.to_string();
        for sub in &self.substitutions {
            if !out.contains('%') {
                break;
            }
            let value = match sub.generator.generate(context, namespace) {
                Ok(v) => v,
                Err(e) => {
                    debug!(aliases = ?sub.aliases, error = %e, "placeholder left unexpanded");
                    continue;
                }
            };
            for alias in &sub.aliases {
                out = out.replace(&format!("%{}", alias), &value);
            }
        }
        out
    }
}

impl Default for SubstitutionSet {
    fn default() -> Self {
        Self::builtin()
    }
}

fn context(context: &str, _namespace: &str) -> Result<String, SubstitutionError> {
    Ok(context.to_string())
}

fn namespace(_context: &str, namespace: &str) -> Result<String, SubstitutionError> {
    Ok(namespace.to_string())
}

/// Cluster name: the namespace without its `tidb-` prefix.
fn tidb_cluster(_context: &str, namespace: &str) -> Result<String, SubstitutionError> {
    Ok(strip_tidb_prefix(namespace).to_string())
}

const ZONE_PATTERN: &str = r"m-tidb-[a-z]+-([a-z])-ea1-us";

fn zone_regex() -> &'static Regex {
    static ZONE_RE: OnceLock<Regex> = OnceLock::new();
    ZONE_RE.get_or_init(|| Regex::new(ZONE_PATTERN).expect("zone pattern is a valid regex"))
}

/// Availability zone from a context shaped like `m-tidb-<env>-<zone>-ea1-us`.
///
/// Zone `c` clusters live in `us-east-1e`.
fn availability_zone(context: &str, _namespace: &str) -> Result<String, SubstitutionError> {
    let zone = zone_regex()
        .captures(context)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| SubstitutionError::NoMatch {
            context: context.to_string(),
            pattern: ZONE_PATTERN,
        })?;

    let zone = if zone == "c" { "e" } else { zone };
    Ok(format!("{}{}", constants::REGION, zone))
}

/// Application name: cluster name without its environment suffix.
fn app_name(_context: &str, namespace: &str) -> Result<String, SubstitutionError> {
    let mut name = strip_tidb_prefix(namespace);
    for suffix in ["-test", "-stg", "-prod"] {
        name = name.strip_suffix(suffix).unwrap_or(name);
    }
    Ok(name.to_string())
}

fn strip_tidb_prefix(namespace: &str) -> &str {
    namespace
        .strip_prefix(constants::TIDB_NAMESPACE_PREFIX)
        .unwrap_or(namespace)
}
