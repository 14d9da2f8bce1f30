//! Deployment environments.
//!
//! Aliases are reused across environments with different meanings, so every
//! namespace lookup is scoped to the environment a context belongs to.

use std::fmt;

/// A deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Environment {
    Prod,
    Staging,
    Test,
}

impl Environment {
    /// Every environment, in lookup priority order.
    pub const ALL: [Environment; 3] = [Environment::Prod, Environment::Staging, Environment::Test];

    /// Infer the environment from a (canonical) context name.
    ///
    /// Checks `prod`, `stg`, `test` and `dev` substrings in that order; `dev`
    /// clusters share the test alias table.
    pub fn from_context(context: &str) -> Option<Self> {
        if context.contains("prod") {
            Some(Self::Prod)
        } else if context.contains("stg") {
            Some(Self::Staging)
        } else if context.contains("test") || context.contains("dev") {
            Some(Self::Test)
        } else {
            None
        }
    }

    /// Short tag used in context names.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Prod => "prod",
            Self::Staging => "stg",
            Self::Test => "test",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
