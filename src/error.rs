//! Error types for mdcli.
//!
//! Each concern owns a small error enum; [`Error`] composes them so command
//! handlers can use `?` throughout.

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Process(#[from] ProcessError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Cluster(#[from] ClusterError),

    #[error("command canceled by user")]
    Canceled,

    #[error("confirmation required but stdin is not a terminal")]
    ConfirmationUnavailable,

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Exit code the process should terminate with.
    ///
    /// A wrapped tool's own exit code is preserved; everything else maps to 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Process(ProcessError::Failed { code, .. }) => *code,
            _ => 1,
        }
    }

    /// Suggested follow-up shown under the error message.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Error::Resolve(ResolveError::ContextRequired)
            | Error::Resolve(ResolveError::NoContextSelected) => {
                Some("pass --context, or --strict=false to use kubectl's current context")
            }
            Error::Resolve(ResolveError::NamespaceRequired)
            | Error::Resolve(ResolveError::NoNamespaceSelected) => {
                Some("pass --namespace, -A for all namespaces, or --strict=false")
            }
            Error::ConfirmationUnavailable => Some("re-run with --yes to skip the prompt"),
            Error::Process(ProcessError::NotFound { .. }) => Some("install it or add it to PATH"),
            _ => None,
        }
    }
}

/// Context and namespace resolution failures.
///
/// Only raised in strict mode; lenient resolution degrades to empty values.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ResolveError {
    #[error("context must be specified in strict mode")]
    ContextRequired,

    #[error("namespace must be specified in strict mode")]
    NamespaceRequired,

    #[error("no context selected")]
    NoContextSelected,

    #[error("no namespace selected")]
    NoNamespaceSelected,
}

/// Argument building failures.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BuildError {
    #[error("too many arguments provided to k9s: {0}")]
    TooManyArguments(String),

    #[error("{0} is required")]
    MissingArgument(&'static str),
}

/// A placeholder generator could not produce a value.
///
/// Never surfaced to the user: the placeholder is left as typed.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SubstitutionError {
    #[error("context '{context}' does not match {pattern}")]
    NoMatch {
        context: String,
        pattern: &'static str,
    },
}

/// External process failures.
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("{program} not found on PATH")]
    NotFound { program: String },

    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with status {code}")]
    Failed { program: String, code: i32 },

    #[error("{program} was terminated by a signal")]
    Terminated { program: String },
}

/// Configuration file failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Failures interpreting TiDB cluster state returned by kubectl.
#[derive(Error, Debug)]
pub enum ClusterError {
    #[error("no tikv store found for {0}")]
    StoreNotFound(String),

    #[error("unexpected kubectl output: {0}")]
    UnexpectedOutput(String),

    #[error("invalid json from kubectl: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid timestamp '{input}': {reason}")]
    InvalidTimestamp { input: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
