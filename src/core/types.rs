//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A kubeconfig context name (e.g., m-tidb-prod-a-ea1-us).
pub type ContextName = String;

/// A Kubernetes namespace name (e.g., tidb-mussel-prod).
pub type NamespaceName = String;

/// A short, operator-typed alias for a context or namespace.
///
/// Stored normalized: lower-case with hyphens removed.
pub type Alias = String;
