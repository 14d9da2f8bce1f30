//! Constants used throughout mdcli.
//!
//! Centralizes tool names, flag spellings and cluster conventions.

/// Declarative resource manager binary.
pub const KUBECTL: &str = "kubectl";

/// Terminal resource browser binary.
pub const K9S: &str = "k9s";

/// Interactive fuzzy selector binary.
pub const FZF: &str = "fzf";

/// Environment variable fzf reads its candidate-list command from.
pub const FZF_DEFAULT_COMMAND: &str = "FZF_DEFAULT_COMMAND";

/// Config file location relative to HOME.
pub const CONFIG_FILE: &str = ".config/mdcli/config.toml";

/// Identity passed to `--as=` when an elevated role is requested.
pub const DEFAULT_ELEVATED_ROLE: &str = "compute:cluster-admin";

/// Resource kind k9s opens when none is given.
pub const DEFAULT_K9S_RESOURCE: &str = "pods";

/// Arguments appended to a bare `exec <pod>`.
pub const INTERACTIVE_SHELL: &[&str] = &["-it", "--", "bash"];

/// Selector filter for TiDB contexts.
pub const TIDB_CONTEXT_PATTERN: &str = "^m-tidb-";

/// Selector filter for TiDB namespaces.
pub const TIDB_NAMESPACE_PATTERN: &str = "^tidb-";

/// Prefix every TiDB namespace carries in front of the cluster name.
pub const TIDB_NAMESPACE_PREFIX: &str = "tidb-";

/// Region prefix availability zones are built from.
pub const REGION: &str = "us-east-1";

/// Mount point of the cluster client certificates inside PD/TiCDC pods.
pub const CLUSTER_CLIENT_TLS: &str = "/var/lib/cluster-client-tls";

/// Annotation asking the operator to evict leaders and delete a TiKV pod.
pub const EVICT_LEADER_ANNOTATION: &str = "tidb.pingcap.com/evict-leader=delete-pod";
