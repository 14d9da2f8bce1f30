//! mdcli - a personal CLI that shortens kubectl, k9s and TiDB tooling.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── args          # Shared target/kubectl flags
//! │   ├── dispatch      # Print, confirm or execute a built command
//! │   ├── k8s           # Generic kubectl/k9s wrappers
//! │   ├── tidb          # TiDB kubectl/k9s/secret/dmctl/pdctl/cdc
//! │   ├── tikv          # TiKV store helpers
//! │   ├── pd            # PD TSO conversion
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── aliases/      # Context and namespace alias tables
//!     ├── env           # prod/stg/test environments
//!     ├── resolve       # Context/namespace resolution
//!     ├── select        # fzf-backed interactive selection
//!     ├── substitute    # %placeholder expansion
//!     ├── command       # kubectl sub-command classification
//!     ├── builder       # kubectl/k9s argument building
//!     ├── cluster       # TiDB naming and tool command lines
//!     ├── process       # Child process helpers
//!     └── config        # ~/.config/mdcli/config.toml
//! ```
//!
//! Data flows one way: flags → [`core::resolve::Resolver`] →
//! [`core::builder::KubeBuilder`] → [`cli::dispatch`].

pub mod cli;
pub mod core;
pub mod error;
