//! Test support utilities for mdcli integration tests.
//!
//! Every test gets an isolated HOME and a private bin directory that is the
//! first entry on the child's PATH, so fake `kubectl`/`k9s` scripts stand in
//! for the real tools.

#![allow(dead_code)]

pub mod assertions;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with isolated temp directories.
pub struct Test {
    /// Temporary home directory
    pub home: TempDir,
    /// Directory holding fake tools, prepended to PATH
    pub bin: TempDir,
}

impl Test {
    /// Create an environment with no tools installed.
    pub fn new() -> Self {
        let home = TempDir::new().expect("failed to create temp home");
        let bin = TempDir::new().expect("failed to create temp bin");
        Self { home, bin }
    }

    /// Create an environment whose `kubectl` and `k9s` print their
    /// arguments one per line.
    #[cfg(unix)]
    pub fn with_echo_tools() -> Self {
        let t = Self::new();
        t.tool("kubectl", ECHO_TOOL);
        t.tool("k9s", ECHO_TOOL);
        t
    }

    /// Path of the user config file inside the temp home.
    pub fn config_path(&self) -> PathBuf {
        self.home.path().join(".config/mdcli/config.toml")
    }

    /// Write the user config file.
    pub fn write_config(&self, contents: &str) {
        let path = self.config_path();
        std::fs::create_dir_all(path.parent().expect("config path has a parent"))
            .expect("failed to create config dir");
        std::fs::write(path, contents).expect("failed to write config");
    }
}
