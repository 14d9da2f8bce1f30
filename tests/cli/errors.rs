//! Error reporting and the commands that need no cluster.

use crate::support::*;

#[test]
fn test_missing_kubectl() {
    let t = Test::new();
    let output = t
        .cmd()
        .env("PATH", t.bin.path())
        .args(["k8s", "kubectl", "-i=false", "-c", "prod", "-n", "web", "get", "pods"])
        .output()
        .unwrap();

    assert_failure(&output);
    assert_eq!(output.status.code(), Some(1));
    assert_stderr_contains(&output, "kubectl not found on PATH");
    assert_stderr_contains(&output, "install it or add it to PATH");
}

#[test]
#[cfg(unix)]
fn test_malformed_config_falls_back_to_defaults() {
    let t = Test::with_echo_tools();
    t.write_config("enable_cluster_admin_for_test = \"maybe\"\n");
    let output = t.tidb_kubectl(&["-y", "-n", "func", "delete", "pod", "x"]);

    assert_success(&output);
    assert_stderr_contains(&output, "WARN");
    assert_stdout_contains(&output, "--as=compute:cluster-admin");
}

#[test]
#[cfg(unix)]
fn test_empty_role_falls_back_to_default() {
    let t = Test::with_echo_tools();
    t.write_config("elevated_role = \"\"\n");
    let output = t.tidb_kubectl(&["-y", "-n", "func", "delete", "pod", "x"]);

    assert_success(&output);
    assert_stderr_contains(&output, "elevated_role");
    assert_stdout_contains(&output, "--as=compute:cluster-admin");
}

#[test]
fn test_unknown_subcommand() {
    let t = Test::new();
    let output = t.run(&["tidb", "nope"]);

    assert_failure(&output);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_completions() {
    let t = Test::new();
    let output = t.run(&["completions", "zsh"]);

    assert_success(&output);
    assert_stdout_contains(&output, "#compdef mdcli");
}

#[test]
fn test_help_lists_command_families() {
    let t = Test::new();
    let output = t.run(&["--help"]);

    assert_success(&output);
    assert_stdout_contains(&output, "kubernetes");
    assert_stdout_contains(&output, "tidb");
    assert_stdout_contains(&output, "completions");
}
