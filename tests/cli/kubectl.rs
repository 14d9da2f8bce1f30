//! Tests for `mdcli k8s kubectl`.

use crate::support::*;

const PROD_A: &str = "m-tidb-prod-a-ea1-us";

#[test]
#[cfg(unix)]
fn test_context_alias_resolves() {
    let t = Test::with_echo_tools();
    let output = t.kubectl(&["-c", "prod", "-n", "web", "get", "pods"]);

    assert_args(
        &output,
        &["--context", PROD_A, "--namespace", "web", "get", "pods"],
    );
}

#[test]
#[cfg(unix)]
fn test_aliases_are_case_and_dash_insensitive() {
    let t = Test::with_echo_tools();
    let output = t.kubectl(&["--ctx", "Prod-1E", "--ns", "web", "get", "pods"]);

    assert_args(
        &output,
        &[
            "--context",
            "m-tidb-prod-c-ea1-us",
            "--namespace",
            "web",
            "get",
            "pods",
        ],
    );
}

#[test]
#[cfg(unix)]
fn test_namespace_alias_scoped_to_context_environment() {
    let t = Test::with_echo_tools();
    let output = t.kubectl(&["-c", "prod", "-n", "merge", "get", "pods"]);

    assert_args(
        &output,
        &[
            "--context",
            PROD_A,
            "--namespace",
            "tidb-mussel-prod",
            "get",
            "pods",
        ],
    );
}

#[test]
#[cfg(unix)]
fn test_unknown_names_pass_through() {
    let t = Test::with_echo_tools();
    let output = t.kubectl(&["-c", "kind-local", "-n", "default", "get", "pods"]);

    assert_args(
        &output,
        &["--context", "kind-local", "--namespace", "default", "get", "pods"],
    );
}

#[test]
#[cfg(unix)]
fn test_debug_prints_without_running() {
    let t = Test::with_echo_tools();
    let output = t.kubectl(&["-d", "-c", "prod", "-n", "web", "get", "pods"]);

    assert_success(&output);
    assert_eq!(stdout(&output), "");
    assert_stderr_contains(
        &output,
        "kubectl --context m-tidb-prod-a-ea1-us --namespace web get pods",
    );
}

#[test]
#[cfg(unix)]
fn test_child_exit_code_propagates() {
    let t = Test::with_echo_tools();
    let output = t
        .cmd()
        .env("FAKE_EXIT", "3")
        .args(["k8s", "kubectl", "-i=false", "-c", "prod", "-n", "web", "get", "pods"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_strict_requires_context() {
    let t = Test::new();
    let output = t.kubectl(&["get", "pods"]);

    assert_failure(&output);
    assert_stderr_contains(&output, "context must be specified in strict mode");
    assert_stderr_contains(&output, "--strict=false");
}

#[test]
fn test_strict_requires_namespace() {
    let t = Test::new();
    let output = t.kubectl(&["-c", "prod", "get", "pods"]);

    assert_failure(&output);
    assert_stderr_contains(&output, "namespace must be specified in strict mode");
}

#[test]
#[cfg(unix)]
fn test_lenient_omits_target_flags() {
    let t = Test::with_echo_tools();
    let output = t.kubectl(&["-s=false", "get", "pods"]);

    assert_args(&output, &["get", "pods"]);
}

#[test]
#[cfg(unix)]
fn test_all_namespaces() {
    let t = Test::with_echo_tools();
    let output = t.kubectl(&["-c", "prod", "-A", "get", "pods"]);

    assert_args(
        &output,
        &["--context", PROD_A, "get", "pods", "--all-namespaces"],
    );
}

#[test]
#[cfg(unix)]
fn test_wildcard_namespace_means_all() {
    let t = Test::with_echo_tools();
    let output = t.kubectl(&["-c", "prod", "-n", "*", "get", "pods"]);

    assert_args(
        &output,
        &["--context", PROD_A, "get", "pods", "--all-namespaces"],
    );
}

#[test]
#[cfg(unix)]
fn test_mutating_command_needs_terminal_to_confirm() {
    let t = Test::with_echo_tools();
    let output = t.kubectl(&["-c", "prod", "-n", "web", "delete", "pod", "web-0"]);

    assert_failure(&output);
    assert_eq!(stdout(&output), "");
    assert_stderr_contains(&output, "kubectl --context m-tidb-prod-a-ea1-us");
    assert_stderr_contains(&output, "stdin is not a terminal");
    assert_stderr_contains(&output, "--yes");
}

#[test]
#[cfg(unix)]
fn test_yes_skips_confirmation() {
    let t = Test::with_echo_tools();
    let output = t.kubectl(&["-y", "-c", "prod", "-n", "web", "delete", "pod", "web-0"]);

    assert_args(
        &output,
        &[
            "--context",
            PROD_A,
            "--namespace",
            "web",
            "delete",
            "pod",
            "web-0",
        ],
    );
}

#[test]
#[cfg(unix)]
fn test_cluster_admin_on_eligible_command() {
    let t = Test::with_echo_tools();
    let output = t.kubectl(&[
        "-y",
        "--cluster-admin",
        "-c",
        "prod",
        "-n",
        "web",
        "delete",
        "pod",
        "web-0",
    ]);

    assert_args(
        &output,
        &[
            "--context",
            PROD_A,
            "--namespace",
            "web",
            "delete",
            "pod",
            "web-0",
            "--as=compute:cluster-admin",
        ],
    );
}

#[test]
#[cfg(unix)]
fn test_cluster_admin_ignored_for_reads() {
    let t = Test::with_echo_tools();
    let output = t.kubectl(&["--cluster-admin", "-c", "prod", "-n", "web", "get", "pods"]);

    assert_success(&output);
    assert_stdout_excludes(&output, "--as=");
}

#[test]
#[cfg(unix)]
fn test_bare_exec_opens_shell() {
    let t = Test::with_echo_tools();
    let output = t.kubectl(&["-c", "prod", "-n", "web", "exec", "web-0"]);

    assert_args(
        &output,
        &[
            "--context",
            PROD_A,
            "--namespace",
            "web",
            "exec",
            "web-0",
            "-it",
            "--",
            "bash",
        ],
    );
}

#[test]
#[cfg(unix)]
fn test_exec_with_command_keeps_tail() {
    let t = Test::with_echo_tools();
    let output = t.kubectl(&["-c", "prod", "-n", "web", "exec", "web-0", "--", "ls", "-l"]);

    assert_args(
        &output,
        &[
            "--context",
            PROD_A,
            "--namespace",
            "web",
            "exec",
            "web-0",
            "--",
            "ls",
            "-l",
        ],
    );
}

#[test]
#[cfg(unix)]
fn test_logs_qualifies_resource() {
    let t = Test::with_echo_tools();
    let output = t.kubectl(&["-c", "prod", "-n", "web", "logs", "deploy", "api", "-f"]);

    assert_args(
        &output,
        &[
            "--context",
            PROD_A,
            "--namespace",
            "web",
            "logs",
            "deploy/api",
            "-f",
        ],
    );
}

#[test]
#[cfg(unix)]
fn test_placeholders_substituted() {
    let t = Test::with_echo_tools();
    let output = t.kubectl(&["-c", "prod", "-n", "web", "get", "pods", "-l", "app=%ns", "%ctx"]);

    assert_args(
        &output,
        &[
            "--context",
            PROD_A,
            "--namespace",
            "web",
            "get",
            "pods",
            "-l",
            "app=web",
            PROD_A,
        ],
    );
}

#[test]
#[cfg(unix)]
fn test_flags_after_first_argument_reach_kubectl() {
    let t = Test::with_echo_tools();
    let output = t.kubectl(&["-c", "prod", "-n", "web", "get", "pods", "-o", "wide", "-d"]);

    assert_args(
        &output,
        &[
            "--context",
            PROD_A,
            "--namespace",
            "web",
            "get",
            "pods",
            "-o",
            "wide",
            "-d",
        ],
    );
}

#[test]
#[cfg(unix)]
fn test_kc_alias() {
    let t = Test::with_echo_tools();
    let output = t.run(&["k8s", "kc", "-s=false", "-i=false", "version"]);

    assert_args(&output, &["version"]);
}

#[test]
fn test_target_bool_flags_are_not_forwarded() {
    let t = Test::new();
    let output = t.run(&[
        "k8s", "kubectl", "-d", "-i=false", "-c", "prod", "-n", "web", "get", "pods", "-o",
        "wide",
    ]);

    assert_success(&output);
    let err = stderr(&output);
    assert!(
        err.contains("kubectl --context m-tidb-prod-a-ea1-us --namespace web get pods -o wide"),
        "got: {}",
        err
    );
    assert!(!err.contains("-i=false"), "got: {}", err);
}
