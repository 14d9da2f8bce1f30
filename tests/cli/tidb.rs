//! Tests for the TiDB commands.

use crate::support::*;

const PROD_A: &str = "m-tidb-prod-a-ea1-us";
const TEST_A: &str = "m-tidb-test-a-ea1-us";

#[test]
#[cfg(unix)]
fn test_context_inferred_from_namespace() {
    let t = Test::with_echo_tools();
    let output = t.tidb_kubectl(&["-n", "mldr", "get", "pods"]);

    assert_args(
        &output,
        &[
            "--context",
            PROD_A,
            "--namespace",
            "tidb-mussel-prod-ml-dr",
            "get",
            "pods",
        ],
    );
}

#[test]
#[cfg(unix)]
fn test_short_context_alias_within_environment() {
    let t = Test::with_echo_tools();
    let output = t.tidb_kubectl(&["-c", "e", "-n", "mldr", "get", "pods"]);

    assert_args(
        &output,
        &[
            "--context",
            "m-tidb-prod-c-ea1-us",
            "--namespace",
            "tidb-mussel-prod-ml-dr",
            "get",
            "pods",
        ],
    );
}

#[test]
#[cfg(unix)]
fn test_tidb_placeholders() {
    let t = Test::with_echo_tools();
    let output = t.tidb_kubectl(&[
        "-c",
        "prode",
        "-n",
        "merge",
        "get",
        "sts",
        "%tc-tikv",
        "-l",
        "zone=%az,app=%app",
    ]);

    assert_args(
        &output,
        &[
            "--context",
            "m-tidb-prod-c-ea1-us",
            "--namespace",
            "tidb-mussel-prod",
            "get",
            "sts",
            "mussel-prod-tikv",
            "-l",
            "zone=us-east-1e,app=mussel",
        ],
    );
}

#[test]
#[cfg(unix)]
fn test_test_clusters_run_elevated() {
    let t = Test::with_echo_tools();
    let output = t.tidb_kubectl(&["-y", "-n", "func", "delete", "pod", "x"]);

    assert_args(
        &output,
        &[
            "--context",
            TEST_A,
            "--namespace",
            "tidb-func-test",
            "delete",
            "pod",
            "x",
            "--as=compute:cluster-admin",
        ],
    );
}

#[test]
#[cfg(unix)]
fn test_test_elevation_can_be_disabled() {
    let t = Test::with_echo_tools();
    t.write_config("enable_cluster_admin_for_test = false\n");
    let output = t.tidb_kubectl(&["-y", "-n", "func", "delete", "pod", "x"]);

    assert_success(&output);
    assert_stdout_excludes(&output, "--as=");
}

#[test]
#[cfg(unix)]
fn test_config_flag_and_custom_role() {
    let t = Test::with_echo_tools();
    let path = t.home.path().join("custom.toml");
    std::fs::write(&path, "elevated_role = \"ops:admin\"\n").unwrap();

    let output = t
        .cmd()
        .arg("--config")
        .arg(&path)
        .args(["tidb", "kubectl", "-i=false", "-y", "-n", "func", "delete", "pod", "x"])
        .output()
        .unwrap();

    assert_success(&output);
    assert_stdout_contains(&output, "--as=ops:admin");
}

#[test]
#[cfg(unix)]
fn test_generic_kubectl_never_elevates_test_clusters() {
    let t = Test::with_echo_tools();
    let output = t.kubectl(&["-y", "-c", "test", "-n", "tidb-func-test", "delete", "pod", "x"]);

    assert_success(&output);
    assert_stdout_excludes(&output, "--as=");
}

#[test]
#[cfg(unix)]
fn test_pdctl_debug() {
    let t = Test::with_echo_tools();
    let output = t.run(&["tidb", "pdctl", "-i=false", "-d", "-n", "mldr", "-p", "2"]);

    assert_success(&output);
    assert_eq!(stdout(&output), "");
    assert_stderr_contains(&output, "exec -it mussel-prod-ml-dr-pd-2 -c pd -- bin/sh -c");
    assert_stderr_contains(&output, "https://127.0.0.1:2379");
}

#[test]
#[cfg(unix)]
fn test_pdctl_without_tls() {
    let t = Test::with_echo_tools();
    let output = t.run(&["tidb", "tpdctl", "-i=false", "--tls", "-n", "mldr"]);

    assert_args(
        &output,
        &[
            "--context",
            PROD_A,
            "--namespace",
            "tidb-mussel-prod-ml-dr",
            "exec",
            "-it",
            "mussel-prod-ml-dr-pd-0",
            "-c",
            "pd",
            "--",
            "bin/sh",
            "-c",
            "./pd-ctl -u http://127.0.0.1:2379 -i",
        ],
    );
}

#[test]
#[cfg(unix)]
fn test_dmctl_worker_passes_arguments() {
    let t = Test::with_echo_tools();
    let output = t.run(&[
        "tidb", "dmctl", "-i=false", "--tls", "-w", "-n", "mldr", "query-status", "task-1",
    ]);

    assert_success(&output);
    let args = echoed_args(&output);
    assert!(args.contains(&"mussel-prod-ml-dr-dm-worker-0".to_string()));
    assert_eq!(
        args.last().map(String::as_str),
        Some("./dmctl --master-addr http://mussel-prod-ml-dr-dm-master:8261 query-status task-1")
    );
}

#[test]
#[cfg(unix)]
fn test_cdc_passes_arguments() {
    let t = Test::with_echo_tools();
    let output = t.run(&[
        "tidb", "cdc", "-i=false", "-n", "mldr", "changefeed", "list",
    ]);

    assert_success(&output);
    let args = echoed_args(&output);
    assert!(args.contains(&"mussel-prod-ml-dr-ticdc-0".to_string()));
    let script = args.last().unwrap();
    assert!(script.starts_with("./cdc cli --pd https://mussel-prod-ml-dr-pd:2379"));
    assert!(script.ends_with("changefeed list"));
}

#[test]
fn test_pod_tools_need_a_namespace() {
    let t = Test::new();
    let output = t.run(&["tidb", "pdctl", "-i=false", "-s=false", "-c", "prod"]);

    assert_failure(&output);
    assert_stderr_contains(&output, "namespace is required");
}

#[test]
#[cfg(unix)]
fn test_secret() {
    let t = Test::with_cluster_kubectl();
    let output = t.run(&["tidb", "secret", "-i=false", "-n", "mldr"]);

    assert_success(&output);
    assert_eq!(stdout(&output), "hunter2");
}

#[test]
#[cfg(unix)]
fn test_secret_debug_prints_without_running() {
    let t = Test::new();
    t.tool("kubectl", RECORDING_TOOL);
    let output = t.run(&["tidb", "pass", "-i=false", "-d", "-n", "mldr"]);

    assert_success(&output);
    assert_stderr_contains(
        &output,
        "kubectl --context m-tidb-prod-a-ea1-us --namespace tidb-mussel-prod-ml-dr get secret tidb-secret",
    );
    assert_eq!(stdout(&output), "");
    assert!(!t.tool_ran(), "kubectl ran in debug mode");
}

#[test]
#[cfg(unix)]
fn test_tikv_debug_prints_first_query_only() {
    let t = Test::new();
    t.tool("kubectl", RECORDING_TOOL);

    for sub in ["get", "store"] {
        let output = t.run(&[
            "tidb", "tikv", sub, "-i=false", "-d", "-c", "prod", "-n", "merge", "1",
        ]);
        assert_success(&output);
        assert_eq!(stdout(&output), "");
        assert_stderr_contains(
            &output,
            "kubectl --context m-tidb-prod-a-ea1-us --namespace tidb-mussel-prod get tc mussel-prod",
        );
    }
    assert!(!t.tool_ran(), "kubectl ran in debug mode");
}

#[test]
#[cfg(unix)]
fn test_tikv_store() {
    let t = Test::with_cluster_kubectl();

    for name in ["1", "tikv-1", "mussel-prod-tikv-1"] {
        let output = t.run(&[
            "tidb", "tikv", "store", "-i=false", "-c", "prod", "-n", "merge", name,
        ]);
        assert_success(&output);
        assert_eq!(stdout(&output).trim(), "4", "name {}", name);
    }
}

#[test]
#[cfg(unix)]
fn test_tikv_get() {
    let t = Test::with_cluster_kubectl();
    let output = t.run(&["tidb", "tikv", "get", "-i=false", "-c", "prod", "-n", "merge", "tikv-1"]);

    assert_success(&output);
    let info: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(
        info,
        serde_json::json!({
            "name": "mussel-prod-tikv-1",
            "storeId": 4,
            "dataVol": "vol-data",
            "walVol": "vol-wal",
            "raftVol": "vol-raft",
            "instanceId": "i-0abc",
        })
    );
}

#[test]
#[cfg(unix)]
fn test_tikv_store_unknown_pod() {
    let t = Test::with_cluster_kubectl();
    let output = t.run(&["tidb", "kv", "store", "-i=false", "-n", "merge", "-c", "prod", "9"]);

    assert_failure(&output);
    assert_stderr_contains(&output, "mussel-prod-tikv-9");
}

#[test]
#[cfg(unix)]
fn test_tikv_delete_annotates_pod() {
    let t = Test::with_echo_tools();
    let output = t.run(&[
        "tidb", "tikv", "delete", "-i=false", "-y", "-c", "prod", "-n", "merge", "2",
    ]);

    assert_args(
        &output,
        &[
            "--context",
            PROD_A,
            "--namespace",
            "tidb-mussel-prod",
            "annotate",
            "pod",
            "mussel-prod-tikv-2",
            "tidb.pingcap.com/evict-leader=delete-pod",
        ],
    );
}

#[test]
#[cfg(unix)]
fn test_tikv_delete_requires_confirmation() {
    let t = Test::with_echo_tools();
    let output = t.run(&["tidb", "tikv", "delete", "-i=false", "-n", "mldr", "2"]);

    assert_failure(&output);
    assert_eq!(stdout(&output), "");
    assert_stderr_contains(&output, "stdin is not a terminal");
}
