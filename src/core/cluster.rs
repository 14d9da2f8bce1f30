//! TiDB cluster conventions.
//!
//! Pod, container and volume naming used by the TiDB operator, the in-pod
//! tool invocations for dmctl, pd-ctl and cdc, PD timestamp conversion, and
//! parsing of the kubectl output the `tikv` commands read.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, SecondsFormat};
use serde::{Deserialize, Serialize};

use crate::core::{constants, process};
use crate::error::ClusterError;

/// Bits of a TSO holding the logical counter.
const TSO_LOGICAL_BITS: u32 = 18;

/// Cluster name for a TiDB namespace (`tidb-<cluster>`).
pub fn cluster_name(namespace: &str) -> &str {
    namespace
        .strip_prefix(constants::TIDB_NAMESPACE_PREFIX)
        .unwrap_or(namespace)
}

/// TiKV store ordinal from `<cluster>-tikv-N`, `tikv-N` or `N`.
pub fn tikv_ordinal<'a>(cluster: &str, raw: &'a str) -> &'a str {
    let raw = raw
        .strip_prefix(cluster)
        .and_then(|rest| rest.strip_prefix('-'))
        .unwrap_or(raw);
    raw.strip_prefix("tikv-").unwrap_or(raw)
}

/// Full TiKV pod name.
pub fn tikv_pod(cluster: &str, ordinal: &str) -> String {
    format!("{}-tikv-{}", cluster, ordinal)
}

/// Claims backing a TiKV store: data, WAL and raft, in that order.
pub fn tikv_claims(cluster: &str, ordinal: &str) -> [String; 3] {
    [
        format!("tikv-{}-tikv-{}", cluster, ordinal),
        format!("tikv-wal-{}-tikv-{}", cluster, ordinal),
        format!("tikv-raft-{}-tikv-{}", cluster, ordinal),
    ]
}

/// Strip whitespace and the quotes some jsonpath templates leave around the
/// value.
pub fn trim_output(output: &str) -> &str {
    output.trim().trim_matches('\'')
}

#[derive(Debug, Deserialize)]
struct Store {
    id: String,
    #[serde(default)]
    ip: String,
}

/// Store id of `pod` from a TidbCluster's `.status.tikv.stores`.
///
/// A store belongs to the pod when its address is the pod name or a DNS name
/// under it.
///
/// # Errors
///
/// `Json` for malformed output, `StoreNotFound` when no store matches and
/// `UnexpectedOutput` for a non-numeric id.
pub fn parse_store_id(stores_json: &str, pod: &str) -> Result<u64, ClusterError> {
    let stores: BTreeMap<String, Store> = serde_json::from_str(trim_output(stores_json))?;

    let store = stores
        .values()
        .find(|s| {
            s.ip == pod
                || s.ip
                    .strip_prefix(pod)
                    .map_or(false, |rest| rest.starts_with('.') || rest.starts_with(':'))
        })
        .ok_or_else(|| ClusterError::StoreNotFound(pod.to_string()))?;

    store
        .id
        .parse()
        .map_err(|_| ClusterError::UnexpectedOutput(format!("store id '{}'", store.id)))
}

#[derive(Debug, Deserialize)]
struct List<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct Metadata {
    name: String,
}

#[derive(Debug, Deserialize)]
struct Claim {
    metadata: Metadata,
    spec: ClaimSpec,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClaimSpec {
    #[serde(default)]
    volume_name: String,
}

#[derive(Debug, Deserialize)]
struct Volume {
    metadata: Metadata,
    spec: VolumeSpec,
}

#[derive(Debug, Deserialize)]
struct VolumeSpec {
    csi: Option<Csi>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Csi {
    volume_handle: String,
}

/// Claim name to bound volume name, from `kubectl get pvc ... -o json`.
pub fn parse_claim_volumes(list_json: &str) -> Result<HashMap<String, String>, ClusterError> {
    let list: List<Claim> = serde_json::from_str(list_json)?;
    Ok(list
        .items
        .into_iter()
        .filter(|c| !c.spec.volume_name.is_empty())
        .map(|c| (c.metadata.name, c.spec.volume_name))
        .collect())
}

/// Volume name to CSI volume handle, from `kubectl get pv ... -o json`.
pub fn parse_volume_handles(list_json: &str) -> Result<HashMap<String, String>, ClusterError> {
    let list: List<Volume> = serde_json::from_str(list_json)?;
    Ok(list
        .items
        .into_iter()
        .filter_map(|v| v.spec.csi.map(|csi| (v.metadata.name, csi.volume_handle)))
        .collect())
}

/// What `tikv get` reports about one store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TikvInfo {
    pub name: String,
    pub store_id: u64,
    pub data_vol: String,
    pub wal_vol: String,
    pub raft_vol: String,
    pub instance_id: String,
}

/// A shell command to run inside one container of a pod.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodExec {
    pub pod: String,
    pub container: String,
    pub script: String,
}

impl PodExec {
    /// `exec -it <pod> -c <container> -- bin/sh -c <script>`.
    pub fn kubectl_args(&self) -> Vec<String> {
        vec![
            "exec".to_string(),
            "-it".to_string(),
            self.pod.clone(),
            "-c".to_string(),
            self.container.clone(),
            "--".to_string(),
            "bin/sh".to_string(),
            "-c".to_string(),
            self.script.clone(),
        ]
    }
}

/// The DM component dmctl is started in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DmComponent {
    Master,
    Worker,
}

impl DmComponent {
    fn name(self) -> &'static str {
        match self {
            Self::Master => "dm-master",
            Self::Worker => "dm-worker",
        }
    }
}

/// dmctl against the cluster's DM master, from a master or worker pod.
pub fn dmctl(cluster: &str, component: DmComponent, pod: u32, tls: bool, args: &[String]) -> PodExec {
    let container = component.name();
    let mut script = if tls {
        let certs = format!("/var/lib/{}-tls", container);
        format!(
            "./dmctl --master-addr https://{}-dm-master:8261 --ssl-cert {certs}/tls.crt --ssl-key {certs}/tls.key --ssl-ca {certs}/ca.crt",
            cluster,
            certs = certs
        )
    } else {
        format!("./dmctl --master-addr http://{}-dm-master:8261", cluster)
    };
    append_args(&mut script, args);

    PodExec {
        pod: format!("{}-{}-{}", cluster, container, pod),
        container: container.to_string(),
        script,
    }
}

/// Interactive pd-ctl in a PD pod.
pub fn pdctl(cluster: &str, pod: u32, tls: bool) -> PodExec {
    let script = if tls {
        format!(
            "./pd-ctl -u https://127.0.0.1:2379 --cert {certs}/tls.crt --key {certs}/tls.key --cacert {certs}/ca.crt -i",
            certs = constants::CLUSTER_CLIENT_TLS
        )
    } else {
        "./pd-ctl -u http://127.0.0.1:2379 -i".to_string()
    };

    PodExec {
        pod: format!("{}-pd-{}", cluster, pod),
        container: "pd".to_string(),
        script,
    }
}

/// `cdc cli` in a TiCDC pod, pointed at the cluster's PD.
pub fn cdc(cluster: &str, pod: u32, tls: bool, args: &[String]) -> PodExec {
    let mut script = if tls {
        format!(
            "./cdc cli --pd https://{}-pd:2379 --cert {certs}/tls.crt --key {certs}/tls.key --ca {certs}/ca.crt",
            cluster,
            certs = constants::CLUSTER_CLIENT_TLS
        )
    } else {
        format!("./cdc cli --pd http://{}-pd:2379", cluster)
    };
    append_args(&mut script, args);

    PodExec {
        pod: format!("{}-ticdc-{}", cluster, pod),
        container: "ticdc".to_string(),
        script,
    }
}

fn append_args(script: &mut String, args: &[String]) {
    for arg in args {
        script.push(' ');
        script.push_str(arg);
    }
}

/// Shell pipeline printing the root password of the cluster in `namespace`.
pub fn secret_script(context: &str, namespace: &str) -> String {
    let mut script = constants::KUBECTL.to_string();
    if !context.is_empty() {
        script.push_str(&format!(" --context {}", process::quote(context)));
    }
    if !namespace.is_empty() {
        script.push_str(&format!(" --namespace {}", process::quote(namespace)));
    }
    script.push_str(" get secret tidb-secret -o jsonpath={.data.root} | base64 -d");
    script
}

/// RFC 3339 UTC time of the physical part of a PD timestamp.
pub fn tso_to_timestamp(tso: u64) -> Result<String, ClusterError> {
    let millis = tso >> TSO_LOGICAL_BITS;
    let secs = i64::try_from(millis / 1000).map_err(|_| ClusterError::InvalidTimestamp {
        input: tso.to_string(),
        reason: "out of range".to_string(),
    })?;

    DateTime::from_timestamp(secs, 0)
        .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
        .ok_or_else(|| ClusterError::InvalidTimestamp {
            input: tso.to_string(),
            reason: "out of range".to_string(),
        })
}

/// PD timestamp (logical counter zero) for an RFC 3339 time, at second
/// precision.
pub fn timestamp_to_tso(timestamp: &str) -> Result<u64, ClusterError> {
    let invalid = |reason: String| ClusterError::InvalidTimestamp {
        input: timestamp.to_string(),
        reason,
    };

    let parsed = DateTime::parse_from_rfc3339(timestamp).map_err(|e| invalid(e.to_string()))?;
    let secs = u64::try_from(parsed.timestamp())
        .map_err(|_| invalid("before the unix epoch".to_string()))?;

    secs.checked_mul(1000)
        .filter(|millis| *millis <= u64::MAX >> TSO_LOGICAL_BITS)
        .map(|millis| millis << TSO_LOGICAL_BITS)
        .ok_or_else(|| invalid("out of range".to_string()))
}
