//! TiKV store helpers.

use clap::{Args, Subcommand};
use tracing::debug;

use crate::cli::args::{KubectlArgs, Session, TargetArgs};
use crate::cli::dispatch::{self, Mode};
use crate::cli::output;
use crate::cli::tidb::resolve_cluster;
use crate::core::builder::KubeBuilder;
use crate::core::cluster::{self, TikvInfo};
use crate::core::constants;
use crate::core::resolve::{ResolvedTarget, Scope};
use crate::error::{ClusterError, Result};

#[derive(Subcommand, Debug)]
pub enum TikvCommand {
    /// Print store id, volume handles and instance id of a TiKV pod as JSON
    Get(TikvArgs),

    /// Print the store id of a TiKV pod
    Store(TikvArgs),

    /// Evict leaders from a TiKV pod and let the operator delete it
    Delete {
        #[command(flatten)]
        tikv: TikvArgs,
        #[command(flatten)]
        kubectl: KubectlArgs,
    },
}

#[derive(Args, Debug)]
pub struct TikvArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// TiKV pod: `N`, `tikv-N` or `<cluster>-tikv-N`
    pub name: String,
}

pub fn execute(session: &Session, command: TikvCommand) -> Result<()> {
    match command {
        TikvCommand::Get(args) => get(session, &args),
        TikvCommand::Store(args) => store(session, &args),
        TikvCommand::Delete { tikv, kubectl } => delete(session, &tikv, &kubectl),
    }
}

/// Read-only kubectl queries against one resolved target.
struct Queries<'a> {
    target: &'a ResolvedTarget,
    builder: KubeBuilder,
    mode: Mode,
}

impl Queries<'_> {
    /// `None` in debug mode, where the query is only printed.
    fn run(&self, args: &[&str]) -> Result<Option<String>> {
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        let built = self.builder.build_kubectl_args(self.target, false, &args);
        dispatch::query(self.target, &built.args, self.mode)
    }

    fn store_id(&self, cluster: &str, pod: &str) -> Result<Option<u64>> {
        let Some(stores) =
            self.run(&["get", "tc", cluster, "-o", "jsonpath={.status.tikv.stores}"])?
        else {
            return Ok(None);
        };
        Ok(Some(cluster::parse_store_id(&stores, pod)?))
    }
}

fn queries<'a>(session: &Session, target: &'a ResolvedTarget, debug: bool) -> Queries<'a> {
    Queries {
        target,
        builder: session.builder(Scope::TIDB),
        mode: Mode { debug, yes: false },
    }
}

fn store(session: &Session, args: &TikvArgs) -> Result<()> {
    let (resolved, cluster) = resolve_cluster(session, &args.target)?;
    let pod = cluster::tikv_pod(&cluster, cluster::tikv_ordinal(&cluster, &args.name));

    let q = queries(session, &resolved, args.target.debug);
    if let Some(store_id) = q.store_id(&cluster, &pod)? {
        output::result(store_id);
    }
    Ok(())
}

fn get(session: &Session, args: &TikvArgs) -> Result<()> {
    let (resolved, cluster) = resolve_cluster(session, &args.target)?;
    let ordinal = cluster::tikv_ordinal(&cluster, &args.name);
    let pod = cluster::tikv_pod(&cluster, ordinal);
    let q = queries(session, &resolved, args.target.debug);

    // Later lookups depend on earlier answers, so debug mode stops after
    // printing the first query.
    let Some(store_id) = q.store_id(&cluster, &pod)? else {
        return Ok(());
    };

    let [data, wal, raft] = cluster::tikv_claims(&cluster, ordinal);
    let Some(claims) = q.run(&["get", "pvc", &data, &wal, &raft, "-o", "json"])? else {
        return Ok(());
    };
    let bound = cluster::parse_claim_volumes(&claims)?;
    let volume = |claim: &str| -> Result<String> {
        bound
            .get(claim)
            .cloned()
            .ok_or_else(|| ClusterError::UnexpectedOutput(format!("no volume bound to {}", claim)).into())
    };
    let (data_pv, wal_pv, raft_pv) = (volume(&data)?, volume(&wal)?, volume(&raft)?);

    let Some(volumes) = q.run(&["get", "pv", &data_pv, &wal_pv, &raft_pv, "-o", "json"])? else {
        return Ok(());
    };
    let handles = cluster::parse_volume_handles(&volumes)?;
    let handle = |pv: &str| handles.get(pv).cloned().unwrap_or_default();

    let Some(node) = q.run(&["get", "pod", &pod, "-o", "jsonpath={.spec.nodeName}"])? else {
        return Ok(());
    };
    let node = cluster::trim_output(&node);
    let Some(instance) = q.run(&[
        "get",
        "node",
        node,
        "-o",
        r"jsonpath={.metadata.labels.node\.airbnb\.com/instance-id}",
    ])?
    else {
        return Ok(());
    };

    let info = TikvInfo {
        name: pod.clone(),
        store_id,
        data_vol: handle(&data_pv),
        wal_vol: handle(&wal_pv),
        raft_vol: handle(&raft_pv),
        instance_id: cluster::trim_output(&instance).to_string(),
    };
    debug!(?info, "tikv info");

    let json = serde_json::to_string(&info).map_err(ClusterError::Json)?;
    output::result(json);
    Ok(())
}

fn delete(session: &Session, args: &TikvArgs, kubectl: &KubectlArgs) -> Result<()> {
    let (resolved, cluster) = resolve_cluster(session, &args.target)?;
    let pod = cluster::tikv_pod(&cluster, cluster::tikv_ordinal(&cluster, &args.name));

    let raw = vec![
        "annotate".to_string(),
        "pod".to_string(),
        pod,
        constants::EVICT_LEADER_ANNOTATION.to_string(),
    ];
    let elevated = session.assume_elevated(&resolved, kubectl.assume_cluster_admin, Scope::TIDB);
    let built = session
        .builder(Scope::TIDB)
        .build_kubectl_args(&resolved, elevated, &raw);

    dispatch::kubectl(
        &resolved,
        &built,
        Mode {
            debug: args.target.debug,
            yes: kubectl.yes,
        },
    )
}
