//! TCP-connect liveness check.
//!
//! A host counts as alive as soon as any port of the probe set accepts a
//! connection. This is a heuristic: a host that is up but firewalls every
//! probe port (or answers only ICMP) is reported as down.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::time::timeout;
use tracing::trace;

use netscan_common::config::LivenessConfig;

use crate::network::tcp::{self, Connector};

/// Races one connect per probe port; the first success wins.
///
/// Losing attempts are not cancelled. They keep running in their own tasks
/// until they connect or hit the per-attempt timeout, and their results are
/// ignored. Returns `false` once the overall timeout passes without a success
/// or as soon as every attempt has failed.
pub async fn is_alive<C: Connector>(
    connector: Arc<C>,
    addr: Ipv4Addr,
    cfg: &LivenessConfig,
) -> bool {
    let (tx, mut rx) = mpsc::channel::<u16>(cfg.ports().len());

    for &port in cfg.ports() {
        let connector = Arc::clone(&connector);
        let tx = tx.clone();
        let attempt_timeout = cfg.attempt_timeout();

        tokio::spawn(async move {
            let target = SocketAddr::new(IpAddr::V4(addr), port);
            // dropped right away: the connect itself is the answer
            if tcp::connect_with_timeout(&*connector, target, attempt_timeout)
                .await
                .is_some()
            {
                let _ = tx.try_send(port);
            }
        });
    }
    drop(tx);

    match timeout(cfg.overall_timeout(), rx.recv()).await {
        Ok(Some(port)) => {
            trace!(%addr, port, "host answered");
            true
        }
        Ok(None) | Err(_) => false,
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
