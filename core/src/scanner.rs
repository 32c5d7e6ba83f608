//! # Scanner
//!
//! Entry points of the reconnaissance engine. Every operation is built from
//! the same pieces:
//!
//! * [`liveness`]: connect-race host check.
//! * [`port`]: single port probe, with [`banner`] capture on success.
//! * [`batch`]: bounded batch scheduler driving the probes.
//! * [`aggregate`]: final, deterministic ordering.
//!
//! Network failures never surface as errors. Unusable input degrades to an
//! empty result and is logged.

pub mod aggregate;
pub mod banner;
pub mod batch;
pub mod liveness;
pub mod port;

use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::time::Instant;

use tracing::{Instrument, info, info_span, warn};

use netscan_common::config::ScanConfig;
use netscan_common::network::host::HostOutcome;
use netscan_common::network::port::PortOutcome;
use netscan_common::network::target;
use netscan_common::success;

use crate::network::tcp::{Connector, TcpConnector};
use batch::{BatchScheduler, ProgressFn};

/// The engine. Cloning is cheap and clones share the connector.
pub struct Scanner<C: Connector = TcpConnector> {
    connector: Arc<C>,
    config: Arc<ScanConfig>,
    on_batch: Option<ProgressFn>,
}

impl<C: Connector> Clone for Scanner<C> {
    fn clone(&self) -> Self {
        Self {
            connector: Arc::clone(&self.connector),
            config: Arc::clone(&self.config),
            on_batch: self.on_batch.clone(),
        }
    }
}

impl Scanner<TcpConnector> {
    pub fn new(config: ScanConfig) -> Self {
        Self::with_connector(TcpConnector, config)
    }
}

impl Default for Scanner<TcpConnector> {
    fn default() -> Self {
        Self::new(ScanConfig::default())
    }
}

impl<C: Connector> Scanner<C> {
    pub fn with_connector(connector: C, config: ScanConfig) -> Self {
        Self {
            connector: Arc::new(connector),
            config: Arc::new(config),
            on_batch: None,
        }
    }

    /// Called after every outer batch of `sweep`, `scan_ports` and `discover`.
    pub fn on_batch(mut self, on_batch: ProgressFn) -> Self {
        self.on_batch = Some(on_batch);
        self
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Finds the hosts of `network` that answer the liveness probe.
    pub async fn sweep(&self, network: &str) -> Vec<HostOutcome> {
        let targets = target::enumerate(network);
        let scanned = targets.len();
        let span = info_span!("sweep", %network);

        let connector = Arc::clone(&self.connector);
        let config = Arc::clone(&self.config);
        let started = Instant::now();

        let mut hosts = BatchScheduler::new(self.config.sweep)
            .with_progress(self.on_batch.clone())
            .run(targets, move |addr: Ipv4Addr| {
                let connector = Arc::clone(&connector);
                let config = Arc::clone(&config);
                async move {
                    let probe_started = Instant::now();
                    liveness::is_alive(connector, addr, &config.liveness)
                        .await
                        .then(|| HostOutcome::alive(addr, probe_started.elapsed()))
                }
            })
            .instrument(span)
            .await;

        aggregate::sort_hosts(&mut hosts);
        success!(
            "sweep of {network} finished in {:.2?}: {} live hosts out of {scanned} scanned",
            started.elapsed(),
            hosts.len()
        );
        hosts
    }

    /// Probes `ports` on one host and returns the open ones in port order.
    pub async fn scan_ports(&self, target: IpAddr, ports: &[u16]) -> Vec<PortOutcome> {
        if ports.is_empty() {
            warn!("no ports to scan on {target}");
            return Vec::new();
        }

        let span = info_span!("scan_ports", %target, ports = ports.len());
        let connector = Arc::clone(&self.connector);
        let config = Arc::clone(&self.config);
        let started = Instant::now();

        let mut open = BatchScheduler::new(self.config.port_scan)
            .with_progress(self.on_batch.clone())
            .run(ports.to_vec(), move |port: u16| {
                let connector = Arc::clone(&connector);
                let config = Arc::clone(&config);
                async move {
                    let outcome =
                        port::probe_port(&*connector, target, port, &config.scan_probe).await;
                    outcome.is_open().then_some(outcome)
                }
            })
            .instrument(span)
            .await;

        aggregate::sort_ports(&mut open);
        success!(
            "scan of {target} finished in {:.2?}: {} open ports",
            started.elapsed(),
            open.len()
        );
        open
    }

    /// Liveness sweep of `network` followed by a port scan of every live host.
    ///
    /// Live hosts without any open port are kept, with an empty port list.
    pub async fn discover(&self, network: &str, ports: &[u16]) -> Vec<HostOutcome> {
        let targets = target::enumerate(network);
        let scanned = targets.len();
        let span = info_span!("discover", %network, ports = ports.len());

        let ports: Arc<[u16]> = Arc::from(ports);
        let connector = Arc::clone(&self.connector);
        let config = Arc::clone(&self.config);
        let started = Instant::now();

        let mut hosts = BatchScheduler::new(self.config.discovery_hosts)
            .with_progress(self.on_batch.clone())
            .run(targets, move |addr: Ipv4Addr| {
                let connector = Arc::clone(&connector);
                let config = Arc::clone(&config);
                let ports = Arc::clone(&ports);
                async move {
                    let probe_started = Instant::now();
                    if !liveness::is_alive(Arc::clone(&connector), addr, &config.liveness).await {
                        return None;
                    }
                    let latency = probe_started.elapsed();
                    let open = scan_host_ports(connector, &config, addr, &ports).await;
                    Some(HostOutcome::alive(addr, latency).with_ports(open))
                }
            })
            .instrument(span)
            .await;

        aggregate::sort_hosts(&mut hosts);
        info!(
            "discovery of {network} found {} open ports in total",
            hosts.iter().map(|h| h.ports.len()).sum::<usize>()
        );
        success!(
            "discovery of {network} finished in {:.2?}: {} live hosts out of {scanned} scanned",
            started.elapsed(),
            hosts.len()
        );
        hosts
    }

    /// One probe of `host:port`, closed ports included.
    pub async fn check(&self, host: IpAddr, port: u16) -> PortOutcome {
        port::probe_port(&*self.connector, host, port, &self.config.scan_probe).await
    }
}

/// Inner level of discovery: all ports of one live host, joined before the
/// host reports.
async fn scan_host_ports<C: Connector>(
    connector: Arc<C>,
    config: &Arc<ScanConfig>,
    addr: Ipv4Addr,
    ports: &Arc<[u16]>,
) -> Vec<PortOutcome> {
    let probe_config = Arc::clone(config);
    BatchScheduler::new(config.discovery_ports)
        .run(ports.to_vec(), move |port: u16| {
            let connector = Arc::clone(&connector);
            let config = Arc::clone(&probe_config);
            async move {
                let outcome =
                    port::probe_port(&*connector, IpAddr::V4(addr), port, &config.discovery_probe)
                        .await;
                outcome.is_open().then_some(outcome)
            }
        })
        .await
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
