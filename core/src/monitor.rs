//! # Port Monitor
//!
//! Re-checks a fixed set of host/port pairs on an interval. Each round is a
//! plain sequence of [`Scanner::check`] calls; no batching is involved.

use std::net::IpAddr;
use std::ops::ControlFlow;
use std::time::Duration;

use tokio::time::{self, MissedTickBehavior};
use tracing::{Instrument, debug, info_span};

use crate::network::tcp::Connector;
use crate::scanner::Scanner;

/// Default time between two rounds.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(30);

/// State of one monitored host after a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorStatus {
    pub host: IpAddr,
    /// Open ports among the monitored ones, in the order they were given.
    pub open_ports: Vec<u16>,
}

impl MonitorStatus {
    /// A host with no open monitored port is "down or filtered".
    pub fn is_up(&self) -> bool {
        !self.open_ports.is_empty()
    }
}

/// Checks every port of every host once, sequentially.
pub async fn check_hosts<C: Connector>(
    scanner: &Scanner<C>,
    hosts: &[IpAddr],
    ports: &[u16],
) -> Vec<MonitorStatus> {
    let mut statuses = Vec::with_capacity(hosts.len());

    for &host in hosts {
        let mut open_ports = Vec::new();
        for &port in ports {
            if scanner.check(host, port).await.is_open() {
                open_ports.push(port);
            }
        }
        debug!(%host, ?open_ports, "checked");
        statuses.push(MonitorStatus { host, open_ports });
    }

    statuses
}

/// Runs one round immediately, then one per `interval`, handing each round's
/// statuses to `on_round` until it breaks.
///
/// Rounds never overlap: a slow round delays the next tick instead of piling
/// up missed ones. A zero `interval` falls back to [`DEFAULT_INTERVAL`].
pub async fn run<C, F>(
    scanner: &Scanner<C>,
    hosts: &[IpAddr],
    ports: &[u16],
    interval: Duration,
    mut on_round: F,
) where
    C: Connector,
    F: FnMut(&[MonitorStatus]) -> ControlFlow<()>,
{
    let span = info_span!("monitor", hosts = hosts.len(), ports = ports.len());
    let interval = if interval.is_zero() {
        DEFAULT_INTERVAL
    } else {
        interval
    };
    let mut ticker = time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    async {
        loop {
            ticker.tick().await;
            let statuses = check_hosts(scanner, hosts, ports).await;
            if on_round(&statuses).is_break() {
                break;
            }
        }
    }
    .instrument(span)
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;
    use std::time::Instant;

    use netscan_common::config::{ProbeConfig, ScanConfig};

    use crate::network::fake::{FakeNetwork, FakeService};

    const UP: IpAddr = IpAddr::V4(Ipv4Addr::new(10, 9, 0, 1));
    const DOWN: IpAddr = IpAddr::V4(Ipv4Addr::new(10, 9, 0, 2));

    fn scanner(net: FakeNetwork) -> Scanner<FakeNetwork> {
        let probe = ProbeConfig {
            read_timeout: Duration::from_millis(20),
            ..ProbeConfig::fast()
        };
        Scanner::with_connector(
            net,
            ScanConfig {
                scan_probe: probe,
                ..ScanConfig::default()
            },
        )
    }

    #[tokio::test]
    async fn statuses_follow_host_order() {
        let net = FakeNetwork::new()
            .listen((UP, 443), FakeService::Silent)
            .listen((UP, 22), FakeService::Silent);

        let statuses = check_hosts(&scanner(net), &[DOWN, UP], &[22, 80, 443]).await;

        assert_eq!(
            statuses,
            vec![
                MonitorStatus { host: DOWN, open_ports: vec![] },
                MonitorStatus { host: UP, open_ports: vec![22, 443] },
            ]
        );
        assert!(!statuses[0].is_up());
        assert!(statuses[1].is_up());
    }

    #[tokio::test]
    async fn rounds_repeat_until_stopped() {
        let net = FakeNetwork::new().listen((UP, 80), FakeService::Silent);
        let scanner = scanner(net.clone());

        let mut rounds = 0;
        let started = Instant::now();
        run(&scanner, &[UP], &[80], Duration::from_millis(20), |statuses| {
            assert!(statuses[0].is_up());
            rounds += 1;
            if rounds == 3 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .await;

        assert_eq!(rounds, 3);
        assert_eq!(net.attempts((UP, 80)), 3);
        // first round is immediate, the next two wait one interval each
        assert!(started.elapsed() >= Duration::from_millis(40));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_interval_uses_default() {
        let net = FakeNetwork::new().listen((UP, 22), FakeService::Silent);
        let scanner = scanner(net);

        let mut ticks = Vec::new();
        let started = time::Instant::now();
        run(&scanner, &[UP], &[22], Duration::ZERO, |_| {
            ticks.push(started.elapsed());
            if ticks.len() == 2 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .await;

        assert_eq!(ticks.len(), 2);
        assert!(ticks[1] - ticks[0] >= DEFAULT_INTERVAL - Duration::from_secs(1));
    }
}
