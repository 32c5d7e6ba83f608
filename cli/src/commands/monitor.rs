use std::net::IpAddr;
use std::ops::ControlFlow;
use std::time::Duration;

use anyhow::Context;
use colored::*;
use tracing::warn;

use netscan_common::config::Config;
use netscan_common::network::ports::parse_port_list;
use netscan_core::monitor::{self, MonitorStatus};
use netscan_core::scanner::Scanner;

use crate::mprint;
use crate::terminal::{colors, format, print};

pub async fn monitor(hosts: &str, ports: &str, interval: u64, cfg: &Config) -> anyhow::Result<()> {
    let hosts = parse_hosts(hosts)?;
    if hosts.is_empty() {
        warn!("no hosts to monitor");
        return Ok(());
    }
    let ports = parse_port_list(ports);
    if ports.is_empty() {
        warn!("no ports to scan");
        return Ok(());
    }

    let interval = match interval {
        0 => monitor::DEFAULT_INTERVAL,
        secs => Duration::from_secs(secs),
    };
    print::header(
        &format!("monitoring {} hosts every {}s", hosts.len(), interval.as_secs()),
        cfg.quiet,
    );

    let scanner = Scanner::new(cfg.scan_config());
    let mut round = 0usize;
    let rounds = monitor::run(&scanner, &hosts, &ports, interval, |statuses| {
        round += 1;
        print_round(round, statuses, cfg);
        ControlFlow::Continue(())
    });

    tokio::select! {
        _ = rounds => {}
        signal = tokio::signal::ctrl_c() => {
            signal.context("failed to listen for Ctrl+C")?;
            mprint!();
            print::end_of_program(cfg.quiet);
        }
    }
    Ok(())
}

fn parse_hosts(hosts: &str) -> anyhow::Result<Vec<IpAddr>> {
    hosts
        .split(',')
        .map(str::trim)
        .filter(|host| !host.is_empty())
        .map(|host| {
            host.parse::<IpAddr>()
                .with_context(|| format!("'{host}' is not an IP address"))
        })
        .collect()
}

fn print_round(round: usize, statuses: &[MonitorStatus], cfg: &Config) {
    if cfg.quiet == 0 {
        mprint!();
        print::header(&format!("round {round}"), cfg.quiet);
    }

    for status in statuses {
        let line = if status.is_up() {
            format!(
                "{} {} open: {}",
                "UP".color(colors::UP).bold(),
                status.host.to_string().color(colors::IPV4_ADDR),
                format::open_ports_to_string(&status.open_ports).color(colors::PORT)
            )
        } else {
            format!(
                "{} {} down or filtered",
                "DOWN".color(colors::DOWN).bold(),
                status.host.to_string().color(colors::IPV4_ADDR),
            )
        };
        print::print(&line);
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hosts_are_comma_separated() {
        let hosts = parse_hosts("10.0.0.1, 10.0.0.2,,::1").unwrap();
        assert_eq!(
            hosts,
            vec![
                "10.0.0.1".parse::<IpAddr>().unwrap(),
                "10.0.0.2".parse().unwrap(),
                "::1".parse().unwrap(),
            ]
        );
    }

    #[test]
    fn bad_host_is_reported() {
        let err = parse_hosts("10.0.0.1,router").unwrap_err();
        assert!(err.to_string().contains("router"));
    }
}
