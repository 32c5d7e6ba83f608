use std::time::{Duration, Instant};

use colored::*;
use tracing::warn;

use netscan_common::config::Config;
use netscan_common::network::host::HostOutcome;
use netscan_common::network::ports::parse_port_list;
use netscan_common::network::target;
use netscan_core::scanner::Scanner;

use crate::mprint;
use crate::terminal::format::Detail;
use crate::terminal::{colors, format, print, spinner};

pub async fn discover(network: &str, ports: &str, cfg: &Config) -> anyhow::Result<()> {
    let scanned = target::enumerate(network).len();
    if scanned == 0 {
        warn!("0 hosts scanned: '{network}' is not a supported network");
        print::no_results(cfg.quiet);
        return Ok(());
    }

    let ports = parse_port_list(ports);
    if ports.is_empty() {
        warn!("no ports to scan, reporting live hosts only");
    }

    let scanner = Scanner::new(cfg.scan_config()).on_batch(spinner::batch_reporter("discovery"));

    if cfg.quiet < 2 {
        spinner::get_spinner().start(format!(
            "Discovering {scanned} hosts, {} ports each...",
            ports.len()
        ));
    }
    let start_time = Instant::now();
    let hosts = scanner.discover(network, &ports).await;
    spinner::get_spinner().finish_and_clear();

    discovery_ends(&hosts, start_time.elapsed(), cfg);
    Ok(())
}

fn discovery_ends(hosts: &[HostOutcome], total_time: Duration, cfg: &Config) {
    if hosts.is_empty() {
        print::header("zero hosts detected", cfg.quiet);
        print::no_results(cfg.quiet);
        return;
    }

    print::header("network discovery", cfg.quiet);
    if cfg.quiet < 2 {
        for (idx, host) in hosts.iter().enumerate() {
            print_host_tree(host, idx);
            if idx + 1 != hosts.len() {
                mprint!();
            }
        }
    }
    print_summary(hosts, total_time, cfg);
}

fn print_host_tree(host: &HostOutcome, idx: usize) {
    print::tree_head(idx, &host.address.to_string());

    let mut details: Vec<Detail> = vec![format::latency_to_detail(host.latency)];
    details.extend(format::ports_to_details(&host.ports));
    print::as_tree_one_level(&details);
}

fn print_summary(hosts: &[HostOutcome], total_time: Duration, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    let open_ports: usize = hosts.iter().map(|host| host.ports.len()).sum();
    let active_hosts: ColoredString = format!("{} active hosts", hosts.len()).bold().green();
    let open_ports: ColoredString = format!("{open_ports} open ports").bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output = format!("Discovery Complete: {active_hosts}, {open_ports} in {total_time}")
        .color(colors::TEXT_DEFAULT);

    mprint!();
    print::fat_separator();
    print::centerln(&output);
}
