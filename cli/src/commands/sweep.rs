use std::time::{Duration, Instant};

use colored::*;
use tracing::warn;

use netscan_common::config::Config;
use netscan_common::network::host::HostOutcome;
use netscan_common::network::target;
use netscan_core::scanner::Scanner;

use crate::mprint;
use crate::terminal::{colors, format, print, spinner};

pub async fn sweep(network: &str, cfg: &Config) -> anyhow::Result<()> {
    let scanned = target::enumerate(network).len();
    if scanned == 0 {
        warn!("0 hosts scanned: '{network}' is not a supported network");
        print::no_results(cfg.quiet);
        return Ok(());
    }

    let scanner = Scanner::new(cfg.scan_config()).on_batch(spinner::batch_reporter("sweep"));

    if cfg.quiet < 2 {
        spinner::get_spinner().start(format!("Sweeping {scanned} hosts of {network}..."));
    }
    let start_time = Instant::now();
    let hosts = scanner.sweep(network).await;
    spinner::get_spinner().finish_and_clear();

    sweep_ends(&hosts, scanned, start_time.elapsed(), cfg);
    Ok(())
}

fn sweep_ends(hosts: &[HostOutcome], scanned: usize, total_time: Duration, cfg: &Config) {
    if hosts.is_empty() {
        print::header("zero hosts detected", cfg.quiet);
        print::no_results(cfg.quiet);
        return;
    }

    print::header("live hosts", cfg.quiet);
    if cfg.quiet < 2 {
        for (idx, host) in hosts.iter().enumerate() {
            print::tree_head(idx, &host.address.to_string());
            print::as_tree_one_level(&[format::latency_to_detail(host.latency)]);
        }
    }

    if cfg.quiet == 0 {
        let live: ColoredString = format!("{} live hosts", hosts.len()).bold().green();
        let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
        let output = format!("Sweep Complete: {live} out of {scanned} in {total_time}")
            .color(colors::TEXT_DEFAULT);

        mprint!();
        print::fat_separator();
        print::centerln(&output);
    }
}
