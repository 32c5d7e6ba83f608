use std::net::IpAddr;
use std::time::Instant;

use colored::*;
use tracing::warn;

use netscan_common::config::Config;
use netscan_common::network::ports::parse_port_list;
use netscan_core::scanner::Scanner;

use crate::mprint;
use crate::terminal::{colors, format, print, spinner};

pub async fn scan(target: IpAddr, ports: &str, cfg: &Config) -> anyhow::Result<()> {
    let ports = parse_port_list(ports);
    if ports.is_empty() {
        warn!("no ports to scan");
        return Ok(());
    }

    let scanner = Scanner::new(cfg.scan_config()).on_batch(spinner::batch_reporter("scan"));

    if cfg.quiet < 2 {
        spinner::get_spinner().start(format!("Scanning {} ports on {target}...", ports.len()));
    }
    let start_time = Instant::now();
    let open = scanner.scan_ports(target, &ports).await;
    let total_time = start_time.elapsed();
    spinner::get_spinner().finish_and_clear();

    if open.is_empty() {
        print::header("no open ports", cfg.quiet);
        print::no_results(cfg.quiet);
        return Ok(());
    }

    print::header("open ports", cfg.quiet);
    if cfg.quiet < 2 {
        print::tree_head(0, &target.to_string());
        print::as_tree_one_level(&format::ports_to_details(&open));
    }

    if cfg.quiet == 0 {
        let found: ColoredString = format!("{} open ports", open.len()).bold().green();
        let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
        let output = format!("Scan Complete: {found} out of {} in {total_time}", ports.len())
            .color(colors::TEXT_DEFAULT);

        mprint!();
        print::fat_separator();
        print::centerln(&output);
    }
    Ok(())
}
