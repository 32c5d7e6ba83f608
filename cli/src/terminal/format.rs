use std::time::Duration;

use colored::*;

use netscan_common::network::port::PortOutcome;

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

pub fn latency_to_detail(latency: Duration) -> Detail {
    let millis = latency.as_secs_f64() * 1000.0;
    (
        "Latency".to_string(),
        format!("{millis:.1} ms").color(colors::TEXT_DEFAULT),
    )
}

/// `22/tcp: SSH` with the banner appended when one was read.
pub fn port_to_detail(port: &PortOutcome) -> Detail {
    let key = format!("{}/tcp", port.port());
    let service = port.service_or_unknown().color(colors::SERVICE);

    let value = match port.banner() {
        Some(banner) => format!("{service} {}", banner.color(colors::BANNER)).normal(),
        None => service,
    };

    (key, value)
}

pub fn no_open_ports_detail() -> Detail {
    (
        "Ports".to_string(),
        "alive but no open ports found in scanned range"
            .italic()
            .color(colors::SEPARATOR),
    )
}

pub fn ports_to_details(ports: &[PortOutcome]) -> Vec<Detail> {
    if ports.is_empty() {
        return vec![no_open_ports_detail()];
    }
    ports.iter().map(port_to_detail).collect()
}

pub fn open_ports_to_string(open_ports: &[u16]) -> String {
    open_ports
        .iter()
        .map(u16::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
