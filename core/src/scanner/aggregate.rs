//! Deterministic ordering of collected results.
//!
//! Collection happens in completion order; these sorts are the only ordering
//! guarantee the engine gives.

use netscan_common::network::host::HostOutcome;
use netscan_common::network::port::PortOutcome;
use netscan_common::utils::ip;

/// Sorts hosts by numeric address and each host's ports by number.
pub fn sort_hosts(hosts: &mut [HostOutcome]) {
    hosts.sort_by(|a, b| ip::compare_octets(&a.address, &b.address));
    for host in hosts.iter_mut() {
        sort_ports(&mut host.ports);
    }
}

pub fn sort_ports(ports: &mut [PortOutcome]) {
    ports.sort_by_key(PortOutcome::port);
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
