use std::net::Ipv4Addr;
use std::time::Duration;

use netscan_common::config::{ProbeConfig, ScanConfig};
use netscan_core::network::fake::FakeNetwork;
use netscan_core::scanner::Scanner;

/// Last octet inside 203.0.113.0/24 (TEST-NET-3).
pub fn test_net(host: u8) -> Ipv4Addr {
    Ipv4Addr::new(203, 0, 113, host)
}

/// Default limits with short banner reads, so silent peers do not slow the
/// suite down.
pub fn quick_config() -> ScanConfig {
    let probe = ProbeConfig {
        read_timeout: Duration::from_millis(50),
        ..ProbeConfig::fast()
    };
    ScanConfig {
        scan_probe: probe,
        discovery_probe: probe,
        ..ScanConfig::default()
    }
}

pub fn fake_scanner(net: &FakeNetwork) -> Scanner<FakeNetwork> {
    Scanner::with_connector(net.clone(), quick_config())
}
