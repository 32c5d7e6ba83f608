use std::net::Ipv4Addr;
use std::time::{Duration, Instant};

use netscan_core::network::fake::{FakeNetwork, FakeService};

use crate::support::{fake_scanner, test_net};

#[tokio::test]
async fn sweep_finds_the_single_listening_host() {
    let net = FakeNetwork::new().listen((test_net(5), 80), FakeService::Silent);

    let hosts = fake_scanner(&net).sweep("203.0.113.0/24").await;

    assert_eq!(hosts.len(), 1, "expected exactly one live host, got {hosts:?}");
    assert_eq!(hosts[0].address, test_net(5));
    assert!(hosts[0].alive);
    assert!(hosts[0].ports.is_empty());
}

#[tokio::test]
async fn sweep_probes_every_host_of_the_network() {
    let net = FakeNetwork::new();

    let hosts = fake_scanner(&net).sweep("203.0.113.0/24").await;

    assert!(hosts.is_empty());
    for host in [1, 128, 254] {
        assert_eq!(net.attempts((test_net(host), 80)), 1, "host .{host}");
    }
    assert_eq!(net.attempts((test_net(0), 80)), 0);
    assert_eq!(net.attempts((test_net(255), 80)), 0);
}

#[tokio::test]
async fn live_hosts_come_back_in_numeric_order() {
    let mut net = FakeNetwork::new();
    for host in [100, 9, 10, 254, 1] {
        net = net.listen((test_net(host), 22), FakeService::Silent);
    }

    let hosts = fake_scanner(&net).sweep("203.0.113.0/24").await;

    let order: Vec<Ipv4Addr> = hosts.iter().map(|h| h.address).collect();
    assert_eq!(
        order,
        [1, 9, 10, 100, 254].map(test_net).to_vec(),
        "addresses must sort by octet value, not as strings"
    );
}

#[tokio::test]
async fn silent_network_is_bounded_by_the_liveness_timeout() {
    let mut net = FakeNetwork::new();
    for host in 1..=254 {
        net = net.black_hole(test_net(host));
    }

    let started = Instant::now();
    let hosts = fake_scanner(&net).sweep("203.0.113.0/24").await;

    assert!(hosts.is_empty());
    // one batch of 254 hosts, each giving up after its overall timeout
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn garbage_network_scans_nothing() {
    let net = FakeNetwork::new().listen((test_net(5), 80), FakeService::Silent);
    let scanner = fake_scanner(&net);

    for network in ["", "garbage", "203.0.113.0", "203.0.113.0/16", "300.0.113.0/24"] {
        assert!(scanner.sweep(network).await.is_empty(), "{network:?}");
    }
    assert_eq!(net.total_attempts(), 0);
}
