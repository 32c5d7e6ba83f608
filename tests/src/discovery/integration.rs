use netscan_core::network::fake::{FakeNetwork, FakeService};

use crate::support::{fake_scanner, test_net};

/// Two live hosts, only one of which has a scanned port open: both must be
/// reported, the second with an empty port list.
#[tokio::test]
async fn discovery_keeps_live_hosts_without_open_ports() -> anyhow::Result<()> {
    let net = FakeNetwork::new()
        .listen((test_net(10), 80), FakeService::Respond(b"HTTP/1.1 200 OK\r\n\r\n".to_vec()))
        // alive through the liveness set, but port 22 is not scanned
        .listen((test_net(20), 22), FakeService::Silent);

    let hosts = fake_scanner(&net).discover("203.0.113.0/24", &[80, 8443]).await;

    assert_eq!(hosts.len(), 2, "got {hosts:?}");

    let web = &hosts[0];
    assert_eq!(web.address, test_net(10));
    assert_eq!(web.open_ports().collect::<Vec<_>>(), vec![80]);
    assert_eq!(web.ports[0].service(), Some("HTTP"));
    assert_eq!(web.ports[0].banner(), Some("HTTP/1.1 200 OK"));

    let quiet = &hosts[1];
    assert_eq!(quiet.address, test_net(20));
    assert!(quiet.alive);
    assert!(quiet.ports.is_empty());
    Ok(())
}

#[tokio::test]
async fn dead_hosts_get_no_port_scan() -> anyhow::Result<()> {
    let net = FakeNetwork::new().listen((test_net(30), 443), FakeService::Silent);

    let hosts = fake_scanner(&net).discover("203.0.113.0/24", &[8000, 8001]).await;

    assert_eq!(hosts.len(), 1);
    assert_eq!(net.attempts((test_net(31), 8000)), 0);
    assert_eq!(net.attempts((test_net(30), 8000)), 1);
    assert_eq!(net.attempts((test_net(30), 8001)), 1);
    Ok(())
}

#[tokio::test]
async fn discovery_without_ports_lists_live_hosts() -> anyhow::Result<()> {
    let net = FakeNetwork::new()
        .listen((test_net(3), 53), FakeService::Silent)
        .listen((test_net(2), 445), FakeService::Silent);

    let hosts = fake_scanner(&net).discover("203.0.113.0/24", &[]).await;

    let addresses: Vec<_> = hosts.iter().map(|h| h.address).collect();
    assert_eq!(addresses, vec![test_net(2), test_net(3)]);
    assert!(hosts.iter().all(|h| h.ports.is_empty()));
    Ok(())
}

#[tokio::test]
async fn garbage_network_discovers_nothing() -> anyhow::Result<()> {
    let net = FakeNetwork::new().listen((test_net(10), 80), FakeService::Silent);

    let hosts = fake_scanner(&net).discover("203.0.113.0/33", &[80]).await;

    assert!(hosts.is_empty());
    assert_eq!(net.total_attempts(), 0);
    Ok(())
}
