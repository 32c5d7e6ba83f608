use std::net::IpAddr;

use netscan_common::network::ports::parse_port_list;
use netscan_core::network::fake::{FakeNetwork, FakeService};

use crate::support::{fake_scanner, test_net};

#[tokio::test]
async fn range_scan_reports_only_the_listening_port() {
    let host = test_net(7);
    let net = FakeNetwork::new().listen((host, 22), FakeService::Greeting(b"SSH-2.0-Fake\r\n".to_vec()));

    let ports = parse_port_list("20-25");
    let open = fake_scanner(&net).scan_ports(IpAddr::V4(host), &ports).await;

    assert_eq!(open.len(), 1);
    assert_eq!(open[0].port(), 22);
    assert!(open[0].is_open());
    assert_eq!(open[0].service(), Some("SSH"));
    assert_eq!(open[0].banner(), Some("SSH-2.0-Fake"));

    for port in 20..=25 {
        assert_eq!(net.attempts((host, port)), 1, "port {port}");
    }
}

#[tokio::test]
async fn open_ports_are_sorted_and_labelled() {
    let host = test_net(8);
    let net = FakeNetwork::new()
        .listen((host, 8080), FakeService::Respond(b"HTTP/1.0 404 Not Found\r\n\r\n".to_vec()))
        .listen((host, 443), FakeService::Silent)
        .listen((host, 31337), FakeService::Silent)
        .listen((host, 21), FakeService::Greeting(b"220 ready\r\n".to_vec()));

    let ports = parse_port_list("21,443,8080,31337,9");
    let open = fake_scanner(&net).scan_ports(IpAddr::V4(host), &ports).await;

    let summary: Vec<(u16, &str, Option<&str>)> = open
        .iter()
        .map(|p| (p.port(), p.service_or_unknown(), p.banner()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (21, "FTP", Some("220 ready")),
            (443, "HTTPS", None),
            (8080, "HTTP-Alt", Some("HTTP/1.0 404 Not Found")),
            (31337, "Unknown", None),
        ]
    );

    // the TLS port is never written to
    assert!(net.received((host, 443)).is_empty());
    assert!(net.received((host, 8080)).starts_with(b"GET / HTTP/1."));
}

#[tokio::test]
async fn garbage_port_list_scans_nothing() {
    let host = test_net(9);
    let net = FakeNetwork::new().listen((host, 22), FakeService::Silent);
    let scanner = fake_scanner(&net);

    for input in ["", "ssh", "25-20", "0-10", "1-70000"] {
        let ports = parse_port_list(input);
        assert!(ports.is_empty(), "{input:?} parsed to {ports:?}");
        assert!(scanner.scan_ports(IpAddr::V4(host), &ports).await.is_empty());
    }
    assert_eq!(net.total_attempts(), 0);
}

#[tokio::test]
async fn every_probed_connection_is_closed() {
    let host = test_net(10);
    let mut net = FakeNetwork::new();
    for port in [21, 22, 25, 80, 110] {
        net = net.listen((host, port), FakeService::Greeting(b"hello\r\n".to_vec()));
    }

    let open = fake_scanner(&net)
        .scan_ports(IpAddr::V4(host), &parse_port_list("1-200"))
        .await;
    assert_eq!(open.len(), 5);

    // server halves notice the hang-up asynchronously
    for _ in 0..50 {
        if net.open_streams() == 0 {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }
    assert_eq!(net.open_streams(), 0);
}
