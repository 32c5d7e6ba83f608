use std::net::{IpAddr, Ipv4Addr};

use anyhow::Context;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use netscan_core::monitor::{self, MonitorStatus};
use netscan_core::scanner::Scanner;

use crate::support::quick_config;

const LOCALHOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

/// Accepts forever, greeting every client with `greeting`.
async fn greeting_server(greeting: &'static [u8]) -> anyhow::Result<u16> {
    let listener = TcpListener::bind((LOCALHOST, 0))
        .await
        .context("bind loopback listener")?;
    let port = listener.local_addr()?.port();

    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            tokio::spawn(async move {
                let _ = stream.write_all(greeting).await;
                let mut sink = [0u8; 256];
                while matches!(stream.read(&mut sink).await, Ok(n) if n > 0) {}
            });
        }
    });

    Ok(port)
}

/// A port that was just released, so nothing listens on it.
async fn closed_port() -> anyhow::Result<u16> {
    let listener = TcpListener::bind((LOCALHOST, 0)).await?;
    Ok(listener.local_addr()?.port())
}

#[tokio::test]
async fn real_connector_reads_banner() -> anyhow::Result<()> {
    let port = greeting_server(b"220 loopback FTP ready\r\n").await?;
    let scanner = Scanner::new(quick_config());

    let open = scanner.scan_ports(LOCALHOST, &[port]).await;

    assert_eq!(open.len(), 1);
    assert_eq!(open[0].port(), port);
    assert_eq!(open[0].banner(), Some("220 loopback FTP ready"));
    Ok(())
}

#[tokio::test]
async fn real_connector_reports_closed_port() -> anyhow::Result<()> {
    let port = closed_port().await?;
    let outcome = Scanner::new(quick_config()).check(LOCALHOST, port).await;

    assert!(!outcome.is_open());
    assert_eq!(outcome.service(), None);
    assert_eq!(outcome.banner(), None);
    Ok(())
}

#[tokio::test]
async fn monitor_round_over_loopback() -> anyhow::Result<()> {
    let up = greeting_server(b"").await?;
    let down = closed_port().await?;
    let scanner = Scanner::new(quick_config());

    let statuses = monitor::check_hosts(&scanner, &[LOCALHOST], &[down, up]).await;

    assert_eq!(
        statuses,
        vec![MonitorStatus {
            host: LOCALHOST,
            open_ports: vec![up],
        }]
    );
    Ok(())
}
