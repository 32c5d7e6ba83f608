use std::net::{IpAddr, SocketAddr};

use tracing::trace;

use netscan_common::config::ProbeConfig;
use netscan_common::network::port::PortOutcome;

use crate::network::tcp::{self, Connector};
use crate::scanner::banner;

/// One connect attempt against `addr:port`, plus a banner read on success.
///
/// Connection failures are an expected outcome and come back as a closed
/// port, never as an error.
pub async fn probe_port<C>(connector: &C, addr: IpAddr, port: u16, cfg: &ProbeConfig) -> PortOutcome
where
    C: Connector + ?Sized,
{
    let target = SocketAddr::new(addr, port);
    let Some(mut stream) = tcp::connect_with_timeout(connector, target, cfg.connect_timeout).await
    else {
        return PortOutcome::closed(port);
    };

    let banner = banner::read_banner(&mut stream, port, cfg).await;
    drop(stream);

    trace!(%target, ?banner, "port open");
    PortOutcome::open(port, banner)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
