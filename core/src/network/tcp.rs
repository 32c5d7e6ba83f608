use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::trace;

/// Opens outbound TCP connections.
///
/// The engine never dials sockets itself; everything goes through this trait
/// so that tests can swap in an in-memory network.
#[async_trait]
pub trait Connector: Send + Sync + 'static {
    type Stream: AsyncRead + AsyncWrite + Unpin + Send + 'static;

    async fn connect(&self, addr: SocketAddr) -> io::Result<Self::Stream>;
}

/// Plain `connect(2)` through tokio.
#[derive(Debug, Clone, Copy, Default)]
pub struct TcpConnector;

#[async_trait]
impl Connector for TcpConnector {
    type Stream = TcpStream;

    async fn connect(&self, addr: SocketAddr) -> io::Result<TcpStream> {
        TcpStream::connect(addr).await
    }
}

/// Single best-effort attempt bounded by `limit`.
///
/// Refused, unreachable and timed-out connections all come back as `None`.
pub async fn connect_with_timeout<C>(
    connector: &C,
    addr: SocketAddr,
    limit: Duration,
) -> Option<C::Stream>
where
    C: Connector + ?Sized,
{
    match timeout(limit, connector.connect(addr)).await {
        Ok(Ok(stream)) => Some(stream),
        Ok(Err(e)) => {
            trace!(%addr, "connect failed: {e}");
            None
        }
        Err(_elapsed) => {
            trace!(%addr, "connect timed out after {limit:?}");
            None
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
