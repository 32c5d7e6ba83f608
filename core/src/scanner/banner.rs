//! Banner acquisition on an established connection.
//!
//! Some services talk first (SSH, SMTP, FTP), HTTP needs a request before it
//! says anything, and a TLS port only returns handshake noise, so the stimulus
//! depends on the dialed port.

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::timeout;
use tracing::trace;

use netscan_common::config::ProbeConfig;

/// Appended to banners cut at the profile's length limit.
pub const TRUNCATION_MARKER: &str = "...";

const HTTP_PORTS: [u16; 2] = [80, 8080];
const TLS_PORT: u16 = 443;

/// What to send before reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stimulus {
    /// Do not touch the connection at all.
    Skip,
    /// Read whatever the peer sends on its own.
    Listen,
    /// Write these bytes first.
    Send(&'static [u8]),
}

pub fn stimulus_for(port: u16, cfg: &ProbeConfig) -> Stimulus {
    match port {
        TLS_PORT => Stimulus::Skip,
        p if HTTP_PORTS.contains(&p) => Stimulus::Send(cfg.http_request),
        _ => Stimulus::Listen,
    }
}

/// Reads a short, single-line banner from `stream`.
///
/// Returns `None` for port 443, on write or read failure, on timeout and when
/// the peer sent nothing printable.
pub async fn read_banner<S>(stream: &mut S, port: u16, cfg: &ProbeConfig) -> Option<String>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let stimulus = stimulus_for(port, cfg);
    if stimulus == Stimulus::Skip {
        return None;
    }

    let mut buf = vec![0u8; cfg.read_buffer];
    let exchange = async {
        if let Stimulus::Send(request) = stimulus {
            stream.write_all(request).await?;
        }
        stream.read(&mut buf).await
    };

    let read = match timeout(cfg.read_timeout, exchange).await {
        Ok(Ok(n)) if n > 0 => n,
        Ok(Ok(_)) => return None,
        Ok(Err(e)) => {
            trace!(port, "banner read failed: {e}");
            return None;
        }
        Err(_elapsed) => return None,
    };

    let banner = sanitize(&buf[..read], cfg.banner_limit);
    (!banner.is_empty()).then_some(banner)
}

/// Collapses every run of CR/LF into one space, trims, and cuts to `limit`
/// characters with [`TRUNCATION_MARKER`] appended when something was cut.
///
/// A blank line (`\r\n\r\n`) is one run, so an HTTP header/body boundary
/// yields a single space, not one space per line break.
pub fn sanitize(raw: &[u8], limit: usize) -> String {
    let text = String::from_utf8_lossy(raw);

    let mut flat = String::with_capacity(text.len());
    let mut in_break = false;
    for ch in text.chars() {
        if ch == '\r' || ch == '\n' {
            if !in_break {
                flat.push(' ');
            }
            in_break = true;
        } else {
            flat.push(ch);
            in_break = false;
        }
    }

    let trimmed = flat.trim();
    if trimmed.chars().count() <= limit {
        return trimmed.to_string();
    }

    let mut cut: String = trimmed.chars().take(limit).collect();
    cut.push_str(TRUNCATION_MARKER);
    cut
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
