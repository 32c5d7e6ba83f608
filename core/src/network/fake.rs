//! In-memory network for tests.
//!
//! Each registered socket address gets a [`FakeService`] that answers over a
//! `tokio::io::duplex` pipe. Unregistered addresses refuse immediately unless
//! they were marked as black holes, in which case the connect never completes.

use std::collections::{HashMap, HashSet};
use std::io;
use std::net::{IpAddr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt, DuplexStream};

use super::tcp::Connector;

const PIPE_CAPACITY: usize = 8 * 1024;

/// How a listening fake port behaves once connected.
#[derive(Debug, Clone)]
pub enum FakeService {
    /// Accepts and never sends anything.
    Silent,
    /// Sends these bytes as soon as the connection is up.
    Greeting(Vec<u8>),
    /// Waits for the client to write, then answers with these bytes.
    Respond(Vec<u8>),
}

#[derive(Debug, Default)]
struct Inner {
    services: HashMap<SocketAddr, FakeService>,
    black_holes: HashSet<IpAddr>,
    connect_delay: Option<Duration>,
    attempts: Mutex<HashMap<SocketAddr, usize>>,
    received: Mutex<HashMap<SocketAddr, Vec<u8>>>,
    open_streams: AtomicUsize,
}

/// Cheap to clone; clones share state.
#[derive(Debug, Clone, Default)]
pub struct FakeNetwork {
    inner: Arc<Inner>,
}

impl FakeNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listening port. Must be called before the network is shared.
    pub fn listen(mut self, addr: impl Into<SocketAddr>, service: FakeService) -> Self {
        self.inner_mut().services.insert(addr.into(), service);
        self
    }

    /// Connections to ports of `ip` that nobody listens on hang forever.
    pub fn black_hole(mut self, ip: impl Into<IpAddr>) -> Self {
        self.inner_mut().black_holes.insert(ip.into());
        self
    }

    /// Every connect waits this long before it is answered.
    pub fn with_connect_delay(mut self, delay: Duration) -> Self {
        self.inner_mut().connect_delay = Some(delay);
        self
    }

    /// Number of connect calls made against `addr`.
    pub fn attempts(&self, addr: impl Into<SocketAddr>) -> usize {
        let attempts = self.inner.attempts.lock().unwrap_or_else(PoisonError::into_inner);
        attempts.get(&addr.into()).copied().unwrap_or(0)
    }

    pub fn total_attempts(&self) -> usize {
        let attempts = self.inner.attempts.lock().unwrap_or_else(PoisonError::into_inner);
        attempts.values().sum()
    }

    /// Bytes clients have written to `addr` so far.
    pub fn received(&self, addr: impl Into<SocketAddr>) -> Vec<u8> {
        let received = self.inner.received.lock().unwrap_or_else(PoisonError::into_inner);
        received.get(&addr.into()).cloned().unwrap_or_default()
    }

    /// Server sides that have not seen their client hang up yet.
    pub fn open_streams(&self) -> usize {
        self.inner.open_streams.load(Ordering::SeqCst)
    }

    fn inner_mut(&mut self) -> &mut Inner {
        Arc::get_mut(&mut self.inner).expect("configure FakeNetwork before cloning it")
    }

    fn record_attempt(&self, addr: SocketAddr) {
        let mut attempts = self.inner.attempts.lock().unwrap_or_else(PoisonError::into_inner);
        *attempts.entry(addr).or_insert(0) += 1;
    }

    fn record_received(inner: &Inner, addr: SocketAddr, bytes: &[u8]) {
        let mut received = inner.received.lock().unwrap_or_else(PoisonError::into_inner);
        received.entry(addr).or_default().extend_from_slice(bytes);
    }

    fn serve(&self, addr: SocketAddr, service: FakeService) -> DuplexStream {
        let (client, mut server) = tokio::io::duplex(PIPE_CAPACITY);
        let inner = Arc::clone(&self.inner);
        inner.open_streams.fetch_add(1, Ordering::SeqCst);

        tokio::spawn(async move {
            let mut buf = vec![0u8; 1024];
            let mut answered = false;

            if let FakeService::Greeting(bytes) = &service {
                let _ = server.write_all(bytes).await;
            }

            loop {
                match server.read(&mut buf).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => {
                        Self::record_received(&inner, addr, &buf[..n]);
                        if let FakeService::Respond(bytes) = &service
                            && !answered
                        {
                            answered = true;
                            let _ = server.write_all(bytes).await;
                        }
                    }
                }
            }

            inner.open_streams.fetch_sub(1, Ordering::SeqCst);
        });

        client
    }
}

#[async_trait]
impl Connector for FakeNetwork {
    type Stream = DuplexStream;

    async fn connect(&self, addr: SocketAddr) -> io::Result<DuplexStream> {
        self.record_attempt(addr);

        if let Some(delay) = self.inner.connect_delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(service) = self.inner.services.get(&addr) {
            return Ok(self.serve(addr, service.clone()));
        }

        if self.inner.black_holes.contains(&addr.ip()) {
            std::future::pending::<()>().await;
        }

        Err(io::Error::from(io::ErrorKind::ConnectionRefused))
    }
}
