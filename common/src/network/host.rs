use std::net::Ipv4Addr;
use std::time::Duration;

use crate::network::port::PortOutcome;

/// A host that answered the liveness probe.
///
/// `ports` holds open ports only and is filled by combined discovery; a host
/// without open ports keeps an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostOutcome {
    pub address: Ipv4Addr,
    pub alive: bool,
    pub ports: Vec<PortOutcome>,
    /// Time the liveness probe took to get its first answer.
    pub latency: Duration,
}

impl HostOutcome {
    pub fn alive(address: Ipv4Addr, latency: Duration) -> Self {
        Self {
            address,
            alive: true,
            ports: Vec::new(),
            latency,
        }
    }

    /// Keeps only the open entries of `ports`.
    pub fn with_ports(mut self, ports: Vec<PortOutcome>) -> Self {
        self.ports = ports.into_iter().filter(PortOutcome::is_open).collect();
        self
    }

    pub fn open_ports(&self) -> impl Iterator<Item = u16> + '_ {
        self.ports.iter().map(PortOutcome::port)
    }
}
