//! # Scan Target Enumeration
//!
//! Expands a network specification such as `192.168.1.0/24` into the ordered
//! list of host addresses to probe.
//!
//! Only /24 blocks are accepted today. [`NetworkSpec`] keeps the prefix
//! length so widening [`SUPPORTED_PREFIXES`] is the only change needed to
//! enumerate other block sizes.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use tracing::warn;

use crate::error::InputError;
use crate::network::range::{self, Ipv4Range};

/// Prefix lengths that [`NetworkSpec`] will enumerate.
pub const SUPPORTED_PREFIXES: &[u8] = &[24];

/// A parsed `<address>/<prefix>` network.
///
/// The host bits of the base address are ignored: `10.0.0.77/24` describes
/// the same network as `10.0.0.0/24`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetworkSpec {
    base: Ipv4Addr,
    prefix: u8,
}

impl NetworkSpec {
    pub fn base(&self) -> Ipv4Addr {
        self.base
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Host addresses of the network in ascending order, network and
    /// broadcast addresses excluded.
    pub fn hosts(&self) -> Ipv4Range {
        match range::host_range(self.base, self.prefix) {
            Ok(range) => range,
            // `from_str` only admits valid prefixes
            Err(_) => Ipv4Range::new(Ipv4Addr::BROADCAST, Ipv4Addr::UNSPECIFIED),
        }
    }
}

impl FromStr for NetworkSpec {
    type Err = InputError;

    /// Parses CIDR notation like "192.168.1.0/24".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some((ip_str, prefix_str)) = s.split_once('/') else {
            return Err(InputError::Network(s.to_string()));
        };

        let base = ip_str
            .parse::<Ipv4Addr>()
            .map_err(|_| InputError::Network(s.to_string()))?;

        let prefix = prefix_str
            .parse::<u8>()
            .map_err(|_| InputError::Network(s.to_string()))?;

        if !SUPPORTED_PREFIXES.contains(&prefix) {
            return Err(InputError::UnsupportedPrefix(prefix));
        }

        Ok(Self { base, prefix })
    }
}

impl fmt::Display for NetworkSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.prefix)
    }
}

/// Expands `spec` into host addresses.
///
/// Unrecognized input yields an empty list rather than an error; the caller
/// sees zero targets.
pub fn enumerate(spec: &str) -> Vec<Ipv4Addr> {
    match spec.parse::<NetworkSpec>() {
        Ok(network) => network.hosts().iter().collect(),
        Err(e) => {
            warn!("{e}, nothing to scan");
            Vec::new()
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
