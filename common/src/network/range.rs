use std::net::Ipv4Addr;

use pnet::ipnetwork::Ipv4Network;

use crate::error::InputError;

/// Inclusive range of IPv4 addresses.
///
/// An inverted range (`start_addr > end_addr`) is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv4Range {
    pub start_addr: Ipv4Addr,
    pub end_addr: Ipv4Addr,
}

impl Ipv4Range {
    pub fn new(start_addr: Ipv4Addr, end_addr: Ipv4Addr) -> Self {
        Self {
            start_addr,
            end_addr,
        }
    }

    /// Addresses in ascending numeric order. Can be called any number of times.
    pub fn iter(&self) -> impl Iterator<Item = Ipv4Addr> + use<> {
        let start: u32 = self.start_addr.into();
        let end: u32 = self.end_addr.into();
        (start..=end).map(Ipv4Addr::from)
    }

    pub fn len(&self) -> usize {
        let start: u32 = self.start_addr.into();
        let end: u32 = self.end_addr.into();
        if start > end {
            0
        } else {
            (end - start) as usize + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Every address of the block, network and broadcast included.
pub fn cidr_range(ip: Ipv4Addr, prefix: u8) -> Result<Ipv4Range, InputError> {
    let network = Ipv4Network::new(ip, prefix)
        .map_err(|e| InputError::Network(format!("{ip}/{prefix}: {e}")))?;
    Ok(Ipv4Range::new(network.network(), network.broadcast()))
}

/// Usable host addresses of the block: network and broadcast are stripped.
pub fn host_range(ip: Ipv4Addr, prefix: u8) -> Result<Ipv4Range, InputError> {
    let full = cidr_range(ip, prefix)?;
    let start: u32 = full.start_addr.into();
    let end: u32 = full.end_addr.into();

    // /31 and /32 have no network/broadcast pair to strip
    if end.saturating_sub(start) < 2 {
        return Ok(full);
    }

    Ok(Ipv4Range::new(
        Ipv4Addr::from(start + 1),
        Ipv4Addr::from(end - 1),
    ))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_range_strips_network_and_broadcast() {
        let range = host_range(Ipv4Addr::new(192, 168, 1, 77), 24).unwrap();
        assert_eq!(range.start_addr, Ipv4Addr::new(192, 168, 1, 1));
        assert_eq!(range.end_addr, Ipv4Addr::new(192, 168, 1, 254));
        assert_eq!(range.len(), 254);
    }

    #[test]
    fn cidr_range_keeps_whole_block() {
        let range = cidr_range(Ipv4Addr::new(10, 0, 0, 0), 30).unwrap();
        let addrs: Vec<Ipv4Addr> = range.iter().collect();
        assert_eq!(addrs.len(), 4);
        assert_eq!(addrs[0], Ipv4Addr::new(10, 0, 0, 0));
        assert_eq!(addrs[3], Ipv4Addr::new(10, 0, 0, 3));
    }

    #[test]
    fn iteration_is_restartable() {
        let range = Ipv4Range::new(Ipv4Addr::new(10, 0, 0, 1), Ipv4Addr::new(10, 0, 0, 3));
        assert_eq!(range.iter().count(), 3);
        assert_eq!(range.iter().count(), 3);
    }

    #[test]
    fn inverted_range_is_empty() {
        let range = Ipv4Range::new(Ipv4Addr::new(10, 0, 0, 9), Ipv4Addr::new(10, 0, 0, 1));
        assert!(range.is_empty());
        assert_eq!(range.iter().count(), 0);
    }

    #[test]
    fn invalid_prefix_is_rejected() {
        assert!(cidr_range(Ipv4Addr::new(10, 0, 0, 0), 33).is_err());
    }
}
