use std::cmp::Ordering;
use std::net::Ipv4Addr;

/// Numeric, octet-by-octet ordering of two IPv4 addresses.
///
/// `10.0.0.2` sorts before `10.0.0.10`, which a string comparison gets wrong.
pub fn compare_octets(a: &Ipv4Addr, b: &Ipv4Addr) -> Ordering {
    a.octets().cmp(&b.octets())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
