//! Well-known port to service name mapping.

use std::collections::HashMap;
use std::sync::OnceLock;

const WELL_KNOWN: &[(u16, &str)] = &[
    (21, "FTP"),
    (22, "SSH"),
    (23, "Telnet"),
    (25, "SMTP"),
    (53, "DNS"),
    (80, "HTTP"),
    (110, "POP3"),
    (135, "RPC"),
    (139, "NetBIOS"),
    (143, "IMAP"),
    (443, "HTTPS"),
    (445, "SMB"),
    (993, "IMAPS"),
    (995, "POP3S"),
    (1433, "MSSQL"),
    (3306, "MySQL"),
    (3389, "RDP"),
    (5432, "PostgreSQL"),
    (5900, "VNC"),
    (6379, "Redis"),
    (8080, "HTTP-Alt"),
    (9200, "Elasticsearch"),
];

static SERVICE_TABLE: OnceLock<ServiceTable> = OnceLock::new();

/// Read-only table, built on first use and shared by every probe.
#[derive(Debug)]
pub struct ServiceTable {
    by_port: HashMap<u16, &'static str>,
}

impl ServiceTable {
    pub fn global() -> &'static ServiceTable {
        SERVICE_TABLE.get_or_init(|| ServiceTable {
            by_port: WELL_KNOWN.iter().copied().collect(),
        })
    }

    pub fn lookup(&self, port: u16) -> Option<&'static str> {
        self.by_port.get(&port).copied()
    }

    pub fn len(&self) -> usize {
        self.by_port.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_port.is_empty()
    }
}

/// Shorthand for `ServiceTable::global().lookup(port)`.
pub fn lookup(port: u16) -> Option<&'static str> {
    ServiceTable::global().lookup(port)
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
    fn known_ports_resolve() {
        assert_eq!(lookup(22), Some("SSH"));
        assert_eq!(lookup(443), Some("HTTPS"));
        assert_eq!(lookup(6379), Some("Redis"));
        assert_eq!(lookup(8080), Some("HTTP-Alt"));
    }

    #[test]
    fn unknown_ports_are_absent() {
        assert_eq!(lookup(1), None);
        assert_eq!(lookup(31337), None);
    }

    #[test]
    fn table_is_built_once() {
        let first = ServiceTable::global() as *const ServiceTable;
        let second = ServiceTable::global() as *const ServiceTable;
        assert_eq!(first, second);
        assert_eq!(ServiceTable::global().len(), WELL_KNOWN.len());
    }

    #[test]
    fn concurrent_readers_see_the_same_table() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| lookup(3306)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Some("MySQL"));
        }
    }
}
