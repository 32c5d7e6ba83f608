use crate::network::services;

/// Placeholder shown when a port has no entry in the service table.
pub const UNKNOWN_SERVICE: &str = "Unknown";

/// Result of probing a single TCP port.
///
/// A closed port never carries a service name or a banner; the constructors
/// are the only way to build one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortOutcome {
    port: u16,
    open: bool,
    service: Option<&'static str>,
    banner: Option<String>,
}

impl PortOutcome {
    pub fn closed(port: u16) -> Self {
        Self {
            port,
            open: false,
            service: None,
            banner: None,
        }
    }

    /// An accepted connection. Empty banners are stored as `None`.
    pub fn open(port: u16, banner: Option<String>) -> Self {
        Self {
            port,
            open: true,
            service: services::lookup(port),
            banner: banner.filter(|b| !b.is_empty()),
        }
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn service(&self) -> Option<&'static str> {
        self.service
    }

    /// Service name for display.
    pub fn service_or_unknown(&self) -> &'static str {
        self.service.unwrap_or(UNKNOWN_SERVICE)
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
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
