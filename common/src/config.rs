//! # Scan Configuration
//!
//! Every timeout, buffer size and concurrency bound used by the engine lives
//! here. The defaults reproduce the two built-in profiles:
//!
//! | setting          | fast   | thorough |
//! |------------------|--------|----------|
//! | connect timeout  | 1 s    | 3 s      |
//! | read timeout     | 500 ms | 2 s      |
//! | read buffer      | 512 B  | 1024 B   |
//! | banner length    | 40     | 50       |

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{ConfigError, InputError};

/// Ports tried concurrently when checking whether a host is up.
pub const LIVENESS_PORTS: [u16; 10] = [80, 443, 22, 21, 23, 25, 53, 135, 139, 445];

const LIVENESS_ATTEMPT_TIMEOUT: Duration = Duration::from_millis(100);
const LIVENESS_OVERALL_TIMEOUT: Duration = Duration::from_millis(200);

const FAST_HTTP_REQUEST: &[u8] = b"GET / HTTP/1.1\r\nHost: \r\nConnection: close\r\n\r\n";
const THOROUGH_HTTP_REQUEST: &[u8] = b"GET / HTTP/1.0\r\n\r\n";

/// Selects one of the two probe timing profiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ScanProfile {
    #[default]
    Fast,
    Thorough,
}

impl FromStr for ScanProfile {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fast" | "f" => Ok(Self::Fast),
            "thorough" | "t" => Ok(Self::Thorough),
            _ => Err(InputError::Profile(s.to_string())),
        }
    }
}

impl fmt::Display for ScanProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fast => f.write_str("fast"),
            Self::Thorough => f.write_str("thorough"),
        }
    }
}

/// Timing and buffer constants for a single port probe and its banner read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeConfig {
    pub connect_timeout: Duration,
    /// Deadline covering the stimulus write and the banner read.
    pub read_timeout: Duration,
    pub read_buffer: usize,
    /// Banners longer than this many characters are cut and marked.
    pub banner_limit: usize,
    /// Request line written to HTTP ports before reading.
    pub http_request: &'static [u8],
}

impl ProbeConfig {
    pub const fn fast() -> Self {
        Self {
            connect_timeout: Duration::from_secs(1),
            read_timeout: Duration::from_millis(500),
            read_buffer: 512,
            banner_limit: 40,
            http_request: FAST_HTTP_REQUEST,
        }
    }

    pub const fn thorough() -> Self {
        Self {
            connect_timeout: Duration::from_secs(3),
            read_timeout: Duration::from_secs(2),
            read_buffer: 1024,
            banner_limit: 50,
            http_request: THOROUGH_HTTP_REQUEST,
        }
    }

    pub const fn for_profile(profile: ScanProfile) -> Self {
        match profile {
            ScanProfile::Fast => Self::fast(),
            ScanProfile::Thorough => Self::thorough(),
        }
    }
}

/// Parameters of the connect-race used as a liveness check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LivenessConfig {
    ports: Vec<u16>,
    attempt_timeout: Duration,
    overall_timeout: Duration,
}

impl LivenessConfig {
    /// The overall timeout must leave room for at least one full attempt.
    pub fn new(
        ports: Vec<u16>,
        attempt_timeout: Duration,
        overall_timeout: Duration,
    ) -> Result<Self, ConfigError> {
        if ports.is_empty() {
            return Err(ConfigError::NoProbePorts);
        }
        if overall_timeout <= attempt_timeout {
            return Err(ConfigError::TimeoutOrder {
                attempt: attempt_timeout,
                overall: overall_timeout,
            });
        }
        Ok(Self {
            ports,
            attempt_timeout,
            overall_timeout,
        })
    }

    pub fn ports(&self) -> &[u16] {
        &self.ports
    }

    pub fn attempt_timeout(&self) -> Duration {
        self.attempt_timeout
    }

    pub fn overall_timeout(&self) -> Duration {
        self.overall_timeout
    }
}

impl Default for LivenessConfig {
    fn default() -> Self {
        Self {
            ports: LIVENESS_PORTS.to_vec(),
            attempt_timeout: LIVENESS_ATTEMPT_TIMEOUT,
            overall_timeout: LIVENESS_OVERALL_TIMEOUT,
        }
    }
}

/// The two resource bounds applied by the batch scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerLimits {
    in_flight: usize,
    batch_size: usize,
}

impl SchedulerLimits {
    pub fn new(in_flight: usize, batch_size: usize) -> Result<Self, ConfigError> {
        if in_flight == 0 {
            return Err(ConfigError::ZeroLimit { name: "in-flight cap" });
        }
        if batch_size == 0 {
            return Err(ConfigError::ZeroLimit { name: "batch size" });
        }
        Ok(Self {
            in_flight,
            batch_size,
        })
    }

    /// Host liveness sweep: one /24 per batch, 500 probes at once.
    pub const fn sweep() -> Self {
        Self {
            in_flight: 500,
            batch_size: 254,
        }
    }

    /// Single-host port scan.
    pub const fn port_scan() -> Self {
        Self {
            in_flight: 5000,
            batch_size: 1000,
        }
    }

    /// Outer (per host) level of combined discovery.
    pub const fn discovery_hosts() -> Self {
        Self {
            in_flight: 100,
            batch_size: 50,
        }
    }

    /// Inner (per port, per host) level of combined discovery.
    ///
    /// Batched like `port_scan`, so a full port range on every live host
    /// never parks more than one batch of tasks per host.
    pub const fn discovery_ports() -> Self {
        Self {
            in_flight: 50,
            batch_size: 1000,
        }
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }
}

/// Complete engine configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub liveness: LivenessConfig,
    /// Probe settings for `scan_ports` and `check`.
    pub scan_probe: ProbeConfig,
    /// Probe settings for the port stage of combined discovery.
    pub discovery_probe: ProbeConfig,
    pub sweep: SchedulerLimits,
    pub port_scan: SchedulerLimits,
    pub discovery_hosts: SchedulerLimits,
    pub discovery_ports: SchedulerLimits,
}

impl ScanConfig {
    /// Uses `profile` for every probe instead of the mixed defaults.
    pub fn for_profile(profile: ScanProfile) -> Self {
        let probe = ProbeConfig::for_profile(profile);
        Self {
            scan_probe: probe,
            discovery_probe: probe,
            ..Self::default()
        }
    }
}

impl Default for ScanConfig {
    /// Single-host scans are thorough, discovery is fast.
    fn default() -> Self {
        Self {
            liveness: LivenessConfig::default(),
            scan_probe: ProbeConfig::thorough(),
            discovery_probe: ProbeConfig::fast(),
            sweep: SchedulerLimits::sweep(),
            port_scan: SchedulerLimits::port_scan(),
            discovery_hosts: SchedulerLimits::discovery_hosts(),
            discovery_ports: SchedulerLimits::discovery_ports(),
        }
    }
}

/// Front-end settings.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// 0 prints everything, 1 drops decorations, 2 prints only summaries.
    pub quiet: u8,
    pub no_banner: bool,
    pub profile: Option<ScanProfile>,
}

impl Config {
    pub fn scan_config(&self) -> ScanConfig {
        match self.profile {
            Some(profile) => ScanConfig::for_profile(profile),
            None => ScanConfig::default(),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_differ_only_in_constants() {
        let fast = ProbeConfig::fast();
        let thorough = ProbeConfig::thorough();

        assert_eq!(fast.connect_timeout, Duration::from_secs(1));
        assert_eq!(thorough.connect_timeout, Duration::from_secs(3));
        assert_eq!(fast.read_timeout, Duration::from_millis(500));
        assert_eq!(thorough.read_timeout, Duration::from_secs(2));
        assert_eq!((fast.read_buffer, thorough.read_buffer), (512, 1024));
        assert_eq!((fast.banner_limit, thorough.banner_limit), (40, 50));
    }

    #[test]
    fn liveness_defaults_leave_room_for_one_attempt() {
        let cfg = LivenessConfig::default();
        assert_eq!(cfg.ports(), &LIVENESS_PORTS);
        assert!(cfg.overall_timeout() > cfg.attempt_timeout());
    }

    #[test]
    fn liveness_rejects_inverted_timeouts() {
        let attempt = Duration::from_millis(200);
        let result = LivenessConfig::new(vec![80], attempt, attempt);
        assert_eq!(
            result,
            Err(ConfigError::TimeoutOrder {
                attempt,
                overall: attempt
            })
        );
        assert_eq!(
            LivenessConfig::new(vec![], attempt, attempt * 2),
            Err(ConfigError::NoProbePorts)
        );
    }

    #[test]
    fn scheduler_limits_reject_zero() {
        assert!(SchedulerLimits::new(0, 10).is_err());
        assert!(SchedulerLimits::new(10, 0).is_err());

        let limits = SchedulerLimits::new(3, 7).unwrap();
        assert_eq!((limits.in_flight(), limits.batch_size()), (3, 7));
    }

    #[test]
    fn discovery_port_stage_is_batched() {
        let inner = SchedulerLimits::discovery_ports();
        let outer = SchedulerLimits::discovery_hosts();

        assert_eq!(inner.batch_size(), SchedulerLimits::port_scan().batch_size());
        // worst case with a full range: one inner batch per host in flight
        assert!(outer.in_flight() * inner.batch_size() <= 100_000);
    }

    #[test]
    fn default_config_mixes_profiles() {
        let cfg = ScanConfig::default();
        assert_eq!(cfg.scan_probe, ProbeConfig::thorough());
        assert_eq!(cfg.discovery_probe, ProbeConfig::fast());

        let fast = ScanConfig::for_profile(ScanProfile::Fast);
        assert_eq!(fast.scan_probe, ProbeConfig::fast());
        assert_eq!(fast.sweep, SchedulerLimits::sweep());
    }

    #[test]
    fn profile_parsing() {
        assert_eq!("FAST".parse::<ScanProfile>(), Ok(ScanProfile::Fast));
        assert_eq!("thorough".parse::<ScanProfile>(), Ok(ScanProfile::Thorough));
        assert!("slow".parse::<ScanProfile>().is_err());
    }
}
