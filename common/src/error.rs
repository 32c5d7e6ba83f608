use std::time::Duration;

use thiserror::Error;

/// Rejected scan configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be greater than zero")]
    ZeroLimit { name: &'static str },

    #[error(
        "overall liveness timeout ({overall:?}) must be longer than the per-attempt timeout ({attempt:?})"
    )]
    TimeoutOrder { attempt: Duration, overall: Duration },

    #[error("liveness probe needs at least one port")]
    NoProbePorts,
}

/// Input that could not be turned into scan targets.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("invalid network '{0}', expected <a.b.c.d>/<prefix>")]
    Network(String),

    #[error("unsupported prefix /{0}, only /24 blocks can be enumerated")]
    UnsupportedPrefix(u8),

    #[error("invalid port list '{0}'")]
    Ports(String),

    #[error("unknown scan profile '{0}', expected 'fast' or 'thorough'")]
    Profile(String),
}
