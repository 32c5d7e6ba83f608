pub mod discover;
pub mod monitor;
pub mod scan;
pub mod sweep;

use std::net::IpAddr;

use clap::{ArgAction, Parser, Subcommand};

use netscan_common::config::{Config, ScanProfile};

#[derive(Parser)]
#[command(name = "netscan")]
#[command(version, about = "A TCP connect network scanner.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Probe timing profile: fast or thorough
    #[arg(short, long, global = true)]
    pub profile: Option<ScanProfile>,

    /// Less output; repeat for even less (-qq)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find live hosts in a /24 network
    #[command(alias = "w")]
    Sweep {
        /// Network in CIDR notation, e.g. 192.168.1.0/24
        network: String,
    },
    /// Scan ports of a single host
    #[command(alias = "s")]
    Scan {
        target: IpAddr,
        /// Range `a-b` or list `a,b,c`
        ports: String,
    },
    /// Sweep a /24 network and scan ports on every live host
    #[command(alias = "d")]
    Discover {
        network: String,
        /// Range `a-b` or list `a,b,c`; empty reports live hosts only
        #[arg(default_value = "")]
        ports: String,
    },
    /// Re-check ports of some hosts on an interval
    #[command(alias = "m")]
    Monitor {
        /// Comma-separated addresses
        hosts: String,
        /// Range `a-b` or list `a,b,c`
        ports: String,
        /// Seconds between rounds
        #[arg(short, long, default_value_t = 30)]
        interval: u64,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            quiet: self.quiet,
            no_banner: self.no_banner,
            profile: self.profile,
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
