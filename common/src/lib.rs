//! # Netscan Common
//!
//! Types shared by the scanning engine and its front ends.
//!
//! * **[`config`]**: Scan profiles, probe constants and scheduler limits.
//! * **[`network`]**: Targets, port lists, scan outcomes and the service table.
//! * **[`utils`]**: Address helpers.
//!
//! Nothing in this crate performs network I/O.

pub mod config;
pub mod error;
pub mod log;
pub mod network;
pub mod utils;
