//! # Netscan Core
//!
//! The reconnaissance engine: TCP-connect liveness probing, port probing with
//! banner capture, and the bounded batch scheduler that drives both over large
//! target sets.
//!
//! Start with [`scanner::Scanner`]; [`monitor`] repeats single-port checks on a
//! timer.

pub mod monitor;
pub mod network;
pub mod scanner;
