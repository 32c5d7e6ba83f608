//! Logging targets understood by the terminal formatter.
//!
//! Everything else is plain `tracing`; these only exist so that front ends can
//! render "success" lines and raw output differently from regular events.

/// Target used for events that report a completed operation.
pub const SUCCESS_TARGET: &str = "netscan::success";

/// Target used for pre-formatted output that must be printed verbatim.
pub const PRINT_TARGET: &str = "netscan::print";

/// Emits an `INFO` event tagged as a success.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "netscan::success", $($arg)*)
    };
}
