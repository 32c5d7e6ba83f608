pub mod host;
pub mod port;
pub mod ports;
pub mod range;
pub mod services;
pub mod target;
