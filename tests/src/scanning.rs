mod loopback;
mod ports;
mod sweep;
