//! End-to-end scenarios for the scanner, run against the in-memory fake
//! network and against real loopback listeners.

#[cfg(test)]
mod discovery;
#[cfg(test)]
mod scanning;
#[cfg(test)]
mod support;
