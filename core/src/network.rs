pub mod tcp;

#[cfg(any(test, feature = "test-util"))]
pub mod fake;
