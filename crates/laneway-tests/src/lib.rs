//! Integration test crate for Laneway.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It depends on the laneway crates to verify they work together.


#[cfg(test)]
mod layout;
