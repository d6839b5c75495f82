//! Test support utilities for wallet-recovery integration tests.
//!
//! Provides a hermetic command builder and output assertions.

#![allow(dead_code)]

pub mod assertions;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

/// Test environment.
///
/// Every command it builds starts with all flag env vars removed, so a
/// developer's shell (or CI secrets) can never leak into a test.
pub struct Test {
    /// Environment variables applied to every command.
    pub env: Vec<(String, String)>,
}

impl Test {
    /// Create a test environment with no flag env vars set.
    pub fn new() -> Self {
        Self { env: Vec::new() }
    }

    /// Create a test environment with the given env vars set.
    pub fn with_env(pairs: &[(&str, &str)]) -> Self {
        let mut t = Self::new();
        for (k, v) in pairs {
            t.env.push((k.to_string(), v.to_string()));
        }
        t
    }
}
