//! Core library components.
//!
//! Flag descriptors, the values they decode to, and the per-command
//! parameter sets resolved from them.

pub mod constants;
pub mod flags;
pub mod request;
pub mod secret;
pub mod types;
