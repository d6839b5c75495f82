//! Wallet recovery - flag and environment resolution for BitGo wallet recoveries.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── recover       # Hot wallet recovery
//! │   ├── offline       # Recovery from key material
//! │   ├── sign          # Single-key signing
//! │   ├── flags         # Describe the flag registry
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── constants     # Environment variable names
//!     ├── flags         # Flag descriptors and resolution
//!     ├── request       # Typed parameter sets per command
//!     ├── secret        # Zeroized, fingerprinted secrets
//!     └── types         # KeyType, EnvironmentName
//! ```
//!
//! Every flag falls back to an environment variable when absent, so the
//! same command line works in CI with secrets injected through the
//! environment.

pub mod cli;
pub mod core;
pub mod error;
