//! Error types for wallet-recovery.

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration errors raised while resolving flags.
///
/// Every variant is a static misconfiguration and fatal to startup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} env var not set")]
    MissingEnv { var: &'static str },

    #[error("missing required flag --{flag}")]
    MissingFlag { flag: &'static str },

    #[error("{var} env var invalid: {reason}")]
    InvalidEnvVar { var: &'static str, reason: String },

    #[error("invalid keyType {0}")]
    InvalidKeyType(String),

    #[error("invalid environment {0}")]
    InvalidEnvironment(String),
}

impl ConfigError {
    /// A one-line remedy to print under the error, if one applies.
    pub fn hint(&self) -> Option<String> {
        use crate::core::flags;

        match self {
            ConfigError::MissingEnv { var } | ConfigError::InvalidEnvVar { var, .. } => {
                Some(match flags::by_env(var) {
                    Some(spec) => format!("pass --{} or set {}", spec.long, var),
                    None => format!("set {}", var),
                })
            }
            ConfigError::MissingFlag { flag } => Some(format!("pass --{}", flag)),
            ConfigError::InvalidKeyType(_) => Some("expected one of: user, backup".to_string()),
            ConfigError::InvalidEnvironment(_) => Some(format!(
                "expected one of: {}",
                crate::core::types::EnvironmentName::ALL
                    .iter()
                    .map(|e| e.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
