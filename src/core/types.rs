//! Enumerated flag values.
//!
//! Both enums decode from their exact, case-sensitive wire spelling and
//! reject everything else.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ConfigError;

/// Which half of the wallet keychain a key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyType {
    User,
    Backup,
}

impl KeyType {
    pub const ALL: [KeyType; 2] = [KeyType::User, KeyType::Backup];

    pub fn as_str(self) -> &'static str {
        match self {
            KeyType::User => "user",
            KeyType::Backup => "backup",
        }
    }
}

impl FromStr for KeyType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ConfigError::InvalidKeyType(s.to_string()))
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recognized BitGo deployment environment.
///
/// Names match the SDK's environment table exactly, including case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EnvironmentName {
    Prod,
    Staging,
    Test,
    Dev,
    Latest,
    Local,
    LocalNonSecure,
    Mock,
    AdminProd,
    AdminTest,
    AdminDev,
    AdminLatest,
    Custom,
}

impl EnvironmentName {
    pub const ALL: [EnvironmentName; 13] = [
        EnvironmentName::Prod,
        EnvironmentName::Staging,
        EnvironmentName::Test,
        EnvironmentName::Dev,
        EnvironmentName::Latest,
        EnvironmentName::Local,
        EnvironmentName::LocalNonSecure,
        EnvironmentName::Mock,
        EnvironmentName::AdminProd,
        EnvironmentName::AdminTest,
        EnvironmentName::AdminDev,
        EnvironmentName::AdminLatest,
        EnvironmentName::Custom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EnvironmentName::Prod => "prod",
            EnvironmentName::Staging => "staging",
            EnvironmentName::Test => "test",
            EnvironmentName::Dev => "dev",
            EnvironmentName::Latest => "latest",
            EnvironmentName::Local => "local",
            EnvironmentName::LocalNonSecure => "localNonSecure",
            EnvironmentName::Mock => "mock",
            EnvironmentName::AdminProd => "adminProd",
            EnvironmentName::AdminTest => "adminTest",
            EnvironmentName::AdminDev => "adminDev",
            EnvironmentName::AdminLatest => "adminLatest",
            EnvironmentName::Custom => "custom",
        }
    }

    /// Whether this environment moves real funds.
    pub fn is_production(self) -> bool {
        matches!(self, EnvironmentName::Prod | EnvironmentName::AdminProd)
    }
}

impl FromStr for EnvironmentName {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| ConfigError::InvalidEnvironment(s.to_string()))
    }
}

impl fmt::Display for EnvironmentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
