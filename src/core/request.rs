//! Typed parameter sets, one per recovery subcommand.
//!
//! Each `resolve` pulls exactly the descriptors the command needs from a
//! [`FlagSource`] and stops at the first configuration error.

use serde::Serialize;

use crate::core::flags::{self, FlagSource};
use crate::core::secret::Secret;
use crate::core::types::{EnvironmentName, KeyType};
use crate::error::ConfigError;

/// Hot wallet recovery through the BitGo API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotRecovery {
    pub env: EnvironmentName,
    pub wallet_id: String,
    pub access_token: Secret,
    pub wallet_password: Secret,
    pub destination: String,
}

impl HotRecovery {
    pub fn resolve(source: &impl FlagSource) -> Result<Self, ConfigError> {
        Ok(Self {
            env: flags::ENV.resolve(source)?,
            wallet_id: flags::WALLET_ID.resolve(source)?,
            access_token: flags::ACCESS_TOKEN.resolve(source)?,
            wallet_password: flags::WALLET_PASSWORD.resolve(source)?,
            destination: flags::RECOVERY_DESTINATION.resolve(source)?,
        })
    }
}

/// Offline recovery from the wallet's key material.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfflineRecovery {
    pub env: EnvironmentName,
    pub user_key: Secret,
    pub backup_key: Secret,
    pub bitgo_pubkey: String,
    pub wallet_password: Secret,
    pub destination: String,
    pub block_chair_api_key: Secret,
}

impl OfflineRecovery {
    pub fn resolve(source: &impl FlagSource) -> Result<Self, ConfigError> {
        Ok(Self {
            env: flags::ENV.resolve(source)?,
            user_key: flags::USER_KEY.resolve(source)?,
            backup_key: flags::BACKUP_KEY.resolve(source)?,
            bitgo_pubkey: flags::BITGO_PUB_KEY.resolve(source)?,
            wallet_password: flags::WALLET_PASSWORD.resolve(source)?,
            destination: flags::RECOVERY_DESTINATION.resolve(source)?,
            block_chair_api_key: flags::BLOCK_CHAIR_API_KEY.resolve(source)?,
        })
    }
}

/// Half-sign a recovery with one key.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignRequest {
    pub env: EnvironmentName,
    pub key_type: KeyType,
    /// The key named by `key_type`; the other one is never read.
    pub key: Secret,
    pub wallet_password: Secret,
    pub redeem_script: String,
}

impl SignRequest {
    pub fn resolve(source: &impl FlagSource) -> Result<Self, ConfigError> {
        let key_type = flags::KEY_TYPE.resolve(source)?;
        let key = match key_type {
            KeyType::User => flags::USER_KEY.resolve(source)?,
            KeyType::Backup => flags::BACKUP_KEY.resolve(source)?,
        };

        Ok(Self {
            env: flags::ENV.resolve(source)?,
            key_type,
            key,
            wallet_password: flags::WALLET_PASSWORD.resolve(source)?,
            redeem_script: flags::REDEEM_SCRIPT.resolve(source)?,
        })
    }
}
