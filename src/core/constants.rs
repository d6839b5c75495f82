//! Constants used throughout wallet-recovery.
//!
//! Centralizes the environment variable names the flags fall back to.

/// BitGo user account access token.
pub const ACCESS_TOKEN: &str = "ACCESS_TOKEN";

/// Wallet passphrase.
pub const WALLET_PASSCODE: &str = "WALLET_PASSCODE";

/// BitGo wallet id.
pub const WALLET_ID: &str = "WALLET_ID";

/// Address recovered funds are sent to.
pub const RECOVERY_DESTINATION: &str = "RECOVERY_DESTINATION";

/// Blockchair API key, used for UTXO lookups during offline recovery.
pub const BLOCK_CHAIR_API_KEY: &str = "BLOCK_CHAIR_API_KEY";

/// Encrypted user private key (xprv).
pub const USER_KEY: &str = "USER_KEY";

/// Encrypted backup private key (xprv).
pub const BACKUP_KEY: &str = "BACKUP_KEY";

/// BitGo public key.
pub const BITGO_PUB_KEY: &str = "BITGO_PUB_KEY";

/// Redeem script.
pub const REDEEM_SCRIPT: &str = "REDEEM_SCRIPT";

/// BitGo environment name.
pub const BITGO_ENV: &str = "BITGO_ENV";

/// Every environment variable a flag can fall back to.
pub const FLAG_ENV_VARS: &[&str] = &[
    ACCESS_TOKEN,
    WALLET_PASSCODE,
    WALLET_ID,
    RECOVERY_DESTINATION,
    BLOCK_CHAIR_API_KEY,
    USER_KEY,
    BACKUP_KEY,
    BITGO_PUB_KEY,
    REDEEM_SCRIPT,
    BITGO_ENV,
];

/// Log filter override (tracing `EnvFilter` syntax).
pub const LOG_ENV: &str = "WALLET_RECOVERY_LOG";

/// Binary name, used for completions.
pub const BIN_NAME: &str = "wallet-recovery";
