//! Recover-offline command.
//!
//! Resolves the parameters for a recovery built from the wallet's user,
//! backup and BitGo keys, without going through the BitGo API.

use tracing::info;

use crate::cli::args::{FlagArgs, OfflineRecoveryFlags};
use crate::cli::output;
use crate::core::request::OfflineRecovery;
use crate::error::Result;

/// Resolve and print an offline recovery request.
pub fn execute(flags: &FlagArgs<OfflineRecoveryFlags>, json: bool) -> Result<()> {
    let request = OfflineRecovery::resolve(flags)?;
    info!(env = %request.env, "offline recovery resolved");

    if json {
        output::data(&serde_json::to_string_pretty(&request)?);
        return Ok(());
    }

    output::header("Offline recovery");
    output::rule();
    output::kv("env", request.env);
    output::kv("destination", &request.destination);
    output::kv("bitgoPubkey", &request.bitgo_pubkey);
    output::kv("userKey", &request.user_key);
    output::kv("backupKey", &request.backup_key);
    output::kv("walletPassword", &request.wallet_password);
    output::kv("blockChairApiKey", &request.block_chair_api_key);
    output::blank();

    if request.env.is_production() {
        output::warn("production environment: recovered funds are real");
    }
    output::success("recovery request resolved");

    Ok(())
}
