//! Recover command.
//!
//! Resolves the parameters for a hot wallet recovery through the BitGo API.

use tracing::info;

use crate::cli::args::{FlagArgs, HotRecoveryFlags};
use crate::cli::output;
use crate::core::request::HotRecovery;
use crate::error::Result;

/// Resolve and print a hot wallet recovery request.
pub fn execute(flags: &FlagArgs<HotRecoveryFlags>, json: bool) -> Result<()> {
    let request = HotRecovery::resolve(flags)?;
    info!(env = %request.env, wallet = %request.wallet_id, "hot recovery resolved");

    if json {
        output::data(&serde_json::to_string_pretty(&request)?);
        return Ok(());
    }

    output::header("Hot wallet recovery");
    output::rule();
    output::kv("env", request.env);
    output::kv("walletId", &request.wallet_id);
    output::kv("destination", &request.destination);
    output::kv("accessToken", &request.access_token);
    output::kv("walletPassword", &request.wallet_password);
    output::blank();

    if request.env.is_production() {
        output::warn("production environment: recovered funds are real");
    }
    output::success("recovery request resolved");

    Ok(())
}
