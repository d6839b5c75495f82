//! Sign command.

use tracing::info;

use crate::cli::args::{FlagArgs, SignFlags};
use crate::cli::output;
use crate::core::request::SignRequest;
use crate::error::Result;

/// Resolve and print a single-key signing request.
///
/// Only the key selected by `--keyType` is read.
pub fn execute(flags: &FlagArgs<SignFlags>, json: bool) -> Result<()> {
    let request = SignRequest::resolve(flags)?;
    info!(env = %request.env, key_type = %request.key_type, "sign request resolved");

    if json {
        output::data(&serde_json::to_string_pretty(&request)?);
        return Ok(());
    }

    output::header(&format!("Sign with {} key", request.key_type));
    output::rule();
    output::kv("env", request.env);
    output::kv("redeemScript", &request.redeem_script);
    output::kv(&format!("{}Key", request.key_type), &request.key);
    output::kv("walletPassword", &request.wallet_password);
    output::blank();
    output::success("sign request resolved");

    Ok(())
}
