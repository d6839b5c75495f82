//! Flags command.
//!
//! Lists every flag descriptor with its short form and env var fallback.

use crate::cli::output;
use crate::core::flags::REGISTRY;
use crate::error::Result;

/// Print the flag registry.
pub fn execute(json: bool) -> Result<()> {
    if json {
        let entries: Vec<_> = REGISTRY
            .iter()
            .map(|spec| {
                serde_json::json!({
                    "long": spec.long,
                    "short": spec.short.map(String::from),
                    "env": spec.env,
                    "description": spec.help,
                })
            })
            .collect();

        let result = serde_json::json!({
            "flags": entries,
            "count": REGISTRY.len()
        });
        output::data(&serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    output::header("Flags");
    output::rule();
    for spec in REGISTRY {
        let short = spec.short.map(|c| format!("-{}", c)).unwrap_or_default();
        let label = format!("{} {}", output::flag(spec.long), short);
        output::kv(label.trim_end(), spec.env.unwrap_or("(no env fallback)"));
    }

    Ok(())
}
