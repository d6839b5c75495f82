//! Command-line interface.

pub mod args;
pub mod completions;
pub mod flags;
pub mod offline;
pub mod output;
pub mod recover;
pub mod sign;

use clap::{Parser, Subcommand};

use crate::cli::args::{FlagArgs, HotRecoveryFlags, OfflineRecoveryFlags, SignFlags};

/// Wallet recovery - resolve recovery parameters from flags and environment.
#[derive(Parser)]
#[command(
    name = "wallet-recovery",
    about = "Resolve BitGo wallet recovery parameters from flags and environment",
    version,
    after_help = "Every flag except --keyType falls back to an environment variable.\nRun `wallet-recovery flags` to list them."
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Recover a hot wallet through the BitGo API
    Recover {
        #[command(flatten)]
        flags: FlagArgs<HotRecoveryFlags>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Recover funds offline from the wallet's key material
    RecoverOffline {
        #[command(flatten)]
        flags: FlagArgs<OfflineRecoveryFlags>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Half-sign a recovery with the user or backup key
    Sign {
        #[command(flatten)]
        flags: FlagArgs<SignFlags>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every flag and the environment variable it falls back to
    Flags {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Log output format on stderr.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Recover { flags, json } => recover::execute(&flags, json),
        RecoverOffline { flags, json } => offline::execute(&flags, json),
        Sign { flags, json } => sign::execute(&flags, json),
        Flags { json } => flags::execute(json),
        Completions { shell } => completions::execute(shell),
    }
}
