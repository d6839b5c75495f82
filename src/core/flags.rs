//! Flag descriptors and their resolution.
//!
//! Each descriptor wires a command-line flag to an optional environment
//! variable fallback and a decode function. Descriptors are `static` and
//! shared by every subcommand that takes the flag.
//!
//! Resolution order:
//! 1. flag present on the command line: decode it
//! 2. flag absent, env var set and non-empty: decode the env var
//! 3. otherwise: [`ConfigError::MissingEnv`] (or [`ConfigError::MissingFlag`]
//!    for flags without a fallback)

use clap::{Arg, ArgAction};
use tracing::debug;

use crate::core::constants as env;
use crate::core::secret::Secret;
use crate::core::types::{EnvironmentName, KeyType};
use crate::error::ConfigError;

/// Untyped flag metadata: everything the parser and the help output need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagSpec {
    /// Long flag name, also used as the clap argument id.
    pub long: &'static str,
    pub short: Option<char>,
    /// Environment variable read when the flag is absent.
    pub env: Option<&'static str>,
    pub help: &'static str,
}

impl FlagSpec {
    /// Build the clap argument for this flag.
    ///
    /// The argument is never marked required: absence is handled by the
    /// env fallback so the error can name the variable.
    pub fn arg(&self) -> Arg {
        let mut arg = Arg::new(self.long)
            .long(self.long)
            .help(self.help)
            .action(ArgAction::Set)
            .value_name(self.env.unwrap_or(self.long));
        if let Some(short) = self.short {
            arg = arg.short(short);
        }
        arg
    }
}

/// A typed flag descriptor.
pub struct Flag<T> {
    pub spec: FlagSpec,
    decode: fn(&str) -> Result<T, ConfigError>,
}

impl<T> Flag<T> {
    pub const fn new(spec: FlagSpec, decode: fn(&str) -> Result<T, ConfigError>) -> Self {
        Self { spec, decode }
    }

    /// Run the decode step on a raw value.
    pub fn decode(&self, raw: &str) -> Result<T, ConfigError> {
        (self.decode)(raw)
    }

    /// Resolve this flag against a source of raw flags and environment.
    pub fn resolve(&self, source: &impl FlagSource) -> Result<T, ConfigError> {
        let long = self.spec.long;

        if let Some(raw) = source.flag(long) {
            debug!(flag = long, source = "flag", "resolved");
            return self.decode(raw);
        }

        let Some(var) = self.spec.env else {
            return Err(ConfigError::MissingFlag { flag: long });
        };

        match source.env(var).filter(|v| !v.is_empty()) {
            Some(value) => {
                debug!(flag = long, source = "env", var, "resolved");
                self.decode(&value)
                    .map_err(|e| ConfigError::InvalidEnvVar {
                        var,
                        reason: e.to_string(),
                    })
            }
            None => Err(ConfigError::MissingEnv { var }),
        }
    }
}

/// Where raw flag values and environment variables come from.
pub trait FlagSource {
    /// Raw value of a flag, by long name, if it was given.
    fn flag(&self, long: &str) -> Option<&str>;

    /// Value of an environment variable.
    fn env(&self, var: &str) -> Option<String> {
        std::env::var(var).ok()
    }
}

fn decode_string(raw: &str) -> Result<String, ConfigError> {
    Ok(raw.to_string())
}

fn decode_secret(raw: &str) -> Result<Secret, ConfigError> {
    Ok(Secret::new(raw))
}

fn decode_key_type(raw: &str) -> Result<KeyType, ConfigError> {
    raw.parse()
}

fn decode_environment(raw: &str) -> Result<EnvironmentName, ConfigError> {
    raw.parse()
}

pub static ACCESS_TOKEN: Flag<Secret> = Flag::new(
    FlagSpec {
        long: "accessToken",
        short: Some('a'),
        env: Some(env::ACCESS_TOKEN),
        help: "BitGo user account access token. If not provided, the env var ACCESS_TOKEN will be used.",
    },
    decode_secret,
);

pub static WALLET_PASSWORD: Flag<Secret> = Flag::new(
    FlagSpec {
        long: "walletPassword",
        short: Some('p'),
        env: Some(env::WALLET_PASSCODE),
        help: "The wallet passphrase for the wallet associated to walletId. If not provided, the env var WALLET_PASSCODE will be used.",
    },
    decode_secret,
);

pub static WALLET_ID: Flag<String> = Flag::new(
    FlagSpec {
        long: "walletId",
        short: Some('w'),
        env: Some(env::WALLET_ID),
        help: "BitGo wallet id. If not provided, the env var WALLET_ID will be used.",
    },
    decode_string,
);

pub static RECOVERY_DESTINATION: Flag<String> = Flag::new(
    FlagSpec {
        long: "destination",
        short: Some('d'),
        env: Some(env::RECOVERY_DESTINATION),
        help: "Recovery destination. If not provided, the env var RECOVERY_DESTINATION will be used.",
    },
    decode_string,
);

pub static BLOCK_CHAIR_API_KEY: Flag<Secret> = Flag::new(
    FlagSpec {
        long: "blockChairApiKey",
        short: None,
        env: Some(env::BLOCK_CHAIR_API_KEY),
        help: "Blockchair API key. If not provided, the env var BLOCK_CHAIR_API_KEY will be used.",
    },
    decode_secret,
);

pub static USER_KEY: Flag<Secret> = Flag::new(
    FlagSpec {
        long: "userKey",
        short: Some('u'),
        env: Some(env::USER_KEY),
        help: "Encrypted user private key (xprv). If not provided, the env var USER_KEY will be used.",
    },
    decode_secret,
);

pub static BACKUP_KEY: Flag<Secret> = Flag::new(
    FlagSpec {
        long: "backupKey",
        short: Some('b'),
        env: Some(env::BACKUP_KEY),
        help: "Encrypted backup private key (xprv). If not provided, the env var BACKUP_KEY will be used.",
    },
    decode_secret,
);

pub static BITGO_PUB_KEY: Flag<String> = Flag::new(
    FlagSpec {
        long: "bitgoPubkey",
        short: Some('g'),
        env: Some(env::BITGO_PUB_KEY),
        help: "BitGo public key in plain text. If not provided, the env var BITGO_PUB_KEY will be used.",
    },
    decode_string,
);

pub static REDEEM_SCRIPT: Flag<String> = Flag::new(
    FlagSpec {
        long: "redeemScript",
        short: Some('r'),
        env: Some(env::REDEEM_SCRIPT),
        help: "Redeem script in plain text. If not provided, the env var REDEEM_SCRIPT will be used.",
    },
    decode_string,
);

pub static KEY_TYPE: Flag<KeyType> = Flag::new(
    FlagSpec {
        long: "keyType",
        short: Some('k'),
        env: None,
        help: "Which key signs: user or backup.",
    },
    decode_key_type,
);

pub static ENV: Flag<EnvironmentName> = Flag::new(
    FlagSpec {
        long: "env",
        short: Some('e'),
        env: Some(env::BITGO_ENV),
        help: "BitGo environment. If not provided, the env var BITGO_ENV will be used.",
    },
    decode_environment,
);

/// Every descriptor, in declaration order.
pub static REGISTRY: [&FlagSpec; 11] = [
    &ACCESS_TOKEN.spec,
    &WALLET_PASSWORD.spec,
    &WALLET_ID.spec,
    &RECOVERY_DESTINATION.spec,
    &BLOCK_CHAIR_API_KEY.spec,
    &USER_KEY.spec,
    &BACKUP_KEY.spec,
    &BITGO_PUB_KEY.spec,
    &REDEEM_SCRIPT.spec,
    &KEY_TYPE.spec,
    &ENV.spec,
];

/// Look up a descriptor by the environment variable it falls back to.
pub fn by_env(var: &str) -> Option<&'static FlagSpec> {
    REGISTRY.iter().copied().find(|spec| spec.env == Some(var))
}

/// Look up a descriptor by long flag name.
pub fn by_long(long: &str) -> Option<&'static FlagSpec> {
    REGISTRY.iter().copied().find(|spec| spec.long == long)
}
