//! Clap glue for flag descriptors.
//!
//! [`FlagArgs`] is flattened into a subcommand and registers one clap
//! argument per descriptor in its [`FlagGroup`]. It captures only what was
//! typed on the command line; env fallback happens at resolution time.

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use clap::{ArgMatches, Args, FromArgMatches};
use zeroize::Zeroizing;

use crate::core::flags::{self, FlagSource, FlagSpec};

/// The set of descriptors a subcommand accepts.
pub trait FlagGroup {
    fn specs() -> &'static [&'static FlagSpec];
}

/// Flags for `recover`.
pub enum HotRecoveryFlags {}

/// Flags for `recover-offline`.
pub enum OfflineRecoveryFlags {}

/// Flags for `sign`.
pub enum SignFlags {}

static HOT_RECOVERY: [&FlagSpec; 5] = [
    &flags::ENV.spec,
    &flags::WALLET_ID.spec,
    &flags::ACCESS_TOKEN.spec,
    &flags::WALLET_PASSWORD.spec,
    &flags::RECOVERY_DESTINATION.spec,
];

static OFFLINE_RECOVERY: [&FlagSpec; 7] = [
    &flags::ENV.spec,
    &flags::USER_KEY.spec,
    &flags::BACKUP_KEY.spec,
    &flags::BITGO_PUB_KEY.spec,
    &flags::WALLET_PASSWORD.spec,
    &flags::RECOVERY_DESTINATION.spec,
    &flags::BLOCK_CHAIR_API_KEY.spec,
];

static SIGN: [&FlagSpec; 6] = [
    &flags::ENV.spec,
    &flags::KEY_TYPE.spec,
    &flags::USER_KEY.spec,
    &flags::BACKUP_KEY.spec,
    &flags::WALLET_PASSWORD.spec,
    &flags::REDEEM_SCRIPT.spec,
];

impl FlagGroup for HotRecoveryFlags {
    fn specs() -> &'static [&'static FlagSpec] {
        &HOT_RECOVERY
    }
}

impl FlagGroup for OfflineRecoveryFlags {
    fn specs() -> &'static [&'static FlagSpec] {
        &OFFLINE_RECOVERY
    }
}

impl FlagGroup for SignFlags {
    fn specs() -> &'static [&'static FlagSpec] {
        &SIGN
    }
}

/// Raw command-line values for one flag group.
pub struct FlagArgs<G> {
    values: BTreeMap<&'static str, Zeroizing<String>>,
    group: PhantomData<G>,
}

impl<G> FlagArgs<G> {
    fn empty() -> Self {
        Self {
            values: BTreeMap::new(),
            group: PhantomData,
        }
    }
}

impl<G> Clone for FlagArgs<G> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            group: PhantomData,
        }
    }
}

impl<G> fmt::Debug for FlagArgs<G> {
    // Values may be secrets; only show which flags were given.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.values.keys()).finish()
    }
}

impl<G: FlagGroup> FlagSource for FlagArgs<G> {
    fn flag(&self, long: &str) -> Option<&str> {
        self.values.get(long).map(|v| v.as_str())
    }
}

impl<G: FlagGroup> FromArgMatches for FlagArgs<G> {
    fn from_arg_matches(matches: &ArgMatches) -> Result<Self, clap::Error> {
        let mut args = Self::empty();
        args.update_from_arg_matches(matches)?;
        Ok(args)
    }

    fn update_from_arg_matches(&mut self, matches: &ArgMatches) -> Result<(), clap::Error> {
        for spec in G::specs() {
            if let Some(value) = matches.get_one::<String>(spec.long) {
                self.values.insert(spec.long, Zeroizing::new(value.clone()));
            }
        }
        Ok(())
    }
}

impl<G: FlagGroup> Args for FlagArgs<G> {
    fn augment_args(cmd: clap::Command) -> clap::Command {
        cmd.args(G::specs().iter().map(|spec| spec.arg()))
    }

    fn augment_args_for_update(cmd: clap::Command) -> clap::Command {
        Self::augment_args(cmd)
    }
}
