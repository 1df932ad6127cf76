// Path: crates/types/src/config/mod.rs

//! Process-wide configuration for the protocol rules.
//!
//! These values are read once at startup, either from the environment or from
//! a host-supplied TOML section, and are immutable afterwards.
use crate::error::ConfigError;
use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

mod network;

pub use network::{AttestorEra, ChainEntry, NetworkTable, NETWORK_TABLE_ENV};

/// Environment key holding a comma-separated list of local attestor addresses.
pub const LOCAL_ATTESTATION_PROVIDERS_ENV: &str = "LOCAL_ATTESTATION_PROVIDERS";
/// Environment key enabling the fork-on-divergence safety stop.
pub const LOCAL_ATTESTATION_FORK_ENV: &str = "LOCAL_ATTESTATION_FORK";
/// Environment key overriding the prioritised submitter address on staging.
pub const STAGING_SUBMITTER_ADDRESS_ENV: &str = "STAGING_SUBMITTER_ADDRESS";

/// Node-local overrides consumed by the state connector and the
/// prioritised-call classifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalConfig {
    /// Attestors this node trusts in addition to the default set. When
    /// non-empty, every finalisation is cross-checked against this set.
    #[serde(default)]
    pub local_attestors: Vec<Address>,
    /// If true, a disagreement between the default and local majority
    /// decisions aborts the transition instead of following the default set.
    #[serde(default)]
    pub fork_on_divergence: bool,
    /// Replaces the prioritised submitter contract on the staging network.
    #[serde(default)]
    pub staging_submitter: Option<Address>,
}

impl LocalConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through an arbitrary key lookup.
    ///
    /// Malformed values fail closed: an unparsable attestor list yields an
    /// empty list and an unparsable staging address yields no override.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let local_attestors = match lookup(LOCAL_ATTESTATION_PROVIDERS_ENV) {
            Some(raw) => parse_address_list(LOCAL_ATTESTATION_PROVIDERS_ENV, &raw)
                .unwrap_or_else(|e| {
                    tracing::warn!(target: "config", error = %e, "Ignoring local attestor list");
                    Vec::new()
                }),
            None => Vec::new(),
        };

        let fork_on_divergence = lookup(LOCAL_ATTESTATION_FORK_ENV)
            .map(|raw| parse_flag(&raw))
            .unwrap_or(false);

        let staging_submitter = lookup(STAGING_SUBMITTER_ADDRESS_ENV).and_then(|raw| {
            let raw = raw.trim();
            if raw.is_empty() {
                return None;
            }
            match Address::from_str(raw) {
                Ok(addr) => Some(addr),
                Err(_) => {
                    tracing::warn!(
                        target: "config",
                        value = raw,
                        "Ignoring unparsable staging submitter address"
                    );
                    None
                }
            }
        });

        Self {
            local_attestors,
            fork_on_divergence,
            staging_submitter,
        }
    }

    /// Returns true if a local attestor set is configured.
    pub fn has_local_attestors(&self) -> bool {
        !self.local_attestors.is_empty()
    }
}

/// Parses a comma-separated list of hex addresses. Blank entries are skipped.
pub fn parse_address_list(key: &'static str, raw: &str) -> Result<Vec<Address>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            Address::from_str(entry).map_err(|_| ConfigError::InvalidAddress {
                key,
                entry: entry.to_string(),
            })
        })
        .collect()
}

/// Interprets a boolean-like flag (`1`, `true`, `yes`, `on`; case-insensitive).
pub fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
