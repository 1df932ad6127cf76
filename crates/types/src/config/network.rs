// Path: crates/types/src/config/network.rs

//! Per-network deployment data supplied by the node operator.
//!
//! Attestor sets, governance allow-list values, balance migrations and
//! submitter addresses differ per deployment and are not compiled in. A node
//! loads them from a TOML table shaped like:
//!
//! ```toml
//! [[chain]]
//! id = 19
//! submitter_contract = "0x..."
//!
//! [[chain.attestors]]
//! from = 0
//! set = ["0x...", "0x..."]
//!
//! [chain.governance_address]
//! activation_time = 1658430000
//! value = "0x..."
//! ```

use crate::chain::ChainId;
use crate::error::ConfigError;
use crate::service_configs::governance::{BalanceMigration, PinnedValue};
use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// Environment key naming the TOML file holding the node's [`NetworkTable`].
pub const NETWORK_TABLE_ENV: &str = "FLARE_NETWORK_TABLE";

/// A default attestor set active from `from` onwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttestorEra {
    /// The block time at which this set takes over.
    pub from: u64,
    /// The attestors queried during this era.
    pub set: Vec<Address>,
}

/// Deployment data for one network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainEntry {
    /// The chain this entry applies to.
    pub id: ChainId,
    /// The FDC/FTSOv2 submission contract.
    #[serde(default)]
    pub submitter_contract: Option<Address>,
    /// Default attestor sets, by activation time.
    #[serde(default)]
    pub attestors: Vec<AttestorEra>,
    /// The governance address accepted by `setGovernanceAddress`.
    #[serde(default)]
    pub governance_address: Option<PinnedValue<Address>>,
    /// The timelock, in seconds, accepted by `setTimelock`.
    #[serde(default)]
    pub timelock: Option<PinnedValue<u64>>,
    /// The initial airdrop address change.
    #[serde(default)]
    pub initial_airdrop: Option<BalanceMigration>,
    /// The distribution address change.
    #[serde(default)]
    pub distribution: Option<BalanceMigration>,
}

/// Deployment data for every network a node may run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkTable {
    /// One entry per chain.
    #[serde(default, rename = "chain")]
    pub chains: Vec<ChainEntry>,
}

impl NetworkTable {
    /// Parses and validates a table from TOML.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let table: Self =
            toml::from_str(raw).map_err(|e| ConfigError::InvalidNetworkTable(e.to_string()))?;
        table.validate()?;
        Ok(table)
    }

    /// Reads and validates a table from a TOML file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::InvalidNetworkTable(format!("{}: {e}", path.display()))
        })?;
        Self::from_toml_str(&raw)
    }

    /// Loads the table named by [`NETWORK_TABLE_ENV`].
    ///
    /// Fails closed: an unset key, an unreadable file or an invalid table all
    /// yield an empty table, leaving every deployment value unconfigured.
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(NETWORK_TABLE_ENV) else {
            return Self::default();
        };
        Self::from_path(Path::new(&path)).unwrap_or_else(|e| {
            tracing::warn!(target: "config", error = %e, "Ignoring network table");
            Self::default()
        })
    }

    /// Rejects duplicate chain entries and duplicate attestor era start times.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut ids = BTreeSet::new();
        for entry in &self.chains {
            if !ids.insert(entry.id) {
                return Err(ConfigError::InvalidNetworkTable(format!(
                    "chain {} listed more than once",
                    entry.id
                )));
            }
            let mut starts = BTreeSet::new();
            for era in &entry.attestors {
                if !starts.insert(era.from) {
                    return Err(ConfigError::InvalidNetworkTable(format!(
                        "chain {} has two attestor sets starting at {}",
                        entry.id, era.from
                    )));
                }
            }
        }
        Ok(())
    }

    /// The entry for `chain`, if the table has one.
    pub fn chain(&self, chain: ChainId) -> Option<&ChainEntry> {
        self.chains.iter().find(|entry| entry.id == chain)
    }
}
