// Path: crates/types/src/service_configs/mod.rs
//! Per-network parameter sets for each protocol rule.
//!
//! Each `Default` implementation encodes the protocol constants: genesis
//! contracts, selectors, ceilings and activation times. Deployment data that
//! varies per network comes from a [`NetworkTable`]. Parameter sets are built
//! once at startup and shared read-only afterwards.

use crate::chain::Schedule;
use crate::config::{LocalConfig, NetworkTable};
use alloy_primitives::{address, Address};

/// Daemon polling and inflation minting parameters.
pub mod daemon;
/// Governance settings propagation and balance migration parameters.
pub mod governance;
/// Prioritised contract call parameters.
pub mod prioritised;
/// State connector finalisation parameters.
pub mod state_connector;

pub use daemon::DaemonParams;
pub use governance::{BalanceMigration, GovernanceSettingsParams, PinnedValue};
pub use prioritised::PrioritisedParams;
pub use state_connector::StateConnectorParams;

/// The coinbase of every ordinary block. The daemon only runs while this is
/// the active coinbase, so privileged calls made under a signal address never
/// recurse into minting.
pub const BURN_ADDRESS: Address = address!("0100000000000000000000000000000000000000");

/// All parameter sets consumed by the protocol rules.
#[derive(Debug, Clone, Default)]
pub struct ProtocolParams {
    /// Daemon polling and minting.
    pub daemon: DaemonParams,
    /// Governance settings propagation.
    pub governance: GovernanceSettingsParams,
    /// State connector finalisation.
    pub state_connector: StateConnectorParams,
    /// Prioritised contract calls.
    pub prioritised: PrioritisedParams,
}

impl ProtocolParams {
    /// Applies the deployment data of every chain in `table`.
    ///
    /// Fields an entry leaves unset keep their current value.
    pub fn with_network_table(mut self, table: &NetworkTable) -> Self {
        for entry in &table.chains {
            let chain = entry.id;
            if !entry.attestors.is_empty() {
                let schedule = entry
                    .attestors
                    .iter()
                    .fold(Schedule::new(Vec::new()), |schedule, era| {
                        schedule.then(era.from, era.set.clone())
                    });
                self.state_connector.default_attestors.insert(chain, schedule);
            }
            let governance = &mut self.governance;
            if let Some(pin) = entry.governance_address {
                governance.governance_address.insert(chain, Some(pin));
            }
            if let Some(pin) = entry.timelock {
                governance.timelock.insert(chain, Some(pin));
            }
            if let Some(migration) = entry.initial_airdrop {
                governance.initial_airdrop.insert(chain, Some(migration));
            }
            if let Some(migration) = entry.distribution {
                governance.distribution.insert(chain, Some(migration));
            }
            if let Some(submitter) = entry.submitter_contract {
                self.prioritised.submitter_contract.insert(chain, Some(submitter));
            }
        }
        self
    }

    /// Applies node-local overrides that change parameter values.
    pub fn with_local_config(mut self, local: &LocalConfig) -> Self {
        self.prioritised = self.prioritised.with_local_config(local);
        self
    }
}
