// Path: crates/types/src/service_configs/governance.rs

use crate::chain::{is_active, ChainId, ChainValue};
use alloy_primitives::{address, Address, U256};
use serde::{Deserialize, Serialize};

/// The governance settings genesis contract.
pub const GOVERNANCE_SETTINGS_CONTRACT: Address =
    address!("1000000000000000000000000000000000000007");

/// The reserved sender substituted into the coinbase for governance calls.
pub const GOVERNANCE_COINBASE_SIGNAL: Address =
    address!("00000000000000000000000000000000000dead0");

/// Songbird: time at which governance-setting calls are recognized.
pub const SONGBIRD_GOVERNANCE_ACTIVATION: u64 = 1_658_430_000; // 2022-07-21
/// Coston: time at which governance-setting calls are recognized.
pub const COSTON_GOVERNANCE_ACTIVATION: u64 = 1_654_167_600; // 2022-06-02

/// The single value a setting may take, from a fixed activation time.
///
/// An absent entry means the setting is never permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinnedValue<T> {
    /// The block time from which `value` is accepted.
    pub activation_time: u64,
    /// The only accepted value.
    pub value: T,
}

impl<T: PartialEq> PinnedValue<T> {
    /// Returns true if `proposed` is the pinned value and it is active at `time`.
    pub fn permits(&self, time: u64, proposed: &T) -> bool {
        is_active(time, self.activation_time) && self.value == *proposed
    }
}

/// A one-shot balance move triggered by a privileged genesis contract call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceMigration {
    /// The genesis contract whose call triggers the migration.
    pub contract: Address,
    /// The block time from which the migration is recognized.
    pub activation_time: u64,
    /// The address whose entire balance is moved.
    pub source: Address,
    /// The address that receives the balance.
    pub target: Address,
}

/// Parameters for governance settings propagation and balance migrations.
///
/// Allow-list values and migration addresses are deployment data. None are
/// compiled in; nodes supply them through a
/// [`NetworkTable`](crate::config::NetworkTable).
#[derive(Debug, Clone)]
pub struct GovernanceSettingsParams {
    /// The governance settings contract per chain.
    pub settings_contract: ChainValue<Address>,
    /// Time from which governance-setting calls are recognized.
    pub settings_activation: ChainValue<u64>,
    /// The coinbase signal used for privileged governance calls.
    pub coinbase_signal: ChainValue<Address>,
    /// Allow-list for `setGovernanceAddress`.
    pub governance_address: ChainValue<Option<PinnedValue<Address>>>,
    /// Allow-list for `setTimelock`, in seconds.
    pub timelock: ChainValue<Option<PinnedValue<u64>>>,
    /// The initial airdrop address change, where the chain has one.
    pub initial_airdrop: ChainValue<Option<BalanceMigration>>,
    /// The distribution address change, where the chain has one.
    pub distribution: ChainValue<Option<BalanceMigration>>,
}

impl Default for GovernanceSettingsParams {
    fn default() -> Self {
        Self {
            settings_contract: ChainValue::new(GOVERNANCE_SETTINGS_CONTRACT),
            settings_activation: ChainValue::new(u64::MAX)
                .with(ChainId::SONGBIRD, SONGBIRD_GOVERNANCE_ACTIVATION)
                .with(ChainId::COSTON, COSTON_GOVERNANCE_ACTIVATION)
                .with(ChainId::LOCAL, 0),
            coinbase_signal: ChainValue::new(GOVERNANCE_COINBASE_SIGNAL),
            governance_address: ChainValue::new(None),
            timelock: ChainValue::new(None),
            initial_airdrop: ChainValue::new(None),
            distribution: ChainValue::new(None),
        }
    }
}

impl GovernanceSettingsParams {
    /// Returns true if governance-setting calls are recognized on `chain` at `block_time`.
    pub fn settings_active(&self, chain: ChainId, block_time: u64) -> bool {
        is_active(block_time, *self.settings_activation.get(chain))
    }

    /// Returns true if `proposed` may become the governance address.
    pub fn permits_governance_address(
        &self,
        chain: ChainId,
        block_time: u64,
        proposed: Address,
    ) -> bool {
        self.governance_address
            .get(chain)
            .as_ref()
            .is_some_and(|pin| pin.permits(block_time, &proposed))
    }

    /// Returns true if `proposed` may become the timelock.
    pub fn permits_timelock(&self, chain: ChainId, block_time: u64, proposed: U256) -> bool {
        let Ok(proposed) = u64::try_from(proposed) else {
            return false;
        };
        self.timelock
            .get(chain)
            .as_ref()
            .is_some_and(|pin| pin.permits(block_time, &proposed))
    }

    /// The initial airdrop migration on `chain`, if active at `block_time`.
    pub fn initial_airdrop(&self, chain: ChainId, block_time: u64) -> Option<BalanceMigration> {
        (*self.initial_airdrop.get(chain))
            .filter(|m| is_active(block_time, m.activation_time))
    }

    /// The distribution migration on `chain`, if active at `block_time`.
    pub fn distribution(&self, chain: ChainId, block_time: u64) -> Option<BalanceMigration> {
        (*self.distribution.get(chain))
            .filter(|m| is_active(block_time, m.activation_time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PINNED: Address = address!("00000000000000000000000000000000000000a1");

    fn pinned_on(chain: ChainId, activation_time: u64) -> GovernanceSettingsParams {
        let mut params = GovernanceSettingsParams::default();
        params.governance_address = params.governance_address.with(
            chain,
            Some(PinnedValue {
                activation_time,
                value: PINNED,
            }),
        );
        params.timelock = params.timelock.with(
            chain,
            Some(PinnedValue {
                activation_time,
                value: 3_600,
            }),
        );
        params
    }

    #[test]
    fn defaults_permit_nothing() {
        let params = GovernanceSettingsParams::default();
        for chain in [ChainId::SONGBIRD, ChainId::COSTON, ChainId::LOCAL, ChainId::FLARE] {
            assert!(!params.permits_governance_address(chain, u64::MAX, PINNED));
            assert!(!params.permits_timelock(chain, u64::MAX, U256::from(3_600u64)));
            assert!(params.initial_airdrop(chain, u64::MAX).is_none());
            assert!(params.distribution(chain, u64::MAX).is_none());
        }
    }

    #[test]
    fn governance_address_requires_time_and_value() {
        let params = pinned_on(ChainId::SONGBIRD, 1_000);
        let chain = ChainId::SONGBIRD;
        assert!(!params.permits_governance_address(chain, 999, PINNED));
        assert!(params.permits_governance_address(chain, 1_000, PINNED));
        assert!(!params.permits_governance_address(chain, 1_000, Address::ZERO));
        assert!(!params.permits_governance_address(ChainId::COSTON, 1_000, PINNED));
    }

    #[test]
    fn timelock_allow_list() {
        let params = pinned_on(ChainId::COSTON, 10);
        assert!(params.permits_timelock(ChainId::COSTON, 10, U256::from(3_600u64)));
        assert!(!params.permits_timelock(ChainId::COSTON, 10, U256::from(3_601u64)));
        assert!(!params.permits_timelock(ChainId::COSTON, 10, U256::MAX));
    }

    #[test]
    fn settings_activation_is_per_chain() {
        let params = GovernanceSettingsParams::default();
        assert!(params.settings_active(ChainId::SONGBIRD, SONGBIRD_GOVERNANCE_ACTIVATION));
        assert!(!params.settings_active(ChainId::SONGBIRD, SONGBIRD_GOVERNANCE_ACTIVATION - 1));
        assert!(params.settings_active(ChainId::LOCAL, 0));
        assert!(!params.settings_active(ChainId::FLARE, u64::MAX - 1));
    }

    #[test]
    fn migrations_are_time_gated() {
        let migration = BalanceMigration {
            contract: address!("00000000000000000000000000000000000000b1"),
            activation_time: 500,
            source: address!("00000000000000000000000000000000000000b1"),
            target: address!("00000000000000000000000000000000000000b2"),
        };
        let mut params = GovernanceSettingsParams::default();
        params.initial_airdrop = params.initial_airdrop.with(ChainId::FLARE, Some(migration));
        assert!(params.initial_airdrop(ChainId::FLARE, 499).is_none());
        assert_eq!(params.initial_airdrop(ChainId::FLARE, 500), Some(migration));
        assert!(params.distribution(ChainId::FLARE, u64::MAX).is_none());
    }
}
