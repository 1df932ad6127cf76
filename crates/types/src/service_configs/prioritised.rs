// Path: crates/types/src/service_configs/prioritised.rs

use crate::abi::{self, Selector};
use crate::chain::{is_active, ChainId, ChainValue};
use crate::config::LocalConfig;
use alloy_primitives::{address, Address};

/// The FTSO price submitter genesis contract.
pub const FTSO_CONTRACT: Address = address!("1000000000000000000000000000000000000003");

/// The FDC/FTSOv2 submission contract on Flare mainnet.
pub const FLARE_SUBMITTER_CONTRACT: Address =
    address!("2ca6571daa15ce734bbd0bf27d5c9d16787fc33f");

/// Largest calldata accepted from the submitter once prefix checks are active.
pub const SUBMITTER_CALLDATA_CAP: usize = 4_096;

/// Flare: submitter contract prioritisation.
pub const FLARE_SUBMITTER_ACTIVATION: u64 = 1_725_926_400; // 2024-09-10
/// Songbird: submitter contract prioritisation.
pub const SONGBIRD_SUBMITTER_ACTIVATION: u64 = 1_724_716_800; // 2024-08-27
/// Flare: calldata prefix restriction.
pub const FLARE_PREFIX_ACTIVATION: u64 = 1_736_899_200; // 2025-01-15
/// Songbird: calldata prefix restriction.
pub const SONGBIRD_PREFIX_ACTIVATION: u64 = 1_735_689_600; // 2025-01-01

/// Parameters for prioritised contract call classification.
///
/// Only the Flare mainnet submitter is compiled in. Other networks get theirs
/// from a [`NetworkTable`](crate::config::NetworkTable) or, on staging, from
/// the [`LocalConfig`] override; until then no submitter call is prioritised.
#[derive(Debug, Clone)]
pub struct PrioritisedParams {
    /// The FTSO price submitter contract per chain.
    pub ftso_contract: ChainValue<Address>,
    /// The submission contract per chain, where one is deployed.
    pub submitter_contract: ChainValue<Option<Address>>,
    /// Time from which submitter calls may be prioritised.
    pub submitter_activation: ChainValue<u64>,
    /// Upper bound on the gas a prioritised call may supply.
    pub max_gas: ChainValue<u64>,
    /// Time from which calldata prefixes are checked.
    pub prefix_activation: ChainValue<u64>,
    /// Calldata prefixes accepted on the FTSO contract after prefix activation.
    pub ftso_prefixes: ChainValue<Vec<Selector>>,
    /// Calldata prefixes accepted on the submitter after prefix activation.
    pub submitter_prefixes: ChainValue<Vec<Selector>>,
    /// Largest submitter calldata accepted after prefix activation.
    pub calldata_cap: usize,
}

impl Default for PrioritisedParams {
    fn default() -> Self {
        let ftso = vec![abi::SUBMIT_HASH, abi::SUBMIT_PRICE_HASHES, abi::REVEAL_PRICES];
        let submitter = vec![
            abi::SUBMIT_1,
            abi::SUBMIT_2,
            abi::SUBMIT_3,
            abi::SUBMIT_SIGNATURES,
        ];

        Self {
            ftso_contract: ChainValue::new(FTSO_CONTRACT),
            submitter_contract: ChainValue::new(None)
                .with(ChainId::FLARE, Some(FLARE_SUBMITTER_CONTRACT)),
            submitter_activation: ChainValue::new(u64::MAX)
                .with_all(&[ChainId::FLARE, ChainId::COSTON2], FLARE_SUBMITTER_ACTIVATION)
                .with_all(&[ChainId::SONGBIRD, ChainId::COSTON], SONGBIRD_SUBMITTER_ACTIVATION)
                .with_all(&[ChainId::STAGING, ChainId::LOCAL_FLARE, ChainId::LOCAL], 0),
            max_gas: ChainValue::new(3_000_000)
                .with_all(&ChainId::SONGBIRD_FAMILY, 2_000_000),
            prefix_activation: ChainValue::new(u64::MAX)
                .with_all(&[ChainId::FLARE, ChainId::COSTON2], FLARE_PREFIX_ACTIVATION)
                .with_all(&[ChainId::SONGBIRD, ChainId::COSTON], SONGBIRD_PREFIX_ACTIVATION)
                .with_all(&[ChainId::STAGING, ChainId::LOCAL_FLARE, ChainId::LOCAL], 0),
            ftso_prefixes: ChainValue::new(ftso),
            submitter_prefixes: ChainValue::new(submitter),
            calldata_cap: SUBMITTER_CALLDATA_CAP,
        }
    }
}

impl PrioritisedParams {
    /// Applies the staging submitter override, if one is configured.
    pub fn with_local_config(mut self, local: &LocalConfig) -> Self {
        if let Some(submitter) = local.staging_submitter {
            self.submitter_contract = self
                .submitter_contract
                .with(ChainId::STAGING, Some(submitter));
        }
        self
    }

    /// The FTSO contract on `chain`.
    pub fn ftso_contract(&self, chain: ChainId) -> Address {
        *self.ftso_contract.get(chain)
    }

    /// The submitter contract on `chain`, if one is configured.
    pub fn submitter_contract(&self, chain: ChainId) -> Option<Address> {
        *self.submitter_contract.get(chain)
    }

    /// Returns true if submitter calls may be prioritised on `chain` at `block_time`.
    pub fn submitter_active(&self, chain: ChainId, block_time: u64) -> bool {
        is_active(block_time, *self.submitter_activation.get(chain))
    }

    /// Returns true if calldata prefixes are checked on `chain` at `block_time`.
    pub fn prefixes_active(&self, chain: ChainId, block_time: u64) -> bool {
        is_active(block_time, *self.prefix_activation.get(chain))
    }

    /// The gas ceiling for prioritised calls on `chain`.
    pub fn max_gas(&self, chain: ChainId) -> u64 {
        *self.max_gas.get(chain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staging_override_applies_only_to_staging() {
        let custom = address!("00000000000000000000000000000000000000ff");
        let local = LocalConfig {
            staging_submitter: Some(custom),
            ..LocalConfig::default()
        };
        let params = PrioritisedParams::default().with_local_config(&local);
        assert_eq!(params.submitter_contract(ChainId::STAGING), Some(custom));
        assert_eq!(
            params.submitter_contract(ChainId::FLARE),
            Some(FLARE_SUBMITTER_CONTRACT)
        );
    }

    #[test]
    fn unconfigured_networks_have_no_submitter() {
        let params = PrioritisedParams::default();
        for chain in [ChainId::SONGBIRD, ChainId::COSTON, ChainId::COSTON2, ChainId::STAGING] {
            assert_eq!(params.submitter_contract(chain), None);
        }
    }

    #[test]
    fn prefix_activation_follows_submitter_activation() {
        let params = PrioritisedParams::default();
        for chain in [ChainId::FLARE, ChainId::SONGBIRD] {
            let submitter = *params.submitter_activation.get(chain);
            let prefix = *params.prefix_activation.get(chain);
            assert!(prefix > submitter);
        }
    }
}
