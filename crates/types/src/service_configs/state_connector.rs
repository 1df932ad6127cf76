// Path: crates/types/src/service_configs/state_connector.rs

use crate::abi::{self, Selector};
use crate::chain::{is_active, ChainId, ChainValue, Schedule};
use alloy_primitives::{address, Address};

/// The state connector genesis contract.
pub const STATE_CONNECTOR_CONTRACT: Address =
    address!("1000000000000000000000000000000000000001");

/// The reserved sender substituted into the coinbase for `finaliseRound`.
pub const STATE_CONNECTOR_COINBASE_SIGNAL: Address =
    address!("000000000000000000000000000000000000dead");

/// Gas granted to each attestor query.
pub const ATTESTATION_GAS: u64 = 20_000;

/// Songbird: state connector activation.
pub const SONGBIRD_STATE_CONNECTOR_ACTIVATION: u64 = 1_658_430_000; // 2022-07-21
/// Coston: state connector activation.
pub const COSTON_STATE_CONNECTOR_ACTIVATION: u64 = 1_658_239_200; // 2022-07-19

/// Parameters for state connector round finalisation.
///
/// Default attestor sets are deployment data and none are compiled in. Nodes
/// supply them through a [`NetworkTable`](crate::config::NetworkTable) or
/// [`StateConnectorParams::with_default_attestors`]; a chain without a set
/// never reaches a majority.
#[derive(Debug, Clone)]
pub struct StateConnectorParams {
    /// The state connector contract per chain.
    pub contract: ChainValue<Address>,
    /// Time from which `submitAttestation` calls trigger finalisation.
    pub activation: ChainValue<u64>,
    /// The coinbase signal used for the privileged finalise call.
    pub coinbase_signal: ChainValue<Address>,
    /// Selector used to query each attestor.
    pub attestation_selector: Selector,
    /// Selector used to finalise a round.
    pub finalise_selector: Selector,
    /// Selector of the transaction that triggers finalisation.
    pub submit_selector: Selector,
    /// Gas granted to each attestor query.
    pub attestation_gas: u64,
    /// The default attestor set per chain, by block time.
    pub default_attestors: ChainValue<Schedule<Vec<Address>>>,
}

impl Default for StateConnectorParams {
    fn default() -> Self {
        Self {
            contract: ChainValue::new(STATE_CONNECTOR_CONTRACT),
            activation: ChainValue::new(u64::MAX)
                .with(ChainId::SONGBIRD, SONGBIRD_STATE_CONNECTOR_ACTIVATION)
                .with(ChainId::COSTON, COSTON_STATE_CONNECTOR_ACTIVATION)
                .with(ChainId::LOCAL, 0),
            coinbase_signal: ChainValue::new(STATE_CONNECTOR_COINBASE_SIGNAL),
            attestation_selector: abi::GET_ATTESTATION,
            finalise_selector: abi::FINALISE_ROUND,
            submit_selector: abi::SUBMIT_ATTESTATION,
            attestation_gas: ATTESTATION_GAS,
            default_attestors: ChainValue::new(Schedule::new(Vec::new())),
        }
    }
}

impl StateConnectorParams {
    /// Replaces the default attestor schedule on `chain`.
    pub fn with_default_attestors(
        mut self,
        chain: ChainId,
        attestors: Schedule<Vec<Address>>,
    ) -> Self {
        self.default_attestors = self.default_attestors.with(chain, attestors);
        self
    }

    /// Returns true if finalisation is active on `chain` at `block_time`.
    pub fn is_active(&self, chain: ChainId, block_time: u64) -> bool {
        is_active(block_time, *self.activation.get(chain))
    }

    /// The state connector contract on `chain`.
    pub fn contract(&self, chain: ChainId) -> Address {
        *self.contract.get(chain)
    }

    /// The coinbase signal for `finaliseRound` on `chain`.
    pub fn coinbase_signal(&self, chain: ChainId) -> Address {
        *self.coinbase_signal.get(chain)
    }

    /// The default attestor set on `chain` at `block_time`.
    pub fn default_attestors(&self, chain: ChainId, block_time: u64) -> &[Address] {
        self.default_attestors.get(chain).at(block_time)
    }
}
