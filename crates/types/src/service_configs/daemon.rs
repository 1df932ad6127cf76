// Path: crates/types/src/service_configs/daemon.rs

use crate::abi::{self, Selector};
use crate::chain::{ChainId, ChainValue, Schedule};
use alloy_primitives::{address, Address, U256};

/// The daemon genesis contract.
pub const DAEMON_CONTRACT: Address = address!("1000000000000000000000000000000000000002");

/// 60,000,000 FLR in wei.
pub const FLARE_MAX_MINT_REQUEST: U256 =
    U256::from_limbs([0x8478_07b1_bc00_0000, 0x31_a17e, 0, 0]);
/// 50,000,000 SGB in wei.
pub const SONGBIRD_MAX_MINT_REQUEST: U256 =
    U256::from_limbs([0x6e64_0669_7200_0000, 0x29_5be9, 0, 0]);

/// Parameters for daemon polling and inflation minting.
#[derive(Debug, Clone)]
pub struct DaemonParams {
    /// The daemon contract, by block time.
    pub contract: Schedule<Address>,
    /// The selector invoked on the daemon, by block time.
    pub selector: Schedule<Selector>,
    /// Multiplier applied to the block gas limit for the daemon call.
    pub gas_multiplier: ChainValue<Schedule<u64>>,
    /// Largest mint request honoured per chain.
    pub max_mint_request: ChainValue<U256>,
}

impl Default for DaemonParams {
    fn default() -> Self {
        Self {
            contract: Schedule::new(DAEMON_CONTRACT),
            selector: Schedule::new(abi::TRIGGER),
            gas_multiplier: ChainValue::new(Schedule::new(100)),
            max_mint_request: ChainValue::new(SONGBIRD_MAX_MINT_REQUEST)
                .with_all(&ChainId::FLARE_FAMILY, FLARE_MAX_MINT_REQUEST),
        }
    }
}

impl DaemonParams {
    /// The daemon contract active at `block_time`.
    pub fn contract(&self, block_time: u64) -> Address {
        *self.contract.at(block_time)
    }

    /// The daemon selector active at `block_time`.
    pub fn selector(&self, block_time: u64) -> Selector {
        *self.selector.at(block_time)
    }

    /// The gas multiplier active on `chain` at `block_time`.
    pub fn gas_multiplier(&self, chain: ChainId, block_time: u64) -> u64 {
        *self.gas_multiplier.get(chain).at(block_time)
    }

    /// The largest mint request honoured on `chain`.
    pub fn max_mint_request(&self, chain: ChainId, _block_time: u64) -> U256 {
        *self.max_mint_request.get(chain)
    }

    /// The address credited with minted value: the daemon contract itself.
    pub fn mint_target(&self, block_time: u64) -> Address {
        self.contract(block_time)
    }
}
