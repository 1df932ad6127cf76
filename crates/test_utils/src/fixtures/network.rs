// Path: crates/test_utils/src/fixtures/network.rs
//! A synthetic network table for scenario tests.
//!
//! Every address here is made up for tests and belongs to no live network.

use super::attestors;
use alloy_primitives::{address, Address};
use flare_types::chain::ChainId;
use flare_types::config::{AttestorEra, ChainEntry, NetworkTable};
use flare_types::service_configs::governance::{
    COSTON_GOVERNANCE_ACTIVATION, SONGBIRD_GOVERNANCE_ACTIVATION,
};
use flare_types::service_configs::{BalanceMigration, PinnedValue, ProtocolParams};
use std::sync::Arc;

/// Tag byte shared by every default attestor in the test table.
pub const DEFAULT_ATTESTOR_TAG: u8 = 0xa7;
/// Size of the Songbird default attestor set in the test table.
pub const SONGBIRD_ATTESTOR_COUNT: u8 = 9;
/// Size of the Coston and local default attestor sets in the test table.
pub const SMALL_ATTESTOR_COUNT: u8 = 5;

/// The governance address the test table permits.
pub const TEST_GOVERNANCE_ADDRESS: Address =
    address!("00000000000000000000000000000000000000e1");
/// The timelock, in seconds, the test table permits.
pub const TEST_TIMELOCK: u64 = 3_600;
/// The Songbird submitter contract in the test table.
pub const TEST_SUBMITTER: Address = address!("00000000000000000000000000000000000000c1");

/// Activation time of both balance migrations in the test table.
pub const TEST_MIGRATION_ACTIVATION: u64 = 1_000_000;
/// The initial airdrop migration in the test table.
pub const TEST_AIRDROP: BalanceMigration = BalanceMigration {
    contract: address!("00000000000000000000000000000000000000d1"),
    activation_time: TEST_MIGRATION_ACTIVATION,
    source: address!("00000000000000000000000000000000000000d1"),
    target: address!("00000000000000000000000000000000000000d2"),
};
/// The distribution migration in the test table.
pub const TEST_DISTRIBUTION: BalanceMigration = BalanceMigration {
    contract: address!("00000000000000000000000000000000000000d3"),
    activation_time: TEST_MIGRATION_ACTIVATION,
    source: address!("00000000000000000000000000000000000000d3"),
    target: address!("00000000000000000000000000000000000000d4"),
};

fn governed(id: ChainId, activation_time: u64, set_size: u8) -> ChainEntry {
    ChainEntry {
        id,
        attestors: vec![AttestorEra {
            from: 0,
            set: attestors(DEFAULT_ATTESTOR_TAG, set_size),
        }],
        governance_address: Some(PinnedValue {
            activation_time,
            value: TEST_GOVERNANCE_ADDRESS,
        }),
        timelock: Some(PinnedValue {
            activation_time,
            value: TEST_TIMELOCK,
        }),
        ..ChainEntry::default()
    }
}

fn migrating(id: ChainId) -> ChainEntry {
    ChainEntry {
        id,
        initial_airdrop: Some(TEST_AIRDROP),
        distribution: Some(TEST_DISTRIBUTION),
        ..ChainEntry::default()
    }
}

/// Deployment data for every chain the scenario tests run on.
pub fn network_table() -> NetworkTable {
    NetworkTable {
        chains: vec![
            ChainEntry {
                submitter_contract: Some(TEST_SUBMITTER),
                ..governed(
                    ChainId::SONGBIRD,
                    SONGBIRD_GOVERNANCE_ACTIVATION,
                    SONGBIRD_ATTESTOR_COUNT,
                )
            },
            governed(ChainId::COSTON, COSTON_GOVERNANCE_ACTIVATION, SMALL_ATTESTOR_COUNT),
            governed(ChainId::LOCAL, 0, SMALL_ATTESTOR_COUNT),
            migrating(ChainId::FLARE),
            migrating(ChainId::LOCAL_FLARE),
        ],
    }
}

/// The protocol constants with [`network_table`] applied.
pub fn protocol_params() -> ProtocolParams {
    ProtocolParams::default().with_network_table(&network_table())
}

/// [`protocol_params`] ready to hand to a rule.
pub fn shared_params() -> Arc<ProtocolParams> {
    Arc::new(protocol_params())
}
