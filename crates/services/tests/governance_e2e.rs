// Path: crates/services/tests/governance_e2e.rs

use alloy_primitives::{Address, U256};
use anyhow::Result;
use flare_api::error::{GovernanceError, HostError};
use flare_api::host::ExecutionHost;
use flare_services::GovernanceSettings;
use flare_test_utils::fixtures::network::{
    TEST_AIRDROP, TEST_GOVERNANCE_ADDRESS, TEST_MIGRATION_ACTIVATION, TEST_TIMELOCK,
};
use flare_test_utils::{assert_balance, assert_err_code, fixtures, init_tracing, MockHost};
use flare_types::abi;
use flare_types::chain::ChainId;
use flare_types::service_configs::governance::{
    COSTON_GOVERNANCE_ACTIVATION, GOVERNANCE_COINBASE_SIGNAL, GOVERNANCE_SETTINGS_CONTRACT,
    SONGBIRD_GOVERNANCE_ACTIVATION,
};
use flare_types::service_configs::BURN_ADDRESS;

fn gov() -> GovernanceSettings {
    GovernanceSettings::new(fixtures::shared_params())
}

fn set_governance_address(address: Address) -> Vec<u8> {
    fixtures::calldata(abi::SET_GOVERNANCE_ADDRESS, &[fixtures::address_word(address)])
}

#[test]
fn permitted_governance_address_is_propagated_under_signal() -> Result<()> {
    init_tracing()?;
    let mut host = MockHost::new(ChainId::SONGBIRD, SONGBIRD_GOVERNANCE_ACTIVATION);
    let data = set_governance_address(TEST_GOVERNANCE_ADDRESS);

    let gov = gov();
    let proposed = gov.set_governance_address(&mut host, GOVERNANCE_SETTINGS_CONTRACT, &data)?;
    assert_eq!(proposed, TEST_GOVERNANCE_ADDRESS);

    let calls = host.calls_to(GOVERNANCE_SETTINGS_CONTRACT);
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].data, data);
    assert_eq!(calls[0].caller, GOVERNANCE_COINBASE_SIGNAL);
    assert_eq!(calls[0].coinbase, GOVERNANCE_COINBASE_SIGNAL);
    assert_eq!(host.coinbase(), BURN_ADDRESS);
    Ok(())
}

#[test]
fn unlisted_governance_address_is_not_permitted() -> Result<()> {
    init_tracing()?;
    let mut host = MockHost::new(ChainId::SONGBIRD, SONGBIRD_GOVERNANCE_ACTIVATION);
    let data = set_governance_address(Address::with_last_byte(0x66));

    let err = assert_err_code!(
        gov().set_governance_address(
            &mut host,
            GOVERNANCE_SETTINGS_CONTRACT,
            &data
        ),
        "GOVERNANCE_NOT_PERMITTED"
    );
    assert!(matches!(
        err,
        GovernanceError::NotPermitted { chain_id: 19, .. }
    ));
    assert!(host.calls().is_empty());
    Ok(())
}

#[test]
fn governance_address_before_activation_is_not_permitted() -> Result<()> {
    init_tracing()?;
    let mut host = MockHost::new(ChainId::SONGBIRD, SONGBIRD_GOVERNANCE_ACTIVATION - 1);
    let data = set_governance_address(TEST_GOVERNANCE_ADDRESS);
    assert_err_code!(
        gov().set_governance_address(
            &mut host,
            GOVERNANCE_SETTINGS_CONTRACT,
            &data
        ),
        "GOVERNANCE_NOT_PERMITTED"
    );
    Ok(())
}

#[test]
fn malformed_calldata_is_invalid_calldata() -> Result<()> {
    init_tracing()?;
    let mut host = MockHost::new(ChainId::SONGBIRD, SONGBIRD_GOVERNANCE_ACTIVATION);
    let gov = gov();

    let truncated = abi::SET_GOVERNANCE_ADDRESS.to_vec();
    assert_err_code!(
        gov.set_governance_address(&mut host, GOVERNANCE_SETTINGS_CONTRACT, &truncated),
        "GOVERNANCE_INVALID_CALLDATA"
    );

    let dirty = fixtures::calldata(abi::SET_GOVERNANCE_ADDRESS, &[[0xff; 32]]);
    assert_err_code!(
        gov.set_governance_address(&mut host, GOVERNANCE_SETTINGS_CONTRACT, &dirty),
        "GOVERNANCE_INVALID_CALLDATA"
    );
    assert!(host.calls().is_empty());
    Ok(())
}

#[test]
fn timelock_allow_list_on_coston() -> Result<()> {
    init_tracing()?;
    let mut host = MockHost::new(ChainId::COSTON, COSTON_GOVERNANCE_ACTIVATION);
    let gov = gov();

    let permitted = fixtures::calldata(abi::SET_TIMELOCK, &[fixtures::word(TEST_TIMELOCK)]);
    let timelock = gov.set_timelock(&mut host, GOVERNANCE_SETTINGS_CONTRACT, &permitted)?;
    assert_eq!(timelock, U256::from(TEST_TIMELOCK));

    let rejected = fixtures::calldata(abi::SET_TIMELOCK, &[fixtures::word(1)]);
    assert_err_code!(
        gov.set_timelock(&mut host, GOVERNANCE_SETTINGS_CONTRACT, &rejected),
        "GOVERNANCE_NOT_PERMITTED"
    );
    assert_eq!(host.calls_to(GOVERNANCE_SETTINGS_CONTRACT).len(), 1);
    Ok(())
}

#[test]
fn privileged_failure_restores_coinbase() -> Result<()> {
    init_tracing()?;
    let mut host = MockHost::new(ChainId::SONGBIRD, SONGBIRD_GOVERNANCE_ACTIVATION);
    host.fail(GOVERNANCE_SETTINGS_CONTRACT, HostError::Reverted("only governance".into()));
    let data = set_governance_address(TEST_GOVERNANCE_ADDRESS);

    assert_err_code!(
        gov().set_governance_address(
            &mut host,
            GOVERNANCE_SETTINGS_CONTRACT,
            &data
        ),
        "GOVERNANCE_HOST_ERROR"
    );
    assert_eq!(host.calls()[0].coinbase, GOVERNANCE_COINBASE_SIGNAL);
    assert_eq!(host.coinbase(), BURN_ADDRESS);
    Ok(())
}

#[test]
fn initial_airdrop_moves_full_balance() -> Result<()> {
    init_tracing()?;
    let gov = gov();
    let migration = gov
        .params()
        .initial_airdrop(ChainId::FLARE, TEST_MIGRATION_ACTIVATION)
        .ok_or_else(|| anyhow::anyhow!("flare has an airdrop migration"))?;

    let mut host = MockHost::new(ChainId::FLARE, TEST_MIGRATION_ACTIVATION);
    host.set_balance(migration.source, U256::from(900u64));
    host.set_balance(migration.target, U256::from(100u64));

    let data = abi::UPDATE_INITIAL_AIRDROP_ADDRESS.to_vec();
    let moved = gov.update_initial_airdrop_address(&mut host, migration.contract, &data)?;

    assert_eq!(moved, U256::from(900u64));
    assert_balance!(host, migration.source, 0u64);
    assert_balance!(host, migration.target, 1_000u64);
    let calls = host.calls_to(migration.contract);
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].coinbase, GOVERNANCE_COINBASE_SIGNAL);
    Ok(())
}

#[test]
fn distribution_migration_is_time_gated() -> Result<()> {
    init_tracing()?;
    let gov = gov();
    let data = abi::UPDATE_DISTRIBUTION_ADDRESS.to_vec();
    let contract = gov
        .params()
        .distribution(ChainId::FLARE, TEST_MIGRATION_ACTIVATION)
        .map(|m| m.contract)
        .ok_or_else(|| anyhow::anyhow!("flare has a distribution migration"))?;

    let mut early = MockHost::new(ChainId::FLARE, TEST_MIGRATION_ACTIVATION - 1);
    assert_err_code!(
        gov.update_distribution_address(&mut early, contract, &data),
        "GOVERNANCE_MIGRATION_UNAVAILABLE"
    );
    assert!(early.calls().is_empty());

    let mut songbird = MockHost::new(ChainId::SONGBIRD, u64::MAX);
    assert_err_code!(
        gov.update_distribution_address(&mut songbird, contract, &data),
        "GOVERNANCE_MIGRATION_UNAVAILABLE"
    );
    Ok(())
}

#[test]
fn failed_migration_call_moves_nothing() -> Result<()> {
    init_tracing()?;
    let gov = gov();
    let migration = gov
        .params()
        .distribution(ChainId::FLARE, TEST_MIGRATION_ACTIVATION)
        .ok_or_else(|| anyhow::anyhow!("flare has a distribution migration"))?;

    let mut host = MockHost::new(ChainId::FLARE, TEST_MIGRATION_ACTIVATION);
    host.set_balance(migration.source, U256::from(5u64));
    host.fail(migration.contract, HostError::OutOfGas);

    let data = abi::UPDATE_DISTRIBUTION_ADDRESS.to_vec();
    assert_err_code!(
        gov.update_distribution_address(&mut host, migration.contract, &data),
        "GOVERNANCE_HOST_ERROR"
    );
    assert_balance!(host, migration.source, 5u64);
    assert_balance!(host, migration.target, 0u64);
    Ok(())
}

#[test]
fn non_burn_coinbase_is_an_invalid_signal() -> Result<()> {
    init_tracing()?;
    let other = Address::with_last_byte(0x77);
    let gov = gov();

    let mut host =
        MockHost::new(ChainId::SONGBIRD, SONGBIRD_GOVERNANCE_ACTIVATION).with_coinbase(other);
    let data = set_governance_address(TEST_GOVERNANCE_ADDRESS);
    let err = assert_err_code!(
        gov.set_governance_address(&mut host, GOVERNANCE_SETTINGS_CONTRACT, &data),
        "GOVERNANCE_INVALID_SIGNAL"
    );
    assert!(matches!(err, GovernanceError::InvalidSignal(_)));

    let timelock = fixtures::calldata(abi::SET_TIMELOCK, &[fixtures::word(TEST_TIMELOCK)]);
    assert_err_code!(
        gov.set_timelock(&mut host, GOVERNANCE_SETTINGS_CONTRACT, &timelock),
        "GOVERNANCE_INVALID_SIGNAL"
    );
    assert!(host.calls().is_empty());
    assert_eq!(host.coinbase(), other);
    Ok(())
}

#[test]
fn migration_under_non_burn_coinbase_moves_nothing() -> Result<()> {
    init_tracing()?;
    let other = Address::with_last_byte(0x77);
    let mut host = MockHost::new(ChainId::FLARE, TEST_MIGRATION_ACTIVATION).with_coinbase(other);
    host.set_balance(TEST_AIRDROP.source, U256::from(9u64));

    let data = abi::UPDATE_INITIAL_AIRDROP_ADDRESS.to_vec();
    assert_err_code!(
        gov().update_initial_airdrop_address(&mut host, TEST_AIRDROP.contract, &data),
        "GOVERNANCE_INVALID_SIGNAL"
    );
    assert!(host.calls().is_empty());
    assert_balance!(host, TEST_AIRDROP.source, 9u64);
    assert_balance!(host, TEST_AIRDROP.target, 0u64);
    assert_eq!(host.coinbase(), other);
    Ok(())
}

#[test]
fn unconfigured_network_permits_no_governance_value() -> Result<()> {
    init_tracing()?;
    let mut host = MockHost::new(ChainId::SONGBIRD, SONGBIRD_GOVERNANCE_ACTIVATION);
    let data = set_governance_address(TEST_GOVERNANCE_ADDRESS);
    assert_err_code!(
        GovernanceSettings::default().set_governance_address(
            &mut host,
            GOVERNANCE_SETTINGS_CONTRACT,
            &data
        ),
        "GOVERNANCE_NOT_PERMITTED"
    );
    assert!(host.calls().is_empty());
    Ok(())
}
