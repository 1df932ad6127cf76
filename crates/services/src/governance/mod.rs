// Path: crates/services/src/governance/mod.rs
//! Governance settings propagation and the one-shot balance migrations.

use alloy_primitives::{Address, U256};
use flare_api::error::GovernanceError;
use flare_api::host::ExecutionHost;
use flare_api::signal::privileged_call;
use flare_types::abi::{self, Selector};
use flare_types::chain::ChainId;
use flare_types::service_configs::{
    BalanceMigration, GovernanceSettingsParams, ProtocolParams, BURN_ADDRESS,
};
use std::sync::Arc;
use tracing::{debug, info};

/// The two balance migrations a governance-adjacent genesis contract may trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationKind {
    /// `updateInitialAirdropAddress()`.
    InitialAirdrop,
    /// `updateDistributionAddress()`.
    Distribution,
}

impl MigrationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InitialAirdrop => "initial airdrop",
            Self::Distribution => "distribution",
        }
    }

    fn selector(&self) -> Selector {
        match self {
            Self::InitialAirdrop => abi::UPDATE_INITIAL_AIRDROP_ADDRESS,
            Self::Distribution => abi::UPDATE_DISTRIBUTION_ADDRESS,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GovernanceSettings {
    params: Arc<ProtocolParams>,
}

impl GovernanceSettings {
    pub fn new(params: Arc<ProtocolParams>) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &GovernanceSettingsParams {
        &self.params.governance
    }

    /// Privileged re-invocation is only legal from an ordinary block, whose
    /// coinbase is [`BURN_ADDRESS`].
    fn ensure_ordinary_block<H: ExecutionHost + ?Sized>(
        &self,
        host: &H,
    ) -> Result<(), GovernanceError> {
        let coinbase = host.coinbase();
        if coinbase != BURN_ADDRESS {
            return Err(GovernanceError::InvalidSignal(format!(
                "coinbase {coinbase} is not the burn address"
            )));
        }
        Ok(())
    }

    fn is_settings_call(
        &self,
        chain: ChainId,
        block_time: u64,
        to: Option<Address>,
        data: &[u8],
        selector: Selector,
    ) -> bool {
        let params = self.params();
        params.settings_active(chain, block_time)
            && to == Some(*params.settings_contract.get(chain))
            && abi::has_selector(data, &selector)
    }

    /// Returns true for a `setGovernanceAddress(address)` call to the settings contract.
    pub fn is_set_governance_address_call(
        &self,
        chain: ChainId,
        block_time: u64,
        to: Option<Address>,
        data: &[u8],
    ) -> bool {
        self.is_settings_call(chain, block_time, to, data, abi::SET_GOVERNANCE_ADDRESS)
    }

    /// Returns true for a `setTimelock(uint256)` call to the settings contract.
    pub fn is_set_timelock_call(
        &self,
        chain: ChainId,
        block_time: u64,
        to: Option<Address>,
        data: &[u8],
    ) -> bool {
        self.is_settings_call(chain, block_time, to, data, abi::SET_TIMELOCK)
    }

    /// Returns the migration `data` triggers when sent to `to`, if one is active.
    pub fn migration_call(
        &self,
        chain: ChainId,
        block_time: u64,
        to: Option<Address>,
        data: &[u8],
    ) -> Option<MigrationKind> {
        let to = to?;
        [MigrationKind::InitialAirdrop, MigrationKind::Distribution]
            .into_iter()
            .find(|kind| {
                self.migration(*kind, chain, block_time)
                    .is_some_and(|m| m.contract == to)
                    && abi::has_selector(data, &kind.selector())
            })
    }

    fn migration(
        &self,
        kind: MigrationKind,
        chain: ChainId,
        block_time: u64,
    ) -> Option<BalanceMigration> {
        match kind {
            MigrationKind::InitialAirdrop => self.params().initial_airdrop(chain, block_time),
            MigrationKind::Distribution => self.params().distribution(chain, block_time),
        }
    }

    /// Propagates a permitted governance address to `to` under the coinbase signal.
    pub fn set_governance_address<H: ExecutionHost + ?Sized>(
        &self,
        host: &mut H,
        to: Address,
        data: &[u8],
    ) -> Result<Address, GovernanceError> {
        self.ensure_ordinary_block(host)?;
        let proposed = abi::address_arg(data, 0).ok_or_else(|| {
            GovernanceError::InvalidCalldata("setGovernanceAddress expects one address".into())
        })?;
        let ctx = host.block_context();
        if !self
            .params()
            .permits_governance_address(ctx.chain_id, ctx.block_time, proposed)
        {
            return Err(GovernanceError::NotPermitted {
                value: proposed.to_string(),
                chain_id: ctx.chain_id.0,
                block_time: ctx.block_time,
            });
        }

        let signal = *self.params().coinbase_signal.get(ctx.chain_id);
        privileged_call(host, signal, to, data)?;
        info!(target: "governance", %proposed, contract = %to, "Governance address propagated");
        Ok(proposed)
    }

    /// Propagates a permitted timelock to `to` under the coinbase signal.
    pub fn set_timelock<H: ExecutionHost + ?Sized>(
        &self,
        host: &mut H,
        to: Address,
        data: &[u8],
    ) -> Result<U256, GovernanceError> {
        self.ensure_ordinary_block(host)?;
        let proposed = abi::uint_arg(data, 0).ok_or_else(|| {
            GovernanceError::InvalidCalldata("setTimelock expects one uint256".into())
        })?;
        let ctx = host.block_context();
        if !self
            .params()
            .permits_timelock(ctx.chain_id, ctx.block_time, proposed)
        {
            return Err(GovernanceError::NotPermitted {
                value: proposed.to_string(),
                chain_id: ctx.chain_id.0,
                block_time: ctx.block_time,
            });
        }

        let signal = *self.params().coinbase_signal.get(ctx.chain_id);
        privileged_call(host, signal, to, data)?;
        info!(target: "governance", %proposed, contract = %to, "Timelock propagated");
        Ok(proposed)
    }

    /// Re-issues the airdrop address change and moves the airdrop balance.
    /// Returns the amount moved.
    pub fn update_initial_airdrop_address<H: ExecutionHost + ?Sized>(
        &self,
        host: &mut H,
        to: Address,
        data: &[u8],
    ) -> Result<U256, GovernanceError> {
        self.migrate(host, MigrationKind::InitialAirdrop, to, data)
    }

    /// Re-issues the distribution address change and moves the distribution balance.
    /// Returns the amount moved.
    pub fn update_distribution_address<H: ExecutionHost + ?Sized>(
        &self,
        host: &mut H,
        to: Address,
        data: &[u8],
    ) -> Result<U256, GovernanceError> {
        self.migrate(host, MigrationKind::Distribution, to, data)
    }

    fn migrate<H: ExecutionHost + ?Sized>(
        &self,
        host: &mut H,
        kind: MigrationKind,
        to: Address,
        data: &[u8],
    ) -> Result<U256, GovernanceError> {
        self.ensure_ordinary_block(host)?;
        let ctx = host.block_context();
        let migration = self
            .migration(kind, ctx.chain_id, ctx.block_time)
            .ok_or(GovernanceError::MigrationUnavailable {
                kind: kind.as_str(),
                chain_id: ctx.chain_id.0,
                block_time: ctx.block_time,
            })?;

        let signal = *self.params().coinbase_signal.get(ctx.chain_id);
        privileged_call(host, signal, to, data)?;

        let amount = host.balance(migration.source);
        if amount.is_zero() {
            debug!(target: "governance", kind = kind.as_str(), "Migration source already empty");
            return Ok(amount);
        }
        host.sub_balance(migration.source, amount);
        host.add_balance(migration.target, amount);
        info!(
            target: "governance",
            kind = kind.as_str(),
            source = %migration.source,
            target_address = %migration.target,
            %amount,
            "Balance migrated"
        );
        Ok(amount)
    }
}
