// Path: crates/services/src/hooks/mod.rs
//! The single entry point the execution host invokes after each transaction.

use crate::daemon::DaemonMinter;
use crate::governance::{GovernanceSettings, MigrationKind};
use crate::prioritised;
use crate::state_connector::{FinalisationOutcome, StateConnector};
use alloy_primitives::Address;
use flare_api::error::{ErrorCode, StateConnectorError, TransitionError};
use flare_api::host::ExecutionHost;
use flare_types::config::{LocalConfig, NetworkTable};
use flare_types::service_configs::{ProtocolParams, BURN_ADDRESS};
use std::sync::Arc;
use tracing::{debug, warn};

/// The parts of a completed transaction the hooks inspect.
#[derive(Debug, Clone, Copy)]
pub struct TransitionMessage<'a> {
    /// The call target; `None` for contract creation.
    pub to: Option<Address>,
    /// The transaction calldata.
    pub data: &'a [u8],
    /// Whether the transaction executed without error.
    pub succeeded: bool,
}

#[derive(Debug, Clone, Default)]
pub struct TransitionHooks {
    params: Arc<ProtocolParams>,
    daemon: DaemonMinter,
    governance: GovernanceSettings,
    state_connector: StateConnector,
}

impl TransitionHooks {
    /// Applies `local` to `params` and shares the result with every rule.
    pub fn new(params: ProtocolParams, local: LocalConfig) -> Self {
        let params = Arc::new(params.with_local_config(&local));
        Self {
            daemon: DaemonMinter::new(Arc::clone(&params)),
            governance: GovernanceSettings::new(Arc::clone(&params)),
            state_connector: StateConnector::new(Arc::clone(&params), local),
            params,
        }
    }

    /// Builds the hooks from the protocol constants, the network table named
    /// by the environment and the node-local environment overrides.
    pub fn from_env() -> Self {
        let params = ProtocolParams::default().with_network_table(&NetworkTable::from_env());
        Self::new(params, LocalConfig::from_env())
    }

    pub fn params(&self) -> &ProtocolParams {
        &self.params
    }

    pub fn daemon(&self) -> &DaemonMinter {
        &self.daemon
    }

    pub fn governance(&self) -> &GovernanceSettings {
        &self.governance
    }

    pub fn state_connector(&self) -> &StateConnector {
        &self.state_connector
    }

    /// See [`prioritised::is_prioritised_contract_call`].
    pub fn is_prioritised_contract_call<H: ExecutionHost + ?Sized>(
        &self,
        host: &H,
        to: Option<Address>,
        data: &[u8],
        ret: &[u8],
        supplied_gas: u64,
    ) -> bool {
        let ctx = host.block_context();
        prioritised::is_prioritised_contract_call(
            &self.params.prioritised,
            ctx.chain_id,
            ctx.block_time,
            to,
            data,
            ret,
            supplied_gas,
        )
    }

    /// Runs every protocol rule that applies to `msg`.
    ///
    /// Only a divergent state connector finalisation is returned as an error;
    /// every other failure is logged and leaves the transition intact.
    pub fn after_transition<H: ExecutionHost + ?Sized>(
        &self,
        host: &mut H,
        msg: TransitionMessage<'_>,
    ) -> Result<(), TransitionError> {
        let ctx = host.block_context();
        let (chain, time) = (ctx.chain_id, ctx.block_time);

        if let Some(round) = self
            .state_connector
            .submitted_round(chain, time, msg.to, msg.data)
        {
            match self.state_connector.finalise_previous_round(host, round) {
                Ok(outcome) => {
                    let finalised = matches!(outcome, FinalisationOutcome::Finalised { .. });
                    debug!(target: "hooks", finalised, "State connector pass complete");
                }
                Err(e @ StateConnectorError::DivergentFinalization { .. }) => {
                    warn!(target: "hooks", error = %e, code = e.code(), "Refusing divergent finalisation");
                    return Err(e.into());
                }
                Err(e) => {
                    warn!(target: "hooks", error = %e, code = e.code(), "State connector finalisation failed");
                }
            }
        }

        if let Some(to) = msg.to {
            let result = if self
                .governance
                .is_set_governance_address_call(chain, time, msg.to, msg.data)
            {
                Some(self.governance.set_governance_address(host, to, msg.data).map(|_| ()))
            } else if self
                .governance
                .is_set_timelock_call(chain, time, msg.to, msg.data)
            {
                Some(self.governance.set_timelock(host, to, msg.data).map(|_| ()))
            } else {
                match self.governance.migration_call(chain, time, msg.to, msg.data) {
                    Some(MigrationKind::InitialAirdrop) => Some(
                        self.governance
                            .update_initial_airdrop_address(host, to, msg.data)
                            .map(|_| ()),
                    ),
                    Some(MigrationKind::Distribution) => Some(
                        self.governance
                            .update_distribution_address(host, to, msg.data)
                            .map(|_| ()),
                    ),
                    None => None,
                }
            };
            if let Some(Err(e)) = result {
                warn!(target: "hooks", error = %e, code = e.code(), "Governance propagation failed");
            }
        }

        if msg.succeeded && host.coinbase() == BURN_ADDRESS {
            self.daemon.run(host);
        }
        Ok(())
    }
}
