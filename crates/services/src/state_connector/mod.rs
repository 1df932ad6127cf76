// Path: crates/services/src/state_connector/mod.rs
//! State connector round finalisation.
//!
//! When a `submitAttestation` transaction lands, every attestor in the
//! chain's default set is asked for its commitment for the round. A strict
//! majority decision is written back to the contract with `finaliseRound`.
//! A node may also configure its own attestors; if both sets decide and
//! disagree, the node can be told to refuse the block rather than follow.

mod votes;

pub use votes::{has_majority, AttestationVotes};

use alloy_primitives::Address;
use flare_api::error::StateConnectorError;
use flare_api::host::ExecutionHost;
use flare_api::signal::privileged_call;
use flare_types::abi;
use flare_types::chain::ChainId;
use flare_types::config::LocalConfig;
use flare_types::service_configs::{ProtocolParams, StateConnectorParams, BURN_ADDRESS};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// The result of one finalisation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinalisationOutcome {
    /// The default set reached a majority and `finaliseRound` was issued.
    Finalised {
        /// The commitment written to the contract.
        commitment: Vec<u8>,
        /// The default set's tally.
        votes: AttestationVotes,
    },
    /// The default set did not reach a majority; nothing was written.
    NoMajority {
        /// The default set's tally.
        votes: AttestationVotes,
    },
}

impl FinalisationOutcome {
    pub fn votes(&self) -> &AttestationVotes {
        match self {
            Self::Finalised { votes, .. } | Self::NoMajority { votes } => votes,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StateConnector {
    params: Arc<ProtocolParams>,
    local: LocalConfig,
}

impl StateConnector {
    pub fn new(params: Arc<ProtocolParams>, local: LocalConfig) -> Self {
        Self { params, local }
    }

    pub fn params(&self) -> &StateConnectorParams {
        &self.params.state_connector
    }

    pub fn local_config(&self) -> &LocalConfig {
        &self.local
    }

    /// Returns the round carried by a `submitAttestation` call to the state
    /// connector, if finalisation is active on `chain` at `block_time`.
    pub fn submitted_round(
        &self,
        chain: ChainId,
        block_time: u64,
        to: Option<Address>,
        data: &[u8],
    ) -> Option<[u8; 32]> {
        let params = self.params();
        if !params.is_active(chain, block_time)
            || to != Some(params.contract(chain))
            || !abi::has_selector(data, &params.submit_selector)
        {
            return None;
        }
        abi::word(data, 0)
    }

    /// Returns true for a well-formed `submitAttestation` call that triggers finalisation.
    pub fn is_state_connector_call(
        &self,
        chain: ChainId,
        block_time: u64,
        to: Option<Address>,
        data: &[u8],
    ) -> bool {
        self.submitted_round(chain, block_time, to, data).is_some()
    }

    /// Queries each of `attestors` for its commitment to `round` and tallies the answers.
    pub fn count_attestations<H: ExecutionHost + ?Sized>(
        &self,
        host: &mut H,
        attestors: &[Address],
        round: [u8; 32],
    ) -> AttestationVotes {
        let params = self.params();
        let chain = host.block_context().chain_id;
        let contract = params.contract(chain);
        let query = [params.attestation_selector.as_slice(), round.as_slice()].concat();

        let mut answers = Vec::with_capacity(attestors.len());
        for attestor in attestors {
            let answer =
                match host.static_call(*attestor, contract, &query, params.attestation_gas) {
                    Ok(bytes) => Some(bytes),
                    Err(e) => {
                        debug!(target: "state_connector", %attestor, error = %e, "Attestor abstained");
                        None
                    }
                };
            answers.push((*attestor, answer));
        }
        AttestationVotes::tally(answers)
    }

    /// Finalises `round` if the default attestor set reaches a majority.
    ///
    /// Only runs from an ordinary block, whose coinbase is [`BURN_ADDRESS`].
    /// Fails with [`StateConnectorError::DivergentFinalization`] without
    /// finalising if the local set decides differently and forking on
    /// divergence is enabled.
    pub fn finalise_previous_round<H: ExecutionHost + ?Sized>(
        &self,
        host: &mut H,
        round: [u8; 32],
    ) -> Result<FinalisationOutcome, StateConnectorError> {
        let coinbase = host.coinbase();
        if coinbase != BURN_ADDRESS {
            return Err(StateConnectorError::InvalidSignal(format!(
                "coinbase {coinbase} is not the burn address"
            )));
        }

        let params = self.params();
        let ctx = host.block_context();
        let defaults = params.default_attestors(ctx.chain_id, ctx.block_time);
        let votes = self.count_attestations(host, defaults, round);
        debug!(
            target: "state_connector",
            round = %hex::encode(round),
            queried = votes.attestors.len(),
            support = votes.plurality_attestors.len(),
            abstained = votes.abstained.len(),
            "Default attestors counted"
        );

        if self.local.has_local_attestors() {
            let local = self.count_attestations(host, &self.local.local_attestors, round);
            if let (Some(default), Some(local)) =
                (votes.majority_decision(), local.majority_decision())
            {
                if default != local {
                    if self.local.fork_on_divergence {
                        return Err(StateConnectorError::DivergentFinalization {
                            default: hex::encode(default),
                            local: hex::encode(local),
                        });
                    }
                    warn!(
                        target: "state_connector",
                        round = %hex::encode(round),
                        default = %hex::encode(default),
                        local = %hex::encode(local),
                        "Local attestors disagree with default set"
                    );
                }
            }
        }

        let Some(commitment) = votes.majority_decision().map(<[u8]>::to_vec) else {
            info!(
                target: "state_connector",
                round = %hex::encode(round),
                "No majority among default attestors"
            );
            return Ok(FinalisationOutcome::NoMajority { votes });
        };

        let payload = [
            params.finalise_selector.as_slice(),
            round.as_slice(),
            commitment.as_slice(),
        ]
        .concat();
        let signal = params.coinbase_signal(ctx.chain_id);
        let contract = params.contract(ctx.chain_id);
        privileged_call(host, signal, contract, &payload)?;

        info!(
            target: "state_connector",
            round = %hex::encode(round),
            commitment = %hex::encode(&commitment),
            support = votes.plurality_attestors.len(),
            "Round finalised"
        );
        Ok(FinalisationOutcome::Finalised { commitment, votes })
    }
}
