// Path: crates/services/src/daemon/mod.rs
//! Daemon polling and inflation minting.
//!
//! Once per eligible transition the daemon genesis contract is triggered. A
//! single 32-byte word of return data is a request to mint that many wei onto
//! the daemon contract, subject to a per-chain ceiling.

use alloy_primitives::U256;
use flare_api::error::{DaemonError, ErrorCode};
use flare_api::host::ExecutionHost;
use flare_types::abi::WORD_LEN;
use flare_types::service_configs::{DaemonParams, ProtocolParams};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Interprets daemon return data as a mint request.
///
/// The word is read as an unsigned big-endian integer, so a well-formed
/// response can never produce a negative request.
pub fn parse_mint_request(data: &[u8]) -> Result<U256, DaemonError> {
    if data.is_empty() {
        return Err(DaemonError::DataEmpty);
    }
    let word: [u8; WORD_LEN] = data
        .try_into()
        .map_err(|_| DaemonError::InvalidData { len: data.len() })?;
    Ok(U256::from_be_bytes(word))
}

#[derive(Debug, Clone, Default)]
pub struct DaemonMinter {
    params: Arc<ProtocolParams>,
}

impl DaemonMinter {
    pub fn new(params: Arc<ProtocolParams>) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &DaemonParams {
        &self.params.daemon
    }

    /// Triggers the daemon and mints its request, logging any failure.
    ///
    /// Mint failures never fail the enclosing transition.
    pub fn run<H: ExecutionHost + ?Sized>(&self, host: &mut H) {
        match self.run_daemon_and_mint(host) {
            Ok(minted) if minted.is_zero() => {
                debug!(target: "daemon", "Daemon returned an empty mint request");
            }
            Ok(minted) => {
                info!(target: "daemon", %minted, "Minted daemon inflation request");
            }
            Err(e) => {
                warn!(target: "daemon", error = %e, code = e.code(), "Daemon run failed");
            }
        }
    }

    /// Triggers the daemon and mints its request. Returns the minted amount.
    ///
    /// If the request is rejected, the daemon call's own state effects are
    /// rolled back before the error is returned.
    pub fn run_daemon_and_mint<H: ExecutionHost + ?Sized>(
        &self,
        host: &mut H,
    ) -> Result<U256, DaemonError> {
        let params = self.params();
        let ctx = host.block_context();
        let daemon = params.contract(ctx.block_time);
        let selector = params.selector(ctx.block_time);
        let gas = params
            .gas_multiplier(ctx.chain_id, ctx.block_time)
            .saturating_mul(ctx.gas_limit);
        let caller = host.coinbase();

        let outcome = host.call(caller, daemon, &selector, gas)?;
        debug!(
            target: "daemon",
            %daemon,
            gas_used = gas.saturating_sub(outcome.gas_left),
            returned = outcome.return_data.len(),
            "Daemon triggered"
        );

        let request = parse_mint_request(&outcome.return_data)?;
        if let Err(e) = self.mint(host, request) {
            host.revert_to_snapshot(outcome.snapshot);
            return Err(e);
        }
        Ok(request)
    }

    /// Credits `request` to the mint target if it is within the chain's ceiling.
    /// A zero request succeeds without touching state.
    pub fn mint<H: ExecutionHost + ?Sized>(
        &self,
        host: &mut H,
        request: U256,
    ) -> Result<(), DaemonError> {
        let params = self.params();
        let ctx = host.block_context();
        let max = params.max_mint_request(ctx.chain_id, ctx.block_time);
        if request > max {
            return Err(DaemonError::MaxMintExceeded { request, max });
        }
        if request.is_zero() {
            return Ok(());
        }
        host.add_balance(params.mint_target(ctx.block_time), request);
        Ok(())
    }
}
