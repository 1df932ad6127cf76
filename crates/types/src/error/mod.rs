// Path: crates/types/src/error/mod.rs
//! Core error types for the Flare protocol rules.

use alloy_primitives::U256;
use thiserror::Error;

/// A trait for assigning a stable, machine-readable string code to an error.
pub trait ErrorCode {
    /// Returns the unique, stable string identifier for this error variant.
    fn code(&self) -> &'static str;
}

/// Errors surfaced verbatim by the execution host's call primitive.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// The callee reverted.
    #[error("Execution reverted: {0}")]
    Reverted(String),
    /// The call ran out of gas.
    #[error("Out of gas")]
    OutOfGas,
    /// Any other failure inside the interpreter.
    #[error("Execution host error: {0}")]
    Execution(String),
}

impl ErrorCode for HostError {
    fn code(&self) -> &'static str {
        match self {
            Self::Reverted(_) => "HOST_REVERTED",
            Self::OutOfGas => "HOST_OUT_OF_GAS",
            Self::Execution(_) => "HOST_EXECUTION_ERROR",
        }
    }
}

/// Errors related to daemon polling and inflation minting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DaemonError {
    /// The daemon returned data that is not exactly one 32-byte word.
    #[error("Invalid return data from daemon: expected 32 bytes, got {len}")]
    InvalidData {
        /// The length of the returned data.
        len: usize,
    },
    /// The daemon call succeeded but returned nothing.
    #[error("Return data from daemon empty")]
    DataEmpty,
    /// The mint request exceeded the per-chain ceiling.
    #[error("Mint request of {request} exceeded max of {max}")]
    MaxMintExceeded {
        /// The amount the daemon asked for.
        request: U256,
        /// The resolved ceiling for the chain.
        max: U256,
    },
    /// The mint request was negative.
    ///
    /// Requests are parsed into an unsigned `U256`, which cannot hold a
    /// negative value, so the minter never produces this variant. It is part
    /// of the error-code table for hosts that surface signed requests.
    #[error("Mint request cannot be negative")]
    MintNegative,
    /// The daemon call itself failed.
    #[error("Daemon call failed: {0}")]
    Host(#[from] HostError),
}

impl ErrorCode for DaemonError {
    fn code(&self) -> &'static str {
        match self {
            Self::InvalidData { .. } => "DAEMON_INVALID_DATA",
            Self::DataEmpty => "DAEMON_DATA_EMPTY",
            Self::MaxMintExceeded { .. } => "DAEMON_MAX_MINT_EXCEEDED",
            Self::MintNegative => "DAEMON_MINT_NEGATIVE",
            Self::Host(_) => "DAEMON_HOST_ERROR",
        }
    }
}

/// Errors related to governance settings propagation and balance migrations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GovernanceError {
    /// The call was observed outside an ordinary block: the coinbase was
    /// not the burn address, so no signal may be substituted.
    #[error("Invalid governance signal: {0}")]
    InvalidSignal(String),
    /// The calldata did not carry a well-formed proposed value.
    #[error("Invalid governance calldata: {0}")]
    InvalidCalldata(String),
    /// The proposed value is not on the chain's allow-list at this time.
    #[error("Governance value {value} not permitted on chain {chain_id} at time {block_time}")]
    NotPermitted {
        /// The proposed value, hex encoded.
        value: String,
        /// The chain the call was made on.
        chain_id: u64,
        /// The block time of the call.
        block_time: u64,
    },
    /// The chain has no balance migration of this kind active at this time.
    #[error("No {kind} migration on chain {chain_id} at time {block_time}")]
    MigrationUnavailable {
        /// The migration that was requested.
        kind: &'static str,
        /// The chain the call was made on.
        chain_id: u64,
        /// The block time of the call.
        block_time: u64,
    },
    /// The privileged re-invocation failed.
    #[error("Privileged governance call failed: {0}")]
    Host(#[from] HostError),
}

impl ErrorCode for GovernanceError {
    fn code(&self) -> &'static str {
        match self {
            Self::InvalidSignal(_) => "GOVERNANCE_INVALID_SIGNAL",
            Self::InvalidCalldata(_) => "GOVERNANCE_INVALID_CALLDATA",
            Self::NotPermitted { .. } => "GOVERNANCE_NOT_PERMITTED",
            Self::MigrationUnavailable { .. } => "GOVERNANCE_MIGRATION_UNAVAILABLE",
            Self::Host(_) => "GOVERNANCE_HOST_ERROR",
        }
    }
}

/// Errors related to state connector round finalisation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateConnectorError {
    /// The default and local attestor sets reached different majority decisions.
    #[error("Divergent finalisation: default set decided {default}, local set decided {local}")]
    DivergentFinalization {
        /// The hex commitment decided by the default attestor set.
        default: String,
        /// The hex commitment decided by the local attestor set.
        local: String,
    },
    /// Finalisation was attempted while the coinbase was not the burn address.
    #[error("Invalid state connector signal: {0}")]
    InvalidSignal(String),
    /// The privileged finalise call failed.
    #[error("Finalise call failed: {0}")]
    Host(#[from] HostError),
}

impl ErrorCode for StateConnectorError {
    fn code(&self) -> &'static str {
        match self {
            Self::DivergentFinalization { .. } => "STATE_CONNECTOR_DIVERGENT_FINALIZATION",
            Self::InvalidSignal(_) => "STATE_CONNECTOR_INVALID_SIGNAL",
            Self::Host(_) => "STATE_CONNECTOR_HOST_ERROR",
        }
    }
}

/// Errors raised while reading process configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An entry in an address list could not be parsed.
    #[error("Invalid address '{entry}' in {key}")]
    InvalidAddress {
        /// The configuration key being parsed.
        key: &'static str,
        /// The offending entry.
        entry: String,
    },
    /// A network table could not be parsed or is inconsistent.
    #[error("Invalid network table: {0}")]
    InvalidNetworkTable(String),
}

impl ErrorCode for ConfigError {
    fn code(&self) -> &'static str {
        match self {
            Self::InvalidAddress { .. } => "CONFIG_INVALID_ADDRESS",
            Self::InvalidNetworkTable(_) => "CONFIG_INVALID_NETWORK_TABLE",
        }
    }
}

/// Hard failures that must abort the enclosing state transition.
///
/// Daemon and governance failures never appear here; they are logged and
/// degrade to no-ops.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    /// An error originating from state connector finalisation.
    #[error("State connector error: {0}")]
    StateConnector(#[from] StateConnectorError),
}

impl ErrorCode for TransitionError {
    fn code(&self) -> &'static str {
        match self {
            Self::StateConnector(e) => e.code(),
        }
    }
}
