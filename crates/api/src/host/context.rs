// Path: crates/api/src/host/context.rs
//! Defines the block-level context visible to the protocol rules.

use flare_types::chain::ChainId;

/// Provides stable, read-only context about the block being executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockContext {
    /// The identifier of the network executing the block.
    pub chain_id: ChainId,
    /// The deterministic timestamp of the current block, in seconds, taken from its header.
    /// Every activation rule compares against this value.
    pub block_time: u64,
    /// The gas limit of the current block.
    pub gas_limit: u64,
}
