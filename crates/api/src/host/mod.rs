// Path: crates/api/src/host/mod.rs
//! Defines the `ExecutionHost` trait through which the protocol rules reach
//! the interpreter, the ledger and the block context.

use crate::error::HostError;
use alloy_primitives::{Address, U256};

/// The block context exposed by the host.
pub mod context;

use context::BlockContext;

/// An opaque rollback point returned by [`ExecutionHost::call`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Snapshot(pub u64);

/// The result of a successful call into the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallOutcome {
    /// A rollback point taken before the call executed. Reverting to it undoes
    /// every state effect of the call.
    pub snapshot: Snapshot,
    /// The raw return data.
    pub return_data: Vec<u8>,
    /// The gas left over after the call.
    pub gas_left: u64,
}

/// A trait that provides the complete interface the protocol rules need from
/// the execution host.
///
/// Implementations are expected to revert the effects of a call themselves
/// when it fails; the rules only use [`ExecutionHost::revert_to_snapshot`] to
/// discard the effects of calls that succeeded.
pub trait ExecutionHost {
    /// The context of the block currently being executed.
    fn block_context(&self) -> BlockContext;

    /// Invokes `to` with `data` on behalf of `caller`, supplying `gas`.
    fn call(
        &mut self,
        caller: Address,
        to: Address,
        data: &[u8],
        gas: u64,
    ) -> Result<CallOutcome, HostError>;

    /// Invokes `to` with `data` on behalf of `caller` without permitting
    /// state modification, and returns the raw return data.
    fn static_call(
        &mut self,
        caller: Address,
        to: Address,
        data: &[u8],
        gas: u64,
    ) -> Result<Vec<u8>, HostError>;

    /// Undoes all state changes made since `snapshot` was taken.
    fn revert_to_snapshot(&mut self, snapshot: Snapshot);

    /// Returns the balance of `address`.
    fn balance(&self, address: Address) -> U256;

    /// Credits `amount` to `address`.
    fn add_balance(&mut self, address: Address, amount: U256);

    /// Debits `amount` from `address`.
    fn sub_balance(&mut self, address: Address, amount: U256);

    /// Returns the current value of the block's coinbase signalling field.
    fn coinbase(&self) -> Address;

    /// Overwrites the block's coinbase signalling field.
    fn set_coinbase(&mut self, coinbase: Address);
}

// Blanket implementation to allow `ExecutionHost` to be used through a mutable reference.
impl<T: ExecutionHost + ?Sized> ExecutionHost for &mut T {
    fn block_context(&self) -> BlockContext {
        (**self).block_context()
    }

    fn call(
        &mut self,
        caller: Address,
        to: Address,
        data: &[u8],
        gas: u64,
    ) -> Result<CallOutcome, HostError> {
        (**self).call(caller, to, data, gas)
    }

    fn static_call(
        &mut self,
        caller: Address,
        to: Address,
        data: &[u8],
        gas: u64,
    ) -> Result<Vec<u8>, HostError> {
        (**self).static_call(caller, to, data, gas)
    }

    fn revert_to_snapshot(&mut self, snapshot: Snapshot) {
        (**self).revert_to_snapshot(snapshot)
    }

    fn balance(&self, address: Address) -> U256 {
        (**self).balance(address)
    }

    fn add_balance(&mut self, address: Address, amount: U256) {
        (**self).add_balance(address, amount)
    }

    fn sub_balance(&mut self, address: Address, amount: U256) {
        (**self).sub_balance(address, amount)
    }

    fn coinbase(&self) -> Address {
        (**self).coinbase()
    }

    fn set_coinbase(&mut self, coinbase: Address) {
        (**self).set_coinbase(coinbase)
    }
}
