// Path: crates/api/src/signal/mod.rs
//! Scoped substitution of the coinbase signalling field.
//!
//! Privileged genesis-contract calls are authorized by the interpreter when
//! the block's coinbase equals a reserved signal address. The substitution
//! must never outlive the privileged call, so it is tied to a guard that
//! restores the original coinbase when dropped, including on early returns.

use crate::error::HostError;
use crate::host::{CallOutcome, ExecutionHost};
use alloy_primitives::Address;
use std::ops::{Deref, DerefMut};

/// An RAII guard that holds the host with its coinbase replaced by a signal
/// address. The original coinbase is restored on drop.
pub struct CoinbaseSignalGuard<'a, H: ExecutionHost + ?Sized> {
    host: &'a mut H,
    original: Address,
}

impl<'a, H: ExecutionHost + ?Sized> CoinbaseSignalGuard<'a, H> {
    /// Replaces the coinbase of `host` with `signal` until the guard is dropped.
    pub fn new(host: &'a mut H, signal: Address) -> Self {
        let original = host.coinbase();
        host.set_coinbase(signal);
        tracing::trace!(target: "signal", %signal, %original, "Coinbase signal engaged");
        Self { host, original }
    }

    /// The coinbase that will be restored.
    pub fn original(&self) -> Address {
        self.original
    }
}

impl<H: ExecutionHost + ?Sized> Deref for CoinbaseSignalGuard<'_, H> {
    type Target = H;

    fn deref(&self) -> &H {
        self.host
    }
}

impl<H: ExecutionHost + ?Sized> DerefMut for CoinbaseSignalGuard<'_, H> {
    fn deref_mut(&mut self) -> &mut H {
        self.host
    }
}

impl<H: ExecutionHost + ?Sized> Drop for CoinbaseSignalGuard<'_, H> {
    fn drop(&mut self) {
        self.host.set_coinbase(self.original);
        tracing::trace!(target: "signal", original = %self.original, "Coinbase signal released");
    }
}

/// Calls `to` with `data` as `signal`, with the coinbase set to `signal` for
/// the duration of the call. The block gas limit is supplied.
pub fn privileged_call<H: ExecutionHost + ?Sized>(
    host: &mut H,
    signal: Address,
    to: Address,
    data: &[u8],
) -> Result<CallOutcome, HostError> {
    let gas = host.block_context().gas_limit;
    let mut guard = CoinbaseSignalGuard::new(host, signal);
    guard.call(signal, to, data, gas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::context::BlockContext;
    use crate::host::Snapshot;
    use alloy_primitives::{address, U256};
    use flare_types::chain::ChainId;

    const BURN: Address = address!("0100000000000000000000000000000000000000");
    const SIGNAL: Address = address!("000000000000000000000000000000000000dead");

    // Records the coinbase observed by each call.
    struct RecordingHost {
        coinbase: Address,
        observed: Vec<Address>,
        fail: bool,
    }

    impl RecordingHost {
        fn new(fail: bool) -> Self {
            Self {
                coinbase: BURN,
                observed: Vec::new(),
                fail,
            }
        }
    }

    impl ExecutionHost for RecordingHost {
        fn block_context(&self) -> BlockContext {
            BlockContext {
                chain_id: ChainId::LOCAL,
                block_time: 0,
                gas_limit: 8_000_000,
            }
        }

        fn call(
            &mut self,
            _caller: Address,
            _to: Address,
            _data: &[u8],
            _gas: u64,
        ) -> Result<CallOutcome, HostError> {
            self.observed.push(self.coinbase);
            if self.fail {
                return Err(HostError::Reverted("denied".into()));
            }
            Ok(CallOutcome {
                snapshot: Snapshot(0),
                return_data: Vec::new(),
                gas_left: 0,
            })
        }

        fn static_call(
            &mut self,
            _caller: Address,
            _to: Address,
            _data: &[u8],
            _gas: u64,
        ) -> Result<Vec<u8>, HostError> {
            Ok(Vec::new())
        }

        fn revert_to_snapshot(&mut self, _snapshot: Snapshot) {}

        fn balance(&self, _address: Address) -> U256 {
            U256::ZERO
        }

        fn add_balance(&mut self, _address: Address, _amount: U256) {}

        fn sub_balance(&mut self, _address: Address, _amount: U256) {}

        fn coinbase(&self) -> Address {
            self.coinbase
        }

        fn set_coinbase(&mut self, coinbase: Address) {
            self.coinbase = coinbase;
        }
    }

    #[test]
    fn guard_restores_on_drop() {
        let mut host = RecordingHost::new(false);
        {
            let guard = CoinbaseSignalGuard::new(&mut host, SIGNAL);
            assert_eq!(guard.coinbase(), SIGNAL);
            assert_eq!(guard.original(), BURN);
        }
        assert_eq!(host.coinbase, BURN);
    }

    #[test]
    fn privileged_call_sees_signal_and_restores() {
        let mut host = RecordingHost::new(false);
        privileged_call(&mut host, SIGNAL, BURN, &[]).unwrap();
        assert_eq!(host.observed, vec![SIGNAL]);
        assert_eq!(host.coinbase, BURN);
    }

    #[test]
    fn coinbase_restored_when_call_fails() {
        let mut host = RecordingHost::new(true);
        let err = privileged_call(&mut host, SIGNAL, BURN, &[]).unwrap_err();
        assert_eq!(err, HostError::Reverted("denied".into()));
        assert_eq!(host.observed, vec![SIGNAL]);
        assert_eq!(host.coinbase, BURN);
    }

    #[test]
    fn nested_guards_unwind_in_order() {
        let other = address!("00000000000000000000000000000000000dead0");
        let mut host = RecordingHost::new(false);
        {
            let mut outer = CoinbaseSignalGuard::new(&mut host, SIGNAL);
            {
                let inner = CoinbaseSignalGuard::new(&mut *outer, other);
                assert_eq!(inner.coinbase(), other);
            }
            assert_eq!(outer.coinbase(), SIGNAL);
        }
        assert_eq!(host.coinbase, BURN);
    }
}
