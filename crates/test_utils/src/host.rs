// Path: crates/test_utils/src/host.rs
//! An in-memory execution host with scripted call results.

use alloy_primitives::{Address, U256};
use flare_api::error::HostError;
use flare_api::host::context::BlockContext;
use flare_api::host::{CallOutcome, ExecutionHost, Snapshot};
use flare_types::chain::ChainId;
use flare_types::service_configs::BURN_ADDRESS;
use std::collections::BTreeMap;

/// The default block gas limit of a [`MockHost`].
pub const MOCK_GAS_LIMIT: u64 = 8_000_000;

/// A scripted answer to a call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scripted {
    /// The call succeeds with this return data.
    Return(Vec<u8>),
    /// The call fails with this error.
    Fail(HostError),
}

/// A call observed by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub caller: Address,
    pub to: Address,
    pub data: Vec<u8>,
    pub gas: u64,
    /// The coinbase at the time of the call.
    pub coinbase: Address,
    pub is_static: bool,
}

/// A deterministic [`ExecutionHost`] for tests.
///
/// Calls are answered per target address, static calls per caller, so each
/// attestor can be scripted independently. Snapshots capture the full
/// balance table.
#[derive(Debug, Clone)]
pub struct MockHost {
    context: BlockContext,
    coinbase: Address,
    balances: BTreeMap<Address, U256>,
    snapshots: Vec<BTreeMap<Address, U256>>,
    call_responses: BTreeMap<Address, Scripted>,
    call_credits: BTreeMap<Address, Vec<(Address, U256)>>,
    static_responses: BTreeMap<Address, Scripted>,
    calls: Vec<RecordedCall>,
    reverts: Vec<Snapshot>,
}

impl MockHost {
    pub fn new(chain_id: ChainId, block_time: u64) -> Self {
        Self {
            context: BlockContext {
                chain_id,
                block_time,
                gas_limit: MOCK_GAS_LIMIT,
            },
            coinbase: BURN_ADDRESS,
            balances: BTreeMap::new(),
            snapshots: Vec::new(),
            call_responses: BTreeMap::new(),
            call_credits: BTreeMap::new(),
            static_responses: BTreeMap::new(),
            calls: Vec::new(),
            reverts: Vec::new(),
        }
    }

    pub fn with_gas_limit(mut self, gas_limit: u64) -> Self {
        self.context.gas_limit = gas_limit;
        self
    }

    pub fn with_coinbase(mut self, coinbase: Address) -> Self {
        self.coinbase = coinbase;
        self
    }

    pub fn set_balance(&mut self, address: Address, amount: U256) {
        self.balances.insert(address, amount);
    }

    /// Calls to `to` succeed with `data`.
    pub fn respond(&mut self, to: Address, data: Vec<u8>) {
        self.call_responses.insert(to, Scripted::Return(data));
    }

    /// Calls to `to` fail with `error`.
    pub fn fail(&mut self, to: Address, error: HostError) {
        self.call_responses.insert(to, Scripted::Fail(error));
    }

    /// A successful call to `to` also credits `amount` to `address`.
    pub fn credit_on_call(&mut self, to: Address, address: Address, amount: U256) {
        self.call_credits.entry(to).or_default().push((address, amount));
    }

    /// Static calls made by `attestor` return `data`.
    pub fn attest(&mut self, attestor: Address, data: Vec<u8>) {
        self.static_responses.insert(attestor, Scripted::Return(data));
    }

    /// Static calls made by `attestor` fail.
    pub fn abstain(&mut self, attestor: Address) {
        self.static_responses
            .insert(attestor, Scripted::Fail(HostError::Reverted("abstained".into())));
    }

    pub fn calls(&self) -> &[RecordedCall] {
        &self.calls
    }

    /// Non-static calls made to `to`.
    pub fn calls_to(&self, to: Address) -> Vec<&RecordedCall> {
        self.calls
            .iter()
            .filter(|c| c.to == to && !c.is_static)
            .collect()
    }

    /// Snapshots reverted to, in order.
    pub fn reverts(&self) -> &[Snapshot] {
        &self.reverts
    }

    fn record(&mut self, caller: Address, to: Address, data: &[u8], gas: u64, is_static: bool) {
        self.calls.push(RecordedCall {
            caller,
            to,
            data: data.to_vec(),
            gas,
            coinbase: self.coinbase,
            is_static,
        });
    }
}

impl ExecutionHost for MockHost {
    fn block_context(&self) -> BlockContext {
        self.context
    }

    fn call(
        &mut self,
        caller: Address,
        to: Address,
        data: &[u8],
        gas: u64,
    ) -> Result<CallOutcome, HostError> {
        self.record(caller, to, data, gas, false);
        let return_data = match self.call_responses.get(&to) {
            Some(Scripted::Fail(e)) => return Err(e.clone()),
            Some(Scripted::Return(bytes)) => bytes.clone(),
            None => Vec::new(),
        };

        let snapshot = Snapshot(self.snapshots.len() as u64);
        self.snapshots.push(self.balances.clone());
        for (address, amount) in self.call_credits.get(&to).cloned().unwrap_or_default() {
            self.add_balance(address, amount);
        }
        Ok(CallOutcome {
            snapshot,
            return_data,
            gas_left: gas / 2,
        })
    }

    fn static_call(
        &mut self,
        caller: Address,
        to: Address,
        data: &[u8],
        gas: u64,
    ) -> Result<Vec<u8>, HostError> {
        self.record(caller, to, data, gas, true);
        match self.static_responses.get(&caller) {
            Some(Scripted::Return(bytes)) => Ok(bytes.clone()),
            Some(Scripted::Fail(e)) => Err(e.clone()),
            None => Err(HostError::Execution(format!("no attestation scripted for {caller}"))),
        }
    }

    fn revert_to_snapshot(&mut self, snapshot: Snapshot) {
        let index = snapshot.0 as usize;
        if let Some(balances) = self.snapshots.get(index).cloned() {
            self.balances = balances;
            self.snapshots.truncate(index);
        }
        self.reverts.push(snapshot);
    }

    fn balance(&self, address: Address) -> U256 {
        self.balances.get(&address).copied().unwrap_or_default()
    }

    fn add_balance(&mut self, address: Address, amount: U256) {
        let entry = self.balances.entry(address).or_default();
        *entry = entry.saturating_add(amount);
    }

    fn sub_balance(&mut self, address: Address, amount: U256) {
        let entry = self.balances.entry(address).or_default();
        *entry = entry.saturating_sub(amount);
    }

    fn coinbase(&self) -> Address {
        self.coinbase
    }

    fn set_coinbase(&mut self, coinbase: Address) {
        self.coinbase = coinbase;
    }
}
