// Path: crates/test_utils/src/fixtures/mod.rs
//! Calldata, attestor and network fixtures.

use alloy_primitives::{Address, U256};
use flare_types::abi::{Selector, WORD_LEN};

pub mod network;

pub use network::{network_table, protocol_params, shared_params};

/// A 32-byte big-endian word holding `value`.
pub fn word(value: u64) -> [u8; WORD_LEN] {
    U256::from(value).to_be_bytes::<WORD_LEN>()
}

/// A 32-byte word holding `address`, left-padded with zeros.
pub fn address_word(address: Address) -> [u8; WORD_LEN] {
    address.into_word().0
}

/// A 32-byte commitment filled with `byte`.
pub fn commitment(byte: u8) -> Vec<u8> {
    vec![byte; WORD_LEN]
}

/// `selector` followed by each of `words`.
pub fn calldata(selector: Selector, words: &[[u8; WORD_LEN]]) -> Vec<u8> {
    let mut data = selector.to_vec();
    for w in words {
        data.extend_from_slice(w);
    }
    data
}

/// `n` distinct, deterministic attestor addresses sharing a `tag` byte.
pub fn attestors(tag: u8, n: u8) -> Vec<Address> {
    (1..=n)
        .map(|i| {
            let mut bytes = [0u8; 20];
            bytes[0] = tag;
            bytes[19] = i;
            Address::from(bytes)
        })
        .collect()
}
