// Path: crates/types/src/abi.rs
//! Function selectors and calldata helpers for the privileged genesis contracts.
//!
//! Selectors are the first four bytes of the Keccak-256 hash of the Solidity
//! signature. They are chain-invariant wire constants.

use alloy_primitives::{Address, U256};

/// A 4-byte Solidity function selector.
pub type Selector = [u8; 4];

/// Length of one ABI-encoded argument word.
pub const WORD_LEN: usize = 32;

/// `trigger()` on the daemon contract.
pub const TRIGGER: Selector = [0x7f, 0xec, 0x8d, 0x38];

/// `setGovernanceAddress(address)` on the governance settings contract.
pub const SET_GOVERNANCE_ADDRESS: Selector = [0xcf, 0xc1, 0x62, 0x54];
/// `setTimelock(uint256)` on the governance settings contract.
pub const SET_TIMELOCK: Selector = [0x1e, 0x89, 0x1c, 0x0a];
/// `updateInitialAirdropAddress()` on the initial airdrop contract.
pub const UPDATE_INITIAL_AIRDROP_ADDRESS: Selector = [0x7d, 0x1f, 0x99, 0x46];
/// `updateDistributionAddress()` on the distribution contract.
pub const UPDATE_DISTRIBUTION_ADDRESS: Selector = [0x5a, 0xce, 0x4f, 0x0d];

/// `submitAttestation(uint256,bytes32,bytes32,bytes32)` on the state connector.
pub const SUBMIT_ATTESTATION: Selector = [0xcf, 0xd1, 0xfd, 0xad];
/// `getAttestation(uint256)` on the state connector.
pub const GET_ATTESTATION: Selector = [0x29, 0xbe, 0x4d, 0xb2];
/// `finaliseRound(uint256,bytes32)` on the state connector.
pub const FINALISE_ROUND: Selector = [0xea, 0xeb, 0xf6, 0xd3];

/// `submitHash(uint256,bytes32)` on the FTSO price submitter.
pub const SUBMIT_HASH: Selector = [0x8f, 0xc6, 0xf6, 0x67];
/// `submitPriceHashes(uint256,uint256[],bytes32[])` on the FTSO price submitter.
pub const SUBMIT_PRICE_HASHES: Selector = [0xc5, 0xad, 0xc5, 0x39];
/// `revealPrices(uint256,uint256[],uint256[],uint256)` on the FTSO price submitter.
pub const REVEAL_PRICES: Selector = [0xe2, 0xdb, 0x5a, 0x52];

/// `submit1()` on the FDC/FTSOv2 submission contract.
pub const SUBMIT_1: Selector = [0x6c, 0x53, 0x2f, 0xae];
/// `submit2()` on the FDC/FTSOv2 submission contract.
pub const SUBMIT_2: Selector = [0x9d, 0x00, 0xc9, 0xfd];
/// `submit3()` on the FDC/FTSOv2 submission contract.
pub const SUBMIT_3: Selector = [0xe1, 0xb1, 0x57, 0xe7];
/// `submitSignatures()` on the FDC/FTSOv2 submission contract.
pub const SUBMIT_SIGNATURES: Selector = [0x57, 0xee, 0xd5, 0x80];

/// Returns the selector of `data`, if it is at least four bytes long.
pub fn selector(data: &[u8]) -> Option<Selector> {
    data.get(..4)?.try_into().ok()
}

/// Returns true if `data` starts with `expected`.
pub fn has_selector(data: &[u8], expected: &Selector) -> bool {
    data.starts_with(expected)
}

/// Returns true if `data` starts with any of `prefixes`.
pub fn has_any_selector(data: &[u8], prefixes: &[Selector]) -> bool {
    prefixes.iter().any(|p| data.starts_with(p))
}

/// Returns the `index`-th argument word following the selector.
pub fn word(data: &[u8], index: usize) -> Option<[u8; WORD_LEN]> {
    let start = 4 + index * WORD_LEN;
    data.get(start..start + WORD_LEN)?.try_into().ok()
}

/// Decodes the `index`-th argument as a `uint256`.
pub fn uint_arg(data: &[u8], index: usize) -> Option<U256> {
    word(data, index).map(U256::from_be_bytes)
}

/// Decodes the `index`-th argument as an `address`.
///
/// Returns `None` when the word is missing or its twelve high-order bytes are
/// not zero, which is never produced by a conforming ABI encoder.
pub fn address_arg(data: &[u8], index: usize) -> Option<Address> {
    let w = word(data, index)?;
    let (padding, body) = w.split_at(WORD_LEN - 20);
    if padding.iter().any(|b| *b != 0) {
        return None;
    }
    Some(Address::from_slice(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn selector_requires_four_bytes() {
        assert_eq!(selector(&[0x7f, 0xec, 0x8d]), None);
        assert_eq!(selector(&[0x7f, 0xec, 0x8d, 0x38, 0x01]), Some(TRIGGER));
        assert!(has_selector(&TRIGGER, &TRIGGER));
        assert!(!has_selector(&[0x7f], &TRIGGER));
    }

    #[test]
    fn decodes_address_argument() {
        let expected = address!("1000000000000000000000000000000000000007");
        let mut data = SET_GOVERNANCE_ADDRESS.to_vec();
        data.extend_from_slice(&[0u8; 12]);
        data.extend_from_slice(expected.as_slice());
        assert_eq!(address_arg(&data, 0), Some(expected));
        assert_eq!(address_arg(&data, 1), None);
    }

    #[test]
    fn rejects_dirty_address_padding() {
        let mut data = SET_GOVERNANCE_ADDRESS.to_vec();
        data.extend_from_slice(&[0xffu8; 32]);
        assert_eq!(address_arg(&data, 0), None);
    }

    #[test]
    fn decodes_uint_argument() {
        let mut data = SET_TIMELOCK.to_vec();
        data.extend_from_slice(&U256::from(3600u64).to_be_bytes::<32>());
        assert_eq!(uint_arg(&data, 0), Some(U256::from(3600u64)));
        assert_eq!(uint_arg(&data[..20], 0), None);
    }
}
