// Path: crates/services/src/prioritised/mod.rs
//! Classification of calls that bypass the ordinary fee market.

use alloy_primitives::Address;
use flare_types::abi;
use flare_types::chain::ChainId;
use flare_types::service_configs::PrioritisedParams;

/// Returns true if a call to `to` should be treated as a prioritised system
/// call on `chain` at `block_time`.
///
/// `ret` is the call's return value; an empty return counts as all-zero.
pub fn is_prioritised_contract_call(
    params: &PrioritisedParams,
    chain: ChainId,
    block_time: u64,
    to: Option<Address>,
    data: &[u8],
    ret: &[u8],
    supplied_gas: u64,
) -> bool {
    let Some(to) = to else {
        return false;
    };
    if supplied_gas > params.max_gas(chain) {
        return false;
    }

    let prefixes_active = params.prefixes_active(chain, block_time);
    if to == params.ftso_contract(chain) {
        return !prefixes_active || abi::has_any_selector(data, params.ftso_prefixes.get(chain));
    }

    if Some(to) == params.submitter_contract(chain) {
        if !params.submitter_active(chain, block_time) || ret.iter().all(|b| *b == 0) {
            return false;
        }
        if !prefixes_active {
            return true;
        }
        return data.len() <= params.calldata_cap
            && abi::has_any_selector(data, params.submitter_prefixes.get(chain));
    }

    false
}
