// Path: crates/types/src/lib.rs
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::todo,
        clippy::unimplemented,
        clippy::indexing_slicing
    )
)]

//! # Flare Protocol Types
//!
//! This crate is the foundational library for the Flare protocol rules,
//! containing the chain parameter table, the fixed wire constants, the
//! per-network parameter sets, process configuration and all error types.
//!
//! ## Architectural Role
//!
//! As the base crate, `flare-types` has minimal dependencies and is itself a
//! dependency for every other crate in the workspace. Every per-network
//! constant lives here behind a [`chain::ChainValue`] so that supporting a new
//! network only requires new table entries, never new branches.

/// Function selectors and calldata helpers for the privileged genesis contracts.
pub mod abi;
/// Chain identities and the `ChainValue` per-chain parameter table.
pub mod chain;
/// Process-wide configuration read once at startup (local attestors, fork flag).
pub mod config;
/// A unified set of all error types used across the workspace.
pub mod error;
/// Per-network parameter sets for each protocol rule.
pub mod service_configs;

pub use alloy_primitives::{Address, U256};
