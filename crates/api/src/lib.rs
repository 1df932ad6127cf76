// Path: crates/api/src/lib.rs

//! # Flare Protocol API Crate Lints
//!
//! This crate enforces a strict set of lints to ensure high-quality,
//! panic-free, and well-documented code. Panics are disallowed in non-test
//! code to promote robust error handling.
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
#![deny(missing_docs)]
//! # Flare Protocol API
//!
//! The narrow contract between the protocol rules and the execution host.
//! The rules never interpret bytecode or touch storage directly; everything
//! goes through [`host::ExecutionHost`].

/// Re-exports all core error types from the central `flare-types` crate.
pub mod error;
/// Defines the `ExecutionHost` trait and the block context it exposes.
pub mod host;
/// Scoped substitution of the coinbase signalling field.
pub mod signal;

/// A curated set of the most commonly used traits and types.
pub mod prelude {
    pub use crate::error::{ErrorCode, HostError};
    pub use crate::host::context::BlockContext;
    pub use crate::host::{CallOutcome, ExecutionHost, Snapshot};
    pub use crate::signal::{privileged_call, CoinbaseSignalGuard};
}
