// Path: crates/test_utils/src/lib.rs
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
        clippy::indexing_slicing
    )
)]

//! # Flare Protocol Test Utilities
//!
//! An in-memory [`flare_api::host::ExecutionHost`], calldata fixtures and
//! logging setup shared by the scenario tests.

pub mod assertions;
pub mod fixtures;
pub mod host;

pub use host::{MockHost, RecordedCall, Scripted};

use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

/// Installs a compact `tracing` subscriber filtered by `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_tracing() -> anyhow::Result<()> {
    let fmt_layer = fmt::layer().with_test_writer().with_target(true).compact();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = Registry::default().with(filter).with(fmt_layer);
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::trace!(target: "test_utils", "Subscriber already installed");
    }
    Ok(())
}
