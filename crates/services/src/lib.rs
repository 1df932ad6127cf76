// Path: crates/services/src/lib.rs
#![forbid(unsafe_code)]
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
//! Privileged protocol rules invoked by the execution host during state
//! transition: daemon minting, governance settings propagation, state
//! connector finalisation and prioritised-call classification.

pub mod daemon;
pub mod governance;
pub mod hooks;
pub mod prioritised;
pub mod state_connector;

pub use daemon::DaemonMinter;
pub use governance::{GovernanceSettings, MigrationKind};
pub use hooks::{TransitionHooks, TransitionMessage};
pub use prioritised::is_prioritised_contract_call;
pub use state_connector::{AttestationVotes, FinalisationOutcome, StateConnector};
