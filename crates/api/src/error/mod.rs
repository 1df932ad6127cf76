// Path: crates/api/src/error/mod.rs
// Re-export all core error types from the central types crate.
pub use flare_types::error::{
    ConfigError, DaemonError, ErrorCode, GovernanceError, HostError, StateConnectorError,
    TransitionError,
};
