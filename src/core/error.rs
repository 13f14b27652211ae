//! Runtime error types.

use thiserror::Error;

/// Errors raised by [`Machine`](crate::core::Machine) operations.
///
/// Construction failures are fatal (no machine is produced). Transition
/// failures are recoverable: the machine is left exactly as it was, and
/// the caller may retry with a valid target or event.
#[derive(Debug, Error)]
pub enum MachineError {
    #[error("configuration declares no states")]
    EmptyConfig,

    #[error("state `{state}` is not declared in the configuration")]
    UnknownState { state: String },

    #[error("state `{state}` has no transition for event `{event}`")]
    UnknownEvent { state: String, event: String },
}
