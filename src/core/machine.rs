//! The state machine runtime.

use crate::config::{MachineConfig, StateId};
use crate::core::error::MachineError;
use crate::core::history::History;
use std::mem;
use std::sync::Arc;
use tracing::{debug, trace};

/// A running state machine.
///
/// A `Machine` owns its runtime state (the present state plus the
/// undo/redo history) and holds a shared, read-only [`MachineConfig`].
/// All operations are synchronous and non-blocking. A machine is not
/// internally synchronized; callers using one instance from several
/// threads must serialize access themselves.
///
/// # Example
///
/// ```rust
/// use statewind::{Machine, MachineConfig};
///
/// let config: MachineConfig = serde_json::from_str(
///     r#"{
///         "initial": "idle",
///         "states": {
///             "idle":    { "transitions": { "start": "running" } },
///             "running": { "transitions": { "stop": "idle" } }
///         }
///     }"#,
/// )
/// .unwrap();
///
/// let mut machine = Machine::new(config).unwrap();
/// assert_eq!(machine.current_state(), "idle");
///
/// machine.trigger("start").unwrap();
/// machine.trigger("stop").unwrap();
/// assert_eq!(machine.current_state(), "idle");
///
/// assert!(machine.undo());
/// assert_eq!(machine.current_state(), "running");
/// ```
#[derive(Clone, Debug)]
pub struct Machine {
    config: Arc<MachineConfig>,
    present: StateId,
    history: History<StateId>,
}

impl Machine {
    /// Create a machine positioned at the configuration's initial state.
    ///
    /// Accepts an owned configuration or an `Arc` already shared with
    /// other machines. Fails with [`MachineError::EmptyConfig`] when the
    /// configuration declares no states at all.
    ///
    /// The initial state is deliberately not checked against the state
    /// table. A configuration whose `initial` is undeclared produces a
    /// machine that starts in that state and can only leave it through
    /// [`change_state`](Self::change_state).
    pub fn new(config: impl Into<Arc<MachineConfig>>) -> Result<Self, MachineError> {
        let config = config.into();
        if config.states.is_empty() {
            return Err(MachineError::EmptyConfig);
        }

        let present = config.initial.clone();
        debug!(initial = %present, states = config.states.len(), "machine created");

        Ok(Self {
            config,
            present,
            history: History::new(),
        })
    }

    /// The active state.
    pub fn current_state(&self) -> &str {
        &self.present
    }

    /// The configuration backing this machine.
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// The undo/redo history of visited states.
    pub fn history(&self) -> &History<StateId> {
        &self.history
    }

    /// Move directly to `target`.
    ///
    /// On success the departed state is pushed onto the undo stack and
    /// any pending redo path is discarded. Fails with
    /// [`MachineError::UnknownState`] when `target` is not a declared
    /// state; the machine is left untouched on failure.
    pub fn change_state(&mut self, target: &str) -> Result<(), MachineError> {
        if !self.config.states.contains_key(target) {
            return Err(MachineError::UnknownState {
                state: target.to_string(),
            });
        }

        let departed = mem::replace(&mut self.present, target.to_string());
        debug!(from = %departed, to = %self.present, "state changed");
        self.history.record(departed);

        Ok(())
    }

    /// Apply the transition the current state declares for `event`.
    ///
    /// Delegates to [`change_state`](Self::change_state) with the
    /// declared target, inheriting its history semantics. Fails with
    /// [`MachineError::UnknownEvent`] when the current state has no
    /// transition for `event`; the machine is left untouched on failure.
    pub fn trigger(&mut self, event: &str) -> Result<(), MachineError> {
        let target = self
            .config
            .states
            .get(self.present.as_str())
            .and_then(|state| state.transitions.get(event))
            .ok_or_else(|| MachineError::UnknownEvent {
                state: self.present.clone(),
                event: event.to_string(),
            })?
            .clone();

        self.change_state(&target)
    }

    /// Return to the configuration's initial state.
    ///
    /// The history stacks are left alone: a reset is a jump, not an
    /// erasure, so a later [`undo`](Self::undo) can step back to a state
    /// visited before the reset. Use
    /// [`clear_history`](Self::clear_history) to forget the past as well.
    pub fn reset(&mut self) {
        trace!(to = %self.config.initial, "reset");
        self.present = self.config.initial.clone();
    }

    /// All declared states, in declaration order.
    pub fn states(&self) -> Vec<&str> {
        self.config.states.keys().map(String::as_str).collect()
    }

    /// Declared states that have a transition for `event`, in
    /// declaration order. Empty when none do.
    pub fn states_handling(&self, event: &str) -> Vec<&str> {
        self.config
            .states
            .iter()
            .filter(|(_, state)| state.transitions.contains_key(event))
            .map(|(id, _)| id.as_str())
            .collect()
    }

    /// Step back to the previously active state.
    ///
    /// Returns `false` without mutating anything when there is nothing
    /// to undo.
    pub fn undo(&mut self) -> bool {
        let undone = self.history.undo(&mut self.present);
        if undone {
            trace!(to = %self.present, "undo");
        }
        undone
    }

    /// Step forward to the most recently undone state.
    ///
    /// Returns `false` without mutating anything when there is nothing
    /// to redo.
    pub fn redo(&mut self) -> bool {
        let redone = self.history.redo(&mut self.present);
        if redone {
            trace!(to = %self.present, "redo");
        }
        redone
    }

    /// Forget all undo/redo history. The active state is untouched.
    pub fn clear_history(&mut self) {
        trace!("history cleared");
        self.history.clear();
    }
}
