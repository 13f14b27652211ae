//! Machine configuration types.
//!
//! A configuration is the declarative description of a state machine: an
//! initial state plus a table of states, each carrying its own
//! event-to-target transition table. Configurations are plain data. The
//! runtime never mutates them, so a single configuration can back any
//! number of machines.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Identifier of a state. Opaque to the runtime.
pub type StateId = String;

/// Identifier of an event. Opaque to the runtime.
pub type EventId = String;

/// Definition of a single state: the transitions leaving it.
///
/// # Example
///
/// ```rust
/// use statewind::StateDef;
///
/// let mut def = StateDef::default();
/// def.transitions.insert("start".into(), "running".into());
///
/// assert_eq!(def.transitions.get("start").map(String::as_str), Some("running"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateDef {
    /// Event identifier to target state, in declaration order.
    #[serde(default)]
    pub transitions: IndexMap<EventId, StateId>,
}

/// Declarative description of a state machine.
///
/// The field names and nesting match the external contract exactly, so a
/// configuration round-trips through serde unchanged:
///
/// ```rust
/// use statewind::MachineConfig;
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
/// assert_eq!(config.initial, "idle");
/// assert_eq!(config.states.len(), 2);
/// ```
///
/// `initial` is not required to appear in `states`. A machine built from
/// such a configuration starts in an undeclared state and can only leave
/// it through a direct state change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// The state a machine starts in (and returns to on reset).
    pub initial: StateId,

    /// Declared states, in declaration order.
    pub states: IndexMap<StateId, StateDef>,
}
