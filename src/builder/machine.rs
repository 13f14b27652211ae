//! Builder for assembling machine configurations.

use crate::builder::error::BuildError;
use crate::config::{EventId, MachineConfig, StateDef, StateId};
use crate::core::Machine;
use indexmap::IndexMap;

/// Builder for constructing machines with a fluent API.
///
/// States are declared in call order, which is the order the machine
/// later enumerates them in.
///
/// # Example
///
/// ```rust
/// use statewind::MachineBuilder;
///
/// let machine = MachineBuilder::new()
///     .initial("draft")
///     .transition("draft", "submit", "review")
///     .transition("review", "approve", "published")
///     .state("published")
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.current_state(), "draft");
/// ```
pub struct MachineBuilder {
    initial: Option<StateId>,
    states: IndexMap<StateId, StateDef>,
}

impl MachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: IndexMap::new(),
        }
    }

    /// Set the initial state (required).
    ///
    /// The initial state is not declared implicitly; declare it with
    /// [`state`](Self::state) or as a transition source to make it
    /// reachable again after leaving it.
    pub fn initial(mut self, state: impl Into<StateId>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state with no outgoing transitions, or keep an existing
    /// declaration unchanged.
    pub fn state(mut self, id: impl Into<StateId>) -> Self {
        self.states.entry(id.into()).or_default();
        self
    }

    /// Declare a transition from `from` to `to` on `event`.
    ///
    /// Declares `from` if it has not been seen yet. The target is
    /// recorded as-is; declaring it as a state of its own is the
    /// caller's job.
    pub fn transition(
        mut self,
        from: impl Into<StateId>,
        event: impl Into<EventId>,
        to: impl Into<StateId>,
    ) -> Self {
        self.states
            .entry(from.into())
            .or_default()
            .transitions
            .insert(event.into(), to.into());
        self
    }

    /// Build the configuration.
    /// Returns an error if required fields are missing.
    pub fn build_config(self) -> Result<MachineConfig, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        Ok(MachineConfig {
            initial,
            states: self.states,
        })
    }

    /// Build a machine positioned at the initial state.
    pub fn build(self) -> Result<Machine, BuildError> {
        let config = self.build_config()?;
        Ok(Machine::new(config).expect("built configuration declares at least one state"))
    }
}

impl Default for MachineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
