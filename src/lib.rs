//! Statewind: a declarative finite state machine with undo/redo history.
//!
//! A machine is described by a [`MachineConfig`]: an initial state plus a
//! table of states, each mapping event identifiers to target states. The
//! [`Machine`] runtime tracks the active state, applies direct and
//! event-driven transitions, and keeps the full undo/redo timeline of
//! visited states.
//!
//! # Core Concepts
//!
//! - **Configuration**: declarative, immutable description of states and
//!   transitions, shareable read-only across any number of machines
//! - **Transitions**: direct ([`Machine::change_state`]) or event-driven
//!   ([`Machine::trigger`]), validated against the configuration
//! - **History**: two-stack undo/redo timeline of visited states
//!
//! # Example
//!
//! ```rust
//! use statewind::MachineBuilder;
//!
//! let mut machine = MachineBuilder::new()
//!     .initial("idle")
//!     .transition("idle", "start", "running")
//!     .transition("running", "stop", "idle")
//!     .build()
//!     .unwrap();
//!
//! machine.trigger("start").unwrap();
//! assert_eq!(machine.current_state(), "running");
//!
//! assert!(machine.undo());
//! assert_eq!(machine.current_state(), "idle");
//! assert!(machine.redo());
//! assert_eq!(machine.current_state(), "running");
//! ```

pub mod builder;
pub mod config;
pub mod core;

// Re-export commonly used types
pub use builder::{BuildError, MachineBuilder};
pub use config::{EventId, MachineConfig, StateDef, StateId};
pub use core::{History, Machine, MachineError};
