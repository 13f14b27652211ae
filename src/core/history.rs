//! Undo/redo history stacks.
//!
//! [`History`] keeps two stacks around a present value that the caller
//! owns: `past` holds values walked away from, `future` holds values
//! undone away from. Together with the present value the stacks form a
//! lossless timeline: `past`, then the present value, then `future`
//! reversed is the full visited sequence.

use serde::{Deserialize, Serialize};
use std::mem;

/// Two-stack undo/redo history around a caller-owned present value.
///
/// The type is generic so it can track any owned value the caller hands
/// over by move; the machine runtime instantiates it with state
/// identifiers.
///
/// # Example
///
/// ```rust
/// use statewind::History;
/// use std::mem;
///
/// let mut present = "draft".to_string();
/// let mut history = History::new();
///
/// history.record(mem::replace(&mut present, "review".to_string()));
/// history.record(mem::replace(&mut present, "published".to_string()));
///
/// assert!(history.undo(&mut present));
/// assert_eq!(present, "review");
/// assert!(history.redo(&mut present));
/// assert_eq!(present, "published");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct History<T> {
    past: Vec<T>,
    future: Vec<T>,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> History<T> {
    /// Create an empty history.
    pub fn new() -> Self {
        Self {
            past: Vec::new(),
            future: Vec::new(),
        }
    }

    /// Record a forward move away from `departed`.
    ///
    /// Pushes `departed` onto the past stack and discards the redo path:
    /// once a new forward move is made, the undone values are no longer
    /// reachable.
    pub fn record(&mut self, departed: T) {
        self.past.push(departed);
        self.future.clear();
    }

    /// Step `present` back to the most recent past value.
    ///
    /// Returns `false` without mutating anything when the past stack is
    /// empty.
    pub fn undo(&mut self, present: &mut T) -> bool {
        match self.past.pop() {
            Some(previous) => {
                self.future.push(mem::replace(present, previous));
                true
            }
            None => false,
        }
    }

    /// Step `present` forward to the most recently undone value.
    ///
    /// Returns `false` without mutating anything when the future stack is
    /// empty.
    pub fn redo(&mut self, present: &mut T) -> bool {
        match self.future.pop() {
            Some(next) => {
                self.past.push(mem::replace(present, next));
                true
            }
            None => false,
        }
    }

    /// Drop both stacks. The present value is untouched.
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    /// Whether a call to [`undo`](Self::undo) would succeed.
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Whether a call to [`redo`](Self::redo) would succeed.
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Values walked away from, oldest first.
    pub fn past(&self) -> &[T] {
        &self.past
    }

    /// Values undone away from, most recently undone last.
    pub fn future(&self) -> &[T] {
        &self.future
    }
}
