//! Property-based tests for the machine runtime.
//!
//! These tests use proptest to verify the undo/redo laws hold across
//! many randomly generated configurations and walk sequences.

use proptest::prelude::*;
use statewind::{Machine, MachineBuilder, MachineConfig};

/// A ring of `n` states `s0..s{n-1}`, each handling `next` (one step
/// around the ring) and `rewind` (straight back to `s0`).
fn ring_config(n: usize) -> MachineConfig {
    let mut builder = MachineBuilder::new().initial("s0");
    for i in 0..n {
        let next = format!("s{}", (i + 1) % n);
        builder = builder
            .transition(format!("s{i}"), "next", next)
            .transition(format!("s{i}"), "rewind", "s0");
    }
    builder
        .build_config()
        .expect("ring configuration always declares states")
}

prop_compose! {
    /// A ring configuration plus a walk of valid direct-change targets.
    fn arb_walk()(
        n in 1..6usize,
        steps in prop::collection::vec(any::<usize>(), 0..12),
    ) -> (MachineConfig, Vec<String>) {
        let targets = steps.iter().map(|s| format!("s{}", s % n)).collect();
        (ring_config(n), targets)
    }
}

proptest! {
    #[test]
    fn fresh_machine_reports_initial_state(n in 1..6usize) {
        let machine = Machine::new(ring_config(n)).unwrap();
        prop_assert_eq!(machine.current_state(), "s0");
    }

    #[test]
    fn trigger_walks_the_ring_in_order(n in 1..6usize, hops in 0..12usize) {
        let mut machine = Machine::new(ring_config(n)).unwrap();

        for _ in 0..hops {
            machine.trigger("next").unwrap();
        }

        prop_assert_eq!(machine.current_state(), format!("s{}", hops % n));
    }

    #[test]
    fn full_undo_returns_to_initial_state((config, walk) in arb_walk()) {
        let mut machine = Machine::new(config).unwrap();
        for target in &walk {
            machine.change_state(target).unwrap();
        }

        for _ in 0..walk.len() {
            prop_assert!(machine.undo());
        }

        prop_assert!(!machine.undo());
        prop_assert_eq!(machine.current_state(), "s0");
    }

    #[test]
    fn redo_reverses_undo((config, walk) in arb_walk()) {
        prop_assume!(!walk.is_empty());

        let mut machine = Machine::new(config).unwrap();
        for target in &walk {
            machine.change_state(target).unwrap();
        }

        let before_undo = machine.current_state().to_string();

        prop_assert!(machine.undo());
        prop_assert!(machine.redo());
        prop_assert_eq!(machine.current_state(), before_undo);
    }

    #[test]
    fn forward_move_after_undo_discards_redo((config, walk) in arb_walk()) {
        prop_assume!(!walk.is_empty());

        let mut machine = Machine::new(config).unwrap();
        for target in &walk {
            machine.change_state(target).unwrap();
        }

        prop_assert!(machine.undo());
        machine.change_state("s0").unwrap();

        prop_assert!(!machine.redo());
    }

    #[test]
    fn timeline_is_lossless((config, walk) in arb_walk(), rewinds in any::<usize>()) {
        let mut machine = Machine::new(config).unwrap();

        let mut visited = vec!["s0".to_string()];
        for target in &walk {
            machine.change_state(target).unwrap();
            visited.push(target.clone());
        }

        for _ in 0..(rewinds % (walk.len() + 1)) {
            prop_assert!(machine.undo());
        }

        let mut timeline: Vec<String> = machine.history().past().to_vec();
        timeline.push(machine.current_state().to_string());
        timeline.extend(machine.history().future().iter().rev().cloned());

        prop_assert_eq!(timeline, visited);
    }

    #[test]
    fn rejected_operations_leave_the_machine_untouched((config, walk) in arb_walk()) {
        let mut machine = Machine::new(config).unwrap();
        for target in &walk {
            machine.change_state(target).unwrap();
        }

        let present = machine.current_state().to_string();
        let past = machine.history().past().to_vec();
        let future = machine.history().future().to_vec();

        prop_assert!(machine.change_state("not-a-state").is_err());
        prop_assert!(machine.trigger("not-an-event").is_err());

        prop_assert_eq!(machine.current_state(), present);
        prop_assert_eq!(machine.history().past(), past.as_slice());
        prop_assert_eq!(machine.history().future(), future.as_slice());
    }

    #[test]
    fn clear_history_disables_both_directions((config, walk) in arb_walk()) {
        let mut machine = Machine::new(config).unwrap();
        for target in &walk {
            machine.change_state(target).unwrap();
        }
        if !walk.is_empty() {
            machine.undo();
        }

        let present = machine.current_state().to_string();
        machine.clear_history();

        prop_assert!(!machine.undo());
        prop_assert!(!machine.redo());
        prop_assert_eq!(machine.current_state(), present);
    }

    #[test]
    fn states_handling_is_an_ordered_subset(n in 1..6usize) {
        let machine = Machine::new(ring_config(n)).unwrap();

        let all = machine.states();
        let handling = machine.states_handling("next");

        // Every ring state handles `next`, so the filtered view is the
        // full declaration order.
        prop_assert_eq!(handling, all);
        prop_assert!(machine.states_handling("absent").is_empty());
    }
}
