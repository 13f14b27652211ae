//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine with
//! event-driven transitions and undo.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - Event-driven transitions via `trigger`
//! - Rewinding the visited states with `undo`
//!
//! Run with: cargo run --example traffic_light

use statewind::MachineBuilder;

fn main() {
    println!("=== Traffic Light State Machine ===\n");

    let mut machine = MachineBuilder::new()
        .initial("red")
        .transition("red", "go", "green")
        .transition("green", "caution", "yellow")
        .transition("yellow", "stop", "red")
        .build()
        .unwrap();

    println!("Initial state: {}\n", machine.current_state());

    println!("Transition sequence:");
    for event in ["go", "caution", "stop", "go"] {
        machine.trigger(event).unwrap();
        println!("  {:>7} -> {}", event, machine.current_state());
    }

    println!("\nRewinding:");
    while machine.undo() {
        println!("  back to {}", machine.current_state());
    }

    println!("\nThis is a cyclic state machine - the sequence repeats:");
    println!("  red -> green -> yellow -> red -> green -> ...");

    println!("\n=== Example Complete ===");
}
