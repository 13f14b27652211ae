//! Document Workflow
//!
//! This example loads a machine configuration from JSON and walks a
//! review workflow.
//!
//! Key concepts:
//! - Configurations as plain data (here parsed from JSON)
//! - State enumeration queries, with and without an event filter
//! - The reset/clear-history split: reset jumps back to the initial
//!   state but keeps the timeline, clear_history forgets the timeline
//!   without moving
//!
//! Run with: cargo run --example document_workflow

use statewind::{Machine, MachineConfig};

fn main() {
    println!("=== Document Workflow ===\n");

    let config: MachineConfig = serde_json::from_str(
        r#"{
            "initial": "draft",
            "states": {
                "draft":     { "transitions": { "submit": "review" } },
                "review":    { "transitions": { "approve": "published", "reject": "draft" } },
                "published": { "transitions": {} }
            }
        }"#,
    )
    .unwrap();

    let mut machine = Machine::new(config).unwrap();

    println!("All states:            {:?}", machine.states());
    println!("States with `submit`:  {:?}", machine.states_handling("submit"));
    println!("States with `approve`: {:?}\n", machine.states_handling("approve"));

    machine.trigger("submit").unwrap();
    println!("After submit:  {}", machine.current_state());
    machine.trigger("reject").unwrap();
    println!("After reject:  {}", machine.current_state());
    machine.trigger("submit").unwrap();
    machine.trigger("approve").unwrap();
    println!("After approve: {}\n", machine.current_state());

    // A rejected event leaves the machine where it was.
    let denied = machine.trigger("submit");
    println!("Triggering `submit` while published: {}", denied.unwrap_err());
    println!("Still in: {}\n", machine.current_state());

    machine.reset();
    println!("After reset:   {} (history kept)", machine.current_state());
    assert!(machine.undo());
    println!("After undo:    {} (stepped back across the reset)", machine.current_state());

    machine.clear_history();
    println!("After clear_history: undo available = {}", machine.undo());

    println!("\n=== Example Complete ===");
}
