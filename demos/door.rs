//! Door Lock Walkthrough
//!
//! This demo runs the smallest useful registry: one default context, two
//! rules, and a caller-owned entity.
//!
//! Key concepts:
//! - Single default context (the empty string)
//! - Guards over (state, event) pairs
//! - NoMatch as a normal outcome, not an error
//!
//! Run with: cargo run --example door

use turnstile::{Outcome, RegistryBuilder};

#[derive(Clone, Debug, PartialEq)]
struct Door {
    state: String,
}

fn describe(outcome: &Outcome<Door>) -> String {
    match outcome {
        Outcome::Transited(door) => format!("transited -> {:?}", door.state),
        Outcome::NoMatch(door) => format!("no match, door stays {:?}", door.state),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Door Lock Transition Engine ===\n");

    let registry = RegistryBuilder::new()
        .state("", |door: &Door| door.state.clone())
        .rule_for(
            "",
            |state: &String, event: &String| state == "locked" && event == "unlock",
            |mut door: Door, _event: &String, _extra: &[()]| {
                door.state = "open".to_string();
                door
            },
        )
        .rule_for(
            "",
            |state: &String, event: &String| state == "open" && event == "lock",
            |mut door: Door, _event: &String, _extra: &[()]| {
                door.state = "locked".to_string();
                door
            },
        )
        .build()
        .unwrap();

    println!("Registry compiled: 1 context, {} rules\n", registry.rule_count());

    let mut door = Door {
        state: "locked".to_string(),
    };
    println!("Door starts {:?}\n", door.state);

    for event in ["unlock", "unlock", "lock"] {
        let outcome = registry.transit(door, &event.to_string()).unwrap();
        println!("  event {:?}: {}", event, describe(&outcome));
        door = outcome.into_entity();
    }

    println!("\nThe second \"unlock\" found no applicable rule: the door was");
    println!("already open, so its guard declined and the entity came back");
    println!("untouched. That is a NoMatch outcome, not a failure.");

    println!("\n=== Demo Complete ===");
}
