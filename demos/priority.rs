//! Context Priority Walkthrough
//!
//! A registry with two contexts reading different facets of the same
//! entity. When rules in both contexts would match an event, the context
//! whose accessor was registered first wins; registration order is the
//! priority order.
//!
//! Also shows the registry manifest, including a context that carries a
//! rule but no accessor (dead configuration, flagged at build time).
//!
//! Run with: cargo run --example priority

use turnstile::{Outcome, RegistryBuilder};

#[derive(Clone, Debug, PartialEq)]
struct Ticket {
    security: String,
    billing: String,
    handled_by: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Context Priority ===\n");

    let registry = RegistryBuilder::new()
        .state("security", |ticket: &Ticket| ticket.security.clone())
        .state("billing", |ticket: &Ticket| ticket.billing.clone())
        .rule_for(
            "security",
            |state: &String, event: &String| state == "pending" && event == "escalate",
            |mut ticket: Ticket, _event: &String, _extra: &[()]| {
                ticket.handled_by = "security desk".to_string();
                ticket.security = "escalated".to_string();
                ticket
            },
        )
        .rule_for(
            "billing",
            |state: &String, event: &String| state == "pending" && event == "escalate",
            |mut ticket: Ticket, _event: &String, _extra: &[()]| {
                ticket.handled_by = "billing desk".to_string();
                ticket.billing = "escalated".to_string();
                ticket
            },
        )
        // Nothing reads an "archive" state, so this rule can never fire;
        // build warns and the manifest marks it unreachable.
        .rule_for(
            "archive",
            |_state: &String, event: &String| event == "archive",
            |ticket: Ticket, _event: &String, _extra: &[()]| ticket,
        )
        .build()
        .unwrap();

    let ticket = Ticket {
        security: "pending".to_string(),
        billing: "pending".to_string(),
        handled_by: String::new(),
    };

    println!("Both desks have a matching rule for \"escalate\".");
    let outcome = registry.transit(ticket, &"escalate".to_string()).unwrap();
    match &outcome {
        Outcome::Transited(ticket) => {
            println!("Winner: {} (registered first)\n", ticket.handled_by)
        }
        Outcome::NoMatch(_) => println!("no rule applied\n"),
    }

    // With security already escalated, only the billing rule matches.
    let ticket = outcome.into_entity();
    let outcome = registry.transit(ticket, &"escalate".to_string()).unwrap();
    if let Outcome::Transited(ticket) = &outcome {
        println!("Second escalation falls through to: {}\n", ticket.handled_by);
    }

    println!("Registry manifest:");
    let manifest = registry.manifest();
    println!("{}", serde_json::to_string_pretty(&manifest).unwrap());

    println!("\nUnreachable contexts: {:?}", registry.unreachable_contexts());

    println!("\n=== Demo Complete ===");
}
