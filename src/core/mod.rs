//! Core vocabulary of the transition engine.
//!
//! This module contains the building blocks a registry is compiled from:
//! - State accessors that read an entity's current state
//! - Guard predicates over (state, event) pairs
//! - Transition rules pairing a guard with an action
//!
//! Everything here is a plain value; the types impose no interpretation on
//! entities, events, or state values beyond passing them to the closures
//! registered by the caller.

mod accessor;
mod guard;
mod rule;

pub use accessor::StateAccessor;
pub use guard::Guard;
pub use rule::{Action, TransitionRule};

/// Boxed error carried out of user-supplied accessor, guard, and action
/// code. Faults are propagated to the caller with the original error
/// attached; the engine never inspects or recovers from them.
pub type DynError = Box<dyn std::error::Error + Send + Sync + 'static>;
