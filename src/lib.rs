//! Turnstile: a guarded, first-match transition engine
//!
//! Turnstile decides which of a set of guarded transition rules applies
//! to an incoming event and executes that rule's action against a
//! caller-owned entity. Rules are grouped into named *contexts*, each
//! with a state accessor that reads the entity's current state; the
//! registry compiles the configuration once, then dispatch resolves and
//! acts in a single synchronous call.
//!
//! # Core Concepts
//!
//! - **StateAccessor**: reads an entity's current state for one context
//! - **Guard**: pure predicate over (state, event) deciding applicability
//! - **TransitionRule**: a guard paired with the action it protects
//! - **Registry**: immutable, validated, deterministically ordered rule set
//! - **Outcome**: `Transited` with the action's result, or `NoMatch`
//!   handing the entity back (never an error)
//!
//! Priority is deterministic: contexts are scanned in accessor
//! registration order, rules within a context in registration order, and
//! the first match wins across the whole registry.
//!
//! # Example
//!
//! ```rust
//! use turnstile::{Guard, Outcome, Registry, StateAccessor, TransitionRule};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Door {
//!     state: String,
//! }
//!
//! let accessors = vec![StateAccessor::new("", |door: &Door| door.state.clone())];
//! let rules = vec![TransitionRule::new(
//!     "",
//!     Guard::new(|state: &String, event: &String| state == "locked" && event == "unlock"),
//!     |mut door: Door, event: &String, _extra: &[()]| {
//!         door.state = event.clone();
//!         door
//!     },
//! )];
//!
//! let registry = Registry::build(accessors, rules).unwrap();
//!
//! let door = Door { state: "locked".to_string() };
//! let outcome = registry.transit(door, &"unlock".to_string()).unwrap();
//! assert_eq!(
//!     outcome,
//!     Outcome::Transited(Door { state: "unlock".to_string() })
//! );
//!
//! let door = Door { state: "ajar".to_string() };
//! let outcome = registry.transit(door, &"unlock".to_string()).unwrap();
//! assert!(matches!(outcome, Outcome::NoMatch(_)));
//! ```

pub mod builder;
pub mod core;
pub mod dispatch;
pub mod registry;

// Re-export the public surface
pub use crate::builder::{BuildError, RegistryBuilder, RuleBuilder};
pub use crate::core::{Action, DynError, Guard, StateAccessor, TransitionRule};
pub use crate::dispatch::{Arguments, InvocationError, Outcome};
pub use crate::registry::{ContextManifest, Registry, RegistryManifest};
