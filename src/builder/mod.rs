//! Fluent and declarative construction of rules and registries.
//!
//! Three registration styles produce the same validated
//! [`Registry`](crate::Registry):
//! - [`Registry::build`](crate::Registry::build) over plain vectors, for
//!   callers that materialize their configuration elsewhere
//! - [`RegistryBuilder`] and [`RuleBuilder`], fluent builders
//! - the [`registry!`](crate::registry!) macro, an inline declarative form
//!
//! All three validate at build time and return [`BuildError`] on
//! configuration mistakes; none of them produce a partially-built
//! registry.

pub mod error;
pub mod macros;
pub mod registry;
pub mod rule;

pub use error::BuildError;
pub use registry::RegistryBuilder;
pub use rule::RuleBuilder;
