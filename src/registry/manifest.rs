//! Serializable description of a compiled registry.
//!
//! The manifest carries no closures, only the shape of the rule set:
//! which contexts exist, how many rules each holds, and which of them
//! are reachable. Useful for logging the configuration a process is
//! running with, or for asserting on it in tests.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Description of one context in a registry.
#[derive(Clone, Debug, Serialize)]
pub struct ContextManifest {
    /// The context name; may be the empty string.
    pub name: String,

    /// Number of rules registered under this context.
    pub rules: usize,

    /// Whether the context has a state accessor. Rules in a context
    /// without one are never evaluated.
    pub reachable: bool,
}

/// Description of a whole registry, in context enumeration order.
#[derive(Clone, Debug, Serialize)]
pub struct RegistryManifest {
    /// When the registry was built.
    pub built_at: DateTime<Utc>,

    /// Reachable contexts first, in enumeration order, followed by any
    /// contexts that carry only unreachable rules.
    pub contexts: Vec<ContextManifest>,
}
