//! The compiled rule set: validation, ordering, and introspection.
//!
//! A [`Registry`] is built once from state accessors and transition rules,
//! validated eagerly, and immutable thereafter. Context enumeration order
//! is the order accessors were registered; rule order within a context is
//! registration order. Both orders are semantically significant, so the
//! registry stores ordered slots rather than a hash map.

mod manifest;

pub use manifest::{ContextManifest, RegistryManifest};

use crate::builder::{BuildError, RegistryBuilder};
use crate::core::{StateAccessor, TransitionRule};
use chrono::{DateTime, Utc};

/// One context's accessor and its rules, in priority order.
pub(crate) struct ContextSlot<T, Ev, St, Cx> {
    pub(crate) name: String,
    pub(crate) accessor: StateAccessor<T, St>,
    pub(crate) rules: Vec<TransitionRule<T, Ev, St, Cx>>,
}

/// Immutable, validated collection of accessors and rules.
///
/// Safe to share across threads once built: dispatch only reads it, so
/// concurrent [`transit`](Registry::transit) calls against the same
/// registry need no locking, provided each call's entity is not mutated
/// elsewhere at the same time.
///
/// # Example
///
/// ```rust
/// use turnstile::{Guard, Registry, StateAccessor, TransitionRule};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Door {
///     state: String,
/// }
///
/// let accessors = vec![StateAccessor::new("", |door: &Door| door.state.clone())];
/// let rules = vec![TransitionRule::new(
///     "",
///     Guard::new(|state: &String, event: &String| state == "locked" && event == "unlock"),
///     |mut door: Door, event: &String, _extra: &[()]| {
///         door.state = event.clone();
///         door
///     },
/// )];
///
/// let registry = Registry::build(accessors, rules).unwrap();
/// assert_eq!(registry.rule_count(), 1);
/// ```
pub struct Registry<T, Ev, St, Cx = ()> {
    pub(crate) slots: Vec<ContextSlot<T, Ev, St, Cx>>,
    unreachable: Vec<TransitionRule<T, Ev, St, Cx>>,
    built_at: DateTime<Utc>,
}

impl<T: 'static, Ev: 'static, St: 'static, Cx: 'static> Registry<T, Ev, St, Cx> {
    /// Start a fluent [`RegistryBuilder`].
    pub fn builder() -> RegistryBuilder<T, Ev, St, Cx> {
        RegistryBuilder::new()
    }

    /// Build a registry from materialized accessor and rule lists.
    ///
    /// Fails with [`BuildError::NoStateAccessors`] when `accessors` is
    /// empty and [`BuildError::DuplicateStateAccessor`] when two
    /// accessors share a context name. Rules are grouped under their
    /// context preserving registration order.
    ///
    /// A rule whose context has no accessor is accepted but can never
    /// fire; build logs a warning for each affected context and
    /// [`unreachable_contexts`](Registry::unreachable_contexts) reports
    /// them afterwards.
    pub fn build(
        accessors: Vec<StateAccessor<T, St>>,
        rules: Vec<TransitionRule<T, Ev, St, Cx>>,
    ) -> Result<Self, BuildError> {
        if accessors.is_empty() {
            return Err(BuildError::NoStateAccessors);
        }

        let mut slots: Vec<ContextSlot<T, Ev, St, Cx>> = Vec::with_capacity(accessors.len());
        for accessor in accessors {
            if slots.iter().any(|slot| slot.name == accessor.context()) {
                return Err(BuildError::DuplicateStateAccessor(
                    accessor.context().to_string(),
                ));
            }
            slots.push(ContextSlot {
                name: accessor.context().to_string(),
                accessor,
                rules: Vec::new(),
            });
        }

        let mut unreachable = Vec::new();
        for rule in rules {
            match slots.iter_mut().find(|slot| slot.name == rule.context()) {
                Some(slot) => slot.rules.push(rule),
                None => {
                    tracing::warn!(
                        context = rule.context(),
                        "rule registered for a context with no state accessor; it can never fire"
                    );
                    unreachable.push(rule);
                }
            }
        }

        let registry = Self {
            slots,
            unreachable,
            built_at: Utc::now(),
        };
        tracing::debug!(
            contexts = registry.slots.len(),
            rules = registry.rule_count(),
            "transition registry built"
        );
        Ok(registry)
    }

    /// Context names in enumeration (accessor registration) order.
    pub fn contexts(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|slot| slot.name.as_str())
    }

    /// Total number of registered rules, unreachable ones included.
    pub fn rule_count(&self) -> usize {
        let reachable: usize = self.slots.iter().map(|slot| slot.rules.len()).sum();
        reachable + self.unreachable.len()
    }

    /// Context names that carry rules but no state accessor.
    ///
    /// Rules under these contexts are dead configuration: valid, stored,
    /// and never evaluated.
    pub fn unreachable_contexts(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for rule in &self.unreachable {
            if !names.contains(&rule.context()) {
                names.push(rule.context());
            }
        }
        names
    }

    /// When this registry was built.
    pub fn built_at(&self) -> DateTime<Utc> {
        self.built_at
    }

    /// A serializable description of the compiled rule set.
    pub fn manifest(&self) -> RegistryManifest {
        let mut contexts: Vec<ContextManifest> = self
            .slots
            .iter()
            .map(|slot| ContextManifest {
                name: slot.name.clone(),
                rules: slot.rules.len(),
                reachable: true,
            })
            .collect();

        for rule in &self.unreachable {
            match contexts
                .iter_mut()
                .find(|context| context.name == rule.context())
            {
                Some(context) => context.rules += 1,
                None => contexts.push(ContextManifest {
                    name: rule.context().to_string(),
                    rules: 1,
                    reachable: false,
                }),
            }
        }

        RegistryManifest {
            built_at: self.built_at,
            contexts,
        }
    }
}
