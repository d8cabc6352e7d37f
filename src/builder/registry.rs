//! Builder for constructing registries.

use crate::builder::error::BuildError;
use crate::core::{Guard, StateAccessor, TransitionRule};
use crate::registry::Registry;

/// Builder for constructing registries with a fluent API.
///
/// Accessors and rules are collected in call order; that order is
/// semantically significant. Contexts are enumerated during dispatch in
/// the order their accessors were registered, and rules within a context
/// fire first-match-wins in the order they were added.
///
/// # Example
///
/// ```rust
/// use turnstile::{Outcome, RegistryBuilder};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Door {
///     state: String,
/// }
///
/// let registry = RegistryBuilder::new()
///     .state("", |door: &Door| door.state.clone())
///     .rule_for(
///         "",
///         |state: &String, event: &String| state == "locked" && event == "unlock",
///         |mut door: Door, event: &String, _extra: &[()]| {
///             door.state = event.clone();
///             door
///         },
///     )
///     .build()
///     .unwrap();
///
/// let door = Door { state: "locked".to_string() };
/// let outcome = registry.transit(door, &"unlock".to_string()).unwrap();
/// assert!(matches!(outcome, Outcome::Transited(_)));
/// ```
pub struct RegistryBuilder<T, Ev, St, Cx = ()> {
    accessors: Vec<StateAccessor<T, St>>,
    rules: Vec<TransitionRule<T, Ev, St, Cx>>,
}

impl<T: 'static, Ev: 'static, St: 'static, Cx: 'static> RegistryBuilder<T, Ev, St, Cx> {
    /// Create a new registry builder.
    pub fn new() -> Self {
        Self {
            accessors: Vec::new(),
            rules: Vec::new(),
        }
    }

    /// Add a pre-built state accessor.
    pub fn accessor(mut self, accessor: StateAccessor<T, St>) -> Self {
        self.accessors.push(accessor);
        self
    }

    /// Add a state accessor from a context name and a read closure.
    pub fn state<F>(mut self, context: impl Into<String>, read: F) -> Self
    where
        F: Fn(&T) -> St + Send + Sync + 'static,
    {
        self.accessors.push(StateAccessor::new(context, read));
        self
    }

    /// Add a pre-built rule.
    pub fn rule(mut self, rule: TransitionRule<T, Ev, St, Cx>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Add a rule from a context name, a guard predicate, and an action.
    pub fn rule_for<G, A>(mut self, context: impl Into<String>, guard: G, action: A) -> Self
    where
        G: Fn(&St, &Ev) -> bool + Send + Sync + 'static,
        A: Fn(T, &Ev, &[Cx]) -> T + Send + Sync + 'static,
    {
        self.rules
            .push(TransitionRule::new(context, Guard::new(guard), action));
        self
    }

    /// Build the registry, validating the accumulated configuration.
    pub fn build(self) -> Result<Registry<T, Ev, St, Cx>, BuildError> {
        Registry::build(self.accessors, self.rules)
    }
}

impl<T: 'static, Ev: 'static, St: 'static, Cx: 'static> Default for RegistryBuilder<T, Ev, St, Cx> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::Outcome;

    #[derive(Clone, Debug, PartialEq)]
    struct Door {
        state: String,
    }

    #[test]
    fn builder_validates_before_returning_a_registry() {
        let result = RegistryBuilder::<Door, String, String>::new().build();

        assert!(matches!(result, Err(BuildError::NoStateAccessors)));
    }

    #[test]
    fn fluent_api_builds_a_dispatchable_registry() {
        let registry = RegistryBuilder::new()
            .state("", |door: &Door| door.state.clone())
            .rule_for(
                "",
                |state: &String, event: &String| state == "locked" && event == "unlock",
                |mut door: Door, event: &String, _extra: &[()]| {
                    door.state = event.clone();
                    door
                },
            )
            .build()
            .unwrap();

        let door = Door {
            state: "locked".to_string(),
        };
        let outcome = registry.transit(door, &"unlock".to_string()).unwrap();

        assert_eq!(
            outcome,
            Outcome::Transited(Door {
                state: "unlock".to_string()
            })
        );
    }

    #[test]
    fn pre_built_parts_are_accepted() {
        let registry = RegistryBuilder::new()
            .accessor(StateAccessor::new("", |door: &Door| door.state.clone()))
            .rule(TransitionRule::new(
                "",
                Guard::new(|_state: &String, _event: &String| false),
                |door: Door, _event: &String, _extra: &[()]| door,
            ))
            .build()
            .unwrap();

        assert_eq!(registry.rule_count(), 1);
    }

    #[test]
    fn registration_order_is_preserved() {
        let registry = RegistryBuilder::<Door, String, String>::new()
            .state("b", |door: &Door| door.state.clone())
            .state("a", |door: &Door| door.state.clone())
            .state("", |door: &Door| door.state.clone())
            .build()
            .unwrap();

        let contexts: Vec<&str> = registry.contexts().collect();
        assert_eq!(contexts, vec!["b", "a", ""]);
    }
}
