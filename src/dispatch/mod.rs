//! First-match rule resolution and execution.
//!
//! Dispatch walks the registry's contexts in their enumeration order.
//! For each context that has rules, it reads the entity's state through
//! that context's accessor, then evaluates the context's guards in
//! registration order. The first guard that matches wins globally: its
//! action fires with `(entity, event, extra)` and nothing after it is
//! examined. Contexts and rules together behave like a single flattened
//! priority list ordered by (context order, rule order).

mod args;
mod error;

pub use args::Arguments;
pub use error::InvocationError;

use crate::registry::Registry;

/// The result of a dispatch call.
///
/// `NoMatch` is a first-class outcome, not an error: it means no
/// configured rule applied to this entity's state and the event, and it
/// hands the entity back untouched.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome<T> {
    /// The first applicable rule fired; holds the action's result.
    Transited(T),

    /// No rule applied; holds the entity the caller passed in.
    NoMatch(T),
}

impl<T> Outcome<T> {
    /// Whether a rule fired.
    pub fn is_transited(&self) -> bool {
        matches!(self, Self::Transited(_))
    }

    /// The action's result, if a rule fired.
    pub fn transited(self) -> Option<T> {
        match self {
            Self::Transited(entity) => Some(entity),
            Self::NoMatch(_) => None,
        }
    }

    /// The entity, whichever way the dispatch went.
    pub fn into_entity(self) -> T {
        match self {
            Self::Transited(entity) | Self::NoMatch(entity) => entity,
        }
    }
}

impl<T: 'static, Ev: 'static, St: 'static, Cx: 'static> Registry<T, Ev, St, Cx> {
    /// Dispatch an event against an entity with no extra context.
    ///
    /// Equivalent to [`transit_with`](Registry::transit_with) with an
    /// empty context slice, so actions receive exactly
    /// `(entity, event)`.
    pub fn transit(&self, entity: T, event: &Ev) -> Result<Outcome<T>, InvocationError> {
        self.transit_with(entity, event, &[])
    }

    /// Dispatch an event against an entity, resolving and executing the
    /// first applicable rule.
    ///
    /// Contexts are scanned in accessor registration order; a context
    /// with no rules is skipped without reading state. Within a context,
    /// guards run in rule registration order, and the first match wins
    /// across the whole registry. The winning action receives the entity
    /// and event in the two leading positions and `extra` appended in
    /// caller order; its result is returned as
    /// [`Outcome::Transited`]. When nothing matches, the entity comes
    /// back unchanged as [`Outcome::NoMatch`].
    ///
    /// Faults raised by accessors, guards, or actions abort the dispatch
    /// and surface as [`InvocationError`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use turnstile::{Outcome, RegistryBuilder};
    ///
    /// #[derive(Clone, Debug, PartialEq)]
    /// struct Counter {
    ///     state: String,
    ///     total: i64,
    /// }
    ///
    /// let registry = RegistryBuilder::new()
    ///     .state("", |counter: &Counter| counter.state.clone())
    ///     .rule_for(
    ///         "",
    ///         |state: &String, event: &String| state == "open" && event == "add",
    ///         |mut counter: Counter, _event: &String, extra: &[i64]| {
    ///             counter.total += extra.iter().sum::<i64>();
    ///             counter
    ///         },
    ///     )
    ///     .build()
    ///     .unwrap();
    ///
    /// let counter = Counter { state: "open".to_string(), total: 0 };
    /// let outcome = registry
    ///     .transit_with(counter, &"add".to_string(), &[22, 20])
    ///     .unwrap();
    ///
    /// assert_eq!(outcome.into_entity().total, 42);
    /// ```
    pub fn transit_with(
        &self,
        entity: T,
        event: &Ev,
        extra: &[Cx],
    ) -> Result<Outcome<T>, InvocationError> {
        for slot in &self.slots {
            if slot.rules.is_empty() {
                continue;
            }

            let state = slot
                .accessor
                .read(&entity)
                .map_err(|source| InvocationError::Accessor {
                    context: slot.name.clone(),
                    source,
                })?;

            for rule in &slot.rules {
                let matched =
                    rule.matches(&state, event)
                        .map_err(|source| InvocationError::Guard {
                            context: slot.name.clone(),
                            source,
                        })?;
                if !matched {
                    continue;
                }

                tracing::debug!(context = slot.name.as_str(), "transition rule matched");
                let args = Arguments::assemble(entity, event, extra);
                return rule
                    .fire(args.entity, args.event, args.extra)
                    .map(Outcome::Transited)
                    .map_err(|source| InvocationError::Action {
                        context: slot.name.clone(),
                        source,
                    });
            }
        }

        tracing::trace!("no transition rule matched");
        Ok(Outcome::NoMatch(entity))
    }
}
