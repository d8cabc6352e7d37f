//! Transition rules: a guard paired with the action it protects.

use crate::core::{DynError, Guard};

/// Boxed action function invoked when a rule's guard matches.
///
/// Actions receive the entity and event in the two leading positions,
/// followed by whatever extra context values the dispatch call supplied,
/// in caller order. The returned entity replaces the one passed in.
pub type Action<T, Ev, Cx> = Box<dyn Fn(T, &Ev, &[Cx]) -> Result<T, DynError> + Send + Sync>;

/// A guarded transition rule registered under a context name.
///
/// Rules in the same context are evaluated in registration order; the
/// first one whose guard matches fires, and nothing after it is examined.
///
/// # Example
///
/// ```rust
/// use turnstile::{Guard, TransitionRule};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Door {
///     state: String,
/// }
///
/// let rule = TransitionRule::new(
///     "",
///     Guard::new(|state: &String, event: &String| state == "locked" && event == "unlock"),
///     |mut door: Door, event: &String, _extra: &[()]| {
///         door.state = event.clone();
///         door
///     },
/// );
///
/// assert!(rule
///     .matches(&"locked".to_string(), &"unlock".to_string())
///     .unwrap());
/// ```
pub struct TransitionRule<T, Ev, St, Cx = ()> {
    context: String,
    guard: Guard<St, Ev>,
    action: Action<T, Ev, Cx>,
}

impl<T: 'static, Ev: 'static, St: 'static, Cx: 'static> TransitionRule<T, Ev, St, Cx> {
    /// Create a rule with an infallible action.
    pub fn new<A>(context: impl Into<String>, guard: Guard<St, Ev>, action: A) -> Self
    where
        A: Fn(T, &Ev, &[Cx]) -> T + Send + Sync + 'static,
    {
        Self {
            context: context.into(),
            guard,
            action: Box::new(move |entity, event, extra| Ok(action(entity, event, extra))),
        }
    }

    /// Create a rule whose action can fail.
    ///
    /// An action fault aborts the dispatch that triggered it; the entity
    /// consumed by the action is not recoverable in that case.
    pub fn fallible<A, E>(context: impl Into<String>, guard: Guard<St, Ev>, action: A) -> Self
    where
        A: Fn(T, &Ev, &[Cx]) -> Result<T, E> + Send + Sync + 'static,
        E: Into<DynError>,
    {
        Self {
            context: context.into(),
            guard,
            action: Box::new(move |entity, event, extra| {
                action(entity, event, extra).map_err(Into::into)
            }),
        }
    }

    pub(crate) fn from_parts(context: String, guard: Guard<St, Ev>, action: Action<T, Ev, Cx>) -> Self {
        Self {
            context,
            guard,
            action,
        }
    }

    /// The context this rule is registered under.
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Ask the guard whether this rule applies to a state/event pair.
    pub fn matches(&self, state: &St, event: &Ev) -> Result<bool, DynError> {
        self.guard.check(state, event)
    }

    /// Invoke the action with the assembled argument list.
    pub fn fire(&self, entity: T, event: &Ev, extra: &[Cx]) -> Result<T, DynError> {
        (self.action)(entity, event, extra)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Door {
        state: String,
    }

    fn unlock_rule() -> TransitionRule<Door, String, String> {
        TransitionRule::new(
            "",
            Guard::new(|state: &String, event: &String| state == "locked" && event == "unlock"),
            |mut door: Door, event: &String, _extra: &[()]| {
                door.state = event.clone();
                door
            },
        )
    }

    #[test]
    fn guard_decides_applicability() {
        let rule = unlock_rule();

        assert!(rule
            .matches(&"locked".to_string(), &"unlock".to_string())
            .unwrap());
        assert!(!rule
            .matches(&"open".to_string(), &"unlock".to_string())
            .unwrap());
    }

    #[test]
    fn firing_produces_the_new_entity() {
        let rule = unlock_rule();

        let door = Door {
            state: "locked".to_string(),
        };
        let door = rule.fire(door, &"unlock".to_string(), &[]).unwrap();

        assert_eq!(door.state, "unlock");
    }

    #[test]
    fn extra_context_reaches_the_action_in_order() {
        let rule: TransitionRule<Vec<i32>, String, String, i32> = TransitionRule::new(
            "",
            Guard::new(|_state: &String, _event: &String| true),
            |mut seen: Vec<i32>, _event: &String, extra: &[i32]| {
                seen.extend_from_slice(extra);
                seen
            },
        );

        let seen = rule
            .fire(Vec::new(), &"go".to_string(), &[22, 7, -1])
            .unwrap();

        assert_eq!(seen, vec![22, 7, -1]);
    }

    #[test]
    fn fallible_action_propagates_the_fault() {
        let rule: TransitionRule<Door, String, String> = TransitionRule::fallible(
            "",
            Guard::new(|_state: &String, _event: &String| true),
            |_door: Door, _event: &String, _extra: &[()]| {
                Err::<Door, _>("hinge jammed".to_string())
            },
        );

        let door = Door {
            state: "locked".to_string(),
        };
        let err = rule.fire(door, &"unlock".to_string(), &[]).unwrap_err();

        assert_eq!(err.to_string(), "hinge jammed");
    }
}
