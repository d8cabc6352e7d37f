//! Builder for constructing transition rules.

use crate::builder::error::BuildError;
use crate::core::{Action, DynError, Guard, TransitionRule};

/// Builder for constructing rules with a fluent API.
///
/// The context defaults to the empty string, the conventional default
/// context. A guard and an action are required; `build` fails with an
/// actionable error when either is missing.
///
/// # Example
///
/// ```rust
/// use turnstile::RuleBuilder;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Door {
///     state: String,
/// }
///
/// let rule = RuleBuilder::new()
///     .context("security")
///     .when(|state: &String, event: &String| state == "locked" && event == "unlock")
///     .then(|mut door: Door, event: &String, _extra: &[()]| {
///         door.state = event.clone();
///         door
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(rule.context(), "security");
/// ```
pub struct RuleBuilder<T, Ev, St, Cx = ()> {
    context: String,
    guard: Option<Guard<St, Ev>>,
    action: Option<Action<T, Ev, Cx>>,
}

impl<T: 'static, Ev: 'static, St: 'static, Cx: 'static> RuleBuilder<T, Ev, St, Cx> {
    /// Create a new rule builder targeting the default context.
    pub fn new() -> Self {
        Self {
            context: String::new(),
            guard: None,
            action: None,
        }
    }

    /// Set the context the rule is registered under.
    pub fn context(mut self, name: impl Into<String>) -> Self {
        self.context = name.into();
        self
    }

    /// Set a pre-built guard (required, unless `when` is used).
    pub fn guard(mut self, guard: Guard<St, Ev>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Set the guard from a predicate closure (required, unless `guard`
    /// is used).
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&St, &Ev) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Set an infallible action (required, unless `try_then` is used).
    pub fn then<A>(mut self, action: A) -> Self
    where
        A: Fn(T, &Ev, &[Cx]) -> T + Send + Sync + 'static,
    {
        self.action = Some(Box::new(move |entity, event, extra| {
            Ok(action(entity, event, extra))
        }));
        self
    }

    /// Set an action that can fail (required, unless `then` is used).
    pub fn try_then<A, E>(mut self, action: A) -> Self
    where
        A: Fn(T, &Ev, &[Cx]) -> Result<T, E> + Send + Sync + 'static,
        E: Into<DynError>,
    {
        self.action = Some(Box::new(move |entity, event, extra| {
            action(entity, event, extra).map_err(Into::into)
        }));
        self
    }

    /// Build the rule.
    pub fn build(self) -> Result<TransitionRule<T, Ev, St, Cx>, BuildError> {
        let guard = self.guard.ok_or(BuildError::MissingGuard)?;
        let action = self.action.ok_or(BuildError::MissingAction)?;

        Ok(TransitionRule::from_parts(self.context, guard, action))
    }
}

impl<T: 'static, Ev: 'static, St: 'static, Cx: 'static> Default for RuleBuilder<T, Ev, St, Cx> {
    fn default() -> Self {
        Self::new()
    }
}
