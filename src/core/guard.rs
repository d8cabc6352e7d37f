//! Guard predicates for deciding rule applicability.
//!
//! A guard looks at the current state and the incoming event and decides
//! whether its rule applies. Guards should be pure; the engine evaluates
//! them in registration order and stops at the first one that matches.

use crate::core::DynError;

/// Predicate over (current state, incoming event).
///
/// Guards decide applicability only. They never see the entity itself,
/// just the state value its context's accessor produced, and they never
/// perform the transition; that is the action's job.
///
/// # Example
///
/// ```rust
/// use turnstile::Guard;
///
/// let unlockable = Guard::new(|state: &String, event: &String| {
///     state == "locked" && event == "unlock"
/// });
///
/// assert!(unlockable
///     .check(&"locked".to_string(), &"unlock".to_string())
///     .unwrap());
/// assert!(!unlockable
///     .check(&"open".to_string(), &"unlock".to_string())
///     .unwrap());
/// ```
pub struct Guard<St, Ev> {
    predicate: Box<dyn Fn(&St, &Ev) -> Result<bool, DynError> + Send + Sync>,
}

impl<St: 'static, Ev: 'static> Guard<St, Ev> {
    /// Create a guard from a pure predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&St, &Ev) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Box::new(move |state, event| Ok(predicate(state, event))),
        }
    }

    /// Create a guard whose predicate can fail.
    ///
    /// A guard fault is not a "no": it aborts the dispatch that triggered
    /// it and surfaces to the caller with this error as the source.
    pub fn fallible<F, E>(predicate: F) -> Self
    where
        F: Fn(&St, &Ev) -> Result<bool, E> + Send + Sync + 'static,
        E: Into<DynError>,
    {
        Self {
            predicate: Box::new(move |state, event| predicate(state, event).map_err(Into::into)),
        }
    }

    /// Evaluate the predicate against a state/event pair.
    pub fn check(&self, state: &St, event: &Ev) -> Result<bool, DynError> {
        (self.predicate)(state, event)
    }
}
