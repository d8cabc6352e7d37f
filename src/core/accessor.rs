//! State accessors: how the engine reads an entity's current state.
//!
//! Each accessor belongs to a named context and wraps a read function
//! supplied by the caller. The engine calls it during dispatch to obtain
//! the state value that context's guards are evaluated against.

use crate::core::DynError;

/// Reads an entity's current state on behalf of one context.
///
/// A registry holds at most one accessor per context name. The read
/// function takes the entity alone and produces an opaque state value;
/// the engine never interprets that value, it only hands it to guards.
///
/// A reader demanding anything beyond the entity does not typecheck:
///
/// ```compile_fail
/// use turnstile::StateAccessor;
///
/// struct Door {
///     state: String,
/// }
///
/// let accessor = StateAccessor::new("", |door: &Door, key: u32| door.state.clone());
/// ```
///
/// # Example
///
/// ```rust
/// use turnstile::StateAccessor;
///
/// struct Door {
///     state: String,
/// }
///
/// let accessor = StateAccessor::new("", |door: &Door| door.state.clone());
///
/// let door = Door { state: "locked".to_string() };
/// assert_eq!(accessor.read(&door).unwrap(), "locked");
/// assert_eq!(accessor.context(), "");
/// ```
pub struct StateAccessor<T, St> {
    context: String,
    read: Box<dyn Fn(&T) -> Result<St, DynError> + Send + Sync>,
}

impl<T: 'static, St: 'static> StateAccessor<T, St> {
    /// Create an accessor from an infallible read function.
    ///
    /// The empty string is a valid context name and is the conventional
    /// default for registries with a single context.
    pub fn new<F>(context: impl Into<String>, read: F) -> Self
    where
        F: Fn(&T) -> St + Send + Sync + 'static,
    {
        Self {
            context: context.into(),
            read: Box::new(move |entity| Ok(read(entity))),
        }
    }

    /// Create an accessor whose read function can fail.
    ///
    /// A read fault aborts the dispatch that triggered it and surfaces to
    /// the caller with this error as the source.
    ///
    /// # Example
    ///
    /// ```rust
    /// use turnstile::StateAccessor;
    ///
    /// struct Record {
    ///     state: Option<String>,
    /// }
    ///
    /// let accessor = StateAccessor::fallible("", |record: &Record| {
    ///     record
    ///         .state
    ///         .clone()
    ///         .ok_or_else(|| "record has no state".to_string())
    /// });
    ///
    /// let blank = Record { state: None };
    /// assert!(accessor.read(&blank).is_err());
    /// ```
    pub fn fallible<F, E>(context: impl Into<String>, read: F) -> Self
    where
        F: Fn(&T) -> Result<St, E> + Send + Sync + 'static,
        E: Into<DynError>,
    {
        Self {
            context: context.into(),
            read: Box::new(move |entity| read(entity).map_err(Into::into)),
        }
    }

    /// The context this accessor belongs to.
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Read the entity's current state.
    pub fn read(&self, entity: &T) -> Result<St, DynError> {
        (self.read)(entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Door {
        state: String,
    }

    #[test]
    fn reads_state_from_entity() {
        let accessor = StateAccessor::new("doors", |door: &Door| door.state.clone());

        let door = Door {
            state: "open".to_string(),
        };

        assert_eq!(accessor.read(&door).unwrap(), "open");
    }

    #[test]
    fn empty_string_is_a_valid_context() {
        let accessor = StateAccessor::new("", |door: &Door| door.state.clone());

        assert_eq!(accessor.context(), "");
    }

    #[test]
    fn context_name_is_preserved() {
        let accessor = StateAccessor::new("security", |door: &Door| door.state.clone());

        assert_eq!(accessor.context(), "security");
    }

    #[test]
    fn fallible_read_propagates_the_fault() {
        let accessor = StateAccessor::fallible("", |_door: &Door| {
            Err::<String, _>("state missing".to_string())
        });

        let door = Door {
            state: "open".to_string(),
        };

        let err = accessor.read(&door).unwrap_err();
        assert_eq!(err.to_string(), "state missing");
    }

    #[test]
    fn fallible_read_can_succeed() {
        let accessor =
            StateAccessor::fallible("", |door: &Door| Ok::<_, String>(door.state.clone()));

        let door = Door {
            state: "locked".to_string(),
        };

        assert_eq!(accessor.read(&door).unwrap(), "locked");
    }
}
