//! Macros for declarative registry construction.

/// Build a registry from an inline description of contexts and rules.
///
/// Each context names its state reader once, followed by its rules in
/// priority order. Expands to a [`RegistryBuilder`](crate::RegistryBuilder)
/// chain, so it returns `Result<Registry, BuildError>` and performs the
/// same validation as the builder.
///
/// # Example
///
/// ```rust
/// use turnstile::{registry, Outcome};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Door {
///     state: String,
/// }
///
/// let registry = registry! {
///     context "" => {
///         state: |door: &Door| door.state.clone();
///         rule: |state: &String, event: &String| state == "locked" && event == "unlock"
///             => |mut door: Door, event: &String, _extra: &[()]| {
///                 door.state = event.clone();
///                 door
///             };
///     }
/// }
/// .unwrap();
///
/// let door = Door { state: "locked".to_string() };
/// let outcome = registry.transit(door, &"unlock".to_string()).unwrap();
/// assert!(matches!(outcome, Outcome::Transited(_)));
/// ```
#[macro_export]
macro_rules! registry {
    (
        $(
            context $name:literal => {
                state: $read:expr ;
                $( rule: $guard:expr => $action:expr ; )*
            }
        )+
    ) => {{
        let mut builder = $crate::RegistryBuilder::new();
        $(
            builder = builder.state($name, $read);
            $(
                builder = builder.rule_for($name, $guard, $action);
            )*
        )+
        builder.build()
    }};
}

#[cfg(test)]
mod tests {
    use crate::dispatch::Outcome;

    #[derive(Clone, Debug, PartialEq)]
    struct Door {
        state: String,
    }

    #[test]
    fn macro_builds_a_dispatchable_registry() {
        let registry = registry! {
            context "" => {
                state: |door: &Door| door.state.clone();
                rule: |state: &String, event: &String| state == "locked" && event == "unlock"
                    => |mut door: Door, event: &String, _extra: &[()]| {
                        door.state = event.clone();
                        door
                    };
            }
        }
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
    fn macro_supports_multiple_contexts_and_rules() {
        let registry = registry! {
            context "security" => {
                state: |door: &Door| door.state.clone();
                rule: |state: &String, event: &String| state == "locked" && event == "unlock"
                    => |mut door: Door, _event: &String, _extra: &[()]| {
                        door.state = "open".to_string();
                        door
                    };
                rule: |state: &String, event: &String| state == "open" && event == "lock"
                    => |mut door: Door, _event: &String, _extra: &[()]| {
                        door.state = "locked".to_string();
                        door
                    };
            }
            context "maintenance" => {
                state: |door: &Door| door.state.clone();
                rule: |_state: &String, event: &String| event == "inspect"
                    => |door: Door, _event: &String, _extra: &[()]| door;
            }
        }
        .unwrap();

        let contexts: Vec<&str> = registry.contexts().collect();
        assert_eq!(contexts, vec!["security", "maintenance"]);
        assert_eq!(registry.rule_count(), 3);
    }

    #[test]
    fn macro_allows_contexts_without_rules() {
        let registry: crate::Registry<Door, String, String> = registry! {
            context "" => {
                state: |door: &Door| door.state.clone();
            }
        }
        .unwrap();

        let door = Door {
            state: "locked".to_string(),
        };
        let outcome = registry.transit(door, &"unlock".to_string()).unwrap();

        assert!(matches!(outcome, Outcome::NoMatch(_)));
    }
}
