//! Positional argument assembly for rule actions.

/// The ordered argument list handed to a rule action.
///
/// The entity and event occupy the two leading positions; extra context
/// values follow in the order the dispatch caller supplied them. There
/// is no positional remapping: actions always receive
/// `(entity, event, extra)`.
#[derive(Debug)]
pub struct Arguments<'a, T, Ev, Cx> {
    /// Position 0: the entity being transitioned.
    pub entity: T,

    /// Position 1: the event that triggered the dispatch.
    pub event: &'a Ev,

    /// Remaining positions: caller-supplied context, order preserved.
    pub extra: &'a [Cx],
}

impl<'a, T, Ev, Cx> Arguments<'a, T, Ev, Cx> {
    /// Assemble the argument list. Pure: no reordering, no copying of
    /// the extra context values.
    pub fn assemble(entity: T, event: &'a Ev, extra: &'a [Cx]) -> Self {
        Self {
            entity,
            event,
            extra,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_and_event_take_the_leading_positions() {
        let event = "foo".to_string();
        let extra = [22, 7];

        let args = Arguments::assemble("entity", &event, &extra);

        assert_eq!(args.entity, "entity");
        assert_eq!(args.event, "foo");
        assert_eq!(args.extra, [22, 7]);
    }

    #[test]
    fn extra_context_order_is_preserved() {
        let event = 0u8;
        let extra = vec!["first", "second", "third"];

        let args = Arguments::assemble((), &event, &extra);

        assert_eq!(args.extra, ["first", "second", "third"]);
    }

    #[test]
    fn empty_extra_context_is_allowed() {
        let event = "foo".to_string();

        let args: Arguments<'_, &str, String, i32> = Arguments::assemble("entity", &event, &[]);

        assert!(args.extra.is_empty());
    }
}
