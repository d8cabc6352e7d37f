//! Build errors for rule and registry construction.

use thiserror::Error;

/// Errors raised while assembling rules and registries.
///
/// These indicate configuration mistakes, not runtime conditions: a
/// failed build returns no registry at all, so a misconfigured rule set
/// fails loudly before the first dispatch. Guard and action signatures
/// are part of the registration types, so mismatched signatures are
/// compile errors rather than build failures; the variants here cover
/// what remains checkable at runtime.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("no state accessors registered. Add at least one before build()")]
    NoStateAccessors,

    #[error("more than one state accessor registered for context \"{0}\"")]
    DuplicateStateAccessor(String),

    #[error("rule guard not specified. Call .when(predicate) or .guard(guard)")]
    MissingGuard,

    #[error("rule action not specified. Call .then(action) or .try_then(action)")]
    MissingAction,
}
