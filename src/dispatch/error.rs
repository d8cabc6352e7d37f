//! Dispatch error types.

use crate::core::DynError;
use thiserror::Error;

/// A fault raised by user-supplied code during dispatch.
///
/// The engine never catches and discards these: a failing accessor read,
/// guard check, or action invocation aborts the dispatch and surfaces
/// here with the original error attached as the source. Note that "no
/// rule matched" is not an error; see
/// [`Outcome::NoMatch`](crate::Outcome::NoMatch).
#[derive(Debug, Error)]
pub enum InvocationError {
    /// The state accessor for `context` failed to read the entity.
    #[error("state accessor for context \"{context}\" failed")]
    Accessor {
        context: String,
        #[source]
        source: DynError,
    },

    /// A guard in `context` failed while being evaluated.
    #[error("guard in context \"{context}\" failed")]
    Guard {
        context: String,
        #[source]
        source: DynError,
    },

    /// The matched rule's action in `context` failed.
    #[error("action in context \"{context}\" failed")]
    Action {
        context: String,
        #[source]
        source: DynError,
    },
}

impl InvocationError {
    /// The context in which the fault occurred.
    pub fn context(&self) -> &str {
        match self {
            Self::Accessor { context, .. }
            | Self::Guard { context, .. }
            | Self::Action { context, .. } => context,
        }
    }
}
