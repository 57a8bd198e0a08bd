//! Errors returned by state changes.

use crate::core::{GuardError, State};
use thiserror::Error;

/// Why a requested state change was not applied.
///
/// In both cases the machine is left in the state it was in before the call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ChangeError<S: State, E = GuardError> {
    /// No rule is registered for the ordered pair `(from, to)`.
    #[error("invalid state change {} -> {}", .from.name(), .to.name())]
    InvalidTransition { from: S, to: S },

    /// A rule exists but its guard vetoed the change. The guard's error is
    /// carried unchanged.
    #[error("guard rejected state change: {0}")]
    GuardRejected(E),
}

impl<S: State, E> ChangeError<S, E> {
    /// True when no rule matched the requested pair.
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, Self::InvalidTransition { .. })
    }

    /// True when a guard vetoed the change.
    pub fn is_guard_rejection(&self) -> bool {
        matches!(self, Self::GuardRejected(_))
    }

    /// Recover the guard's own error, if that is what this is.
    pub fn into_guard_error(self) -> Option<E> {
        match self {
            Self::GuardRejected(err) => Some(err),
            Self::InvalidTransition { .. } => None,
        }
    }
}
