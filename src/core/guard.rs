//! Guard predicates for controlling state transitions.
//!
//! A guard runs before a transition commits. It sees the current state, the
//! requested target and the caller's context, and may veto the change by
//! returning an error. The error is handed back to the caller untouched.

use super::state::State;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

type GuardFn<S, C, E> = dyn Fn(&S, &S, &mut C) -> Result<(), E> + Send + Sync;

/// Default rejection payload for guards.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct GuardError {
    message: String,
}

impl GuardError {
    /// Rejection with the given reason.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The reason given for the rejection.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Pre-commit check attached to a transition.
///
/// # Example
///
/// ```rust
/// use fsm_rules::core::{Guard, GuardError, StateId};
///
/// let only_with_budget: Guard<StateId, u32> = Guard::new(|_from, _to, budget: &mut u32| {
///     if *budget == 0 {
///         return Err(GuardError::new("budget exhausted"));
///     }
///     *budget -= 1;
///     Ok(())
/// });
///
/// let mut budget = 1;
/// assert!(only_with_budget.check(&StateId(0), &StateId(1), &mut budget).is_ok());
/// assert!(only_with_budget.check(&StateId(0), &StateId(1), &mut budget).is_err());
/// ```
pub struct Guard<S, C = (), E = GuardError> {
    check: Arc<GuardFn<S, C, E>>,
}

impl<S: State, C, E> Guard<S, C, E> {
    /// Create a guard from a fallible check.
    ///
    /// Any side effects the check performs before rejecting are its own
    /// business; the machine does not roll them back.
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&S, &S, &mut C) -> Result<(), E> + Send + Sync + 'static,
    {
        Guard {
            check: Arc::new(check),
        }
    }

    /// Run the guard for a change from `current` to `target`.
    pub fn check(&self, current: &S, target: &S, context: &mut C) -> Result<(), E> {
        (self.check)(current, target, context)
    }
}

impl<S: State + 'static, C: 'static> Guard<S, C, GuardError> {
    /// Create a guard from a boolean predicate.
    ///
    /// A `false` result rejects the change with a [`GuardError`] naming both
    /// states.
    ///
    /// ```rust
    /// use fsm_rules::core::{Guard, StateId};
    ///
    /// let forward_only: Guard<StateId> =
    ///     Guard::when(|from: &StateId, to: &StateId, _: &()| to > from);
    ///
    /// assert!(forward_only.check(&StateId(1), &StateId(2), &mut ()).is_ok());
    /// let err = forward_only.check(&StateId(2), &StateId(1), &mut ()).unwrap_err();
    /// assert_eq!(err.message(), "guard rejected change 2 -> 1");
    /// ```
    pub fn when<F>(predicate: F) -> Self
    where
        F: Fn(&S, &S, &C) -> bool + Send + Sync + 'static,
    {
        Guard::new(move |from: &S, to: &S, context: &mut C| {
            if predicate(from, to, context) {
                Ok(())
            } else {
                Err(GuardError::new(format!(
                    "guard rejected change {} -> {}",
                    from.name(),
                    to.name()
                )))
            }
        })
    }
}

impl<S, C, E> Clone for Guard<S, C, E> {
    fn clone(&self) -> Self {
        Self {
            check: Arc::clone(&self.check),
        }
    }
}

impl<S, C, E> fmt::Debug for Guard<S, C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
