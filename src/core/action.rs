//! Post-commit actions.

use super::state::State;
use std::fmt;
use std::sync::Arc;

type ActionFn<S, C> = dyn Fn(&S, &mut C) + Send + Sync;

/// Side-effecting callback run after a transition has committed.
///
/// Actions cannot veto or fail a change; by the time one runs the machine is
/// already in the new state, which is the state the action receives.
pub struct Action<S, C = ()> {
    run: Arc<ActionFn<S, C>>,
}

impl<S: State, C> Action<S, C> {
    /// Wrap a callback receiving the committed state and the change's context.
    pub fn new<F>(run: F) -> Self
    where
        F: Fn(&S, &mut C) + Send + Sync + 'static,
    {
        Action { run: Arc::new(run) }
    }

    /// Invoke the callback.
    pub fn run(&self, state: &S, context: &mut C) {
        (self.run)(state, context)
    }
}

impl<S, C> Clone for Action<S, C> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}

impl<S, C> fmt::Debug for Action<S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action").finish_non_exhaustive()
    }
}
