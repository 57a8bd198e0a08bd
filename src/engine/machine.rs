//! State machine that applies rule-checked changes.

use crate::core::State;
use crate::engine::error::ChangeError;
use crate::engine::table::TransitionTable;
use tracing::debug;

/// Holds the current state and moves it only through registered rules.
///
/// The machine owns no rules. Each call to [`change`](Self::change) is given
/// the table to check against, so the same machine can be driven by different
/// rule sets at different times.
///
/// A machine is a plain value with no interior locking. Sharing one between
/// threads takes the caller's own synchronisation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateMachine<S: State> {
    current: S,
}

impl<S: State> StateMachine<S> {
    /// Create a machine in `initial`, which need not appear in any table.
    pub fn new(initial: S) -> Self {
        Self { current: initial }
    }

    /// The state the machine is in.
    pub fn current(&self) -> &S {
        &self.current
    }

    /// Whether `table` has a rule from the current state to `target`.
    ///
    /// Only registration is checked; guards are not run.
    pub fn can_change<C, E>(&self, table: &TransitionTable<S, C, E>, target: &S) -> bool {
        table.contains(&self.current, target)
    }

    /// Request a change to `target` under the rules in `table`.
    ///
    /// The rule for `(current, target)` is looked up first; without one the
    /// change fails with [`ChangeError::InvalidTransition`]. If the rule has a
    /// guard it runs next, still seeing the old state, and its error comes
    /// back as [`ChangeError::GuardRejected`]. Otherwise the state is
    /// committed and then the rule's action, if any, runs with the new state.
    ///
    /// On any error the current state is left as it was.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fsm_rules::core::StateId;
    /// use fsm_rules::engine::{ChangeError, StateMachine, TransitionTable};
    ///
    /// const RED: StateId = StateId(0);
    /// const RED_AMBER: StateId = StateId(1);
    /// const GREEN: StateId = StateId(2);
    ///
    /// let mut table: TransitionTable<StateId> = TransitionTable::new();
    /// table.add(RED, RED_AMBER, None, None, "Prepare to Go");
    /// table.add(RED_AMBER, GREEN, None, None, "Go");
    ///
    /// let mut machine = StateMachine::new(RED);
    /// assert_eq!(
    ///     machine.change(&table, GREEN, &mut ()),
    ///     Err(ChangeError::InvalidTransition { from: RED, to: GREEN })
    /// );
    ///
    /// machine.change(&table, RED_AMBER, &mut ())?;
    /// machine.change(&table, GREEN, &mut ())?;
    /// assert_eq!(machine.current(), &GREEN);
    /// # Ok::<(), ChangeError<StateId>>(())
    /// ```
    pub fn change<C, E>(
        &mut self,
        table: &TransitionTable<S, C, E>,
        target: S,
        context: &mut C,
    ) -> Result<(), ChangeError<S, E>> {
        let Some(transition) = table.lookup(&self.current, &target) else {
            debug!(
                from = %self.current.name(),
                to = %target.name(),
                reason = "no_transition",
                "state change rejected: no such transition"
            );
            return Err(ChangeError::InvalidTransition {
                from: self.current.clone(),
                to: target,
            });
        };

        if let Some(guard) = transition.guard() {
            if let Err(err) = guard.check(&self.current, &target, context) {
                debug!(
                    from = %self.current.name(),
                    to = %target.name(),
                    reason = "guard",
                    "state change rejected by guard"
                );
                return Err(ChangeError::GuardRejected(err));
            }
        }

        let from = std::mem::replace(&mut self.current, target);
        debug!(
            from = %from.name(),
            to = %self.current.name(),
            tag = transition.tag(),
            "state changed"
        );

        if let Some(action) = transition.action() {
            action.run(&self.current, context);
        }

        Ok(())
    }
}
