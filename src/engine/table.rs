//! Transition rules.

use crate::builder::{BuildError, TransitionBuilder};
use crate::core::{Action, Guard, GuardError, State};
use std::collections::BTreeMap;
use std::fmt;
use tracing::trace;

/// The behaviour attached to one `(from, to)` rule.
pub struct Transition<S, C = (), E = GuardError> {
    guard: Option<Guard<S, C, E>>,
    action: Option<Action<S, C>>,
    tag: String,
}

impl<S, C, E> Transition<S, C, E> {
    /// Pair an optional guard and action with a display tag.
    pub fn new(
        guard: Option<Guard<S, C, E>>,
        action: Option<Action<S, C>>,
        tag: impl Into<String>,
    ) -> Self {
        Self {
            guard,
            action,
            tag: tag.into(),
        }
    }

    /// Check run before the change commits, if any.
    pub fn guard(&self) -> Option<&Guard<S, C, E>> {
        self.guard.as_ref()
    }

    /// Callback run after the change commits, if any.
    pub fn action(&self) -> Option<&Action<S, C>> {
        self.action.as_ref()
    }

    /// Display label, empty when none was given.
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl<S, C, E> Clone for Transition<S, C, E> {
    fn clone(&self) -> Self {
        Self {
            guard: self.guard.clone(),
            action: self.action.clone(),
            tag: self.tag.clone(),
        }
    }
}

impl<S, C, E> fmt::Debug for Transition<S, C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("guard", &self.guard.is_some())
            .field("action", &self.action.is_some())
            .field("tag", &self.tag)
            .finish()
    }
}

/// The set of rules for changing state.
///
/// A table maps each `from` state to the `to` states it may change into. At
/// most one rule exists per ordered pair: adding a pair again replaces the
/// earlier rule. Nothing is implied, so a self-change `(s, s)` is only legal
/// once it has been added.
///
/// `C` is the context type passed to guards and actions during a single
/// change, and `E` the error a guard rejects with.
///
/// # Example
///
/// ```rust
/// use fsm_rules::core::StateId;
/// use fsm_rules::engine::TransitionTable;
///
/// const RED: StateId = StateId(0);
/// const GREEN: StateId = StateId(2);
///
/// let mut table: TransitionTable<StateId> = TransitionTable::new();
/// table.add(RED, GREEN, None, None, "Go");
///
/// let rule = table.lookup(&RED, &GREEN).unwrap();
/// assert_eq!(rule.tag(), "Go");
/// assert!(rule.guard().is_none());
/// assert!(table.lookup(&GREEN, &RED).is_none());
/// ```
pub struct TransitionTable<S: State, C = (), E = GuardError> {
    rules: BTreeMap<S, BTreeMap<S, Transition<S, C, E>>>,
}

impl<S: State, C, E> TransitionTable<S, C, E> {
    /// An empty table; no change is legal until a rule is added.
    pub fn new() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Register the rule for `from -> to`, replacing any earlier one.
    pub fn add(
        &mut self,
        from: S,
        to: S,
        guard: Option<Guard<S, C, E>>,
        action: Option<Action<S, C>>,
        tag: impl Into<String>,
    ) {
        self.insert(from, to, Transition::new(guard, action, tag));
    }

    /// Register a rule described by a builder.
    ///
    /// ```rust
    /// use fsm_rules::builder::TransitionBuilder;
    /// use fsm_rules::core::StateId;
    /// use fsm_rules::engine::TransitionTable;
    ///
    /// let mut table: TransitionTable<StateId> = TransitionTable::new();
    /// table
    ///     .register(TransitionBuilder::new().from(StateId(0)).to(StateId(1)).tag("Prepare to Go"))?
    ///     .register(TransitionBuilder::new().from(StateId(1)).to(StateId(2)).tag("Go"))?;
    ///
    /// assert!(table.contains(&StateId(1), &StateId(2)));
    /// # Ok::<(), fsm_rules::builder::BuildError>(())
    /// ```
    pub fn register(
        &mut self,
        builder: TransitionBuilder<S, C, E>,
    ) -> Result<&mut Self, BuildError> {
        let (from, to, transition) = builder.build()?;
        self.insert(from, to, transition);
        Ok(self)
    }

    /// Find the rule for exactly this ordered pair.
    pub fn lookup(&self, from: &S, to: &S) -> Option<&Transition<S, C, E>> {
        self.rules.get(from)?.get(to)
    }

    /// Whether a rule exists for exactly this ordered pair.
    pub fn contains(&self, from: &S, to: &S) -> bool {
        self.lookup(from, to).is_some()
    }

    /// All rules, ordered by `(from, to)`.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&S, &S, &Transition<S, C, E>)> + '_ {
        self.rules
            .iter()
            .flat_map(|(from, targets)| targets.iter().map(move |(to, t)| (from, to, t)))
    }

    fn insert(&mut self, from: S, to: S, transition: Transition<S, C, E>) {
        trace!(from = %from.name(), to = %to.name(), tag = transition.tag(), "adding transition");
        let targets = self.rules.entry(from).or_default();
        if let Some(replaced) = targets.insert(to, transition) {
            trace!(tag = replaced.tag(), "replaced existing transition");
        }
    }
}

impl<S: State, C, E> Default for TransitionTable<S, C, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, C, E> Clone for TransitionTable<S, C, E> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
        }
    }
}

impl<S: State, C, E> fmt::Debug for TransitionTable<S, C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(from, to, t)| ((from, to), t)))
            .finish()
    }
}
