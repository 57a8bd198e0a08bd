//! Builder for constructing transition rules.

use crate::builder::error::BuildError;
use crate::core::{Action, Guard, GuardError, State};
use crate::engine::Transition;

/// Builder for describing one `(from, to)` rule with a fluent API.
pub struct TransitionBuilder<S: State, C = (), E = GuardError> {
    from: Option<S>,
    to: Option<S>,
    guard: Option<Guard<S, C, E>>,
    action: Option<Action<S, C>>,
    tag: String,
}

impl<S: State, C, E> TransitionBuilder<S, C, E> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            from: None,
            to: None,
            guard: None,
            action: None,
            tag: String::new(),
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    /// Attach a guard (optional).
    pub fn guard(mut self, guard: Guard<S, C, E>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Attach a guard from a fallible closure (optional).
    pub fn check<F>(self, check: F) -> Self
    where
        F: Fn(&S, &S, &mut C) -> Result<(), E> + Send + Sync + 'static,
    {
        self.guard(Guard::new(check))
    }

    /// Attach an action (optional).
    pub fn action(mut self, action: Action<S, C>) -> Self {
        self.action = Some(action);
        self
    }

    /// Attach an action from a closure (optional).
    pub fn then<F>(self, run: F) -> Self
    where
        F: Fn(&S, &mut C) + Send + Sync + 'static,
    {
        self.action(Action::new(run))
    }

    /// Set the display label used by the Graphviz exporter.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Build the rule.
    pub fn build(self) -> Result<(S, S, Transition<S, C, E>), BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;

        Ok((from, to, Transition::new(self.guard, self.action, self.tag)))
    }
}

impl<S: State + 'static, C: 'static> TransitionBuilder<S, C, GuardError> {
    /// Attach a boolean guard (optional). See [`Guard::when`].
    pub fn when<F>(self, predicate: F) -> Self
    where
        F: Fn(&S, &S, &C) -> bool + Send + Sync + 'static,
    {
        self.guard(Guard::when(predicate))
    }
}

impl<S: State, C, E> Default for TransitionBuilder<S, C, E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateId;

    #[test]
    fn builder_validates_required_fields() {
        let result = TransitionBuilder::<StateId>::new().from(StateId(0)).build();
        assert!(matches!(result, Err(BuildError::MissingToState)));

        let result = TransitionBuilder::<StateId>::new().to(StateId(1)).build();
        assert!(matches!(result, Err(BuildError::MissingFromState)));
    }

    #[test]
    fn fluent_api_builds_transition() {
        let (from, to, transition) = TransitionBuilder::<StateId>::new()
            .from(StateId(0))
            .to(StateId(1))
            .tag("Prepare to Go")
            .build()
            .unwrap();

        assert_eq!(from, StateId(0));
        assert_eq!(to, StateId(1));
        assert_eq!(transition.tag(), "Prepare to Go");
        assert!(transition.guard().is_none());
        assert!(transition.action().is_none());
    }

    #[test]
    fn transition_builder_with_guard_and_action() {
        let (from, to, transition) = TransitionBuilder::<StateId, u32>::new()
            .from(StateId(0))
            .to(StateId(1))
            .when(|_, _, budget: &u32| *budget > 0)
            .then(|_, budget: &mut u32| *budget -= 1)
            .build()
            .unwrap();

        let guard = transition.guard().unwrap();
        assert!(guard.check(&from, &to, &mut 1).is_ok());
        assert!(guard.check(&from, &to, &mut 0).is_err());

        let mut budget = 3;
        transition.action().unwrap().run(&to, &mut budget);
        assert_eq!(budget, 2);
    }

    #[test]
    fn check_accepts_custom_error_type() {
        let (from, to, transition) = TransitionBuilder::<StateId, (), String>::new()
            .from(StateId(0))
            .to(StateId(1))
            .check(|_, _, _| Err("no".to_string()))
            .build()
            .unwrap();

        let result = transition.guard().unwrap().check(&from, &to, &mut ());
        assert_eq!(result, Err("no".to_string()));
    }
}
