//! Property-based tests for the rule table and state machine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated rule sets and change requests.

use fsm_rules::core::{Action, Guard, GuardError, StateId};
use fsm_rules::engine::{StateMachine, TransitionTable};
use proptest::prelude::*;
use std::collections::BTreeSet;

prop_compose! {
    fn arbitrary_state()(id in 0..8i64) -> StateId {
        StateId(id)
    }
}

prop_compose! {
    fn arbitrary_pairs()(
        pairs in prop::collection::vec((arbitrary_state(), arbitrary_state()), 0..20)
    ) -> Vec<(StateId, StateId)> {
        pairs
    }
}

fn table_from(pairs: &[(StateId, StateId)]) -> TransitionTable<StateId> {
    let mut table = TransitionTable::new();
    for (from, to) in pairs {
        table.add(*from, *to, None, None, "");
    }
    table
}

proptest! {
    #[test]
    fn latest_add_wins(
        from in arbitrary_state(),
        to in arbitrary_state(),
        tags in prop::collection::vec("[a-z]{1,8}", 1..5)
    ) {
        let mut table: TransitionTable<StateId> = TransitionTable::new();
        for (i, tag) in tags.iter().enumerate() {
            let guard = (i % 2 == 0).then(|| Guard::new(|_, _, _| Ok(())));
            table.add(from, to, guard, None, tag.as_str());
        }

        let rule = table.lookup(&from, &to).unwrap();
        prop_assert_eq!(rule.tag(), tags.last().unwrap().as_str());
        prop_assert_eq!(rule.guard().is_some(), (tags.len() - 1) % 2 == 0);
    }

    #[test]
    fn lookup_finds_exactly_registered_pairs(
        pairs in arbitrary_pairs(),
        from in arbitrary_state(),
        to in arbitrary_state()
    ) {
        let table = table_from(&pairs);
        let registered: BTreeSet<_> = pairs.iter().copied().collect();

        prop_assert_eq!(table.contains(&from, &to), registered.contains(&(from, to)));
    }

    #[test]
    fn failed_change_leaves_state_untouched(
        pairs in arbitrary_pairs(),
        start in arbitrary_state(),
        targets in prop::collection::vec(arbitrary_state(), 1..20)
    ) {
        let table = table_from(&pairs);
        let mut machine = StateMachine::new(start);

        for target in targets {
            let before = *machine.current();
            match machine.change(&table, target, &mut ()) {
                Ok(()) => prop_assert_eq!(machine.current(), &target),
                Err(_) => prop_assert_eq!(machine.current(), &before),
            }
        }
    }

    #[test]
    fn vetoed_change_leaves_state_untouched(
        from in arbitrary_state(),
        to in arbitrary_state()
    ) {
        let mut table: TransitionTable<StateId> = TransitionTable::new();
        table.add(from, to, Some(Guard::new(|_, _, _| Err(GuardError::new("no")))), None, "");

        let mut machine = StateMachine::new(from);
        let err = machine.change(&table, to, &mut ()).unwrap_err();

        prop_assert!(err.is_guard_rejection());
        prop_assert_eq!(machine.current(), &from);
    }

    #[test]
    fn guard_sees_old_state_and_action_sees_new(
        from in arbitrary_state(),
        to in arbitrary_state()
    ) {
        let mut table: TransitionTable<StateId, Vec<(&'static str, StateId)>> =
            TransitionTable::new();
        table.add(
            from,
            to,
            Some(Guard::new(|current, _, seen: &mut Vec<(&'static str, StateId)>| {
                seen.push(("guard", *current));
                Ok(())
            })),
            Some(Action::new(|state, seen: &mut Vec<(&'static str, StateId)>| {
                seen.push(("action", *state));
            })),
            "",
        );

        let mut machine = StateMachine::new(from);
        let mut seen = Vec::new();
        machine.change(&table, to, &mut seen).unwrap();

        prop_assert_eq!(seen, vec![("guard", from), ("action", to)]);
        prop_assert_eq!(machine.current(), &to);
    }
}
