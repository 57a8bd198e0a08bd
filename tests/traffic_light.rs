//! End-to-end scenarios on a UK traffic light.

use fsm_rules::core::{Action, Guard, GuardError, StateId};
use fsm_rules::engine::{ChangeError, StateMachine, TransitionTable};
use fsm_rules::graphviz::{Encoder, GraphConfig};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

const RED: StateId = StateId(0);
const RED_AMBER: StateId = StateId(1);
const GREEN: StateId = StateId(2);
const AMBER: StateId = StateId(3);

fn traffic_light() -> TransitionTable<StateId> {
    let mut table = TransitionTable::new();
    table.add(RED, RED_AMBER, None, None, "Prepare to Go");
    table.add(RED_AMBER, GREEN, None, None, "Go");
    table.add(GREEN, AMBER, None, None, "Stop unless unsafe to do so");
    table.add(AMBER, RED, None, None, "Stop");
    table
}

#[test]
fn full_cycle_returns_to_red() {
    let table = traffic_light();
    let mut machine = StateMachine::new(RED);

    machine.change(&table, RED_AMBER, &mut ()).unwrap();
    machine.change(&table, GREEN, &mut ()).unwrap();
    machine.change(&table, AMBER, &mut ()).unwrap();
    machine.change(&table, RED, &mut ()).unwrap();

    assert_eq!(machine.current(), &RED);
}

#[test]
fn skipping_a_light_is_invalid() {
    let table = traffic_light();
    let mut machine = StateMachine::new(RED);

    let result = machine.change(&table, GREEN, &mut ());

    assert_eq!(
        result,
        Err(ChangeError::InvalidTransition {
            from: RED,
            to: GREEN
        })
    );
    assert_eq!(machine.current(), &RED);
}

#[test]
fn rejecting_guard_blocks_change_and_action() {
    let actions = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&actions);

    let mut table: TransitionTable<StateId> = TransitionTable::new();
    table.add(
        RED,
        RED_AMBER,
        Some(Guard::new(|_, _, _| Err(GuardError::new("lamp failure")))),
        Some(Action::new(move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
        })),
        "Prepare to Go",
    );

    let mut machine = StateMachine::new(RED);
    let err = machine.change(&table, RED_AMBER, &mut ()).unwrap_err();

    assert!(err.is_guard_rejection());
    assert_eq!(err.to_string(), "guard rejected state change: lamp failure");
    assert_eq!(actions.load(Ordering::SeqCst), 0);
    assert_eq!(machine.current(), &RED);
}

#[test]
fn graph_export_marks_start_and_end() {
    let table = traffic_light();

    let mut encoder = Encoder::new(Vec::new(), RED, [GREEN]);
    encoder
        .set_tag(RED, "Red")
        .set_tag(RED_AMBER, "RedAmber")
        .set_tag(GREEN, "Green")
        .set_tag(AMBER, "Amber");
    encoder.encode(&table).unwrap();

    let dot = String::from_utf8(encoder.into_inner()).unwrap();
    let lines: Vec<&str> = dot.lines().map(str::trim).collect();

    assert!(lines.contains(&"STATE_START -> Red [label=\"\"]"));
    assert!(lines.contains(&"Green -> STATE_END [label=\"\"]"));
    assert!(lines.contains(&"STATE_END [label=\"\"]"));
    assert!(lines.contains(&"node [shape = circle, color=grey, peripheries=2, style=filled];"));

    for edge in [
        "Red -> RedAmber [label=\"Prepare to Go\"]",
        "RedAmber -> Green [label=\"Go\"]",
        "Green -> Amber [label=\"Stop unless unsafe to do so\"]",
        "Amber -> Red [label=\"Stop\"]",
    ] {
        assert_eq!(lines.iter().filter(|line| **line == edge).count(), 1, "{edge}");
    }
}

#[test]
fn graph_export_is_deterministic() {
    let table = traffic_light();
    let config = GraphConfig::new(RED, [GREEN])
        .with_tag(RED, "Red")
        .with_tag(RED_AMBER, "RedAmber")
        .with_tag(GREEN, "Green")
        .with_tag(AMBER, "Amber");

    let expected = "digraph fsm {
\trankdir=TB;
\tsize=\"8,5\"
\tnode [shape = circle, color=grey, style=filled];
\tSTATE_START [label=\"\"]
\tnode [shape = circle, color=grey, peripheries=2, style=filled];
\tSTATE_END [label=\"\"]
\tnode [shape = circle, style=solid, peripheries=1];
\tSTATE_START -> Red [label=\"\"]
\tRed -> RedAmber [label=\"Prepare to Go\"]
\tRedAmber -> Green [label=\"Go\"]
\tGreen -> Amber [label=\"Stop unless unsafe to do so\"]
\tAmber -> Red [label=\"Stop\"]
\tGreen -> STATE_END [label=\"\"]
}
";

    assert_eq!(config.dot(&table).to_string(), expected);
    assert_eq!(config.dot(&table).to_string(), expected);
}
