//! Traffic Light State Machine
//!
//! This example demonstrates a cyclic state machine with guards and actions.
//!
//! Key concepts:
//! - Enum states declared with `state_enum!`
//! - Guards that see the current and requested state
//! - Actions that run once the change has committed
//! - Rejected changes leave the light where it was
//!
//! Run with: RUST_LOG=fsm_rules=debug cargo run --example traffic_light

use fsm_rules::builder::TransitionBuilder;
use fsm_rules::core::State;
use fsm_rules::engine::{ChangeError, StateMachine, TransitionTable};
use fsm_rules::state_enum;

state_enum! {
    enum TrafficLight {
        Red,
        RedAmber,
        Green,
        Amber,
    }
}

fn step(from: TrafficLight, to: TrafficLight, tag: &str) -> TransitionBuilder<TrafficLight> {
    TransitionBuilder::new()
        .from(from)
        .to(to)
        .tag(tag)
        .when(|current, target, _| {
            println!("Guard: {} -> {}.", current.name(), target.name());
            true
        })
        .then(|state, _| println!("Action: {}.", state.name()))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "fsm_rules=info".to_string()))
        .init();

    println!("=== Traffic Light State Machine ===\n");

    let mut table: TransitionTable<TrafficLight> = TransitionTable::new();
    table
        .register(step(TrafficLight::Red, TrafficLight::RedAmber, "Prepare to Go"))?
        .register(step(TrafficLight::RedAmber, TrafficLight::Green, "Go"))?
        .register(step(TrafficLight::Green, TrafficLight::Amber, "Stop unless unsafe to do so"))?
        .register(step(TrafficLight::Amber, TrafficLight::Red, "Stop"))?;

    let mut light = StateMachine::new(TrafficLight::Red);
    println!("Initial state: {:?}\n", light.current());

    for target in [
        TrafficLight::RedAmber,
        TrafficLight::Green,
        TrafficLight::Amber,
        TrafficLight::Red,
    ] {
        light.change(&table, target, &mut ())?;
    }

    println!("\nTrying to jump straight from Red to Green:");
    match light.change(&table, TrafficLight::Green, &mut ()) {
        Err(err @ ChangeError::InvalidTransition { .. }) => println!("  rejected: {err}"),
        other => println!("  unexpected: {other:?}"),
    }
    println!("  still {:?}", light.current());

    println!("\n=== Example Complete ===");
    Ok(())
}
