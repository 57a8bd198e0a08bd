//! Graphviz Export
//!
//! Writes the traffic light rules to stdout in the `dot` format. Pipe the
//! output into Graphviz to draw it:
//!
//! Run with: cargo run --example graphviz_export | dot -Tpng -o fsm.png

use fsm_rules::core::StateId;
use fsm_rules::engine::TransitionTable;
use fsm_rules::graphviz::{Encoder, GraphConfig};
use std::io;

const RED: StateId = StateId(0);
const RED_AMBER: StateId = StateId(1);
const GREEN: StateId = StateId(2);
const AMBER: StateId = StateId(3);

const CONFIG: &str = r#"{
    "start": 0,
    "end_states": [2],
    "tags": { "0": "Red", "1": "RedAmber", "2": "Green", "3": "Amber" }
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "fsm_rules=info".to_string()))
        .init();

    let mut table: TransitionTable<StateId> = TransitionTable::new();
    table.add(RED, RED_AMBER, None, None, "Prepare to Go");
    table.add(RED_AMBER, GREEN, None, None, "Go");
    table.add(GREEN, AMBER, None, None, "Stop unless unsafe to do so");
    table.add(AMBER, RED, None, None, "Stop");

    let config: GraphConfig<StateId> = GraphConfig::from_json(CONFIG)?;
    let mut encoder = Encoder::with_config(io::stdout().lock(), config);
    encoder.encode(&table)?;

    Ok(())
}
