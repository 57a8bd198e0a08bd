//! Graphviz export of transition tables.
//!
//! The exporter never touches a machine; it only reads a table and some
//! display settings. Output looks like:
//!
//! ```text
//! digraph fsm {
//! 	rankdir=TB;
//! 	size="8,5"
//! 	node [shape = circle, color=grey, style=filled];
//! 	STATE_START [label=""]
//! 	node [shape = circle, color=grey, peripheries=2, style=filled];
//! 	STATE_END [label=""]
//! 	node [shape = circle, style=solid, peripheries=1];
//! 	STATE_START -> Red [label=""]
//! 	Red -> RedAmber [label="Prepare to Go"]
//! 	Green -> STATE_END [label=""]
//! }
//! ```
//!
//! The `STATE_END` node and its edges appear only when end states are set.

mod config;
mod dot;
mod encoder;

pub use config::{ConfigError, GraphConfig};
pub use dot::{Dot, END_NODE, START_NODE};
pub use encoder::Encoder;
