//! fsm-rules: a minimal rule-table finite state machine
//!
//! Rules live in a [`TransitionTable`], separate from the [`StateMachine`]
//! that holds the current state. A change is requested by handing the
//! machine a table, a target and a context; the machine applies it only if
//! the table has a rule for that exact `(current, target)` pair and the rule's
//! guard, if any, agrees.
//!
//! # Core Concepts
//!
//! - **State**: opaque, ordered tokens via the `State` trait (`StateId` for
//!   integers, `state_enum!` for enums)
//! - **Guards**: checks that may veto a change before it commits
//! - **Actions**: callbacks that run after a change commits
//! - **Graphviz**: export of a table as `dot` text
//!
//! # Example
//!
//! ```rust
//! use fsm_rules::core::{Action, Guard, StateId};
//! use fsm_rules::engine::{StateMachine, TransitionTable};
//!
//! const RED: StateId = StateId(0);
//! const RED_AMBER: StateId = StateId(1);
//! const GREEN: StateId = StateId(2);
//! const AMBER: StateId = StateId(3);
//!
//! let log_state = Action::new(|state: &StateId, log: &mut Vec<StateId>| log.push(*state));
//!
//! let after_a_cycle = Guard::when(|_: &StateId, _: &StateId, log: &Vec<StateId>| !log.is_empty());
//!
//! let mut table: TransitionTable<StateId, Vec<StateId>> = TransitionTable::new();
//! table.add(RED, RED_AMBER, None, Some(log_state.clone()), "Prepare to Go");
//! table.add(RED_AMBER, GREEN, None, Some(log_state.clone()), "Go");
//! table.add(GREEN, AMBER, None, Some(log_state.clone()), "Stop unless unsafe to do so");
//! table.add(AMBER, RED, Some(after_a_cycle), Some(log_state), "Stop");
//!
//! let mut machine = StateMachine::new(RED);
//! let mut log = Vec::new();
//! for target in [RED_AMBER, GREEN, AMBER, RED] {
//!     machine.change(&table, target, &mut log)?;
//! }
//!
//! assert_eq!(machine.current(), &RED);
//! assert_eq!(log, vec![RED_AMBER, GREEN, AMBER, RED]);
//! # Ok::<(), fsm_rules::engine::ChangeError<StateId>>(())
//! ```
//!
//! [`TransitionTable`]: engine::TransitionTable
//! [`StateMachine`]: engine::StateMachine

pub mod builder;
pub mod core;
pub mod engine;
pub mod graphviz;

// Re-export commonly used types
pub use crate::builder::{BuildError, TransitionBuilder};
pub use crate::core::{Action, Guard, GuardError, State, StateId};
pub use crate::engine::{ChangeError, StateMachine, Transition, TransitionTable};
pub use crate::graphviz::{Encoder, GraphConfig};
