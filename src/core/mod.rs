//! Core state machine types.
//!
//! This module holds the building blocks shared by the rule table, the
//! machine and the exporter:
//! - State definitions via the `State` trait and the integer `StateId`
//! - Guards that may veto a transition before it commits
//! - Actions that run after a transition commits

mod action;
mod guard;
mod state;

pub use action::Action;
pub use guard::{Guard, GuardError};
pub use state::{State, StateId};
