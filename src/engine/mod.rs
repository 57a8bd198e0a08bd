//! The transition-rule engine.
//!
//! # Key Concepts
//!
//! - **TransitionTable**: append-only rules keyed by `(from, to)`
//! - **StateMachine**: holds the current state and applies changes
//! - **ChangeError**: distinguishes "no such rule" from "rule vetoed"
//!
//! A change runs in a fixed order: look up the rule, run its guard against the
//! old state, commit, then run its action against the new state.

mod error;
mod machine;
mod table;

pub use error::ChangeError;
pub use machine::StateMachine;
pub use table::{Transition, TransitionTable};
