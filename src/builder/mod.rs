//! Builder API for ergonomic rule construction.
//!
//! This module provides a fluent builder for transition rules and a macro for
//! declaring enum states with minimal boilerplate.

pub mod error;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use transition::TransitionBuilder;
