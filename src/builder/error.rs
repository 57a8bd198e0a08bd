//! Build errors for the transition builder.

use thiserror::Error;

/// Errors that can occur when building transitions.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Transition source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingToState,
}
