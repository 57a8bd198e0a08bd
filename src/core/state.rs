//! Core State trait for state machine states.
//!
//! States are opaque tokens. They carry no meaning of their own; the rules
//! registered in a transition table decide which changes between them are legal.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::{self, Debug};

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: the machine hands out copies in errors
/// - `Ord`: tables are keyed and exported in state order
/// - `Debug`: states must be debuggable for diagnostics
///
/// # Example
///
/// ```rust
/// use fsm_rules::core::State;
/// use std::borrow::Cow;
///
/// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl State for Door {
///     fn name(&self) -> Cow<'_, str> {
///         match self {
///             Self::Open => Cow::Borrowed("Open"),
///             Self::Closed => Cow::Borrowed("Closed"),
///         }
///     }
/// }
///
/// assert_eq!(Door::Open.name(), "Open");
/// ```
pub trait State: Clone + Ord + Debug + Send + Sync {
    /// String form of the state, used for synthesized labels and logging.
    fn name(&self) -> Cow<'_, str>;
}

/// Integer state token.
///
/// Any `i64` is a legal state. Nothing checks a `StateId` against a known
/// universe of states, only against the rules registered in a table.
///
/// ```rust
/// use fsm_rules::core::{State, StateId};
///
/// const RED: StateId = StateId(0);
///
/// assert_eq!(RED.name(), "0");
/// assert_eq!(StateId::from(101), StateId(101));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(pub i64);

impl State for StateId {
    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(self.0.to_string())
    }
}

impl From<i64> for StateId {
    fn from(value: i64) -> Self {
        StateId(value)
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
