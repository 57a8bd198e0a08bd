//! Display settings for Graphviz export.

use crate::core::State;
use crate::engine::TransitionTable;
use crate::graphviz::dot::Dot;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors that can occur when loading a graph configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid graph configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Which state the graph starts from, which states end it, and what each
/// state is called.
///
/// A state without a tag is labelled `State <name>`.
///
/// # Example
///
/// ```rust
/// use fsm_rules::core::StateId;
/// use fsm_rules::graphviz::GraphConfig;
///
/// let config: GraphConfig<StateId> = GraphConfig::from_json(
///     r#"{ "start": 0, "end_states": [2], "tags": { "0": "Red", "2": "Green" } }"#,
/// )?;
///
/// assert_eq!(config.label(&StateId(0)), "Red");
/// assert_eq!(config.label(&StateId(1)), "State 1");
/// # Ok::<(), fsm_rules::graphviz::ConfigError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(serialize = "S: Serialize", deserialize = "S: Deserialize<'de>"))]
pub struct GraphConfig<S: State> {
    pub start: S,
    #[serde(default)]
    pub end_states: Vec<S>,
    #[serde(default)]
    pub tags: BTreeMap<S, String>,
}

impl<S: State> GraphConfig<S> {
    /// Settings with no tags. Repeated end states are kept once, in the order
    /// first given.
    pub fn new(start: S, end_states: impl IntoIterator<Item = S>) -> Self {
        let mut ends = Vec::new();
        for state in end_states {
            if !ends.contains(&state) {
                ends.push(state);
            }
        }

        Self {
            start,
            end_states: ends,
            tags: BTreeMap::new(),
        }
    }

    /// Parse settings from JSON; `end_states` and `tags` may be omitted.
    pub fn from_json(json: &str) -> Result<Self, ConfigError>
    where
        S: DeserializeOwned,
    {
        Ok(serde_json::from_str(json)?)
    }

    /// Builder form of [`set_tag`](Self::set_tag).
    pub fn with_tag(mut self, state: S, tag: impl Into<String>) -> Self {
        self.set_tag(state, tag);
        self
    }

    /// Name `state` in the rendered graph, replacing any earlier tag.
    pub fn set_tag(&mut self, state: S, tag: impl Into<String>) {
        self.tags.insert(state, tag.into());
    }

    /// The display name of `state`.
    pub fn label(&self, state: &S) -> Cow<'_, str> {
        match self.tags.get(state) {
            Some(tag) => Cow::Borrowed(tag.as_str()),
            None => Cow::Owned(format!("State {}", state.name())),
        }
    }

    /// Render `table` with these settings. The result implements `Display`.
    pub fn dot<'a, C, E>(&'a self, table: &'a TransitionTable<S, C, E>) -> Dot<'a, S, C, E> {
        Dot::new(self, table)
    }
}
