//! Writes transition tables to a sink in the Graphviz format.

use crate::core::State;
use crate::engine::TransitionTable;
use crate::graphviz::config::GraphConfig;
use std::collections::BTreeMap;
use std::io::{self, Write};
use tracing::trace;

/// Encodes transition tables as `dot` text for rendering with Graphviz.
///
/// # Example
///
/// ```rust
/// use fsm_rules::core::StateId;
/// use fsm_rules::engine::TransitionTable;
/// use fsm_rules::graphviz::Encoder;
///
/// const RED: StateId = StateId(0);
/// const GREEN: StateId = StateId(2);
///
/// let mut table: TransitionTable<StateId> = TransitionTable::new();
/// table.add(RED, GREEN, None, None, "Go");
///
/// let mut encoder = Encoder::new(Vec::new(), RED, [GREEN]);
/// encoder.set_tag(RED, "Red").set_tag(GREEN, "Green");
/// encoder.encode(&table)?;
///
/// let dot = String::from_utf8(encoder.into_inner()).unwrap();
/// assert!(dot.contains("\tRed -> Green [label=\"Go\"]\n"));
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct Encoder<W: Write, S: State> {
    sink: W,
    config: GraphConfig<S>,
}

impl<W: Write, S: State> Encoder<W, S> {
    /// Create an encoder writing to `sink`, marking `start` as the initial
    /// state and every state in `end_states` as terminal.
    pub fn new(sink: W, start: S, end_states: impl IntoIterator<Item = S>) -> Self {
        Self::with_config(sink, GraphConfig::new(start, end_states))
    }

    /// Create an encoder from prepared settings, such as ones loaded from JSON.
    pub fn with_config(sink: W, config: GraphConfig<S>) -> Self {
        Self { sink, config }
    }

    /// The settings used for rendering.
    pub fn config(&self) -> &GraphConfig<S> {
        &self.config
    }

    /// Per-state display labels, for bulk edits.
    pub fn tags_mut(&mut self) -> &mut BTreeMap<S, String> {
        &mut self.config.tags
    }

    pub fn set_tag(&mut self, state: S, tag: impl Into<String>) -> &mut Self {
        self.config.set_tag(state, tag);
        self
    }

    /// Write `table` to the sink. Sink errors are returned unchanged.
    pub fn encode<C, E>(&mut self, table: &TransitionTable<S, C, E>) -> io::Result<()> {
        trace!(start = %self.config.start.name(), "encoding transition table");
        write!(self.sink, "{}", self.config.dot(table))?;
        self.sink.flush()
    }

    /// Give back the sink.
    pub fn into_inner(self) -> W {
        self.sink
    }
}
