//! The `dot` text for a transition table.

use crate::core::State;
use crate::engine::TransitionTable;
use crate::graphviz::config::GraphConfig;
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt;

/// Synthetic node every graph starts from.
pub const START_NODE: &str = "STATE_START";
/// Synthetic node end states lead into.
pub const END_NODE: &str = "STATE_END";

/// Reserved words of the `dot` language, matched without regard to case.
const KEYWORDS: [&str; 6] = ["node", "edge", "graph", "digraph", "subgraph", "strict"];

/// Display adapter rendering a table as a Graphviz digraph.
///
/// Rules are written in `(from, to)` order, so the same table and settings
/// always produce the same text.
pub struct Dot<'a, S: State, C, E> {
    config: &'a GraphConfig<S>,
    table: &'a TransitionTable<S, C, E>,
}

impl<'a, S: State, C, E> Dot<'a, S, C, E> {
    pub(crate) fn new(config: &'a GraphConfig<S>, table: &'a TransitionTable<S, C, E>) -> Self {
        Self { config, table }
    }

    fn node(&self, state: &S) -> String {
        node_id(&self.config.label(state)).into_owned()
    }
}

impl<S: State, C, E> fmt::Display for Dot<'_, S, C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = self.config;

        writeln!(f, "digraph fsm {{")?;
        writeln!(f, "\trankdir=TB;")?;
        writeln!(f, "\tsize=\"8,5\"")?;

        writeln!(f, "\tnode [shape = circle, color=grey, style=filled];")?;
        writeln!(f, "\t{START_NODE} [label=\"\"]")?;

        if !config.end_states.is_empty() {
            writeln!(
                f,
                "\tnode [shape = circle, color=grey, peripheries=2, style=filled];"
            )?;
            writeln!(f, "\t{END_NODE} [label=\"\"]")?;
        }

        writeln!(f, "\tnode [shape = circle, style=solid, peripheries=1];")?;
        writeln!(
            f,
            "\t{START_NODE} -> {} [label=\"\"]",
            self.node(&config.start)
        )?;

        for (from, to, transition) in self.table.iter() {
            writeln!(
                f,
                "\t{} -> {} [label=\"{}\"]",
                self.node(from),
                self.node(to),
                escape(transition.tag())
            )?;
        }

        let mut seen = BTreeSet::new();
        for end in config.end_states.iter().filter(|end| seen.insert(*end)) {
            writeln!(f, "\t{} -> {END_NODE} [label=\"\"]", self.node(end))?;
        }

        writeln!(f, "}}")
    }
}

/// Plain identifiers and numerals are valid `dot` IDs as they are; keywords
/// and anything else are quoted.
fn node_id(label: &str) -> Cow<'_, str> {
    let mut chars = label.chars();
    let identifier = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };
    let numeral = !label.is_empty() && label.chars().all(|c| c.is_ascii_digit());

    let keyword = KEYWORDS.iter().any(|k| k.eq_ignore_ascii_case(label));

    if (identifier || numeral) && !keyword {
        Cow::Borrowed(label)
    } else {
        Cow::Owned(format!("\"{}\"", escape(label)))
    }
}

fn escape(text: &str) -> Cow<'_, str> {
    if text.contains(['"', '\\']) {
        Cow::Owned(text.replace('\\', "\\\\").replace('"', "\\\""))
    } else {
        Cow::Borrowed(text)
    }
}
