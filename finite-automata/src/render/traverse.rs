use crate::render::{RenderEdge, RenderNode, EPSILON_GLYPH};
use crate::{Automaton, StateId, EPSILON};
use itertools::Itertools;
use std::collections::{BTreeMap, BTreeSet};

impl Automaton {
    /// One node per state, in ascending order.
    pub fn render_nodes(&self) -> Vec<RenderNode> {
        self.states
            .iter()
            .map(|&state| RenderNode {
                state,
                is_initial: self.initial_states.contains(&state),
                is_final: self.final_states.contains(&state),
            })
            .collect()
    }

    /// One edge per pair of connected states, labelled with every symbol leading from the
    /// first to the second. Epsilon transitions are labelled `ε`.
    pub fn render_edges(&self) -> Vec<RenderEdge> {
        let mut symbols: BTreeMap<(StateId, StateId), BTreeSet<char>> = BTreeMap::new();
        for (&(from, symbol), targets) in &self.transition_function {
            for &to in targets {
                symbols.entry((from, to)).or_default().insert(symbol);
            }
        }

        symbols
            .into_iter()
            .map(|((from, to), symbols)| RenderEdge {
                from,
                to,
                label: symbols
                    .into_iter()
                    .map(|symbol| match symbol {
                        EPSILON => EPSILON_GLYPH.to_string(),
                        symbol => symbol.to_string(),
                    })
                    .join(","),
            })
            .collect()
    }
}
