//! Render automata as graphs.
//!
//! [`Automaton::render_nodes`] and [`Automaton::render_edges`] give the shape of the graph
//! for any drawing front-end. With the `dot` feature, automata can be written as graphviz
//! `.dot` files directly: use `automaton.render_to(filename, RenderSettings::default())`
//! for the most basic rendering.

use crate::StateId;

#[cfg(feature = "dot")]
use crate::Automaton;
#[cfg(feature = "dot")]
use std::fs::File;
#[cfg(feature = "dot")]
use std::io::{self, Write};
#[cfg(feature = "dot")]
use std::path::Path;

mod traverse;

/// How epsilon transitions are labelled.
pub const EPSILON_GLYPH: char = 'ε';

/// A state, as it should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderNode {
    #[allow(missing_docs)]
    pub state: StateId,
    /// Initial states get an incoming edge without source.
    pub is_initial: bool,
    /// Final states are drawn with a double border.
    pub is_final: bool,
}

/// All transitions from one state to another, merged into a single edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderEdge {
    /// the source state, where the edge starts
    pub from: StateId,
    /// the destination state
    pub to: StateId,
    /// The symbols of the transitions, comma separated and sorted.
    pub label: String,
}

/// Global settings related to rendering automata.
#[cfg(feature = "dot")]
#[derive(Debug, Clone)]
pub struct RenderSettings {
    /// Whether to display symbols next to edges
    pub show_edge_labels: bool,
    /// The title which should be displayed above the graph.
    ///
    /// Defaults to the filename given to [`Automaton::render_to`].
    pub title: Option<String>,
}

#[cfg(feature = "dot")]
impl RenderSettings {
    /// Sets the name of the automaton
    pub fn with_name(mut self, name: impl AsRef<str>) -> Self {
        self.title = Some(name.as_ref().to_string());
        self
    }
}

#[cfg(feature = "dot")]
impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            show_edge_labels: true,
            title: None,
        }
    }
}

#[cfg(feature = "dot")]
fn state_to_node_name(state: StateId) -> String {
    format!("state_{state}")
}

#[cfg(feature = "dot")]
fn escape_text(inp: &str) -> String {
    inp.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(feature = "dot")]
impl Automaton {
    /// Visualize the automaton as a graph, by emitting a graphviz dot file.
    pub fn render<W: Write>(&self, output: &mut W, settings: RenderSettings) -> io::Result<()> {
        writeln!(output, "digraph {{")?;
        writeln!(output, "rankdir=LR;")?;

        if let Some(ref title) = settings.title {
            writeln!(output, r#"labelloc="t";"#)?;
            writeln!(output, r#"label="{}";"#, escape_text(title))?;
        }

        for node in self.render_nodes() {
            let name = state_to_node_name(node.state);
            let shape = if node.is_final {
                "doublecircle"
            } else {
                "circle"
            };
            writeln!(output, r#"{name} [shape="{shape}"][label="{}"]"#, node.state)?;

            if node.is_initial {
                writeln!(output, r#"{name}_start [shape="point"][style="invis"]"#)?;
                writeln!(output, "{name}_start -> {name}")?;
            }
        }

        for edge in self.render_edges() {
            let from = state_to_node_name(edge.from);
            let to = state_to_node_name(edge.to);

            if settings.show_edge_labels {
                writeln!(output, r#"{from} -> {to} [label="{}"]"#, escape_text(&edge.label))?
            } else {
                writeln!(output, "{from} -> {to}")?
            }
        }

        writeln!(output, "}}")?;

        Ok(())
    }

    /// [`render`](Automaton::render) directly to a file.
    pub fn render_to(
        &self,
        path: impl AsRef<Path>,
        mut settings: RenderSettings,
    ) -> io::Result<()> {
        let path = path.as_ref();
        let mut w = File::create(path)?;

        if settings.title.is_none() {
            settings.title = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().to_string());
        }

        self.render(&mut w, settings)
    }
}

#[cfg(test)]
mod tests {
    use super::{RenderEdge, RenderNode};
    use crate::{transitions, Automaton, StateSet, EPSILON};
    use pretty_assertions::assert_eq;

    fn ends_with_ab_or_empty() -> Automaton {
        Automaton::construct(
            "ab".chars().collect(),
            StateSet::from([0, 1, 2]),
            StateSet::from([0]),
            StateSet::from([2]),
            transitions! {
                (0, 'a') => [0, 1],
                (0, 'b') => [0],
                (0, EPSILON) => [2],
                (1, 'b') => [2],
            },
        )
        .unwrap()
    }

    #[test]
    fn nodes() {
        let nodes = ends_with_ab_or_empty().render_nodes();
        assert_eq!(
            nodes,
            vec![
                RenderNode {
                    state: 0,
                    is_initial: true,
                    is_final: false,
                },
                RenderNode {
                    state: 1,
                    is_initial: false,
                    is_final: false,
                },
                RenderNode {
                    state: 2,
                    is_initial: false,
                    is_final: true,
                },
            ]
        );
    }

    #[test]
    fn parallel_transitions_are_merged() {
        let edges = ends_with_ab_or_empty().render_edges();
        let edge = |from, to, label: &str| RenderEdge {
            from,
            to,
            label: label.to_string(),
        };
        assert_eq!(
            edges,
            vec![
                edge(0, 0, "a,b"),
                edge(0, 1, "a"),
                edge(0, 2, "ε"),
                edge(1, 2, "b"),
            ]
        );
    }

    #[cfg(feature = "dot")]
    #[test]
    fn dot_output() {
        use super::RenderSettings;

        let mut output = Vec::new();
        ends_with_ab_or_empty()
            .render(&mut output, RenderSettings::default().with_name("ends \"ab\""))
            .unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(output.starts_with("digraph {\n"));
        assert!(output.ends_with("}\n"));
        assert!(output.contains(r#"label="ends \"ab\"";"#));
        assert!(output.contains(r#"state_0_start [shape="point"][style="invis"]"#));
        assert!(output.contains("state_0_start -> state_0\n"));
        assert!(!output.contains("state_1_start"));
        assert!(output.contains(r#"state_2 [shape="doublecircle"][label="2"]"#));
        assert!(output.contains(r#"state_1 [shape="circle"][label="1"]"#));
        assert!(output.contains(r#"state_0 -> state_0 [label="a,b"]"#));
        assert!(output.contains(r#"state_0 -> state_2 [label="ε"]"#));
    }

    #[cfg(feature = "dot")]
    #[test]
    fn dot_output_without_labels() {
        use super::RenderSettings;

        let settings = RenderSettings {
            show_edge_labels: false,
            ..RenderSettings::default()
        };
        let mut output = Vec::new();
        Automaton::from_regex("ab")
            .unwrap()
            .render(&mut output, settings)
            .unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(output.contains("state_0 -> state_1\n"));
        assert!(!output.contains("label=\"a\""));
        assert!(!output.contains("labelloc"));
    }
}
