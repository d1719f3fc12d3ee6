//! Edge-list text output for [`LabeledGraph`].
//!
//! The layout is the usual judge input format:
//!
//! ```text
//! n m
//! w(0) w(1) ... w(n-1)    only when some vertex has a weight
//! u v [w]                 one line per edge, in edge-id order
//! ```

use std::io::Write;

use crate::{LabeledGraph, error::FormatError};

/// Controls the header and label base of [`write_graph`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OutputModifier {
    /// Print the vertex count in the header.
    pub print_n: bool,
    /// Print the edge count in the header.
    pub print_m: bool,
    /// Print labels starting from 1.
    pub add_one: bool,
}

impl Default for OutputModifier {
    fn default() -> Self {
        Self {
            print_n: true,
            print_m: true,
            add_one: false,
        }
    }
}

/// Writes `graph` to `out` as an edge list.
///
/// Missing weights are printed as the default value of the type used by the
/// other weights of the same kind.
///
/// # Errors
/// Returns [`FormatError::Io`] when `out` fails.
///
/// # Examples
/// ```
/// use gauntlet_core::{LabeledGraph, Weight, format::{OutputModifier, write_graph}};
///
/// let mut graph = LabeledGraph::undirected();
/// graph.add_edge(0, 1, Weight::Int(3))?;
/// graph.add_edge(1, 2, Weight::Empty)?;
/// let mut out = Vec::new();
/// write_graph(&graph, &OutputModifier::default(), &mut out)?;
/// assert_eq!(String::from_utf8_lossy(&out), "3 2\n0 1 3\n1 2 0\n");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn write_graph(
    graph: &LabeledGraph,
    modifier: &OutputModifier,
    out: &mut impl Write,
) -> Result<(), FormatError> {
    match (modifier.print_n, modifier.print_m) {
        (true, true) => writeln!(out, "{} {}", graph.n(), graph.m())?,
        (true, false) => writeln!(out, "{}", graph.n())?,
        (false, true) => writeln!(out, "{}", graph.m())?,
        (false, false) => {}
    }

    if graph.has_vertex_weights() {
        let weights = graph.vertex_weights_by_label()?;
        let line: Vec<String> = weights.iter().map(ToString::to_string).collect();
        writeln!(out, "{}", line.join(" "))?;
    }

    let offset = usize::from(modifier.add_one);
    let edge_weights = if graph.has_edge_weights() {
        Some(graph.edge_weights_by_id()?)
    } else {
        None
    };
    for (id, (u, v)) in graph.edges().into_iter().enumerate() {
        write!(out, "{} {}", u + offset, v + offset)?;
        if let Some(weights) = &edge_weights {
            write!(out, " {}", weights.get(id))?;
        }
        writeln!(out)?;
    }
    Ok(())
}
