use std::fmt::{Display, Formatter};

use crate::Graph;

/// Writes the human-readable adjacency dump of a graph: one line per vertex,
/// in the graph's vertex order, of the form `label: n1, n2, ...`.
pub(crate) fn format_adjacency<G>(graph: &G, f: &mut Formatter<'_>) -> std::fmt::Result
where
    G: Graph,
    G::Vertex: Display,
{
    for vertex in graph.vertices() {
        write!(f, "{vertex}: ")?;
        // Vertices come from the graph itself, so the lookup cannot miss.
        if let Ok(neighbours) = graph.neighbours(vertex) {
            for (i, neighbour) in neighbours.enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{neighbour}")?;
            }
        }
        writeln!(f)?;
    }
    Ok(())
}
