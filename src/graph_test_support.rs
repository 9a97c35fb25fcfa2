use std::collections::HashSet;
use std::hash::Hash;

use quickcheck::Arbitrary;

use crate::prelude::*;
use crate::tracing_support::init_tracing;
use crate::util::edge_key;

/// Labels produced by [`ArbGraph`] are always below this value, so labels at
/// or above it are never vertices of a generated graph.
pub const MAX_LABEL: u8 = 200;

/// A randomly generated graph description.  Graphs themselves are built from
/// it inside each property so that any representation can be tested.
///
/// `edges` may contain self-loops and repeats; they are applied with
/// [`ArbGraph::build`], which skips the ones the graph rejects.
#[derive(Debug, Clone)]
pub struct ArbGraph {
    pub vertices: Vec<u8>,
    pub edges: Vec<(u8, u8)>,
}

impl Arbitrary for ArbGraph {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let num_vertices = usize::arbitrary(g) % 20; // Limit size for testing
        let num_edges = usize::arbitrary(g) % 50;

        let vertices: Vec<u8> = (0..num_vertices)
            .map(|_| u8::arbitrary(g) % MAX_LABEL)
            .collect();
        let mut edges = Vec::new();
        if !vertices.is_empty() {
            for _ in 0..num_edges {
                let u = vertices[usize::arbitrary(g) % vertices.len()];
                let v = vertices[usize::arbitrary(g) % vertices.len()];
                edges.push((u, v));
            }
        }

        ArbGraph { vertices, edges }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let vertices = self.vertices.clone();
        Box::new(self.edges.shrink().map(move |edges| ArbGraph {
            vertices: vertices.clone(),
            edges,
        }))
    }
}

impl ArbGraph {
    /// Adds every edge to `graph`, ignoring self-loops.
    pub fn build<G: GraphMut<Vertex = u8>>(&self, mut graph: G) -> G {
        for (u, v) in &self.edges {
            if let Err(err) = graph.add_edge(u, v) {
                assert_eq!(err, GraphError::SelfLoopNotAllowed(*u));
            }
        }
        graph
    }
}

pub fn has_duplicates<T: Eq + Hash>(items: impl IntoIterator<Item = T>) -> bool {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item) {
            return true;
        }
    }
    false
}

/// Checks that a graph upholds the simple-graph invariants through its public
/// methods.
pub fn check_graph_consistency<G>(graph: &G)
where
    G: Graph,
    G::Vertex: Ord,
{
    init_tracing(false);

    assert_eq!(graph.vertices().count(), graph.vertex_count());
    assert!(!has_duplicates(graph.vertices()));
    assert_eq!(graph.is_empty(), graph.vertex_count() == 0);

    // Every edge is listed once, between two distinct vertices.
    assert_eq!(graph.edges().count(), graph.edge_count());
    assert!(!has_duplicates(graph.edges().map(|(u, v)| edge_key(u, v))));
    for (u, v) in graph.edges() {
        assert_ne!(u, v, "self-loop on {u:?}");
        assert!(graph.contains_vertex(u));
        assert!(graph.contains_vertex(v));
        assert!(graph.contains_edge(u, v));
        assert!(graph.contains_edge(v, u));
    }

    // Adjacency is symmetric and agrees with the edge list.
    let mut degree_sum = 0;
    for vertex in graph.vertices() {
        let neighbours: Vec<_> = graph
            .neighbours(vertex)
            .expect("listed vertex has neighbours")
            .collect();
        assert!(!has_duplicates(neighbours.iter()));
        assert_eq!(graph.degree(vertex), Ok(neighbours.len()));
        degree_sum += neighbours.len();
        for neighbour in neighbours {
            assert!(graph.contains_edge(vertex, neighbour));
            assert!(
                graph
                    .neighbours(neighbour)
                    .expect("neighbour is a vertex")
                    .any(|n| n == vertex),
                "{vertex:?} -- {neighbour:?} is not symmetric"
            );
        }
    }
    assert_eq!(degree_sum, 2 * graph.edge_count());
}
