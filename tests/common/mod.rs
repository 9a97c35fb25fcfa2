#![allow(dead_code)]
use simplegraph::prelude::*;

/// A six-vertex component `A..F`, an isolated `G` and the pair `H -- I`.
pub const SCENARIO_VERTICES: &str = "ABCDEFGHI";
pub const SCENARIO_EDGES: [(char, char); 8] = [
    ('A', 'B'),
    ('A', 'C'),
    ('B', 'C'),
    ('B', 'D'),
    ('C', 'F'),
    ('D', 'F'),
    ('D', 'E'),
    ('H', 'I'),
];

pub fn scenario_list() -> AdjacencyListGraph<char> {
    let mut graph = AdjacencyListGraph::new();
    graph.add_vertices(SCENARIO_VERTICES.chars());
    graph.add_edges_and_vertices(SCENARIO_EDGES).unwrap();
    graph
}

pub fn scenario_matrix() -> AdjacencyMatrixGraph<char> {
    AdjacencyMatrixGraph::with_edges(SCENARIO_VERTICES.chars(), SCENARIO_EDGES).unwrap()
}

/// Lists each component as a string of its sorted labels, with the
/// components themselves sorted, so results can be compared without depending
/// on vertex or traversal order.
pub fn sorted_components<G: Graph<Vertex = char>>(graph: &G) -> Vec<String> {
    let mut components: Vec<String> = graph
        .connected_components()
        .map(|component| {
            let mut labels: Vec<char> = component.into_iter().copied().collect();
            labels.sort();
            labels.into_iter().collect()
        })
        .collect();
    components.sort();
    components
}
