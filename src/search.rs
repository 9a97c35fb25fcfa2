//! Lazy graph traversals.
//!
//! Both searches mark a vertex as visited when it is taken off the frontier,
//! not when it is put on.  Every neighbour of a newly visited vertex is pushed,
//! visited or not, so a vertex can sit on the frontier several times; the
//! copies are skipped when they come off.
use std::collections::{HashSet, VecDeque};

use crate::{Graph, error::GraphError};

const DEFAULT_HASH_SET_CAPACITY: usize = 64;

/// Depth-first traversal from a single start vertex.  Created by
/// [`GraphAlgorithms::dfs`](crate::GraphAlgorithms::dfs).
pub struct Dfs<'g, G: Graph + ?Sized> {
    graph: &'g G,
    visited: HashSet<&'g G::Vertex>,
    stack: Vec<&'g G::Vertex>,
}

impl<'g, G> Dfs<'g, G>
where
    G: Graph + ?Sized,
{
    pub(crate) fn new(graph: &'g G, start: &'g G::Vertex) -> Result<Self, GraphError<G::Vertex>> {
        if !graph.contains_vertex(start) {
            return Err(GraphError::VertexNotFound(start.clone()));
        }
        Ok(Self::seeded(graph, start))
    }

    /// Creates a traversal without checking that `start` is in the graph.
    pub(crate) fn seeded(graph: &'g G, start: &'g G::Vertex) -> Self {
        Self {
            graph,
            visited: HashSet::with_capacity(DEFAULT_HASH_SET_CAPACITY),
            stack: vec![start],
        }
    }
}

impl<'g, G> Iterator for Dfs<'g, G>
where
    G: Graph + ?Sized,
{
    type Item = &'g G::Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        while let Some(vertex) = self.stack.pop() {
            if !self.visited.insert(vertex) {
                continue;
            }
            if let Ok(neighbours) = graph.neighbours(vertex) {
                self.stack.extend(neighbours);
            }
            return Some(vertex);
        }
        None
    }
}

/// Breadth-first traversal from a single start vertex.  Created by
/// [`GraphAlgorithms::bfs`](crate::GraphAlgorithms::bfs).
pub struct Bfs<'g, G: Graph + ?Sized> {
    graph: &'g G,
    visited: HashSet<&'g G::Vertex>,
    queue: VecDeque<&'g G::Vertex>,
}

impl<'g, G> Bfs<'g, G>
where
    G: Graph + ?Sized,
{
    pub(crate) fn new(graph: &'g G, start: &'g G::Vertex) -> Result<Self, GraphError<G::Vertex>> {
        if !graph.contains_vertex(start) {
            return Err(GraphError::VertexNotFound(start.clone()));
        }
        Ok(Self {
            graph,
            visited: HashSet::with_capacity(DEFAULT_HASH_SET_CAPACITY),
            queue: VecDeque::from([start]),
        })
    }
}

impl<'g, G> Iterator for Bfs<'g, G>
where
    G: Graph + ?Sized,
{
    type Item = &'g G::Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        while let Some(vertex) = self.queue.pop_front() {
            if !self.visited.insert(vertex) {
                continue;
            }
            if let Ok(neighbours) = graph.neighbours(vertex) {
                self.queue.extend(neighbours);
            }
            return Some(vertex);
        }
        None
    }
}
