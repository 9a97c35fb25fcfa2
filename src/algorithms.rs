//! Algorithms that work on any [`Graph`] through its public methods only.
//!
//! [`GraphAlgorithms`] is implemented for every graph, so bringing it into
//! scope is enough to call `graph.dfs(&start)`, `graph.is_connected()` and so
//! on.
use std::{collections::HashSet, fmt::Display};

use crate::{
    Graph,
    dot::generate::DotText,
    error::GraphError,
    search::{Bfs, Dfs},
};

pub trait GraphAlgorithms: Graph {
    /// Performs a depth-first search starting from the given vertex.  Fails if
    /// `start` is not in the graph.
    fn dfs<'g>(
        &'g self,
        start: &'g Self::Vertex,
    ) -> Result<Dfs<'g, Self>, GraphError<Self::Vertex>> {
        Dfs::new(self, start)
    }

    /// Performs a breadth-first search starting from the given vertex.  Fails
    /// if `start` is not in the graph.
    fn bfs<'g>(
        &'g self,
        start: &'g Self::Vertex,
    ) -> Result<Bfs<'g, Self>, GraphError<Self::Vertex>> {
        Bfs::new(self, start)
    }

    /// Gets an iterator over the connected components of the graph.  Each
    /// component is listed in depth-first order from its first vertex in
    /// [`Graph::vertices`] order.  Components are computed as the iterator is
    /// advanced.
    fn connected_components(&self) -> impl Iterator<Item = Vec<&Self::Vertex>> + '_ {
        let mut visited = HashSet::new();
        let mut vertices = self.vertices();
        std::iter::from_fn(move || {
            let start = vertices.by_ref().find(|vertex| !visited.contains(vertex))?;
            let component: Vec<_> = Dfs::seeded(self, start).collect();
            visited.extend(component.iter().copied());
            Some(component)
        })
    }

    /// Counts the connected components with one sweep over the vertices.
    fn count_connected_components(&self) -> usize {
        let mut visited = HashSet::new();
        let mut count = 0;
        for vertex in self.vertices() {
            if visited.contains(vertex) {
                continue;
            }
            count += 1;
            visited.extend(Dfs::seeded(self, vertex));
        }
        count
    }

    /// Counts the connected components by restarting the scan of the vertex
    /// list after each component.  Always agrees with
    /// [`Self::count_connected_components`] but can take quadratic time in the
    /// number of vertices.
    fn count_connected_components_by_rescan(&self) -> usize {
        let mut visited = HashSet::new();
        let mut count = 0;
        while let Some(vertex) = self.vertices().find(|vertex| !visited.contains(vertex)) {
            count += 1;
            visited.extend(Dfs::seeded(self, vertex));
        }
        count
    }

    /// Returns true if the graph has exactly one connected component.  A
    /// graph with no vertices has no components and is not connected.
    fn is_connected(&self) -> bool {
        self.count_connected_components() == 1
    }

    /// Renders the graph as an undirected DOT `graph` block.  See
    /// [`DotText`] for the format.
    fn export_text(&self) -> String
    where
        Self::Vertex: Display,
    {
        DotText::new(self).to_string()
    }

    /// Finds a path with the fewest edges from `from` to `to`, including both
    /// ends.  Returns `None` if `to` is not reachable.
    #[cfg(feature = "pathfinding")]
    fn shortest_path<'g>(
        &'g self,
        from: &'g Self::Vertex,
        to: &'g Self::Vertex,
    ) -> Result<Option<Vec<&'g Self::Vertex>>, GraphError<Self::Vertex>> {
        use pathfinding::prelude::bfs;

        for vertex in [from, to] {
            if !self.contains_vertex(vertex) {
                return Err(GraphError::VertexNotFound(vertex.clone()));
            }
        }
        Ok(bfs(
            &from,
            |vertex: &&'g Self::Vertex| -> Vec<&'g Self::Vertex> {
                self.neighbours(vertex)
                    .map(|neighbours| neighbours.collect())
                    .unwrap_or_default()
            },
            |vertex| *vertex == to,
        ))
    }
}

impl<G: Graph + ?Sized> GraphAlgorithms for G {}
