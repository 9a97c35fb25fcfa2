use std::fmt::Display;

use indexmap::IndexSet;

use crate::{
    Graph, GraphMut,
    display::format_adjacency,
    error::GraphError,
    graph::Vertex,
    tracing_support::{debug, trace},
};

use self::indicator::SymmetricIndicatorMatrix;

mod indicator;

const REPRESENTATION: &str = "AdjacencyMatrixGraph";

/// A graph with a fixed vertex set whose edges are stored in a symmetric
/// adjacency matrix.
///
/// Each vertex is assigned a row/column index at construction, in the order
/// the vertices are first seen.  The assignment never changes: vertices
/// cannot be added or removed, and attempts to do so fail with
/// [`GraphError::UnsupportedOperation`].  Edges can be added and removed
/// freely.
///
/// Unlike [`AdjacencyListGraph`](crate::AdjacencyListGraph), iteration order
/// is deterministic: vertices in index order, neighbours in ascending index
/// order and edges row by row across the upper triangle of the matrix.
#[derive(Debug)]
pub struct AdjacencyMatrixGraph<V> {
    // Invariant: the position of a label in `labels` is its row and column in
    // `matrix`.
    labels: IndexSet<V>,
    matrix: SymmetricIndicatorMatrix,
}

impl<V: Vertex> AdjacencyMatrixGraph<V> {
    /// Creates a graph with no edges over the given vertices.  Duplicate
    /// vertices are collapsed, keeping the index of the first occurrence.
    pub fn new(vertices: impl IntoIterator<Item = V>) -> Self {
        let labels: IndexSet<V> = vertices.into_iter().collect();
        let matrix = SymmetricIndicatorMatrix::new(labels.len());
        trace!("created {}x{} adjacency matrix", labels.len(), matrix.size());
        Self { labels, matrix }
    }

    /// Creates a graph over `vertices` and adds every edge in `edges`.
    pub fn with_edges(
        vertices: impl IntoIterator<Item = V>,
        edges: impl IntoIterator<Item = (V, V)>,
    ) -> Result<Self, GraphError<V>> {
        let mut graph = Self::new(vertices);
        for (u, v) in edges {
            graph.add_edge(&u, &v)?;
        }
        Ok(graph)
    }

    /// Gets the row/column index assigned to a vertex.
    pub fn index_of(&self, vertex: &V) -> Option<usize> {
        self.labels.get_index_of(vertex)
    }

    /// Gets the vertex assigned to a row/column index.
    pub fn vertex_at(&self, index: usize) -> Option<&V> {
        self.labels.get_index(index)
    }

    /// Reads the matrix entry for `u` and `v`: 1 if they are adjacent, 0
    /// otherwise.
    pub fn cell(&self, u: &V, v: &V) -> Result<u8, GraphError<V>> {
        let (i, j) = self.resolve(u, v)?;
        Ok(u8::from(self.matrix.get(i, j)))
    }

    fn resolve(&self, u: &V, v: &V) -> Result<(usize, usize), GraphError<V>> {
        let i = self
            .index_of(u)
            .ok_or_else(|| GraphError::VertexNotFound(u.clone()))?;
        let j = self
            .index_of(v)
            .ok_or_else(|| GraphError::VertexNotFound(v.clone()))?;
        Ok((i, j))
    }

    fn unsupported(operation: &'static str) -> GraphError<V> {
        GraphError::UnsupportedOperation {
            operation,
            representation: REPRESENTATION,
        }
    }
}

impl<V: Vertex> Graph for AdjacencyMatrixGraph<V> {
    type Vertex = V;

    fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    fn edge_count(&self) -> usize {
        self.matrix.count_ones()
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.labels.contains(vertex)
    }

    fn contains_edge(&self, u: &V, v: &V) -> bool {
        self.resolve(u, v)
            .is_ok_and(|(i, j)| self.matrix.get(i, j))
    }

    fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.labels.iter()
    }

    fn edges(&self) -> impl Iterator<Item = (&V, &V)> + '_ {
        self.matrix
            .upper_triangle()
            .map(|(i, j)| (&self.labels[i], &self.labels[j]))
    }

    fn neighbours(&self, vertex: &V) -> Result<impl Iterator<Item = &V> + '_, GraphError<V>> {
        let i = self
            .index_of(vertex)
            .ok_or_else(|| GraphError::VertexNotFound(vertex.clone()))?;
        Ok(self.matrix.row(i).map(|j| &self.labels[j]))
    }

    fn supports_vertex_mutation(&self) -> bool {
        false
    }
}

impl<V: Vertex> GraphMut for AdjacencyMatrixGraph<V> {
    fn add_vertex(&mut self, _vertex: V) -> Result<(), GraphError<V>> {
        Err(Self::unsupported("add_vertex"))
    }

    fn remove_vertex(&mut self, _vertex: &V) -> Result<(), GraphError<V>> {
        Err(Self::unsupported("remove_vertex"))
    }

    fn add_edge(&mut self, u: &V, v: &V) -> Result<(), GraphError<V>> {
        let (i, j) = self.resolve(u, v)?;
        if i == j {
            return Err(GraphError::SelfLoopNotAllowed(u.clone()));
        }
        if self.matrix.set(i, j, true) {
            debug!("edge {:?} -- {:?} already present", u, v);
        } else {
            trace!("adding edge {:?} -- {:?} at ({}, {})", u, v, i, j);
        }
        Ok(())
    }

    fn remove_edge(&mut self, u: &V, v: &V) -> Result<(), GraphError<V>> {
        let (i, j) = self.resolve(u, v)?;
        if self.matrix.set(i, j, false) {
            trace!("removing edge {:?} -- {:?} at ({}, {})", u, v, i, j);
        } else {
            debug!("edge {:?} -- {:?} not present", u, v);
        }
        Ok(())
    }
}

impl<V: Vertex + Display> Display for AdjacencyMatrixGraph<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_adjacency(self, f)
    }
}
