//! `Graph` and `GraphMut` are the core traits for working with graphs in this
//! library. `Graph` provides read-only access to the graph structure, while
//! `GraphMut` extends `Graph` with methods for modifying it.
//!
//! Every graph here is *simple*: edges are undirected and unweighted, there
//! are no self-loops and at most one edge joins any two vertices.  Vertices
//! are identified by their labels, so a label is both the vertex's data and
//! its identity.
//!
//! Implementations must maintain the following for every state reachable
//! through the trait methods:
//!
//! - every edge's endpoints are vertices of the graph;
//! - no edge joins a vertex to itself;
//! - no unordered pair of vertices is joined by more than one edge;
//! - adjacency is symmetric: `u` is a neighbour of `v` exactly when `v` is a
//!   neighbour of `u`.
//!
//! Algorithms built on top of these traits live in
//! [`algorithms`](crate::algorithms) and never touch a representation's
//! internal storage.
use std::{fmt::Debug, hash::Hash};

use crate::error::GraphError;

/// A trait for types that can be used as vertex labels.
///
/// Any type that is `Eq + Hash + Clone + Debug` qualifies.
pub trait Vertex: Eq + Hash + Clone + Debug {}

impl<T> Vertex for T where T: Eq + Hash + Clone + Debug {}

/// A trait representing a simple undirected graph.  Methods that return
/// iterators over vertices or edges return them in an order defined by the
/// representation.
pub trait Graph {
    type Vertex: Vertex;

    /// Gets the number of vertices in the graph.
    fn vertex_count(&self) -> usize;

    /// Gets the number of edges in the graph.
    fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Returns true if the graph has no vertices.
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    fn contains_vertex(&self, vertex: &Self::Vertex) -> bool;

    /// Checks whether an edge joins `u` and `v`.  The result does not depend
    /// on the argument order, and is false if either vertex is missing.
    fn contains_edge(&self, u: &Self::Vertex, v: &Self::Vertex) -> bool;

    /// Tuple form of [`Self::contains_edge`].
    fn contains_edge_pair(&self, (u, v): (&Self::Vertex, &Self::Vertex)) -> bool {
        self.contains_edge(u, v)
    }

    /// Gets an iterator over all vertices.
    fn vertices(&self) -> impl Iterator<Item = &Self::Vertex> + '_;

    /// Gets an iterator over all edges.  Each undirected edge is produced
    /// exactly once, in one of its two orientations.
    fn edges(&self) -> impl Iterator<Item = (&Self::Vertex, &Self::Vertex)> + '_;

    /// Gets an iterator over the neighbours of a vertex.
    fn neighbours(
        &self,
        vertex: &Self::Vertex,
    ) -> Result<impl Iterator<Item = &Self::Vertex> + '_, GraphError<Self::Vertex>>;

    /// Gets the number of edges incident to a vertex.
    fn degree(&self, vertex: &Self::Vertex) -> Result<usize, GraphError<Self::Vertex>> {
        Ok(self.neighbours(vertex)?.count())
    }

    /// Returns true if vertices can be added and removed after construction.
    /// When this is false, [`GraphMut::add_vertex`] and
    /// [`GraphMut::remove_vertex`] always fail with
    /// [`GraphError::UnsupportedOperation`].
    fn supports_vertex_mutation(&self) -> bool {
        true
    }
}

pub trait GraphMut: Graph {
    /// Adds a vertex.  Adding a vertex that is already present does nothing.
    fn add_vertex(&mut self, vertex: Self::Vertex) -> Result<(), GraphError<Self::Vertex>>;

    /// Removes a vertex and every edge incident to it.  Removing a vertex
    /// that is not present does nothing.
    fn remove_vertex(&mut self, vertex: &Self::Vertex) -> Result<(), GraphError<Self::Vertex>>;

    /// Adds an edge between two existing, distinct vertices.  Adding an edge
    /// that already exists does nothing.
    fn add_edge(
        &mut self,
        u: &Self::Vertex,
        v: &Self::Vertex,
    ) -> Result<(), GraphError<Self::Vertex>>;

    /// Removes the edge between two existing vertices.  Removing an edge that
    /// does not exist does nothing.
    fn remove_edge(
        &mut self,
        u: &Self::Vertex,
        v: &Self::Vertex,
    ) -> Result<(), GraphError<Self::Vertex>>;

    /// Tuple form of [`Self::add_edge`].
    fn add_edge_pair(
        &mut self,
        (u, v): (&Self::Vertex, &Self::Vertex),
    ) -> Result<(), GraphError<Self::Vertex>> {
        self.add_edge(u, v)
    }

    /// Tuple form of [`Self::remove_edge`].
    fn remove_edge_pair(
        &mut self,
        (u, v): (&Self::Vertex, &Self::Vertex),
    ) -> Result<(), GraphError<Self::Vertex>> {
        self.remove_edge(u, v)
    }
}
