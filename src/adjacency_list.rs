use std::fmt::Display;

use derivative::Derivative;
use indexmap::{IndexMap, IndexSet};

use crate::{
    Graph, GraphMut,
    display::format_adjacency,
    error::GraphError,
    graph::Vertex,
    tracing_support::{debug, trace},
};

/// A fully mutable graph that stores, for each vertex, the set of its
/// neighbours.
///
/// Alongside the neighbour sets the graph keeps a cache of every edge as the
/// pair of endpoints in the orientation it was added with.  The cache makes
/// [`Graph::edges`] and [`Graph::edge_count`] cheap and is always consistent
/// with the neighbour sets: a pair is cached exactly when each endpoint lists
/// the other as a neighbour.
///
/// Vertices are iterated in insertion order until a vertex is removed, after
/// which the order of the remaining vertices is unspecified.
#[derive(Debug, Derivative)]
#[derivative(Default(bound = ""))]
pub struct AdjacencyListGraph<V> {
    adjacency: IndexMap<V, IndexSet<V>>,
    // Invariant: holds exactly one orientation of each adjacent pair.
    edges: IndexSet<(V, V)>,
}

impl<V: Vertex> AdjacencyListGraph<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from a sequence of edges, adding the endpoints as
    /// vertices as they are encountered.
    pub fn from_edges(edges: impl IntoIterator<Item = (V, V)>) -> Result<Self, GraphError<V>> {
        let mut graph = Self::new();
        graph.add_edges_and_vertices(edges)?;
        Ok(graph)
    }

    /// Adds every vertex in `vertices`, skipping those already present.
    pub fn add_vertices(&mut self, vertices: impl IntoIterator<Item = V>) {
        for vertex in vertices {
            self.insert_vertex(vertex);
        }
    }

    /// Adds an edge, first adding either endpoint that is not yet a vertex.
    /// A self-loop is rejected before anything is added, so a failed call
    /// leaves the graph unchanged.
    pub fn add_edge_and_vertices(&mut self, u: V, v: V) -> Result<(), GraphError<V>> {
        if u == v {
            return Err(GraphError::SelfLoopNotAllowed(u));
        }
        self.insert_vertex(u.clone());
        self.insert_vertex(v.clone());
        self.add_edge(&u, &v)
    }

    /// Adds every edge in `edges` along with any missing endpoints.  Stops at
    /// the first self-loop; edges before it remain in the graph.
    pub fn add_edges_and_vertices(
        &mut self,
        edges: impl IntoIterator<Item = (V, V)>,
    ) -> Result<(), GraphError<V>> {
        for (u, v) in edges {
            self.add_edge_and_vertices(u, v)?;
        }
        Ok(())
    }

    /// Removes every edge in `edges`.  Stops at the first edge with a missing
    /// endpoint; edges before it have already been removed.
    pub fn remove_edges<'a>(
        &mut self,
        edges: impl IntoIterator<Item = (&'a V, &'a V)>,
    ) -> Result<(), GraphError<V>>
    where
        V: 'a,
    {
        for (u, v) in edges {
            self.remove_edge(u, v)?;
        }
        Ok(())
    }

    /// Removes every vertex in `vertices` together with its edges.
    pub fn remove_vertices<'a>(&mut self, vertices: impl IntoIterator<Item = &'a V>)
    where
        V: 'a,
    {
        for vertex in vertices {
            self.delete_vertex(vertex);
        }
    }

    /// Removes all vertices and edges.
    pub fn clear(&mut self) {
        self.adjacency.clear();
        self.edges.clear();
    }

    fn insert_vertex(&mut self, vertex: V) {
        if self.adjacency.contains_key(&vertex) {
            debug!("vertex {:?} already present", vertex);
            return;
        }
        trace!("adding vertex {:?}", vertex);
        self.adjacency.insert(vertex, IndexSet::new());
    }

    fn delete_vertex(&mut self, vertex: &V) {
        let Some(neighbours) = self.adjacency.get(vertex) else {
            debug!("vertex {:?} not present", vertex);
            return;
        };
        trace!("removing vertex {:?}", vertex);
        let neighbours: Vec<V> = neighbours.iter().cloned().collect();
        for neighbour in &neighbours {
            self.set_adjacent(vertex, neighbour, false);
        }
        self.adjacency.swap_remove(vertex);
    }

    /// Looks up both endpoints of a prospective edge.
    fn resolve(&self, u: &V, v: &V) -> Result<(usize, usize), GraphError<V>> {
        let i = self
            .adjacency
            .get_index_of(u)
            .ok_or_else(|| GraphError::VertexNotFound(u.clone()))?;
        let j = self
            .adjacency
            .get_index_of(v)
            .ok_or_else(|| GraphError::VertexNotFound(v.clone()))?;
        Ok((i, j))
    }

    /// Gets the position of the cached pair for the edge between `u` and
    /// `v`, whichever orientation it was stored in.
    fn cached_edge(&self, u: &V, v: &V) -> Option<usize> {
        self.edges
            .get_index_of(&(u.clone(), v.clone()))
            .or_else(|| self.edges.get_index_of(&(v.clone(), u.clone())))
    }

    /// The only place where adjacency changes.  Updates both neighbour sets
    /// and the edge cache together; does nothing unless both endpoints are
    /// present.
    fn set_adjacent(&mut self, u: &V, v: &V, adjacent: bool) {
        let Ok((i, j)) = self.resolve(u, v) else {
            return;
        };
        if adjacent {
            self.adjacency[i].insert(v.clone());
            self.adjacency[j].insert(u.clone());
            self.edges.insert((u.clone(), v.clone()));
        } else {
            self.adjacency[i].swap_remove(v);
            self.adjacency[j].swap_remove(u);
            if let Some(index) = self.cached_edge(u, v) {
                self.edges.swap_remove_index(index);
            }
        }
    }
}

impl<V: Vertex> Graph for AdjacencyListGraph<V> {
    type Vertex = V;

    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn contains_edge(&self, u: &V, v: &V) -> bool {
        self.cached_edge(u, v).is_some()
    }

    fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.adjacency.keys()
    }

    fn edges(&self) -> impl Iterator<Item = (&V, &V)> + '_ {
        self.edges.iter().map(|(u, v)| (u, v))
    }

    fn neighbours(&self, vertex: &V) -> Result<impl Iterator<Item = &V> + '_, GraphError<V>> {
        self.adjacency
            .get(vertex)
            .map(|neighbours| neighbours.iter())
            .ok_or_else(|| GraphError::VertexNotFound(vertex.clone()))
    }

    fn degree(&self, vertex: &V) -> Result<usize, GraphError<V>> {
        self.adjacency
            .get(vertex)
            .map(IndexSet::len)
            .ok_or_else(|| GraphError::VertexNotFound(vertex.clone()))
    }
}

impl<V: Vertex> GraphMut for AdjacencyListGraph<V> {
    fn add_vertex(&mut self, vertex: V) -> Result<(), GraphError<V>> {
        self.insert_vertex(vertex);
        Ok(())
    }

    fn remove_vertex(&mut self, vertex: &V) -> Result<(), GraphError<V>> {
        self.delete_vertex(vertex);
        Ok(())
    }

    fn add_edge(&mut self, u: &V, v: &V) -> Result<(), GraphError<V>> {
        self.resolve(u, v)?;
        if u == v {
            return Err(GraphError::SelfLoopNotAllowed(u.clone()));
        }
        if self.contains_edge(u, v) {
            debug!("edge {:?} -- {:?} already present", u, v);
            return Ok(());
        }
        trace!("adding edge {:?} -- {:?}", u, v);
        self.set_adjacent(u, v, true);
        Ok(())
    }

    fn remove_edge(&mut self, u: &V, v: &V) -> Result<(), GraphError<V>> {
        self.resolve(u, v)?;
        if !self.contains_edge(u, v) {
            debug!("edge {:?} -- {:?} not present", u, v);
            return Ok(());
        }
        trace!("removing edge {:?} -- {:?}", u, v);
        self.set_adjacent(u, v, false);
        Ok(())
    }
}

impl<V: Vertex + Display> Display for AdjacencyListGraph<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_adjacency(self, f)
    }
}
