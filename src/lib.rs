//! Simple undirected graphs with labelled vertices.
//!
//! Two representations implement the [`Graph`] and [`GraphMut`] traits:
//! [`AdjacencyListGraph`], which is fully mutable, and
//! [`AdjacencyMatrixGraph`], whose vertex set is fixed when it is created.
//! The algorithms in [`GraphAlgorithms`] work with either one.
//!
//! ```
//! use simplegraph::prelude::*;
//!
//! let mut graph = AdjacencyListGraph::from_edges([("a", "b"), ("b", "c")]).unwrap();
//! graph.add_vertex("d").unwrap();
//! assert_eq!(graph.count_connected_components(), 2);
//! assert!(graph.add_edge(&"a", &"a").unwrap_err().is_self_loop());
//! ```

pub mod adjacency_list;
pub mod adjacency_matrix;
pub mod algorithms;
pub mod dot;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod search;
pub mod tracing_support;

mod display;
mod triangular;
mod util;

#[cfg(test)]
mod graph_test_support;

pub use crate::adjacency_list::AdjacencyListGraph;
pub use crate::adjacency_matrix::AdjacencyMatrixGraph;
pub use crate::algorithms::GraphAlgorithms;
pub use crate::error::GraphError;
pub use crate::graph::{Graph, GraphMut, Vertex};
