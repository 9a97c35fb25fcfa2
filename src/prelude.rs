pub use crate::{
    AdjacencyListGraph, AdjacencyMatrixGraph, Graph, GraphAlgorithms, GraphError, GraphMut,
    Vertex,
};
