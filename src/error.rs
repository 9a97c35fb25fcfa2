use std::fmt::Debug;

/// Errors reported by graph operations.
///
/// Idempotent no-ops (adding an edge that already exists, removing an edge or
/// vertex that does not) are not errors and never produce one of these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError<V: Debug> {
    /// The operation referenced a vertex that is not in the graph.
    #[error("vertex not found in graph: {0:?}")]
    VertexNotFound(V),
    /// An edge was requested between a vertex and itself.
    #[error("self-loops are not allowed in a simple graph: {0:?}")]
    SelfLoopNotAllowed(V),
    /// The representation has a fixed vertex set and cannot perform the
    /// operation.
    #[error("{operation} is not supported by {representation}")]
    UnsupportedOperation {
        operation: &'static str,
        representation: &'static str,
    },
}

impl<V: Debug> GraphError<V> {
    pub fn is_vertex_not_found(&self) -> bool {
        matches!(self, GraphError::VertexNotFound(_))
    }

    pub fn is_self_loop(&self) -> bool {
        matches!(self, GraphError::SelfLoopNotAllowed(_))
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, GraphError::UnsupportedOperation { .. })
    }

    /// Converts the vertex carried by the error, if any.
    pub fn map_vertex<W: Debug>(self, f: impl FnOnce(V) -> W) -> GraphError<W> {
        match self {
            GraphError::VertexNotFound(v) => GraphError::VertexNotFound(f(v)),
            GraphError::SelfLoopNotAllowed(v) => GraphError::SelfLoopNotAllowed(f(v)),
            GraphError::UnsupportedOperation {
                operation,
                representation,
            } => GraphError::UnsupportedOperation {
                operation,
                representation,
            },
        }
    }
}
