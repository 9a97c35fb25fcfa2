use dot_parser::ast::{Graph as DotGraph, ID, NodeID, Stmt, StmtList, Subgraph, either::Either};
use indexmap::IndexSet;

use crate::{AdjacencyListGraph, Graph, GraphMut, error::GraphError, tracing_support::debug};

/// Errors that can occur while reading a graph from DOT text.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The input is not valid DOT.
    #[error("invalid DOT data: {0}")]
    Syntax(String),
    /// The input describes something a simple graph cannot hold, such as a
    /// self-loop.
    #[error(transparent)]
    Graph(#[from] GraphError<String>),
}

type Attrs<'a> = (ID<'a>, ID<'a>);

/// Converts a DOT ID into a vertex label.  Quoted IDs arrive without their
/// surrounding quotes but with `\"` escapes intact.
fn label(id: &str) -> String {
    id.to_string().replace("\\\"", "\"")
}

/// Applies one end of an edge statement to the graph and returns the labels
/// it stands for.  A subgraph end is applied in full, including any edges
/// declared inside it.
fn apply_endpoint(
    end: &Either<NodeID, Subgraph<Attrs<'_>>>,
    graph: &mut AdjacencyListGraph<String>,
) -> Result<IndexSet<String>, GraphError<String>> {
    match end {
        Either::Left(node_id) => {
            let vertex = label(&node_id.id);
            graph.add_vertex(vertex.clone())?;
            Ok(IndexSet::from([vertex]))
        }
        Either::Right(subgraph) => apply_stmts(&subgraph.stmts, graph),
    }
}

/// Applies a statement list to the graph and returns the labels of every
/// vertex it mentions, in order of first mention.
fn apply_stmts(
    stmts: &StmtList<Attrs<'_>>,
    graph: &mut AdjacencyListGraph<String>,
) -> Result<IndexSet<String>, GraphError<String>> {
    let mut mentioned = IndexSet::new();
    for stmt in stmts {
        match stmt {
            Stmt::NodeStmt(node_stmt) => {
                let vertex = label(&node_stmt.node.id);
                graph.add_vertex(vertex.clone())?;
                mentioned.insert(vertex);
            }
            Stmt::EdgeStmt(edge_stmt) => {
                // In a chain `a -- b -- c`, each segment joins every vertex on
                // its left to every vertex on its right.
                let mut left = apply_endpoint(&edge_stmt.from, graph)?;
                mentioned.extend(left.iter().cloned());
                let mut segment = Some(&edge_stmt.next);
                while let Some(rhs) = segment {
                    let right = apply_endpoint(&rhs.to, graph)?;
                    for u in &left {
                        for v in &right {
                            graph.add_edge(u, v)?;
                        }
                    }
                    mentioned.extend(right.iter().cloned());
                    left = right;
                    segment = rhs.next.as_deref();
                }
            }
            Stmt::Subgraph(subgraph) => mentioned.extend(apply_stmts(&subgraph.stmts, graph)?),
            _ => {}
        }
    }
    Ok(mentioned)
}

/// Reads a graph from DOT text.
///
/// Vertices are labelled with their DOT node IDs and appear in the order they
/// are first mentioned.  Nodes that only appear in edge statements are
/// created implicitly.  A subgraph used as an edge end contributes its own
/// edges as well as being joined to the other end.  Attributes are ignored,
/// and `->` edges are read as undirected, so `digraph` input is accepted.
/// Repeated edges collapse into one.
///
/// # Errors
///
/// Returns [`ParseError::Syntax`] if the text is not valid DOT, and
/// [`ParseError::Graph`] if it contains a self-loop.
pub fn parse_text(data: &str) -> Result<AdjacencyListGraph<String>, ParseError> {
    let dot_ast: DotGraph<_> =
        DotGraph::try_from(data).map_err(|e| ParseError::Syntax(format!("{e:?}")))?;
    let mut graph = AdjacencyListGraph::new();
    apply_stmts(&dot_ast.stmts, &mut graph)?;
    debug!(
        "parsed DOT graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}
