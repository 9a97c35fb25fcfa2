use std::fmt::{Display, Formatter};

use crate::Graph;

/// Displays a graph as an undirected DOT `graph` block:
///
/// ```text
/// graph {
///     A;
///     B;
///     A -- B;
/// }
/// ```
///
/// Each line inside the block is indented with a single tab.  Every vertex is
/// declared on its own line, in [`Graph::vertices`] order, followed by one
/// line per edge in [`Graph::edges`] order.  Labels are written with their
/// `Display` implementation.  A label that is not a plain DOT identifier or
/// numeral is wrapped in double quotes, with inner quotes escaped as `\"`.
/// Labels ending in a backslash cannot be represented and do not survive a
/// round trip through [`parse_text`](crate::dot::parse_text).
pub struct DotText<'g, G: Graph + ?Sized> {
    graph: &'g G,
}

impl<'g, G> DotText<'g, G>
where
    G: Graph + ?Sized,
{
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }
}

impl<'g, G> Display for DotText<'g, G>
where
    G: Graph + ?Sized,
    G::Vertex: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "graph {{")?;
        for vertex in self.graph.vertices() {
            writeln!(f, "\t{};", DotId::new(vertex))?;
        }
        for (u, v) in self.graph.edges() {
            writeln!(f, "\t{} -- {};", DotId::new(u), DotId::new(v))?;
        }
        writeln!(f, "}}")
    }
}

const KEYWORDS: [&str; 6] = ["node", "edge", "graph", "digraph", "subgraph", "strict"];

/// A vertex label formatted as a DOT ID.
struct DotId(String);

impl DotId {
    fn new(label: &impl Display) -> Self {
        Self(label.to_string())
    }

    fn is_identifier(&self) -> bool {
        let mut chars = self.0.chars();
        matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            && !KEYWORDS.iter().any(|k| k.eq_ignore_ascii_case(&self.0))
    }

    /// Matches `-?(.[0-9]+|[0-9]+(.[0-9]*)?)`.
    fn is_numeral(&self) -> bool {
        let unsigned = self.0.strip_prefix('-').unwrap_or(&self.0);
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        match unsigned.split_once('.') {
            Some((whole, fraction)) => {
                all_digits(whole)
                    && all_digits(fraction)
                    && !(whole.is_empty() && fraction.is_empty())
            }
            None => !unsigned.is_empty() && all_digits(unsigned),
        }
    }
}

impl Display for DotId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_identifier() || self.is_numeral() {
            f.write_str(&self.0)
        } else {
            write!(f, "\"{}\"", self.0.replace('"', "\\\""))
        }
    }
}

/// Renders a graph as an undirected DOT `graph` block.  See [`DotText`].
pub fn export_text<G>(graph: &G) -> String
where
    G: Graph + ?Sized,
    G::Vertex: Display,
{
    DotText::new(graph).to_string()
}
