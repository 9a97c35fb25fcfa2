//! Reading and writing graphs in the Graphviz DOT language.

pub mod generate;
#[cfg(feature = "dot")]
pub mod parser;

pub use generate::{DotText, export_text};
#[cfg(feature = "dot")]
pub use parser::{ParseError, parse_text};
