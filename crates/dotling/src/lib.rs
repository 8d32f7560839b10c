#![forbid(unsafe_code)]

//! Object model for building GraphViz graphs and serializing them to DOT.
//!
//! Design goals:
//! - deterministic text output (insertion order drives serialization)
//! - fluent construction (`set_*` mutators return `&mut Self` for chaining)
//! - rendering stays external: [`Graph::export`] shells out to the `dot`
//!   binary; everything else is in-memory and I/O free
//!
//! ```
//! use dotling::{Attributed, Edge, Graph, Node};
//!
//! let from = Node::new("index.php").into_shared();
//! let to = Node::with_label("Parser.php", "Parser").into_shared();
//!
//! let mut graph = Graph::create("dependencies");
//! graph.set_node(from.clone());
//! graph.set_node(to.clone());
//! graph.link(Edge::new(from, to));
//! graph.set_label("PigeonPost");
//!
//! assert!(graph.to_dot().starts_with("digraph \"dependencies\" {"));
//! ```

pub mod attribute;
pub mod attributes;
pub mod edge;
pub mod error;
mod escape;
pub mod graph;
pub mod node;
mod render;

pub use attribute::Attribute;
pub use attributes::{AttributeMap, Attributed};
pub use edge::Edge;
pub use error::{Error, Result};
pub use graph::{Graph, GraphType};
pub use node::{Node, NodeRef};
