use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::attributes::{AttributeMap, Attributed};
use crate::edge::Edge;
use crate::error::{Error, Result};
use crate::escape::escape_quoted;
use crate::node::NodeRef;
use crate::render;

/// The keyword a [`Graph`] serializes under.
///
/// Only [`Graph::add_graph`] produces `Subgraph` implicitly; everything else
/// goes through [`Graph::set_type`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "lowercase")
)]
pub enum GraphType {
    #[default]
    Digraph,
    Graph,
    Subgraph,
}

impl GraphType {
    pub fn as_str(self) -> &'static str {
        match self {
            GraphType::Digraph => "digraph",
            GraphType::Graph => "graph",
            GraphType::Subgraph => "subgraph",
        }
    }
}

impl fmt::Display for GraphType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GraphType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "digraph" => Ok(GraphType::Digraph),
            "graph" => Ok(GraphType::Graph),
            "subgraph" => Ok(GraphType::Subgraph),
            other => Err(Error::InvalidGraphType {
                value: other.to_string(),
            }),
        }
    }
}

/// A named, typed container of subgraphs, nodes, and edges.
///
/// Serialization is deterministic: subgraphs, then the graph's own
/// attributes, then edges, then nodes, each group in insertion order.
///
/// A subgraph whose name is prefixed `cluster_` is drawn by GraphViz as a
/// bordered group; otherwise the nesting acts as a logical container for
/// defaults. That is renderer convention and not enforced here.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Graph {
    name: String,
    graph_type: GraphType,
    strict: bool,
    path: Option<PathBuf>,
    graphs: IndexMap<String, Graph>,
    nodes: IndexMap<String, NodeRef>,
    edges: Vec<Edge>,
    attributes: AttributeMap,
}

impl Default for Graph {
    fn default() -> Self {
        Self {
            name: "G".to_string(),
            graph_type: GraphType::Digraph,
            strict: false,
            path: None,
            graphs: IndexMap::new(),
            nodes: IndexMap::new(),
            edges: Vec::new(),
            attributes: AttributeMap::new(),
        }
    }
}

impl Graph {
    /// Directed graph with the given name.
    pub fn create(name: impl Into<String>) -> Self {
        let mut graph = Self::default();
        graph.set_name(name);
        graph
    }

    /// Undirected variant of [`Graph::create`].
    pub fn create_undirected(name: impl Into<String>) -> Self {
        let mut graph = Self::create(name);
        graph.set_type(GraphType::Graph);
        graph
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_type(&mut self, graph_type: GraphType) -> &mut Self {
        self.graph_type = graph_type;
        self
    }

    pub fn graph_type(&self) -> GraphType {
        self.graph_type
    }

    /// When set, the renderer collapses multiple edges between the same node
    /// pair. Nothing is enforced in-memory.
    pub fn set_strict(&mut self, strict: bool) -> &mut Self {
        self.strict = strict;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Directory containing the `dot` binary, for installations where it is
    /// not on the process `PATH`. Resolved to an absolute path immediately;
    /// an unresolvable path leaves the previous setting untouched.
    pub fn set_path(&mut self, path: impl AsRef<Path>) -> &mut Self {
        if let Ok(resolved) = std::fs::canonicalize(path) {
            self.path = Some(resolved);
        }
        self
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Adds `graph` as a subgraph, forcing its type to
    /// [`GraphType::Subgraph`] no matter how it was constructed.
    ///
    /// Subgraphs are indexed by name: adding a second one under the same
    /// name replaces the first, and the slot keeps its position in the
    /// serialization order.
    pub fn add_graph(&mut self, mut graph: Graph) -> &mut Self {
        graph.set_type(GraphType::Subgraph);
        self.graphs.insert(graph.name().to_string(), graph);
        self
    }

    pub fn has_graph(&self, name: &str) -> bool {
        self.graphs.contains_key(name)
    }

    pub fn get_graph(&self, name: &str) -> Option<&Graph> {
        self.graphs.get(name)
    }

    pub fn get_graph_mut(&mut self, name: &str) -> Option<&mut Graph> {
        self.graphs.get_mut(name)
    }

    /// Subgraphs in insertion order.
    pub fn graphs(&self) -> impl Iterator<Item = &Graph> {
        self.graphs.values()
    }

    /// Stores `node` under its current name, replacing any previous node of
    /// the same name wholesale. A later rename does not re-key the map.
    pub fn set_node(&mut self, node: NodeRef) -> &mut Self {
        let name = node.borrow().name().to_string();
        self.nodes.insert(name, node);
        self
    }

    pub fn has_node(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// Local lookup; does not descend into subgraphs.
    pub fn node(&self, name: &str) -> Option<NodeRef> {
        self.nodes.get(name).map(Rc::clone)
    }

    /// Depth-first node lookup: this graph's own nodes first, then every
    /// subgraph in insertion order. Absence is a regular outcome, not an
    /// error.
    pub fn find_node(&self, name: &str) -> Option<NodeRef> {
        if let Some(node) = self.nodes.get(name) {
            return Some(Rc::clone(node));
        }
        self.graphs.values().find_map(|graph| graph.find_node(name))
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeRef> {
        self.nodes.values()
    }

    /// Registers an edge. Endpoints are not validated against the graph's
    /// node set; an edge may reference nodes that live elsewhere.
    pub fn link(&mut self, edge: Edge) -> &mut Self {
        self.edges.push(edge);
        self
    }

    /// Edges in link order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The DOT text for this graph. Safe to call without GraphViz installed.
    pub fn to_dot(&self) -> String {
        self.to_string()
    }

    /// Renders the graph to `destination` by invoking the external GraphViz
    /// `dot` binary.
    ///
    /// `format` is any output format `dot -T` understands (`pdf`, `svg`,
    /// `png`, ...). The DOT text is handed over through a temporary file
    /// that is removed again whether or not rendering succeeds. A non-zero
    /// exit surfaces as [`Error::Render`] with the renderer's combined
    /// output.
    pub fn export(&self, format: &str, destination: impl AsRef<Path>) -> Result<()> {
        render::render_to_file(
            &self.to_dot(),
            self.path.as_deref(),
            format,
            destination.as_ref(),
        )
    }
}

impl Attributed for Graph {
    fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut AttributeMap {
        &mut self.attributes
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines: Vec<String> = Vec::new();
        lines.extend(self.graphs.values().map(ToString::to_string));
        lines.extend(self.attributes.values().map(ToString::to_string));
        lines.extend(self.edges.iter().map(ToString::to_string));
        lines.extend(self.nodes.values().map(|node| node.borrow().to_string()));

        let strict = if self.strict { "strict " } else { "" };
        write!(
            f,
            "{strict}{} \"{}\" {{\n{}\n}}",
            self.graph_type,
            escape_quoted(&self.name),
            lines.join("\n")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::GraphType;
    use crate::error::Error;

    #[test]
    fn graph_type_parses_the_three_keywords() {
        assert_eq!("digraph".parse::<GraphType>().unwrap(), GraphType::Digraph);
        assert_eq!("graph".parse::<GraphType>().unwrap(), GraphType::Graph);
        assert_eq!(
            "subgraph".parse::<GraphType>().unwrap(),
            GraphType::Subgraph
        );
    }

    #[test]
    fn graph_type_rejects_anything_else() {
        let err = "fakegraph".parse::<GraphType>().unwrap_err();
        assert!(matches!(err, Error::InvalidGraphType { ref value } if value == "fakegraph"));
    }
}
