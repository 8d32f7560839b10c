use std::fmt;

use crate::attributes::{AttributeMap, Attributed};
use crate::escape::escape_quoted;
use crate::node::NodeRef;

/// A connection between two nodes.
///
/// Endpoints are shared handles, not copies: the edge reads their names at
/// serialization time, so a node renamed after the edge was created renders
/// under its new name. Endpoints do not have to belong to the graph the edge
/// is linked into.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Edge {
    from: NodeRef,
    to: NodeRef,
    attributes: AttributeMap,
}

impl Edge {
    pub fn new(from: NodeRef, to: NodeRef) -> Self {
        Self {
            from,
            to,
            attributes: AttributeMap::new(),
        }
    }

    pub fn from(&self) -> &NodeRef {
        &self.from
    }

    pub fn to(&self) -> &NodeRef {
        &self.to
    }
}

impl Attributed for Edge {
    fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut AttributeMap {
        &mut self.attributes
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let attributes = self
            .attributes
            .values()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let from = self.from.borrow();
        let to = self.to.borrow();
        write!(
            f,
            "\"{}\" -> \"{}\" [{attributes}]",
            escape_quoted(from.name()),
            escape_quoted(to.name())
        )
    }
}
