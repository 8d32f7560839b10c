use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::attributes::{AttributeMap, Attributed};
use crate::escape::escape_quoted;

/// Shared handle to a [`Node`].
///
/// Graphs own their nodes through this handle and edges alias the same
/// cells, so a rename or attribute change made through one handle is visible
/// from every element referencing the node. The model is single threaded;
/// there is no internal locking.
pub type NodeRef = Rc<RefCell<Node>>;

/// A named vertex carrying its own attribute bag.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Node {
    name: String,
    attributes: AttributeMap,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: AttributeMap::new(),
        }
    }

    /// Creates a node and sets its `label` attribute in one go.
    pub fn with_label(name: impl Into<String>, label: impl Into<String>) -> Self {
        let mut node = Self::new(name);
        node.set_label(label);
        node
    }

    /// Wraps the node in the shared handle graphs and edges work with.
    pub fn into_shared(self) -> NodeRef {
        Rc::new(RefCell::new(self))
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Attributed for Node {
    fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut AttributeMap {
        &mut self.attributes
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let attributes = self
            .attributes
            .values()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "\"{}\" [{attributes}]", escape_quoted(&self.name))
    }
}
