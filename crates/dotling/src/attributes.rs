//! The attribute-bag capability shared by nodes, edges, and graphs.

use indexmap::IndexMap;

use crate::attribute::Attribute;
use crate::error::{Error, Result};

/// Attribute storage keyed by attribute name.
///
/// Insertion order is what the serializer walks, so it must be preserved;
/// overwriting a key keeps its original position.
pub type AttributeMap = IndexMap<String, Attribute>;

/// Generates the named convenience accessors for the common GraphViz
/// attribute vocabulary. Each setter stores under the canonical lowercase
/// name and delegates to the generic pair, so `set_label("x")` and
/// `set_attribute("label", "x")` are interchangeable.
macro_rules! attribute_accessors {
    ($(($set:ident, $get:ident, $key:literal)),* $(,)?) => {
        $(
            #[doc = concat!("Sets the `", $key, "` attribute.")]
            fn $set(&mut self, value: impl Into<String>) -> &mut Self
            where
                Self: Sized,
            {
                self.set_attribute($key, value)
            }

            #[doc = concat!("Returns the `", $key, "` attribute; fails when it was never set.")]
            fn $get(&self) -> Result<&Attribute> {
                self.get_attribute($key)
            }
        )*
    };
}

/// Generic attribute access for DOT elements.
///
/// The GraphViz attribute vocabulary is large, so the store stays generic:
/// `set_attribute`/`get_attribute` accept any name, and a fixed set of
/// wrappers covers the names that come up constantly. Setters return
/// `&mut Self` for chaining.
pub trait Attributed {
    fn attributes(&self) -> &AttributeMap;

    fn attributes_mut(&mut self) -> &mut AttributeMap;

    /// Stores a fresh [`Attribute`] under `name`, replacing any previous one.
    /// The name is stored as given; the named wrappers always use lowercase.
    fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self
    where
        Self: Sized,
    {
        let name = name.into();
        let attribute = Attribute::new(name.clone(), value);
        self.attributes_mut().insert(name, attribute);
        self
    }

    fn get_attribute(&self, name: &str) -> Result<&Attribute> {
        self.attributes()
            .get(name)
            .ok_or_else(|| Error::AttributeNotFound {
                name: name.to_string(),
            })
    }

    /// Existence check for callers to whom an absent attribute is a regular
    /// state rather than an error.
    fn has_attribute(&self, name: &str) -> bool {
        self.attributes().contains_key(name)
    }

    attribute_accessors! {
        (set_label, get_label, "label"),
        (set_url, get_url, "url"),
        (set_color, get_color, "color"),
        (set_bgcolor, get_bgcolor, "bgcolor"),
        (set_fillcolor, get_fillcolor, "fillcolor"),
        (set_fontname, get_fontname, "fontname"),
        (set_fontsize, get_fontsize, "fontsize"),
        (set_shape, get_shape, "shape"),
        (set_style, get_style, "style"),
        (set_weight, get_weight, "weight"),
        (set_rank, get_rank, "rank"),
        (set_rankdir, get_rankdir, "rankdir"),
        (set_ranksep, get_ranksep, "ranksep"),
        (set_splines, get_splines, "splines"),
        (set_concentrate, get_concentrate, "concentrate"),
        (set_center, get_center, "center"),
    }
}
