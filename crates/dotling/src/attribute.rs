use std::fmt;

use crate::escape::{escape_quoted, escape_specials};

/// A single GraphViz attribute: a key/value pair with DOT-aware formatting.
///
/// Setting an attribute on an element replaces the stored `Attribute`
/// wholesale; instances are never mutated through the store.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Attribute {
    key: String,
    value: String,
}

impl Attribute {
    /// Stores key and value as given; no validation against the GraphViz
    /// attribute grammar.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn set_key(&mut self, key: impl Into<String>) -> &mut Self {
        self.key = key.into();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn set_value(&mut self, value: impl Into<String>) -> &mut Self {
        self.value = value.into();
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// A value starting with `<` is an HTML-like label and is emitted
    /// verbatim, without quoting.
    fn is_html_value(&self) -> bool {
        self.value.starts_with('<')
    }

    /// A value containing a backslash goes through escString escaping.
    fn has_special_value(&self) -> bool {
        self.value.contains('\\')
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = if self.key.eq_ignore_ascii_case("url") {
            "URL"
        } else {
            self.key.as_str()
        };

        if self.has_special_value() {
            write!(f, "{key}=\"{}\"", escape_specials(&self.value))
        } else if self.is_html_value() {
            write!(f, "{key}={}", self.value)
        } else {
            write!(f, "{key}=\"{}\"", escape_quoted(&self.value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Attribute;

    #[test]
    fn plain_values_are_quoted_and_escaped() {
        assert_eq!(Attribute::new("label", "a b").to_string(), r#"label="a b""#);
        assert_eq!(
            Attribute::new("label", "s\"1").to_string(),
            "label=\"s\\\"1\""
        );
    }

    #[test]
    fn html_values_pass_through_unquoted() {
        let attribute = Attribute::new("label", "<<table><tr><td>x</td></tr></table>>");
        assert_eq!(
            attribute.to_string(),
            "label=<<table><tr><td>x</td></tr></table>>"
        );
    }

    #[test]
    fn backslash_values_use_escstring_rules() {
        let attribute = Attribute::new("label", r"\Acme\Descriptor\ProjectDescriptor");
        assert_eq!(
            attribute.to_string(),
            r#"label="\\Acme\\Descriptor\\ProjectDescriptor""#
        );
    }

    #[test]
    fn backslash_wins_over_html_detection() {
        let attribute = Attribute::new("label", r"<table>\N</table>");
        assert_eq!(attribute.to_string(), r#"label="<table>\N</table>""#);
    }

    #[test]
    fn url_keys_render_as_uppercase_url() {
        assert_eq!(
            Attribute::new("url", "http://x").to_string(),
            r#"URL="http://x""#
        );
        assert_eq!(
            Attribute::new("Url", "http://x").to_string(),
            r#"URL="http://x""#
        );
        assert_eq!(Attribute::new("urls", "x").to_string(), r#"urls="x""#);
    }

    #[test]
    fn key_and_value_accessors_are_fluent() {
        let mut attribute = Attribute::new("a", "1");
        attribute.set_key("b").set_value("2");
        assert_eq!(attribute.key(), "b");
        assert_eq!(attribute.value(), "2");
    }
}
