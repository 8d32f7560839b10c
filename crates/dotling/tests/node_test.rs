use dotling::{Attributed, Error, Node};

#[test]
fn construct_sets_name_and_optional_label() {
    let node = Node::with_label("MyName", "MyLabel");
    assert_eq!(node.name(), "MyName");
    assert_eq!(node.get_label().unwrap().value(), "MyLabel");

    let plain = Node::new("bare");
    assert!(!plain.has_attribute("label"));
}

#[test]
fn set_name_is_fluent() {
    let mut node = Node::new("name");
    node.set_name("otherName").set_label("x");
    assert_eq!(node.name(), "otherName");
}

#[test]
fn typed_accessors_round_trip() {
    let fontname = "Bitstream Vera Sans";
    let mut node = Node::new("name");
    node.set_fontname(fontname);
    assert_eq!(node.get_fontname().unwrap().value(), fontname);
}

#[test]
fn missing_attribute_reports_its_name() {
    let node = Node::new("name");
    let err = node.get_fontname().unwrap_err();
    assert!(matches!(err, Error::AttributeNotFound { ref name } if name == "fontname"));
    assert_eq!(
        err.to_string(),
        "Attribute with name \"fontname\" was not found"
    );
}

#[test]
fn display_matches_the_dot_node_statement() {
    let mut node = Node::with_label("name", "label");
    node.set_fontsize("12");
    node.set_fontname("Bitstream Vera Sans");

    assert_eq!(
        node.to_string(),
        r#""name" [label="label", fontsize="12", fontname="Bitstream Vera Sans"]"#
    );
}

#[test]
fn display_escapes_backslashes_in_label_values() {
    let mut node = Node::with_label("name", r"\Acme\Descriptor\ProjectDescriptor");
    node.set_fontsize("12");

    assert_eq!(
        node.to_string(),
        r#""name" [label="\\Acme\\Descriptor\\ProjectDescriptor", fontsize="12"]"#
    );
}

#[test]
fn display_escapes_quotes_in_the_name() {
    let node = Node::new("My \"massive\" node");
    assert_eq!(node.to_string(), r#""My \"massive\" node" []"#);
}

#[test]
fn display_without_attributes_emits_an_empty_bracket_pair() {
    assert_eq!(Node::new("n").to_string(), r#""n" []"#);
}
