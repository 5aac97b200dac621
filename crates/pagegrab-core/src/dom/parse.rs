//! Markup parsing via `tl` into the typed tree.

use super::{Attrs, Document, Element, Node};

/// Parses page markup into a [`Document`].
///
/// The parser is lenient; input that `tl` cannot process at all degrades to a
/// single verbatim text node, so the pipeline still saves the page as-is.
pub fn parse_document(markup: &str) -> Document {
    let Ok(dom) = tl::parse(markup, tl::ParserOptions::default()) else {
        return Document {
            nodes: vec![Node::Text(markup.to_string())],
        };
    };

    let parser = dom.parser();
    let nodes = dom
        .children()
        .iter()
        .filter_map(|handle| convert(*handle, parser))
        .collect();
    Document { nodes }
}

fn convert(handle: tl::NodeHandle, parser: &tl::Parser) -> Option<Node> {
    let node = handle.get(parser)?;

    match node {
        tl::Node::Tag(tag) => {
            let name = tag.name().as_utf8_str().to_lowercase();

            let mut attrs = Attrs::new();
            for (key, value) in tag.attributes().iter() {
                attrs.insert(key.to_lowercase(), value.map(|v| v.to_string()));
            }

            let children = tag
                .children()
                .top()
                .iter()
                .filter_map(|child| convert(*child, parser))
                .collect();

            Some(Node::Element(Element {
                name,
                attrs,
                children,
            }))
        }
        tl::Node::Raw(bytes) => Some(Node::Text(bytes.as_utf8_str().to_string())),
        tl::Node::Comment(bytes) => Some(Node::Comment(bytes.as_utf8_str().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_elements_text_and_comments() {
        let document = parse_document("<p class=\"x\">hi</p><!-- note -->");
        assert_eq!(document.nodes.len(), 2);

        let Node::Element(p) = &document.nodes[0] else {
            panic!("expected element");
        };
        assert_eq!(p.name, "p");
        assert_eq!(p.attr("class"), Some("x"));
        assert_eq!(p.children, vec![Node::Text("hi".to_string())]);

        assert!(matches!(&document.nodes[1], Node::Comment(_)));
    }

    #[test]
    fn tag_and_attribute_names_are_lowercased() {
        let document = parse_document("<IMG SRC=\"a.png\">");
        let Node::Element(img) = &document.nodes[0] else {
            panic!("expected element");
        };
        assert_eq!(img.name, "img");
        assert_eq!(img.attr("src"), Some("a.png"));
    }

    #[test]
    fn nested_children_are_converted() {
        let document = parse_document("<div><span>a</span><img src=\"x.png\"></div>");
        let Node::Element(div) = &document.nodes[0] else {
            panic!("expected element");
        };
        assert_eq!(div.children.len(), 2);
        let Node::Element(span) = &div.children[0] else {
            panic!("expected span");
        };
        assert_eq!(span.name, "span");
    }

    #[test]
    fn text_entities_are_kept_verbatim() {
        let document = parse_document("<p>a &amp; b</p>");
        let Node::Element(p) = &document.nodes[0] else {
            panic!("expected element");
        };
        assert_eq!(p.children, vec![Node::Text("a &amp; b".to_string())]);
    }
}
