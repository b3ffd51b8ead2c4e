//! A minimal display tree produced by the components, serializable to HTML.

use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::{Display, Formatter, Write};

const VOID_TAGS: [&str; 4] = ["br", "hr", "img", "input"];

#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Clone, Eq, PartialEq, Debug, Hash)]
enum Attribute {
    Value(&'static str, String),
    Flag(&'static str),
}

#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub struct Element {
    tag: &'static str,
    attributes: Vec<Attribute>,
    children: Vec<Node>,
}

impl Element {
    #[must_use]
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute::Value(name, value.into()));
        self
    }

    #[must_use]
    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    /// Rendering key of a list item, emitted as `data-key`.
    #[must_use]
    pub fn key(self, key: impl Display) -> Self {
        self.attr("data-key", key.to_string())
    }

    #[must_use]
    pub fn flag_if(mut self, name: &'static str, set: bool) -> Self {
        if set {
            self.attributes.push(Attribute::Flag(name));
        }
        self
    }

    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    #[must_use]
    pub fn children<N: Into<Node>>(mut self, children: impl IntoIterator<Item = N>) -> Self {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    #[must_use]
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.iter().find_map(|attribute| match attribute {
            Attribute::Value(attribute_name, value) if *attribute_name == name => {
                Some(value.as_str())
            }
            _ => None,
        })
    }

    #[must_use]
    pub fn has_flag(&self, name: &str) -> bool {
        self.attributes
            .iter()
            .any(|attribute| matches!(attribute, Attribute::Flag(flag) if *flag == name))
    }

    #[must_use]
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|child| match child {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// Depth-first search over this element and its descendants.
    pub fn find_all<'a>(
        &'a self,
        predicate: &dyn Fn(&Element) -> bool,
    ) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.collect_matching(predicate, &mut found);
        found
    }

    #[must_use]
    pub fn find(&self, predicate: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        self.find_all(predicate).into_iter().next()
    }

    fn collect_matching<'a>(
        &'a self,
        predicate: &dyn Fn(&Element) -> bool,
        found: &mut Vec<&'a Element>,
    ) {
        if predicate(self) {
            found.push(self);
        }
        for child in self.child_elements() {
            child.collect_matching(predicate, found);
        }
    }

    /// Concatenated text of all descendant text nodes.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        self.push_text(&mut text);
        text
    }

    fn push_text(&self, text: &mut String) {
        for child in &self.children {
            match child {
                Node::Element(element) => element.push_text(text),
                Node::Text(inner) => text.push_str(inner),
            }
        }
    }
}

impl From<Element> for Node {
    fn from(value: Element) -> Self {
        Node::Element(value)
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Text(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Text(value.to_owned())
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Element(element) => Display::fmt(element, f),
            Node::Text(text) => f.write_str(&encode_text(text)),
        }
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}", self.tag)?;
        for attribute in &self.attributes {
            match attribute {
                Attribute::Value(name, value) => {
                    write!(f, " {name}=\"{}\"", encode_double_quoted_attribute(value))?;
                }
                Attribute::Flag(name) => write!(f, " {name}")?,
            }
        }
        f.write_char('>')?;

        if VOID_TAGS.contains(&self.tag) {
            return Ok(());
        }

        for child in &self.children {
            Display::fmt(child, f)?;
        }
        write!(f, "</{}>", self.tag)
    }
}

#[cfg(test)]
mod tests {
    use crate::view::{Element, Node};

    #[test]
    fn html_output() {
        let element = Element::new("form")
            .class("comment-form")
            .child(Element::new("textarea").attr("name", "comment").flag_if("required", true))
            .child(
                Element::new("button")
                    .attr("type", "submit")
                    .flag_if("disabled", false)
                    .text("Publicar"),
            )
            .child(Element::new("img").attr("src", "/a.png"));

        assert_eq!(
            element.to_string(),
            "<form class=\"comment-form\">\
            <textarea name=\"comment\" required></textarea>\
            <button type=\"submit\">Publicar</button>\
            <img src=\"/a.png\">\
            </form>"
        );
    }

    #[test]
    fn escaping() {
        let element = Element::new("p")
            .attr("title", "\"quoted\" & more")
            .text("<script>alert(1)</script>");

        assert_eq!(
            element.to_string(),
            "<p title=\"&quot;quoted&quot; &amp; more\">\
            &lt;script&gt;alert(1)&lt;/script&gt;</p>"
        );
        assert_eq!(Node::from("a < b").to_string(), "a &lt; b");
    }

    #[test]
    fn queries() {
        let element = Element::new("div")
            .child(Element::new("p").key(1).text("one"))
            .child(Element::new("section").child(Element::new("p").key(2).text("two")));

        let paragraphs = element.find_all(&|element| element.tag() == "p");
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[1].attribute("data-key"), Some("2"));
        assert_eq!(element.text_content(), "onetwo");
        assert!(element.find(&|element| element.tag() == "a").is_none());
    }
}
