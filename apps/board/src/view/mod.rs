// View module for the project board
// Pure functions from board state to node trees; mounting happens elsewhere

pub mod details;
pub mod list;

pub use details::{render_load_failure, render_project_details};
pub use list::{is_active, render_project_list};

use std::fmt::Write as _;

/// A structured description of DOM content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Concatenated text of this node and its descendants
    pub fn text_content(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Element(element) => element.children.iter().map(Self::text_content).collect(),
        }
    }

    /// Serializes the tree as escaped HTML
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(&escape(text, false)),
            Self::Element(element) => {
                let _ = write!(out, "<{}", element.tag);
                if !element.classes.is_empty() {
                    let _ = write!(out, " class=\"{}\"", escape(&element.classes.join(" "), true));
                }
                for (name, value) in &element.attrs {
                    let _ = write!(out, " {name}=\"{}\"", escape(value, true));
                }
                out.push('>');
                for child in &element.children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{}>", element.tag);
            }
        }
    }

    /// Depth-first search for elements carrying `class`
    pub fn find_by_class<'a>(&'a self, class: &str, found: &mut Vec<&'a Element>) {
        if let Self::Element(element) = self {
            if element.has_class(class) {
                found.push(element);
            }
            for child in &element.children {
                child.find_by_class(class, found);
            }
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub classes: Vec<String>,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub const fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    #[must_use]
    pub fn text(self, value: impl Into<String>) -> Self {
        self.child(Node::text(value))
    }

    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

fn escape(value: &str, attribute: bool) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Serializes a list of sibling nodes
pub fn to_html(nodes: &[Node]) -> String {
    nodes.iter().map(Node::to_html).collect()
}
