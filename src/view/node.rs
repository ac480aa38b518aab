//! # Node Tree
//!
//! A minimal document model: elements with a tag, classes, emphasis,
//! children and at most one activation handler, plus text leaves.
//!
//! Builders produce these trees; adapters (terminal, HTML) consume them.
//! Nothing here touches a display.

use std::fmt;
use std::rc::Rc;

/// Callback run when the user activates an element (click, Enter).
pub type Handler = Rc<dyn Fn()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Section,
    H3,
    P,
    Em,
    Ul,
    Li,
}

impl Tag {
    pub fn name(self) -> &'static str {
        match self {
            Tag::Section => "section",
            Tag::H3 => "h3",
            Tag::P => "p",
            Tag::Em => "em",
            Tag::Ul => "ul",
            Tag::Li => "li",
        }
    }
}

/// Inline emphasis applied to an element and everything inside it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStyle {
    pub italic: bool,
    pub bold: bool,
}

impl TextStyle {
    pub fn is_plain(self) -> bool {
        !self.italic && !self.bold
    }
}

#[derive(Clone)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Concatenated text of this node and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Element(element) => fmt::Debug::fmt(element, f),
            Node::Text(text) => write!(f, "{text:?}"),
        }
    }
}

#[derive(Clone)]
pub struct Element {
    pub tag: Tag,
    pub classes: Vec<&'static str>,
    pub style: TextStyle,
    pub children: Vec<Node>,
    on_activate: Option<Handler>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            style: TextStyle::default(),
            children: Vec::new(),
            on_activate: None,
        }
    }

    pub fn class(mut self, class: &'static str) -> Self {
        self.classes.push(class);
        self
    }

    pub fn style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(Node::text(content))
    }

    pub fn on_activate(mut self, handler: Handler) -> Self {
        self.on_activate = Some(handler);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| *c == class)
    }

    pub fn is_activatable(&self) -> bool {
        self.on_activate.is_some()
    }

    /// Runs the activation handler. Returns false if there is none.
    pub fn activate(&self) -> bool {
        match &self.on_activate {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }

    /// Child elements, skipping text leaves.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// First descendant (depth-first, excluding self) with the given tag.
    pub fn find(&self, tag: Tag) -> Option<&Element> {
        self.child_elements()
            .find_map(|child| if child.tag == tag { Some(child) } else { child.find(tag) })
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.tag)
            .field("classes", &self.classes)
            .field("style", &self.style)
            .field("children", &self.children)
            .field("activatable", &self.is_activatable())
            .finish()
    }
}
