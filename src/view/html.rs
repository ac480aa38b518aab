//! HTML adapter: serializes node trees to markup.
//!
//! Used for `--snapshot`, which prints the page once instead of running the
//! terminal UI. Handlers have no markup form and are dropped.

use crate::view::node::{Element, Node};
use crate::view::{Mount, Region, PAGE_TITLE};

pub fn render_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Text(text) => out.push_str(&escape(text)),
        Node::Element(element) => write_element(out, element),
    }
}

fn write_element(out: &mut String, element: &Element) {
    let tag = element.tag.name();
    out.push('<');
    out.push_str(tag);
    if !element.classes.is_empty() {
        out.push_str(&format!(" class=\"{}\"", element.classes.join(" ")));
    }
    let mut declarations = Vec::new();
    if element.style.italic {
        declarations.push("font-style: italic");
    }
    if element.style.bold {
        declarations.push("font-weight: bold");
    }
    if !declarations.is_empty() {
        out.push_str(&format!(" style=\"{};\"", declarations.join("; ")));
    }
    out.push('>');
    for child in &element.children {
        write_node(out, child);
    }
    out.push_str(&format!("</{tag}>"));
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Mount target that keeps the last tree of each region and renders the
/// whole page shell around them.
#[derive(Default)]
pub struct HtmlPage {
    event_list: Option<Node>,
    event_details: Option<Node>,
}

impl HtmlPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to_html(&self) -> String {
        let region = |node: &Option<Node>| node.as_ref().map(render_html).unwrap_or_default();
        format!(
            "<h1>{title}</h1>\n\
             <main style=\"display: grid; grid-template-columns: 1fr 1fr; gap: 20px;\">\n\
             <section id=\"list\">\n<h2>{list_title}</h2>\n{list}\n</section>\n\
             <section id=\"selected\">\n<h2>{details_title}</h2>\n{details}\n</section>\n\
             </main>\n",
            title = PAGE_TITLE,
            list_title = Region::EventList.title(),
            list = region(&self.event_list),
            details_title = Region::EventDetails.title(),
            details = region(&self.event_details),
        )
    }
}

impl Mount for HtmlPage {
    fn mount(&mut self, region: Region, tree: Node) {
        match region {
            Region::EventList => self.event_list = Some(tree),
            Region::EventDetails => self.event_details = Some(tree),
        }
    }
}
