//! A minimal HTML element tree.
//!
//! Components build [`Element`]s; hosts either serialize them with
//! [`Element::to_html`] or walk the tree to drive their own renderer.

use std::fmt::{self, Write as _};

/// Tags rendered without a closing tag.
const VOID_TAGS: [&str; 4] = ["input", "img", "br", "hr"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    classes: Vec<String>,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    // ── Builders ─────────────────────────────────────────────────────────

    /// Appends one or more space-separated classes. Blank input is ignored.
    pub fn class(mut self, class: impl AsRef<str>) -> Self {
        for c in class.as_ref().split_whitespace() {
            if !self.classes.iter().any(|existing| existing == c) {
                self.classes.push(c.to_string());
            }
        }
        self
    }

    pub fn class_if(self, condition: bool, class: impl AsRef<str>) -> Self {
        if condition {
            self.class(class)
        } else {
            self
        }
    }

    /// Sets an attribute, replacing any previous value.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Sets a boolean attribute (e.g. `disabled`) when `on` is true.
    pub fn flag(self, name: &'static str, on: bool) -> Self {
        if on {
            self.attr(name, "")
        } else {
            self
        }
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn child_opt(self, child: Option<Element>) -> Self {
        match child {
            Some(c) => self.child(c),
            None => self,
        }
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children
            .extend(children.into_iter().map(Node::Element));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    // ── Queries ──────────────────────────────────────────────────────────

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// The `class` attribute value.
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attr_value(name).is_some()
    }

    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// First element (self included) carrying `class`, depth-first.
    pub fn find(&self, class: &str) -> Option<&Element> {
        if self.has_class(class) {
            return Some(self);
        }
        self.child_elements().find_map(|c| c.find(class))
    }

    /// Every element (self included) carrying `class`, in document order.
    pub fn find_all(&self, class: &str) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect(class, &mut out);
        out
    }

    fn collect<'a>(&'a self, class: &str, out: &mut Vec<&'a Element>) {
        if self.has_class(class) {
            out.push(self);
        }
        for c in self.child_elements() {
            c.collect(class, out);
        }
    }

    /// Concatenated text of this subtree.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for node in &self.children {
            match node {
                Node::Text(t) => out.push_str(t),
                Node::Element(e) => out.push_str(&e.text_content()),
            }
        }
        out
    }

    // ── Serialization ────────────────────────────────────────────────────

    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        if !self.classes.is_empty() {
            write!(f, " class=\"{}\"", escape(&self.class_name()))?;
        }
        for (name, value) in &self.attrs {
            if value.is_empty() {
                write!(f, " {name}")?;
            } else {
                write!(f, " {}=\"{}\"", name, escape(value))?;
            }
        }
        if VOID_TAGS.contains(&self.tag) {
            return f.write_str(">");
        }
        f.write_char('>')?;
        for node in &self.children {
            match node {
                Node::Text(t) => f.write_str(&escape(t))?,
                Node::Element(e) => write!(f, "{e}")?,
            }
        }
        write!(f, "</{}>", self.tag)
    }
}

/// Escapes text for use in HTML content and quoted attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_nested() {
        let el = Element::new("div")
            .class("card card--big")
            .attr("role", "group")
            .child(Element::new("span").class("card__title").text("Hi"));
        assert_eq!(
            el.to_html(),
            r#"<div class="card card--big" role="group"><span class="card__title">Hi</span></div>"#
        );
    }

    #[test]
    fn test_blank_and_duplicate_classes_are_dropped() {
        let el = Element::new("div").class("a").class("  ").class("a b");
        assert_eq!(el.class_name(), "a b");
    }

    #[test]
    fn test_void_and_flag_attributes() {
        let el = Element::new("input").attr("type", "text").flag("disabled", true);
        assert_eq!(el.to_html(), r#"<input type="text" disabled>"#);
        assert!(el.has_attr("disabled"));
        assert!(!Element::new("input").flag("disabled", false).has_attr("disabled"));
    }

    #[test]
    fn test_text_is_escaped() {
        let el = Element::new("p").attr("title", "a\"b").text("<script>&");
        assert_eq!(
            el.to_html(),
            r#"<p title="a&quot;b">&lt;script&gt;&amp;</p>"#
        );
    }

    #[test]
    fn test_find_and_text_content() {
        let el = Element::new("div")
            .child(Element::new("b").class("x").text("one"))
            .child(Element::new("i").class("x").text("two"));
        assert_eq!(el.find("x").map(|e| e.tag()), Some("b"));
        assert_eq!(el.find_all("x").len(), 2);
        assert_eq!(el.text_content(), "onetwo");
        assert!(el.find("missing").is_none());
    }
}
