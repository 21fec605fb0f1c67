use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::event::EventHandler;

/// A value assigned to a node attribute.
///
/// Event handlers are ordinary attribute values (stored under names like
/// `"onclick"`), mirroring property assignment on a host element. The
/// `"text"` attribute doubles as the node's visible text content.
#[derive(Clone, Debug)]
pub enum AttrValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Handler(EventHandler),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Text(value) => write!(f, "{value}"),
            AttrValue::Int(value) => write!(f, "{value}"),
            AttrValue::Float(value) => write!(f, "{value}"),
            AttrValue::Bool(value) => write!(f, "{value}"),
            AttrValue::Handler(_) => write!(f, "[handler]"),
        }
    }
}

impl PartialEq for AttrValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (AttrValue::Text(a), AttrValue::Text(b)) => a == b,
            (AttrValue::Int(a), AttrValue::Int(b)) => a == b,
            (AttrValue::Float(a), AttrValue::Float(b)) => a == b,
            (AttrValue::Bool(a), AttrValue::Bool(b)) => a == b,
            // Handlers compare by identity, not behavior
            (AttrValue::Handler(a), AttrValue::Handler(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Int(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Int(value as i64)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Float(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<EventHandler> for AttrValue {
    fn from(value: EventHandler) -> Self {
        AttrValue::Handler(value)
    }
}

struct NodeData {
    tag: String,
    attributes: Vec<(String, AttrValue)>,
    children: Vec<Node>,
}

/// A handle to one node in the in-memory tree.
///
/// Cloning a `Node` is cheap and yields an alias of the same underlying
/// node; use [`Node::same_node`] to compare identity. Nodes hold their
/// children by value, so dropping every handle to a subtree frees it.
#[derive(Clone)]
pub struct Node {
    inner: Rc<RefCell<NodeData>>,
}

impl Node {
    pub(crate) fn with_tag(tag: String) -> Self {
        Self {
            inner: Rc::new(RefCell::new(NodeData {
                tag,
                attributes: Vec::new(),
                children: Vec::new(),
            })),
        }
    }

    pub fn tag(&self) -> String {
        self.inner.borrow().tag.clone()
    }

    /// Assign an attribute. Re-assigning an existing name overwrites the
    /// value in place (last write wins, first-write position retained).
    /// Attribute names are not validated.
    pub fn set_attribute(&self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let name = name.into();
        let value = value.into();
        let mut inner = self.inner.borrow_mut();
        for entry in inner.attributes.iter_mut() {
            if entry.0 == name {
                entry.1 = value;
                return;
            }
        }
        inner.attributes.push((name, value));
    }

    pub fn attribute(&self, name: &str) -> Option<AttrValue> {
        let inner = self.inner.borrow();
        inner
            .attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }

    /// The node's text content: the `"text"` attribute rendered as a
    /// string, or `""` when unset.
    pub fn text(&self) -> String {
        self.attribute("text")
            .map(|v| v.to_string())
            .unwrap_or_default()
    }

    pub fn append_child(&self, child: &Node) {
        self.inner.borrow_mut().children.push(child.clone());
    }

    pub fn children(&self) -> Vec<Node> {
        self.inner.borrow().children.clone()
    }

    pub fn child(&self, index: usize) -> Option<Node> {
        self.inner.borrow().children.get(index).cloned()
    }

    pub fn child_count(&self) -> usize {
        self.inner.borrow().children.len()
    }

    /// Drop every child of this node. Subtrees with no surviving handle
    /// are freed; handles held elsewhere keep their node alive but
    /// detached.
    pub fn clear_children(&self) {
        self.inner.borrow_mut().children.clear();
    }

    /// Reference identity: `true` when both handles alias the same node.
    pub fn same_node(&self, other: &Node) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn attributes(&self) -> Vec<(String, AttrValue)> {
        self.inner.borrow().attributes.clone()
    }
}

impl fmt::Display for Node {
    /// HTML-ish rendering of the subtree, for demos and test output.
    /// Handler attributes are skipped; the `"text"` attribute renders as
    /// content rather than as an attribute.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = self.tag();
        write!(f, "<{tag}")?;
        for (name, value) in self.attributes() {
            if name == "text" || matches!(value, AttrValue::Handler(_)) {
                continue;
            }
            write!(f, " {name}=\"{value}\"")?;
        }
        write!(f, ">")?;
        write!(f, "{}", self.text())?;
        for child in self.children() {
            write!(f, "{child}")?;
        }
        write!(f, "</{tag}>")
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::create_element;

    #[test]
    fn test_set_attribute_last_write_wins() {
        let node = create_element("div").unwrap();
        node.set_attribute("class", "a");
        node.set_attribute("class", "b");
        assert_eq!(node.attribute("class"), Some(AttrValue::from("b")));
    }

    #[test]
    fn test_overwrite_keeps_first_write_position() {
        let node = create_element("div").unwrap();
        node.set_attribute("first", "1");
        node.set_attribute("second", "2");
        node.set_attribute("first", "updated");
        let names: Vec<String> = node.attributes().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn test_text_reads_text_attribute() {
        let node = create_element("h1").unwrap();
        assert_eq!(node.text(), "");
        node.set_attribute("text", 42);
        assert_eq!(node.text(), "42");
    }

    #[test]
    fn test_append_and_clear_children() {
        let parent = create_element("div").unwrap();
        let a = create_element("span").unwrap();
        let b = create_element("span").unwrap();
        parent.append_child(&a);
        parent.append_child(&b);
        assert_eq!(parent.child_count(), 2);
        assert!(parent.child(0).unwrap().same_node(&a));

        parent.clear_children();
        assert_eq!(parent.child_count(), 0);
        // detached nodes stay alive through their own handles
        assert_eq!(a.tag(), "span");
    }

    #[test]
    fn test_clone_aliases_same_node() {
        let node = create_element("div").unwrap();
        let alias = node.clone();
        alias.set_attribute("id", "x");
        assert_eq!(node.attribute("id"), Some(AttrValue::from("x")));
        assert!(node.same_node(&alias));

        let other = create_element("div").unwrap();
        assert!(!node.same_node(&other));
    }

    #[test]
    fn test_display_renders_subtree() {
        let root = create_element("div").unwrap();
        root.set_attribute("style", "display: flex");
        let heading = create_element("h1").unwrap();
        heading.set_attribute("text", 5);
        root.append_child(&heading);
        assert_eq!(
            root.to_string(),
            "<div style=\"display: flex\"><h1>5</h1></div>"
        );
    }

    #[test]
    fn test_display_skips_handler_attributes() {
        let button = create_element("button").unwrap();
        button.set_attribute("text", "+");
        button.set_attribute("onclick", EventHandler::new(|| {}));
        assert_eq!(button.to_string(), "<button>+</button>");
    }

    #[test]
    fn test_attr_value_equality() {
        assert_eq!(AttrValue::from("a"), AttrValue::from("a"));
        assert_ne!(AttrValue::from("a"), AttrValue::from(1i64));

        let handler = EventHandler::new(|| {});
        assert_eq!(
            AttrValue::from(handler.clone()),
            AttrValue::from(handler.clone())
        );
        assert_ne!(
            AttrValue::from(handler),
            AttrValue::from(EventHandler::new(|| {}))
        );
    }
}
